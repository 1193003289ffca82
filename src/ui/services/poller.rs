use crate::market::QuoteClient;
use crate::portfolio::Portfolio;
use chrono::{DateTime, Local};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Update from the polling thread, drained by the render loop each frame.
#[derive(Clone, Debug)]
pub enum PollerUpdate {
    Quote {
        symbol: String,
        price: f64,
        change: f64,
        change_pct: f64,
    },
    Invalid {
        symbol: String,
    },
    CycleComplete {
        finished_at: DateTime<Local>,
    },
}

/// Background quote poller.
///
/// Owns its own clone of the client and a handle to the shared portfolio;
/// each cycle it snapshots the symbol list under the lock, fetches every
/// symbol with per-symbol failure isolation, and reports results over the
/// channel. It never touches UI state directly.
pub struct QuotePoller {
    handle: Option<JoinHandle<()>>,
    update_rx: Receiver<PollerUpdate>,
    stop_flag: Arc<Mutex<bool>>,
}

impl QuotePoller {
    /// Spawn the polling thread. `ctx` is used only to request repaints so
    /// results render while the window is idle.
    pub fn start(
        client: QuoteClient,
        portfolio: Arc<Mutex<Portfolio>>,
        interval: Duration,
        ctx: egui::Context,
    ) -> Self {
        let (update_tx, update_rx) = channel();
        let stop_flag = Arc::new(Mutex::new(false));
        let stop_flag_clone = Arc::clone(&stop_flag);

        let handle = thread::Builder::new()
            .name("quote-poller".to_string())
            .spawn(move || {
                Self::run(client, portfolio, interval, update_tx, stop_flag_clone, ctx)
            })
            .expect("Failed to spawn quote poller thread");

        Self {
            handle: Some(handle),
            update_rx,
            stop_flag,
        }
    }

    /// Poll for the next update (non-blocking).
    pub fn poll_update(&self) -> Option<PollerUpdate> {
        self.update_rx.try_recv().ok()
    }

    /// Ask the polling thread to stop. The flag is observed at the top of
    /// each cycle, so worst-case latency is one poll interval.
    pub fn stop(&self) {
        if let Ok(mut flag) = self.stop_flag.lock() {
            *flag = true;
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    fn is_stopped(stop_flag: &Arc<Mutex<bool>>) -> bool {
        stop_flag.lock().map(|f| *f).unwrap_or(true)
    }

    fn run(
        client: QuoteClient,
        portfolio: Arc<Mutex<Portfolio>>,
        interval: Duration,
        update_tx: Sender<PollerUpdate>,
        stop_flag: Arc<Mutex<bool>>,
        ctx: egui::Context,
    ) {
        log::info!("Quote poller started, interval {:?}", interval);

        loop {
            if Self::is_stopped(&stop_flag) {
                break;
            }

            // Snapshot under the lock, iterate the copy: add/remove on the
            // UI thread must never invalidate the cycle's iteration.
            let symbols = match portfolio.lock() {
                Ok(portfolio) => portfolio.snapshot(),
                Err(_) => break,
            };

            for symbol in symbols {
                let update = match client.fetch(&symbol) {
                    Ok(quote) => PollerUpdate::Quote {
                        symbol,
                        price: quote.current,
                        change: quote.change(),
                        change_pct: quote.change_pct(),
                    },
                    Err(e) => {
                        log::debug!("Fetch failed for {symbol}: {e}");
                        PollerUpdate::Invalid { symbol }
                    }
                };
                if update_tx.send(update).is_err() {
                    // Receiver gone, the app is shutting down.
                    return;
                }
            }

            let _ = update_tx.send(PollerUpdate::CycleComplete {
                finished_at: Local::now(),
            });
            ctx.request_repaint();

            thread::sleep(interval);
        }

        log::info!("Quote poller stopped");
    }
}

impl Drop for QuotePoller {
    fn drop(&mut self) {
        self.stop();
    }
}
