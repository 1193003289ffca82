use super::panels::{HeaderPanel, WatchlistAction, WatchlistPanel};
use super::services::{PollerUpdate, QuotePoller};
use super::state::AppState;
use super::theme;
use crate::config::Settings;
use crate::error::Result;
use crate::market::QuoteClient;
use crate::portfolio::{Portfolio, PortfolioStore};
use std::sync::{Arc, Mutex};

pub struct PiTraderApp {
    state: AppState,
    store: PortfolioStore,
    client: QuoteClient,
    portfolio: Arc<Mutex<Portfolio>>,
    poller: QuotePoller,
    header: HeaderPanel,
    watchlist: WatchlistPanel,
}

impl PiTraderApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let store = PortfolioStore::new(&settings.portfolio_path);
        let loaded = store.load();

        let mut state = AppState::new();
        for symbol in loaded.symbols() {
            state.upsert_row(symbol);
        }

        let client = QuoteClient::new(&settings.api_base_url, &settings.api_key)?;
        let portfolio = Arc::new(Mutex::new(loaded));
        let poller = QuotePoller::start(
            client.clone(),
            Arc::clone(&portfolio),
            settings.poll_interval,
            cc.egui_ctx.clone(),
        );

        Ok(Self {
            state,
            store,
            client,
            portfolio,
            poller,
            header: HeaderPanel::new(),
            watchlist: WatchlistPanel::new(),
        })
    }

    /// Apply everything the poller produced since the last frame.
    fn drain_poller_updates(&mut self) {
        while let Some(update) = self.poller.poll_update() {
            match update {
                PollerUpdate::Quote {
                    symbol,
                    price,
                    change,
                    change_pct,
                } => self.state.apply_quote(&symbol, price, change, change_pct),
                PollerUpdate::Invalid { symbol } => self.state.apply_error(&symbol),
                PollerUpdate::CycleComplete { finished_at } => {
                    self.state.set_last_updated(finished_at);
                    self.state.recompute_aggregates();
                }
            }
        }
    }

    fn add_symbol(&mut self, input: &str) {
        let symbol = Portfolio::normalize(input);
        if symbol.is_empty() {
            return;
        }

        {
            let mut portfolio = self.portfolio.lock().unwrap();
            if !portfolio.add(&symbol) {
                // Already tracked: silent no-op.
                return;
            }
        }

        self.state.upsert_row(&symbol);

        // One synchronous fetch so the new row fills in immediately instead
        // of waiting out the rest of the poll interval.
        match self.client.fetch(&symbol) {
            Ok(quote) => self.state.apply_quote(
                &symbol,
                quote.current,
                quote.change(),
                quote.change_pct(),
            ),
            Err(e) => {
                log::debug!("Initial fetch failed for {symbol}: {e}");
                self.state.apply_error(&symbol);
            }
        }

        self.state.recompute_aggregates();
        self.persist();
    }

    fn remove_symbol(&mut self, symbol: &str) {
        let removed = self.portfolio.lock().unwrap().remove(symbol);
        if !removed {
            return;
        }

        self.state.remove_row(symbol);
        self.state.recompute_aggregates();
        self.persist();
    }

    /// Persist the current portfolio. Write failures are logged, never
    /// surfaced; UI state proceeds regardless.
    fn persist(&self) {
        let portfolio = self.portfolio.lock().unwrap();
        if let Err(e) = self.store.save(&portfolio) {
            log::error!("{e}");
        }
    }
}

impl eframe::App for PiTraderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_poller_updates();

        let header_frame = egui::Frame::new()
            .fill(theme::BG_PRIMARY)
            .inner_margin(egui::Margin::same(8));
        egui::TopBottomPanel::top("header")
            .frame(header_frame)
            .show(ctx, |ui| {
                self.header.show(ui, &mut self.state);
            });

        let symbols = self.portfolio.lock().unwrap().snapshot();

        let central_frame = egui::Frame::new()
            .fill(theme::BG_PRIMARY)
            .inner_margin(egui::Margin::same(10));
        let action = egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| self.watchlist.show(ui, &mut self.state, &symbols))
            .inner;

        match action {
            Some(WatchlistAction::Add(input)) => self.add_symbol(&input),
            Some(WatchlistAction::Remove(symbol)) => self.remove_symbol(&symbol),
            None => {}
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.poller.stop();
    }
}
