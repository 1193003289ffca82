use eframe::NativeOptions;
use pitrader::config::Settings;
use pitrader::ui::PiTraderApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Missing credential is fatal; no window is opened without one.
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_min_inner_size([380.0, 260.0])
            .with_title("PiTrader"),
        ..Default::default()
    };

    eframe::run_native(
        "PiTrader",
        native_options,
        Box::new(move |cc| Ok(Box::new(PiTraderApp::new(cc, settings)?))),
    )
}
