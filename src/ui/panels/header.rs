use crate::ui::state::AppState;
use crate::ui::theme;
use egui::RichText;

/// Title bar: app name, last-updated stamp, gainer/loser counters and the
/// add-panel toggle.
pub struct HeaderPanel;

impl HeaderPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("PiTrader")
                    .size(20.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );

            let stamp = state.last_updated.as_deref().unwrap_or("--:--");
            ui.label(
                RichText::new(format!("Last Updated: {stamp}"))
                    .size(10.0)
                    .color(theme::ACCENT_GREEN),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = ui.button(RichText::new("+").size(14.0));
                if toggle.clicked() {
                    state.show_add_panel = !state.show_add_panel;
                }

                ui.label(
                    RichText::new(format!("↓{}", state.losers))
                        .size(16.0)
                        .color(theme::ACCENT_RED),
                );
                ui.label(
                    RichText::new(format!("↑{}", state.gainers))
                        .size(16.0)
                        .color(theme::ACCENT_GREEN),
                );
            });
        });
    }
}
