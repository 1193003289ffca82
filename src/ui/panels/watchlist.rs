use crate::ui::state::AppState;
use crate::ui::theme;
use egui::RichText;

/// Command emitted by the watchlist; the app shell executes it so the panel
/// never touches the portfolio or the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistAction {
    Add(String),
    Remove(String),
}

/// The scrollable list of per-symbol cards, plus the add-symbol input row
/// when it is toggled on.
pub struct WatchlistPanel;

impl WatchlistPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        symbols: &[String],
    ) -> Option<WatchlistAction> {
        let mut action = None;

        if state.show_add_panel {
            if let Some(added) = Self::show_add_row(ui, state) {
                action = Some(WatchlistAction::Add(added));
            }
            ui.add_space(4.0);
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for symbol in symbols {
                if Self::show_card(ui, state, symbol) {
                    action = Some(WatchlistAction::Remove(symbol.clone()));
                }
                ui.add_space(3.0);
            }
        });

        action
    }

    /// Returns the entered symbol when the user submits it.
    fn show_add_row(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
        let mut submitted = None;

        egui::Frame::new()
            .fill(theme::BG_CARD)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let edit = egui::TextEdit::singleline(&mut state.symbol_input)
                        .hint_text("Ticker...")
                        .desired_width(100.0);
                    let response = ui.add(edit);

                    let entered = response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if (ui.button(RichText::new("Add").strong()).clicked() || entered)
                        && !state.symbol_input.trim().is_empty()
                    {
                        submitted = Some(state.symbol_input.clone());
                        state.symbol_input.clear();
                        response.request_focus();
                    }
                });
            });

        submitted
    }

    /// Returns true when the card's remove button was clicked.
    fn show_card(ui: &mut egui::Ui, state: &AppState, symbol: &str) -> bool {
        let mut remove = false;

        egui::Frame::new()
            .fill(theme::BG_CARD)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(symbol)
                                .size(14.0)
                                .strong()
                                .color(theme::TEXT_SECONDARY),
                        );
                        if let Some(row) = state.row(symbol) {
                            ui.label(
                                RichText::new(&row.price_text)
                                    .size(28.0)
                                    .strong()
                                    .color(row.price_color()),
                            );
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(RichText::new("✕").size(11.0)).clicked() {
                            remove = true;
                        }
                        if let Some(row) = state.row(symbol) {
                            ui.label(
                                RichText::new(&row.change_text)
                                    .size(16.0)
                                    .strong()
                                    .color(row.change_color()),
                            );
                        }
                    });
                });
            });

        remove
    }
}
