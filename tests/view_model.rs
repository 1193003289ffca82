use pitrader::ui::{AppState, RowState, Trend};

fn state_with(symbols: &[&str]) -> AppState {
    let mut state = AppState::new();
    for symbol in symbols {
        state.upsert_row(symbol);
    }
    state
}

#[test]
fn new_row_is_a_placeholder() {
    let state = state_with(&["AAPL"]);
    let row = state.row("AAPL").unwrap();
    assert_eq!(row.state, RowState::Placeholder);
    assert_eq!(row.price_text, "--");
    assert_eq!(row.change_text, "--");
    assert_eq!(row.trend(), None);
}

#[test]
fn quote_moves_row_to_valid_with_formatted_cells() {
    let mut state = state_with(&["AAPL"]);
    state.apply_quote("AAPL", 187.3456, 2.5, 1.35);

    let row = state.row("AAPL").unwrap();
    assert_eq!(row.price_text, "$187.35");
    assert_eq!(row.change_text, "▲ 1.4% $2.50");
    assert_eq!(row.trend(), Some(Trend::Up));
}

#[test]
fn sub_ten_dollar_price_renders_three_decimals() {
    let mut state = state_with(&["PENNY"]);
    state.apply_quote("PENNY", 9.999, -0.05, -0.5);

    let row = state.row("PENNY").unwrap();
    assert_eq!(row.price_text, "$9.999");
    assert_eq!(row.change_text, "▼ 0.5% $0.050");
}

#[test]
fn ten_dollar_price_renders_two_decimals() {
    let mut state = state_with(&["EVEN"]);
    state.apply_quote("EVEN", 10.0, 0.0, 0.0);
    assert_eq!(state.row("EVEN").unwrap().price_text, "$10.00");
}

#[test]
fn zero_change_counts_as_gainer() {
    let mut state = state_with(&["FLAT"]);
    state.apply_quote("FLAT", 50.0, 0.0, 0.0);
    state.recompute_aggregates();

    assert_eq!(state.gainers, 1);
    assert_eq!(state.losers, 0);
}

#[test]
fn error_row_renders_invalid_marker_and_counts_toward_neither() {
    let mut state = state_with(&["BAD", "GOOD"]);
    state.apply_quote("GOOD", 100.0, 1.0, 1.0);
    state.apply_error("BAD");
    state.recompute_aggregates();

    let row = state.row("BAD").unwrap();
    assert_eq!(row.state, RowState::Invalid);
    assert_eq!(row.price_text, "INVALID");
    assert_eq!(row.change_text, "");

    assert_eq!(state.gainers, 1);
    assert_eq!(state.losers, 0);
}

#[test]
fn aggregates_never_exceed_row_count() {
    let mut state = state_with(&["A", "B", "C", "D"]);
    state.apply_quote("A", 100.0, 1.0, 1.0);
    state.apply_quote("B", 100.0, -1.0, -1.0);
    state.apply_error("C");
    // D stays a placeholder.
    state.recompute_aggregates();

    assert!(state.gainers + state.losers <= state.row_count());
    assert_eq!(state.gainers, 1);
    assert_eq!(state.losers, 1);
}

#[test]
fn update_for_removed_symbol_is_dropped_silently() {
    let mut state = state_with(&["AAPL", "MSFT"]);
    state.remove_row("MSFT");

    // A poll cycle already in flight may still report the removed symbol.
    state.apply_quote("MSFT", 400.0, 2.0, 0.5);
    state.apply_error("MSFT");

    assert!(state.row("MSFT").is_none());
    assert_eq!(state.row_count(), 1);
}

#[test]
fn upsert_of_tracked_symbol_keeps_existing_row_state() {
    let mut state = state_with(&["AAPL"]);
    state.apply_quote("AAPL", 187.0, 1.0, 0.5);

    state.upsert_row("AAPL");

    let row = state.row("AAPL").unwrap();
    assert_eq!(row.price_text, "$187.00");
    assert_eq!(state.row_count(), 1);
}

#[test]
fn rows_reenter_state_every_cycle() {
    let mut state = state_with(&["AAPL"]);

    state.apply_quote("AAPL", 100.0, 1.0, 1.0);
    assert_eq!(state.row("AAPL").unwrap().trend(), Some(Trend::Up));

    state.apply_error("AAPL");
    assert_eq!(state.row("AAPL").unwrap().trend(), None);

    state.apply_quote("AAPL", 99.0, -1.0, -1.0);
    assert_eq!(state.row("AAPL").unwrap().trend(), Some(Trend::Down));
}

#[test]
fn last_updated_uses_twelve_hour_clock() {
    use chrono::TimeZone;

    let mut state = AppState::new();
    let stamp = chrono::Local.with_ymd_and_hms(2026, 1, 5, 15, 41, 7).unwrap();
    state.set_last_updated(stamp);

    assert_eq!(state.last_updated.as_deref(), Some("03:41:07 PM"));
}
