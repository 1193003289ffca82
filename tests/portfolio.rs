use pitrader::portfolio::{Portfolio, PortfolioStore, DEFAULT_SYMBOLS};
use tempfile::TempDir;

#[test]
fn normalize_trims_and_uppercases() {
    assert_eq!(Portfolio::normalize("  aapl "), "AAPL");
    assert_eq!(Portfolio::normalize("msFt"), "MSFT");
}

#[test]
fn add_is_idempotent() {
    let mut portfolio = Portfolio::new();
    assert!(portfolio.add("AAPL"));
    assert!(!portfolio.add("AAPL"));
    assert!(!portfolio.add("aapl "));
    assert_eq!(portfolio.len(), 1);
}

#[test]
fn add_rejects_empty_input() {
    let mut portfolio = Portfolio::new();
    assert!(!portfolio.add(""));
    assert!(!portfolio.add("   "));
    assert!(portfolio.is_empty());
}

#[test]
fn remove_absent_symbol_is_a_noop() {
    let mut portfolio = Portfolio::from_symbols(["AAPL", "MSFT"]);
    assert!(!portfolio.remove("TSLA"));
    assert_eq!(portfolio.len(), 2);
}

#[test]
fn insertion_order_is_preserved() {
    let mut portfolio = Portfolio::new();
    portfolio.add("ZZZZ");
    portfolio.add("AAAA");
    portfolio.add("MMMM");
    assert_eq!(portfolio.symbols(), &["ZZZZ", "AAAA", "MMMM"]);
}

#[test]
fn from_symbols_drops_duplicates_keeping_first() {
    let portfolio = Portfolio::from_symbols(["AAPL", "msft", "AAPL", "MSFT"]);
    assert_eq!(portfolio.symbols(), &["AAPL", "MSFT"]);
}

#[test]
fn save_and_load_round_trip_preserves_order() {
    let dir = TempDir::new().unwrap();
    let store = PortfolioStore::new(dir.path().join("portfolio.json"));

    let portfolio = Portfolio::from_symbols(["NVDA", "AAPL", "TSLA"]);
    store.save(&portfolio).unwrap();

    assert_eq!(store.load(), portfolio);
}

#[test]
fn missing_file_seeds_and_persists_the_default_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    let store = PortfolioStore::new(&path);

    let portfolio = store.load();
    assert_eq!(portfolio.symbols(), &DEFAULT_SYMBOLS);

    // The file must now exist and contain exactly the default symbols.
    let contents = std::fs::read_to_string(&path).unwrap();
    let on_disk: Vec<String> = serde_json::from_str(&contents).unwrap();
    assert_eq!(on_disk, DEFAULT_SYMBOLS);
}

#[test]
fn corrupt_file_falls_back_to_defaults_without_rewriting_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, "{ not json []").unwrap();

    let store = PortfolioStore::new(&path);
    let portfolio = store.load();
    assert_eq!(portfolio.symbols(), &DEFAULT_SYMBOLS);

    // A typo in a hand-edited file must never be clobbered.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json []");
}

#[test]
fn save_overwrites_wholesale() {
    let dir = TempDir::new().unwrap();
    let store = PortfolioStore::new(dir.path().join("portfolio.json"));

    store.save(&Portfolio::from_symbols(["AAPL", "MSFT"])).unwrap();
    store.save(&Portfolio::from_symbols(["TSLA"])).unwrap();

    assert_eq!(store.load().symbols(), &["TSLA"]);
}

#[test]
fn loaded_file_with_duplicates_is_deduplicated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, r#"["AAPL", "aapl", "MSFT"]"#).unwrap();

    let store = PortfolioStore::new(&path);
    assert_eq!(store.load().symbols(), &["AAPL", "MSFT"]);
}
