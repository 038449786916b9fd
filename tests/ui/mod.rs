//! UI rendering tests for kex
//!
//! These tests ensure the UI renders correctly by comparing against expected buffer output.
//! Run with: cargo test --test ui_tests

pub mod address_tests;
pub mod common_tests;
pub mod home_tests;
pub mod listing_tests;
pub mod name_tests;
pub mod tx_tests;

use chrono::{TimeZone, Utc};
use kex::api::{KristAddress, KristName, LookupResponse, NetworkInfo, Transaction, TransactionType};
use kex::app::{App, Screen};
use kex::config::Config;
use kex::ui::draw;
use kex::wallets::Wallet;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// ==================== Test Data Builders ====================

pub const OWN_ADDRESS: &str = "kre3w0i79j";
pub const FOREIGN_ADDRESS: &str = "k5ztameslf";

pub fn mock_config() -> Config {
    let mut config = Config::default();
    config.recent_searches = vec![
        FOREIGN_ADDRESS.to_string(),
        "example.kst".to_string(),
        "1234567".to_string(),
    ];
    config
        .wallets
        .insert("main", Wallet::new(OWN_ADDRESS).with_label("Main Wallet"));
    config
}

pub fn mock_config_empty() -> Config {
    Config::default()
}

pub fn mock_network_info() -> NetworkInfo {
    NetworkInfo {
        money_supply: 13_451_218,
        work: 100_000,
    }
}

pub fn mock_address(address: &str) -> KristAddress {
    KristAddress {
        address: address.to_string(),
        balance: 86_945,
        total_in: 123_854,
        total_out: 36_909,
        first_seen: Utc.with_ymd_and_hms(2015, 3, 13, 12, 55, 18).unwrap(),
        names: Some(12),
    }
}

pub fn mock_name() -> KristName {
    KristName {
        name: "example".to_string(),
        owner: OWN_ADDRESS.to_string(),
        original_owner: Some(FOREIGN_ADDRESS.to_string()),
        registered: Utc.with_ymd_and_hms(2016, 2, 14, 10, 0, 0).unwrap(),
        updated: Some(Utc.with_ymd_and_hms(2020, 6, 1, 8, 30, 0).unwrap()),
        transferred: None,
        a: Some("https://example.com".to_string()),
        unpaid: 0,
    }
}

pub fn mock_transfer(id: u64) -> Transaction {
    Transaction {
        id,
        from: Some(FOREIGN_ADDRESS.to_string()),
        to: Some(OWN_ADDRESS.to_string()),
        value: 1_500,
        time: Utc.with_ymd_and_hms(2021, 3, 17, 12, 34, 56).unwrap(),
        name: None,
        metadata: Some("message=thanks for the pizza;order=42".to_string()),
        sent_metaname: None,
        sent_name: None,
        tx_type: TransactionType::Transfer,
    }
}

pub fn mock_mined(id: u64) -> Transaction {
    Transaction {
        id,
        from: None,
        to: Some(OWN_ADDRESS.to_string()),
        value: 25,
        time: Utc.with_ymd_and_hms(2021, 3, 17, 13, 0, 0).unwrap(),
        name: None,
        metadata: None,
        sent_metaname: None,
        sent_name: None,
        tx_type: TransactionType::Mined,
    }
}

pub fn mock_name_purchase(id: u64) -> Transaction {
    Transaction {
        id,
        from: Some(OWN_ADDRESS.to_string()),
        to: Some("name".to_string()),
        value: 500,
        time: Utc.with_ymd_and_hms(2016, 2, 14, 10, 0, 0).unwrap(),
        name: Some("example".to_string()),
        metadata: None,
        sent_metaname: None,
        sent_name: None,
        tx_type: TransactionType::NamePurchase,
    }
}

pub fn mock_response(transactions: Vec<Transaction>, total: usize) -> LookupResponse {
    LookupResponse {
        count: transactions.len(),
        total,
        transactions,
    }
}

pub fn create_test_app(screen: Screen, with_wallets: bool) -> App {
    let config = if with_wallets {
        mock_config()
    } else {
        mock_config_empty()
    };
    let mut app = App::new(config).unwrap();
    app.screen = screen;
    app.network_info = Some(mock_network_info());
    app
}

/// App showing an address page whose first lookup has completed
pub fn address_app(address: &str, transactions: Vec<Transaction>) -> App {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.set_address_result(mock_address(address));
    let total = transactions.len();
    app.apply_lookup(fetch.seq, Ok(mock_response(transactions, total)));
    app
}

// ==================== Helper Functions ====================

/// Render the app to a buffer and return it
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            draw(frame, app);
        })
        .unwrap();

    terminal.backend().buffer().clone()
}

/// Check if buffer contains a specific string anywhere
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    let content = buffer_to_string(buffer);
    content.contains(needle)
}

/// Convert buffer to a single string for searching
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut content = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            content.push(
                buffer
                    .cell((x, y))
                    .map(|c| c.symbol().chars().next().unwrap_or(' '))
                    .unwrap_or(' '),
            );
        }
        content.push('\n');
    }
    content
}

/// Get a specific line from the buffer
#[allow(dead_code)]
pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
    let mut line = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            line.push_str(cell.symbol());
        }
    }
    line.trim_end().to_string()
}

/// Print buffer for debugging
#[allow(dead_code)]
pub fn print_buffer(buffer: &Buffer) {
    for y in 0..buffer.area.height {
        println!("{}", buffer_line(buffer, y));
    }
}
