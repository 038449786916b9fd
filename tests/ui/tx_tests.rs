//! Transaction page UI tests

use super::*;
use kex::app::TxResult;

fn tx_screen(info: Transaction, selected_link: usize) -> Screen {
    Screen::Tx(TxResult {
        info,
        selected_link,
    })
}

#[test]
fn test_tx_screen_shows_id_and_type() {
    let app = create_test_app(tx_screen(mock_transfer(1001), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Transaction #1001"));
    assert!(buffer_contains(&buffer, "Type: Transfer"));
}

#[test]
fn test_tx_screen_shows_parties_with_labels() {
    let app = create_test_app(tx_screen(mock_transfer(1001), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "From: k5ztameslf"));
    assert!(buffer_contains(&buffer, "To: kre3w0i79j (Main Wallet)"));
    assert!(buffer_contains(&buffer, "Value: 1,500 KST"));
}

#[test]
fn test_tx_screen_shows_metadata() {
    let app = create_test_app(tx_screen(mock_transfer(1001), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Metadata"));
    assert!(buffer_contains(&buffer, "Message: thanks for the pizza"));
    assert!(buffer_contains(&buffer, "order=42"));
}

#[test]
fn test_tx_screen_mined_has_no_sender() {
    let app = create_test_app(tx_screen(mock_mined(1002), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Type: Mined"));
    assert!(!buffer_contains(&buffer, "From:"));
    assert!(buffer_contains(&buffer, "Value: 25 KST"));
}

#[test]
fn test_tx_screen_name_purchase_links_name() {
    let app = create_test_app(tx_screen(mock_name_purchase(1003), 1), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Name: example.kst"));
    // Name purchases have no counterparty
    assert!(!buffer_contains(&buffer, "To:"));
}

#[test]
fn test_tx_screen_sent_to_name() {
    let mut info = mock_transfer(1004);
    info.sent_name = Some("shop".to_string());
    info.sent_metaname = Some("orders".to_string());
    info.metadata = Some("orders@shop.kst;message=two apples".to_string());
    let app = create_test_app(tx_screen(info, 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Sent To: orders@shop.kst"));
    assert!(buffer_contains(&buffer, "Message: two apples"));
}

#[test]
fn test_tx_screen_shows_navigation_help() {
    let app = create_test_app(tx_screen(mock_transfer(1001), 0), true);
    let buffer = render_to_buffer(&app, 100, 40);

    assert!(buffer_contains(&buffer, "Enter select"));
}
