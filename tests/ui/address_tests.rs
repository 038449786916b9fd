//! Address page UI tests

use super::*;
use kex::api::LookupError;

#[test]
fn test_address_screen_shows_address_and_balance() {
    let app = address_app(FOREIGN_ADDRESS, vec![mock_transfer(1001)]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, FOREIGN_ADDRESS));
    assert!(buffer_contains(&buffer, "86,945 KST"));
    assert!(buffer_contains(&buffer, "123,854 KST"));
    assert!(buffer_contains(&buffer, "Names: 12"));
}

#[test]
fn test_foreign_address_shows_send_and_add_friend() {
    let app = address_app(FOREIGN_ADDRESS, vec![]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Send Krist"));
    assert!(buffer_contains(&buffer, "Add friend"));
    assert!(!buffer_contains(&buffer, "Edit wallet"));
}

#[test]
fn test_owned_address_shows_transfer_and_edit() {
    let app = address_app(OWN_ADDRESS, vec![]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Main Wallet"));
    assert!(buffer_contains(&buffer, "Transfer Krist"));
    assert!(buffer_contains(&buffer, "Edit wallet"));
    assert!(!buffer_contains(&buffer, "Send Krist"));
}

#[test]
fn test_address_screen_shows_transaction_rows() {
    let app = address_app(OWN_ADDRESS, vec![mock_transfer(1001), mock_mined(1002)]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "1001"));
    assert!(buffer_contains(&buffer, "1002"));
    assert!(buffer_contains(&buffer, "Transfer"));
    assert!(buffer_contains(&buffer, "Mined"));
    assert!(buffer_contains(&buffer, "1,500 KST"));
    // Own address in a row carries the wallet label
    assert!(buffer_contains(&buffer, "kre3w0i79j (Main Wallet)"));
}

#[test]
fn test_address_screen_shows_sort_and_pagination() {
    let app = address_app(FOREIGN_ADDRESS, vec![mock_transfer(1001)]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Time ↓"));
    assert!(buffer_contains(&buffer, "Page 1/1"));
    assert!(buffer_contains(&buffer, "mined hidden"));
}

#[test]
fn test_address_screen_before_first_response() {
    let mut app = create_test_app(Screen::Home, true);
    app.set_address_result(mock_address(FOREIGN_ADDRESS));
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Loading transactions..."));
    assert!(buffer_contains(&buffer, "(loading...)"));
    assert!(buffer_contains(&buffer, "Page 1/?"));
}

#[test]
fn test_address_screen_empty_listing() {
    let app = address_app(FOREIGN_ADDRESS, vec![]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "No transactions"));
}

#[test]
fn test_failed_lookup_shows_status_line() {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.set_address_result(mock_address(FOREIGN_ADDRESS));
    app.apply_lookup(fetch.seq, Err(LookupError::new("HTTP 502 Bad Gateway")));
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "HTTP 502 Bad Gateway"));
    // The page stays up; lookup failures never replace it with the error screen
    assert!(buffer_contains(&buffer, "Send Krist"));
}

#[test]
fn test_wallet_editor_popup() {
    let mut app = address_app(OWN_ADDRESS, vec![]);
    app.open_wallet_editor("main");
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Edit wallet main"));
    assert!(buffer_contains(&buffer, "Enter save"));
}
