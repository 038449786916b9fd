//! Name page UI tests

use super::*;

fn name_app(transactions: Vec<Transaction>) -> App {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.set_name_result(mock_name());
    let total = transactions.len();
    app.apply_lookup(fetch.seq, Ok(mock_response(transactions, total)));
    app
}

#[test]
fn test_name_screen_shows_name_and_owner() {
    let app = name_app(vec![]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "example.kst"));
    assert!(buffer_contains(&buffer, "Owner: kre3w0i79j (Main Wallet)"));
    assert!(buffer_contains(&buffer, "Original Owner: k5ztameslf"));
    assert!(buffer_contains(&buffer, "A Record: https://example.com"));
}

#[test]
fn test_name_screen_shows_history_table() {
    let app = name_app(vec![mock_name_purchase(1003)]);
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Name History"));
    assert!(buffer_contains(&buffer, "Name purchase"));
    assert!(buffer_contains(&buffer, "1003"));
}

#[test]
fn test_name_screen_toggles_to_sent_listing() {
    let mut app = name_app(vec![]);
    app.toggle_name_listing();
    let buffer = render_to_buffer(&app, 140, 40);

    assert!(buffer_contains(&buffer, "Name Transactions"));
    assert!(buffer_contains(&buffer, "(loading...)"));
}
