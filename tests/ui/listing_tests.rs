//! Network and wallet listing UI tests

use super::*;
use kex::table::TableChange;

#[test]
fn test_network_listing_shows_mined_rows() {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.open_network_listing();
    app.apply_lookup(
        fetch.seq,
        Ok(mock_response(vec![mock_mined(2001), mock_transfer(2000)], 2)),
    );
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "Network Transactions"));
    assert!(buffer_contains(&buffer, "2001"));
    assert!(buffer_contains(&buffer, "mined shown"));
}

#[test]
fn test_wallet_listing_title() {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.open_wallet_listing().unwrap();
    app.apply_lookup(fetch.seq, Ok(mock_response(vec![mock_transfer(1001)], 1)));
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "My Transactions"));
}

#[test]
fn test_listing_pagination_footer() {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.open_network_listing();
    let rows = (0..15).map(|i| mock_transfer(3000 - i)).collect();
    app.apply_lookup(fetch.seq, Ok(mock_response(rows, 40)));

    let fetch = app.apply_table_change(TableChange::NextPage).unwrap();
    app.apply_lookup(fetch.seq, Ok(mock_response(vec![mock_transfer(2985)], 40)));
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "Page 2/3"));
    assert!(buffer_contains(&buffer, "40 total"));
    assert!(buffer_contains(&buffer, "15 per page"));
}

#[test]
fn test_listing_sort_by_value_ascending() {
    let mut app = create_test_app(Screen::Home, true);
    let fetch = app.open_network_listing();
    app.apply_lookup(fetch.seq, Ok(mock_response(vec![mock_transfer(1)], 1)));

    let fetch = app
        .apply_table_change(TableChange::SortBy(kex::columns::Column::Value))
        .unwrap();
    app.apply_lookup(fetch.seq, Ok(mock_response(vec![mock_transfer(1)], 1)));
    let buffer = render_to_buffer(&app, 140, 30);

    assert!(buffer_contains(&buffer, "Value ↑"));
    assert!(!buffer_contains(&buffer, "Time ↓"));
}
