//! Home screen UI tests

use super::*;

#[test]
fn test_home_screen_shows_title() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    // Should show the ASCII art title
    assert!(buffer_contains(&buffer, "████"));
    assert!(buffer_contains(&buffer, "Krist Explorer"));
}

#[test]
fn test_home_screen_shows_search_bar() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Search"));
    assert!(buffer_contains(&buffer, "Address / Name / Transaction ID"));
}

#[test]
fn test_home_screen_shows_node_and_network_info() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 100, 30);

    assert!(buffer_contains(&buffer, "Node: https://krist.dev"));
    assert!(buffer_contains(&buffer, "13,451,218 KST"));
    assert!(buffer_contains(&buffer, "Work: 100000"));
}

#[test]
fn test_home_screen_shows_recent_searches() {
    let app = create_test_app(Screen::Home, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "example.kst"));
    assert!(buffer_contains(&buffer, FOREIGN_ADDRESS));
}

#[test]
fn test_home_screen_without_history() {
    let app = create_test_app(Screen::Home, false);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(!buffer_contains(&buffer, "Recent Searches"));
    assert!(buffer_contains(&buffer, "^N network"));
}

#[test]
fn test_home_screen_shows_notice() {
    let mut app = create_test_app(Screen::Home, false);
    assert!(app.open_wallet_listing().is_none());
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "No wallets configured"));
}
