//! Common UI tests - error, loading, layout, and navigation

use super::*;
use kex::app::TxResult;

// ==================== Error Screen Tests ====================

#[test]
fn test_error_screen_shows_message() {
    let screen = Screen::Error("lookup failed: name not found".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Error"));
    assert!(buffer_contains(&buffer, "name not found"));
}

// ==================== Loading Screen Tests ====================

#[test]
fn test_loading_screen_shows_message() {
    let screen = Screen::Loading("Fetching transaction #1234567...".to_string());
    let app = create_test_app(screen, true);
    let buffer = render_to_buffer(&app, 80, 30);

    assert!(buffer_contains(&buffer, "Loading"));
    assert!(buffer_contains(&buffer, "1234567"));
}

// ==================== Navigation Help Tests ====================

#[test]
fn test_screens_show_navigation_help() {
    let mut apps = vec![
        create_test_app(Screen::Home, true),
        create_test_app(
            Screen::Tx(TxResult {
                info: mock_transfer(1001),
                selected_link: 0,
            }),
            true,
        ),
        address_app(FOREIGN_ADDRESS, vec![mock_transfer(1001)]),
    ];
    let mut name = create_test_app(Screen::Home, true);
    name.set_name_result(mock_name());
    apps.push(name);

    for app in apps {
        let buffer = render_to_buffer(&app, 140, 40);
        assert!(buffer_contains(&buffer, "Esc quit"));
    }
}

// ==================== Layout Tests ====================

#[test]
fn test_small_terminal_renders_without_panic() {
    // Ensure UI handles small terminals gracefully
    let mut apps = vec![
        create_test_app(Screen::Home, true),
        create_test_app(
            Screen::Tx(TxResult {
                info: mock_transfer(1001),
                selected_link: 0,
            }),
            true,
        ),
        address_app(OWN_ADDRESS, vec![mock_transfer(1001), mock_mined(1002)]),
        create_test_app(Screen::Error("Error".to_string()), true),
        create_test_app(Screen::Loading("Loading...".to_string()), true),
    ];
    let mut editing = address_app(OWN_ADDRESS, vec![]);
    editing.open_wallet_editor("main");
    apps.push(editing);

    for app in apps {
        // This should not panic even with very small dimensions
        let _ = render_to_buffer(&app, 40, 10);
    }
}

#[test]
fn test_large_terminal_renders_without_panic() {
    let app = address_app(OWN_ADDRESS, vec![mock_transfer(1001)]);
    let _ = render_to_buffer(&app, 250, 100);
}
