mod address_page;
mod helper;
mod name_page;
mod table_view;
mod transactions_page;
mod tx_page;

use address_page::draw_address_result;
use helper::*;
use name_page::draw_name_result;
use transactions_page::draw_transactions_result;
use tx_page::draw_tx_result;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Screen, WalletEditor};
use crate::columns::format_kst;

const TITLE_ART: &str = r#"
██╗  ██╗███████╗██╗  ██╗
██║ ██╔╝██╔════╝╚██╗██╔╝
█████╔╝ █████╗   ╚███╔╝
██╔═██╗ ██╔══╝   ██╔██╗
██║  ██╗███████╗██╔╝ ██╗
╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝
"#;

const NAV_HELP_TABLE: &str =
    "↑↓ rows • ←→ buttons • Tab focus • [ ] page • +/- size • s sort • o order • m mined • r refresh • b back • Esc quit";
const NAV_HELP_NAME: &str =
    "↑↓ rows • Tab focus • t history/sent • [ ] page • +/- size • s sort • o order • r refresh • b back • Esc quit";
const NAV_HELP_LISTING: &str =
    "↑↓ rows • Enter open • [ ] page • +/- size • s sort • o order • m mined • r refresh • b back • h home • Esc quit";
const NAV_HELP_SIMPLE: &str = "↑↓ navigate • Enter select • b back • h home • Esc quit";
const NAV_HELP_NO_LIST: &str = "b back • h home • Esc quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let wallets = &app.config.wallets;
    let status = app.status.as_deref();

    match &app.screen {
        Screen::Home => draw_home(frame, app),
        Screen::Loading(msg) => draw_loading(frame, msg),
        Screen::Address(result) => draw_address_result(frame, result, wallets, status),
        Screen::Name(result) => draw_name_result(frame, result, wallets, status),
        Screen::Transactions(result) => draw_transactions_result(frame, result, wallets, status),
        Screen::Tx(result) => draw_tx_result(frame, result, wallets),
        Screen::Error(msg) => draw_error(frame, msg),
    }

    if let Some(editor) = &app.wallet_editor {
        draw_wallet_editor(frame, editor);
    }
}

fn draw_home(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let recent_searches = app.get_recent_searches();
    let has_history = !recent_searches.is_empty();

    // Calculate history section height (max 5 items + 2 for border)
    let history_height = if has_history {
        (recent_searches.len().min(5) + 2) as u16
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(8),              // Title
        Constraint::Length(1),              // Subtitle
        Constraint::Length(2),              // Spacing
        Constraint::Length(3),              // Search bar
        Constraint::Length(1),              // Spacing
        Constraint::Length(history_height), // History
        Constraint::Length(1),              // Status
        Constraint::Length(1),              // Sync node
        Constraint::Length(1),              // Help
        Constraint::Min(0),                 // Network info
    ])
    .split(area);

    let title = Paragraph::new(TITLE_ART)
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new("Krist Explorer")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    let search_area = centered_rect(60, chunks[3]);
    let search_selected = app.selected_history_index.is_none();
    draw_search_bar_with_selection(frame, app, search_area, search_selected);

    if has_history {
        let history_area = centered_rect(60, chunks[5]);
        draw_history_list(frame, app, history_area);
    }

    frame.render_widget(
        Paragraph::new(status_line(app.status.as_deref())).alignment(Alignment::Center),
        chunks[6],
    );

    let node_status = Line::from(vec![
        Span::styled("Node: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            truncate_middle(app.sync_node(), 50),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(node_status).alignment(Alignment::Center),
        chunks[7],
    );

    let help_text = if has_history {
        "Enter search • ↑↓ history • Del remove • ^N network • ^W wallets • Esc quit"
    } else {
        "Enter search • ^N network • ^W wallets • Esc quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[8]);

    if let Some(info) = &app.network_info {
        let net_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Network Status ");

        let line = Line::from(vec![
            Span::styled("Supply: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_kst(info.money_supply),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("Work: ", Style::default().fg(Color::DarkGray)),
            Span::styled(info.work.to_string(), Style::default().fg(Color::White)),
        ]);

        let net_para = Paragraph::new(line)
            .block(net_block)
            .alignment(Alignment::Center);
        frame.render_widget(net_para, chunks[9]);
    }
}

fn draw_search_bar_with_selection(frame: &mut Frame, app: &App, area: Rect, selected: bool) {
    let border_color = if selected {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 🔍 Search ")
        .title_style(Style::default().fg(border_color));

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = app.search_input.visual_scroll(inner_width);

    let display_text = if app.search_input.value().is_empty() {
        Span::styled(
            "Search by Address / Name / Transaction ID",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.search_input.value(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(display_text)
        .block(block)
        .scroll((0, scroll as u16));

    frame.render_widget(input, area);

    // Only show cursor if search bar is selected
    if selected && app.wallet_editor.is_none() {
        let cursor_x =
            area.x + 1 + (app.search_input.visual_cursor().saturating_sub(scroll)) as u16;
        let cursor_y = area.y + 1;

        if cursor_x < area.x + area.width - 1 {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn draw_history_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recent Searches ");

    let items: Vec<ListItem> = app
        .get_recent_searches()
        .iter()
        .enumerate()
        .take(5)
        .map(|(i, query)| {
            let style = if app.selected_history_index == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(format!(" {}", truncate_middle(query, 60))).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_loading(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Loading ");

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let idx = (chrono::Utc::now().timestamp_millis() / 100).unsigned_abs() as usize
        % spinner_frames.len();

    let text = format!("{} {}", spinner_frames[idx], msg);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));

    let centered = centered_rect_fixed(50, 3, area);
    frame.render_widget(paragraph, centered);
}

fn draw_error(frame: &mut Frame, msg: &str) {
    let area = frame.area();
    let padded = padded_rect(area, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" ❌ Error ");

    let mut lines: Vec<Line> = msg
        .lines()
        .map(|line| Line::from(line.to_string()).fg(Color::Red))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(NAV_HELP_NO_LIST).fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: false });

    frame.render_widget(paragraph, padded);
}

fn draw_wallet_editor(frame: &mut Frame, editor: &WalletEditor) {
    let area = centered_rect_fixed(50, 5, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(format!(" ✎ Edit wallet {} ", editor.wallet_id))
        .title_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1), // Input
        Constraint::Length(1), // Spacing
        Constraint::Length(1), // Help
    ])
    .split(inner);

    let scroll = editor.input.visual_scroll(rows[0].width as usize);
    let display_text = if editor.input.value().is_empty() {
        Span::styled("Label", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(editor.input.value(), Style::default().fg(Color::White))
    };
    frame.render_widget(
        Paragraph::new(display_text).scroll((0, scroll as u16)),
        rows[0],
    );

    let cursor_x = rows[0].x + (editor.input.visual_cursor().saturating_sub(scroll)) as u16;
    if cursor_x < rows[0].x + rows[0].width {
        frame.set_cursor_position((cursor_x, rows[0].y));
    }

    let help = Paragraph::new("Enter save • Esc cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[2]);
}
