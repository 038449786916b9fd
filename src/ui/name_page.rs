use super::helper::*;
use super::table_view::draw_transactions_table;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{Focus, NameResult};
use crate::columns::contextual_address;
use crate::ui::NAV_HELP_NAME;
use crate::wallets::WalletSet;

pub fn draw_name_result(
    frame: &mut Frame,
    result: &NameResult,
    wallets: &WalletSet,
    status: Option<&str>,
) {
    let area = frame.area();
    let info = &result.info;

    let chunks = Layout::vertical([
        Constraint::Length(10), // Name info
        Constraint::Min(6),     // Transactions
        Constraint::Length(1),  // Status
        Constraint::Length(1),  // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 🏷 {}.kst ", info.name));

    let mut lines = vec![
        format_kv_link(
            "Owner",
            &contextual_address(&info.owner, wallets),
            result.focus == Focus::Header,
        ),
    ];

    if let Some(original) = &info.original_owner {
        lines.push(format_kv("Original Owner", original));
    }

    lines.push(Line::from(""));
    lines.push(format_kv("Registered", &format_timestamp(info.registered)));
    if let Some(updated) = info.updated {
        lines.push(format_kv("Updated", &format_timestamp(updated)));
    }
    if let Some(transferred) = info.transferred {
        lines.push(format_kv("Transferred", &format_timestamp(transferred)));
    }

    lines.push(Line::from(""));
    lines.push(format_kv("A Record", info.a.as_deref().unwrap_or("None")));
    if info.unpaid > 0 {
        lines.push(format_kv("Unpaid", &format!("{} blocks", info.unpaid)));
    }

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    draw_transactions_table(
        frame,
        chunks[1],
        &result.table,
        wallets,
        result.focus == Focus::Table,
    );

    frame.render_widget(Paragraph::new(status_line(status)), chunks[2]);

    let help = Paragraph::new(NAV_HELP_NAME)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}
