use super::helper::*;
use super::table_view::draw_transactions_table;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::actions::{AddressButtonRow, AddressOwnership};
use crate::app::{AddressResult, Focus};
use crate::columns::format_kst;
use crate::ui::NAV_HELP_TABLE;
use crate::wallets::WalletSet;

pub fn draw_address_result(
    frame: &mut Frame,
    result: &AddressResult,
    wallets: &WalletSet,
    status: Option<&str>,
) {
    let area = frame.area();
    let info = &result.info;
    let ownership = AddressOwnership::resolve(&info.address, wallets);

    let chunks = Layout::vertical([
        Constraint::Length(9), // Address info
        Constraint::Length(3), // Buttons
        Constraint::Min(6),    // Transactions
        Constraint::Length(1), // Status
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let title = match ownership {
        AddressOwnership::Owned { wallet, .. } => format!(" 👛 {} ", wallet.display_name()),
        AddressOwnership::Foreign => " 👤 Address ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let mut lines = vec![
        format_kv("Address", &info.address),
        Line::from(""),
        Line::from(vec![
            Span::styled("Balance: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_kst(info.balance),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        format_kv("Total In", &format_kst(info.total_in)),
        format_kv("Total Out", &format_kst(info.total_out)),
    ];

    if let Some(names) = info.names {
        lines.push(format_kv("Names", &names.to_string()));
    }
    lines.push(format_kv("First Seen", &format_timestamp(info.first_seen)));

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let buttons = AddressButtonRow::for_ownership(&info.address, ownership);
    draw_buttons(frame, chunks[1], &buttons, result);

    draw_transactions_table(
        frame,
        chunks[2],
        &result.table,
        wallets,
        result.focus == Focus::Table,
    );

    frame.render_widget(Paragraph::new(status_line(status)), chunks[3]);

    let help = Paragraph::new(NAV_HELP_TABLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_buttons(frame: &mut Frame, area: Rect, buttons: &AddressButtonRow, result: &AddressResult) {
    let cells = Layout::horizontal([Constraint::Length(22), Constraint::Length(22)])
        .spacing(2)
        .split(area);

    for (i, action) in buttons.buttons.iter().enumerate() {
        let selected = result.focus == Focus::Header && result.selected_button == i;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let label = if action.opens_editor() {
            format!("{}...", action.label())
        } else {
            action.label().to_string()
        };

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(button, cells[i]);
    }
}
