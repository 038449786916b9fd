use super::helper::*;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::TxResult;
use crate::columns::{contextual_address, format_kst, format_name_recipient};
use crate::metadata;
use crate::ui::NAV_HELP_SIMPLE;
use crate::wallets::WalletSet;

pub fn draw_tx_result(frame: &mut Frame, result: &TxResult, wallets: &WalletSet) {
    let area = frame.area();
    let info = &result.info;

    let chunks = Layout::vertical([
        Constraint::Min(12),   // Tx info
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" 📄 Transaction #{} ", info.id));

    // Link order must match `app::tx_links`
    let mut link_idx = 0;
    let mut next_link = || {
        let selected = result.selected_link == link_idx;
        link_idx += 1;
        selected
    };

    let mut lines = vec![format_kv("Type", info.tx_type.label())];

    if info.tx_type.has_sender() {
        match &info.from {
            Some(from) => lines.push(format_kv_link(
                "From",
                &contextual_address(from, wallets),
                next_link(),
            )),
            None => lines.push(format_kv("From", "Unknown")),
        }
    }

    if info.tx_type.has_recipient() {
        if let Some(to) = &info.to {
            lines.push(format_kv_link(
                "To",
                &contextual_address(to, wallets),
                next_link(),
            ));
        }
    }

    if let Some(name) = &info.sent_name {
        lines.push(format_kv_link(
            "Sent To",
            &format_name_recipient(info.sent_metaname.as_deref(), name),
            next_link(),
        ));
    }

    if let Some(name) = &info.name {
        lines.push(format_kv_link("Name", &format!("{name}.kst"), next_link()));
    }

    lines.push(Line::from(""));
    if info.tx_type.carries_value() {
        lines.push(format_kv("Value", &format_kst(info.value)));
    }
    lines.push(format_kv("Time", &format_timestamp(info.time)));

    if let Some(meta) = &info.metadata {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            "── Metadata ──",
            Style::default().fg(Color::Yellow),
        )]));

        if let Some(summary) = metadata::concise(info) {
            if summary != *meta {
                lines.push(format_kv("Message", &summary));
            }
        }
        for line in meta.lines() {
            lines.push(Line::from(Span::styled(
                format!("  {line}"),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    let help = Paragraph::new(NAV_HELP_SIMPLE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}
