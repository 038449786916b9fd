use super::helper::*;
use super::table_view::draw_transactions_table;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::TransactionsResult;
use crate::ui::NAV_HELP_LISTING;
use crate::wallets::WalletSet;

pub fn draw_transactions_result(
    frame: &mut Frame,
    result: &TransactionsResult,
    wallets: &WalletSet,
    status: Option<&str>,
) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Min(6),    // Transactions
        Constraint::Length(1), // Status
        Constraint::Length(1), // Nav help
    ])
    .split(padded_rect(area, 1));

    draw_transactions_table(frame, chunks[0], &result.table, wallets, true);

    frame.render_widget(Paragraph::new(status_line(status)), chunks[1]);

    let help = Paragraph::new(NAV_HELP_LISTING)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}
