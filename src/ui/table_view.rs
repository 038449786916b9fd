use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::columns::Column;
use crate::table::TransactionsTable;
use crate::wallets::WalletSet;

pub fn draw_transactions_table(
    frame: &mut Frame,
    area: Rect,
    table: &TransactionsTable,
    wallets: &WalletSet,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let mut title = format!(" {} ", table.params().listing_type.title());
    if table.is_loading() {
        title.push_str("(loading...) ");
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Rows
        Constraint::Length(1), // Pagination
    ])
    .split(inner);

    if table.rows().is_empty() {
        let msg = if table.response().is_none() {
            "Loading transactions..."
        } else {
            "No transactions"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[0]);
    } else {
        draw_rows(frame, chunks[0], table, wallets, focused);
    }

    frame.render_widget(pagination_line(table), chunks[1]);
}

fn draw_rows(
    frame: &mut Frame,
    area: Rect,
    table: &TransactionsTable,
    wallets: &WalletSet,
    focused: bool,
) {
    let sort_column = table.sort_column();
    let order = table.options().order;

    let header = Row::new(Column::ALL.iter().map(|column| {
        let mut title = column.title().to_string();
        if sort_column == Some(*column) {
            title.push(' ');
            title.push_str(order.arrow());
        }
        Cell::from(title)
    }))
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let rows = table.rows().iter().map(|tx| {
        Row::new(Column::ALL.iter().map(|column| {
            let text = column.cell(tx, wallets).unwrap_or_default();
            let style = match column {
                _ if column.is_link() => Style::default().fg(Color::Cyan),
                Column::Value => Style::default().fg(Color::Yellow),
                Column::Metadata | Column::Time => Style::default().fg(Color::Gray),
                _ => Style::default().fg(Color::White),
            };
            Cell::from(text).style(style)
        }))
    });

    let widths = Column::ALL.map(|column| match column.width() {
        Some(width) => Constraint::Length(width),
        None => Constraint::Min(10),
    });

    let highlight = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(highlight);

    let mut state = TableState::default().with_selected(Some(table.selected()));
    frame.render_stateful_widget(widget, area, &mut state);
}

fn pagination_line(table: &TransactionsTable) -> Line<'static> {
    let options = table.options();
    let pages = table
        .total_pages()
        .map_or_else(|| "?".to_string(), |p| p.to_string());
    let total = table.response().map_or(0, |r| r.total);
    let mined = if table.params().include_mined {
        "shown"
    } else {
        "hidden"
    };

    Line::from(vec![
        Span::styled(
            format!("Page {}/{pages}", table.page() + 1),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!(" • {total} total • {} per page • mined {mined}", options.limit),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
