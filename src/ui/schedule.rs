//! Installment schedule table

use crate::format::{format_currency, format_date};
use crate::state::InstallmentRow;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

/// Column headers with the group label shown above the first column of each group
const COLUMNS: [(&str, &str); 10] = [
    ("Empréstimo", "Data Competência"),
    ("", "Valor de Empréstimo"),
    ("", "Saldo Devedor"),
    ("Parcela", "Consolidada"),
    ("", "Valor Parcela Total"),
    ("Principal", "Amortização"),
    ("", "Saldo"),
    ("", "Provisão"),
    ("", "Juros Acum."),
    ("", "Valor Pago"),
];

/// Display cells of one installment, in column order
pub fn row_cells(row: &InstallmentRow) -> [String; 10] {
    [
        format_date(&row.due_date),
        format_currency(row.principal_amount),
        format_currency(row.outstanding_balance),
        row.installment_number.to_string(),
        format_currency(row.installment_value),
        format_currency(row.principal),
        format_currency(row.balance),
        format_currency(row.provision),
        format_currency(row.accrued_interest),
        format_currency(row.interest_paid),
    ]
}

/// Draw the schedule starting at `offset`; nothing is drawn for an empty schedule
pub fn draw_schedule(frame: &mut Frame, area: Rect, rows: &[InstallmentRow], offset: usize) {
    if rows.is_empty() {
        return;
    }

    let group_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(COLUMNS.iter().map(|(group, name)| {
        Cell::from(Text::from(vec![
            Line::styled(*group, group_style),
            Line::styled(*name, Style::default().add_modifier(Modifier::BOLD)),
        ]))
    }))
    .height(2);

    let body = rows.iter().map(|row| Row::new(row_cells(row)));

    let mut widths = vec![Constraint::Length(10), Constraint::Fill(1), Constraint::Fill(1)];
    widths.push(Constraint::Length(11));
    widths.extend(std::iter::repeat_n(Constraint::Fill(1), 6));

    let title = format!(
        " Detalhamento das Parcelas (linha {} de {}) ",
        offset + 1,
        rows.len()
    );
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    let mut state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_cells_format_every_column() {
        let row = InstallmentRow {
            due_date: "2024-03-15".to_string(),
            principal_amount: Some(10000.0),
            outstanding_balance: Some(9234.5),
            installment_number: 2,
            installment_value: Some(888.49),
            principal: Some(765.5),
            balance: Some(9234.5),
            provision: None,
            accrued_interest: Some(122.99),
            interest_paid: Some(0.0),
        };
        assert_eq!(
            row_cells(&row),
            [
                "15/03/2024".to_string(),
                "R$ 10.000,00".to_string(),
                "R$ 9.234,50".to_string(),
                "2".to_string(),
                "R$ 888,49".to_string(),
                "R$ 765,50".to_string(),
                "R$ 9.234,50".to_string(),
                "R$ 0,00".to_string(),
                "R$ 122,99".to_string(),
                "R$ 0,00".to_string(),
            ]
        );
    }
}
