use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use roster_api::{Employee, department_name};

use crate::tui::types::{LoadState, Toast, ToastKind};

#[allow(clippy::too_many_arguments)]
pub fn draw(
    frame: &mut Frame,
    employees: &[Employee],
    table_state: &mut TableState,
    load_state: &LoadState,
    toast: Option<&Toast>,
    confirm_delete: Option<i64>,
    last_refresh: Option<chrono::DateTime<chrono::Local>>,
    server: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    // Title bar
    let title = Line::from(vec![
        Span::styled(" roster ", Style::default().fg(Color::Cyan).bold()),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("Employees", Style::default().fg(Color::White).bold()),
        Span::styled("]", Style::default().fg(Color::DarkGray)),
    ]);
    let stats = Line::from(vec![
        Span::styled(
            format!("{} ", employees.len()),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(
            format!("employees | {} ", server),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(title_block.clone(), chunks[0]);
    let title_inner = title_block.inner(chunks[0]);
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(60)])
        .split(title_inner);
    frame.render_widget(Paragraph::new(title), title_chunks[0]);
    frame.render_widget(
        Paragraph::new(stats).alignment(Alignment::Right),
        title_chunks[1],
    );

    let table_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Placeholder instead of the table while loading, on error or when empty
    let placeholder = match load_state {
        LoadState::Loading if employees.is_empty() => Some(vec![Line::from(Span::styled(
            " Loading employees...",
            Style::default().fg(Color::DarkGray),
        ))]),
        LoadState::Failed(e) => Some(vec![
            Line::from(Span::styled(
                format!(" Failed to load employees: {}", e),
                Style::default().fg(Color::Red),
            )),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ]),
        ]),
        _ if employees.is_empty() => Some(vec![Line::from(vec![
            Span::styled(" No employees yet. Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("n", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to add one.", Style::default().fg(Color::DarkGray)),
        ])]),
        _ => None,
    };

    if let Some(lines) = placeholder {
        frame.render_widget(Paragraph::new(lines).block(table_block), chunks[1]);
    } else {
        let header = Row::new(vec![
            Cell::from("ID").style(Style::default().fg(Color::Cyan)),
            Cell::from("NAME").style(Style::default().fg(Color::Cyan)),
            Cell::from("EMAIL").style(Style::default().fg(Color::Cyan)),
            Cell::from("DESIGNATION").style(Style::default().fg(Color::Cyan)),
            Cell::from("DEPARTMENT").style(Style::default().fg(Color::Cyan)),
        ])
        .style(Style::default().bold())
        .bottom_margin(1);

        let selected_idx = table_state.selected();
        let rows: Vec<Row> = employees
            .iter()
            .enumerate()
            .map(|(idx, employee)| {
                let is_selected = selected_idx == Some(idx);
                let fg = if is_selected {
                    Color::White
                } else {
                    Color::Reset
                };
                Row::new(vec![
                    Cell::from(Span::styled(
                        employee.id.to_string(),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Cell::from(Span::styled(employee.name.clone(), Style::default().fg(fg))),
                    Cell::from(Span::styled(employee.email.clone(), Style::default().fg(fg))),
                    Cell::from(Span::styled(
                        employee.designation.clone(),
                        Style::default().fg(fg),
                    )),
                    Cell::from(Span::styled(
                        department_name(employee.department_id),
                        Style::default().fg(Color::Magenta),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Min(15),
                Constraint::Min(20),
                Constraint::Min(15),
                Constraint::Length(18),
            ],
        )
        .header(header)
        .block(table_block)
        .row_highlight_style(Style::default().bg(Color::Indexed(236)));

        frame.render_stateful_widget(table, chunks[1], table_state);
    }

    // Hotkey legend with refresh time
    let legend_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(chunks[2]);

    let legend = Line::from(vec![
        Span::styled(" \u{21b5}", Style::default().fg(Color::White).bold()),
        Span::styled(" Details ", Style::default().fg(Color::DarkGray)),
        Span::styled("n", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" New ", Style::default().fg(Color::DarkGray)),
        Span::styled("e", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" Edit ", Style::default().fg(Color::DarkGray)),
        Span::styled("d", Style::default().fg(Color::Red).bold()),
        Span::styled(" Delete ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Green).bold()),
        Span::styled(" Refresh ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Magenta).bold()),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(legend), legend_chunks[0]);

    let refresh_time = last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} ", refresh_time),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        legend_chunks[1],
    );

    // Status bar / Confirmation
    if let Some(id) = confirm_delete {
        let display = match employees.iter().find(|e| e.id == id) {
            Some(e) => format!("{} (#{})", e.name, id),
            None => format!("#{}", id),
        };
        let confirm_line = Line::from(vec![
            Span::styled(" \u{26a0} ", Style::default().fg(Color::Red)),
            Span::styled(
                format!("Delete employee {}? ", display),
                Style::default().fg(Color::Red).bold(),
            ),
            Span::styled("[y]", Style::default().fg(Color::Green).bold()),
            Span::styled("es / ", Style::default().fg(Color::DarkGray)),
            Span::styled("[n]", Style::default().fg(Color::Red).bold()),
            Span::styled("o", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(confirm_line), chunks[3]);
    } else if let Some(toast) = toast {
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("\u{2713}", Color::Green),
            ToastKind::Error => ("\u{2717}", Color::Red),
        };
        let toast_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color).bold()),
            Span::styled(toast.message.as_str(), Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(toast_line), chunks[3]);
    }
}
