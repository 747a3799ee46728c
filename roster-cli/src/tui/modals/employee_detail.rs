use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use roster_api::{Employee, department_name};

pub fn draw(frame: &mut Frame, employee: &Employee) {
    let area = frame.area();
    let modal_width = 60.min(area.width.saturating_sub(4));
    let modal_height = 11.min(area.height.saturating_sub(4));

    let modal_area = Rect {
        x: (area.width - modal_width) / 2,
        y: (area.height - modal_height) / 2,
        width: modal_width,
        height: modal_height,
    };

    frame.render_widget(Clear, modal_area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", employee.name),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled("|", Style::default().fg(Color::DarkGray)),
        Span::styled(" Esc", Style::default().fg(Color::Yellow)),
        Span::styled(": close ", Style::default().fg(Color::DarkGray)),
        Span::styled("e", Style::default().fg(Color::Yellow)),
        Span::styled(": edit ", Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);

    let lines = vec![
        Line::from(vec![
            Span::styled(" ID:          ", label_style),
            Span::styled(employee.id.to_string(), value_style),
        ]),
        Line::from(vec![
            Span::styled(" Name:        ", label_style),
            Span::styled(employee.name.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled(" Email:       ", label_style),
            Span::styled(employee.email.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled(" Designation: ", label_style),
            Span::styled(employee.designation.as_str(), value_style),
        ]),
        Line::from(vec![
            Span::styled(" Department:  ", label_style),
            Span::styled(department_name(employee.department_id), value_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}
