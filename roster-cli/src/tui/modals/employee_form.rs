//! Modal for creating or editing an employee

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use roster_api::validation::{self, Field, ValidationErrors};
use roster_api::{Department, Employee, EmployeeFields};

use super::centered_rect;

const NAME: usize = 0;
const EMAIL: usize = 1;
const DESIGNATION: usize = 2;
const DEPARTMENT: usize = 3;
const SUBMIT: usize = 4;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormMode {
    Create,
    Edit(i64),
}

pub struct EmployeeForm {
    pub mode: FormMode,
    pub name: String,
    pub email: String,
    pub designation: String,
    /// `None` until a department is picked
    pub department: Option<Department>,
    pub focused_field: usize,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            designation: String::new(),
            department: None,
            focused_field: NAME,
            errors: ValidationErrors::new(),
            submitting: false,
        }
    }

    /// Form prefilled from an existing record.
    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit(employee.id),
            name: employee.name.clone(),
            email: employee.email.clone(),
            designation: employee.designation.clone(),
            department: Department::from_id(employee.department_id),
            ..Self::new()
        }
    }

    pub fn field_count() -> usize {
        5 // name, email, designation, department, submit
    }

    pub fn focus_next(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::field_count();
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = if self.focused_field == 0 {
            Self::field_count() - 1
        } else {
            self.focused_field - 1
        };
    }

    pub fn current_input(&mut self) -> Option<&mut String> {
        match self.focused_field {
            NAME => Some(&mut self.name),
            EMAIL => Some(&mut self.email),
            DESIGNATION => Some(&mut self.designation),
            _ => None,
        }
    }

    pub fn is_department_field(&self) -> bool {
        self.focused_field == DEPARTMENT
    }

    pub fn is_submit_field(&self) -> bool {
        self.focused_field == SUBMIT
    }

    pub fn next_department(&mut self) {
        self.department = Some(match self.department {
            Some(d) => d.next(),
            None => Department::ALL[0],
        });
    }

    pub fn prev_department(&mut self) {
        self.department = Some(match self.department {
            Some(d) => d.prev(),
            None => Department::ALL[Department::ALL.len() - 1],
        });
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            designation: Some(self.designation.clone()),
            department_id: self.department.map(Department::id),
        }
    }

    /// Checks every field. On failure the per-field errors are kept on the
    /// form for display and `None` is returned.
    pub fn validate(&mut self) -> Option<EmployeeFields> {
        match validation::validate_new(&self.fields()) {
            Ok(valid) => {
                self.errors = ValidationErrors::new();
                Some(EmployeeFields {
                    name: Some(valid.name),
                    email: Some(valid.email),
                    designation: Some(valid.designation),
                    department_id: Some(valid.department_id),
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    fn title(&self) -> String {
        match self.mode {
            FormMode::Create => " New Employee ".to_string(),
            FormMode::Edit(id) => format!(" Edit Employee #{} ", id),
        }
    }
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new()
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn text_field<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::styled(value, field_style(focused)),
        if focused {
            Span::styled("_", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("")
        },
    ])
}

fn error_line(form: &EmployeeForm, field: Field) -> Line<'static> {
    match form.errors.message(field) {
        Some(message) => Line::from(Span::styled(
            format!("              {}", message),
            Style::default().fg(Color::Red),
        )),
        None => Line::raw(""),
    }
}

pub fn draw(frame: &mut Frame, form: &EmployeeForm) {
    let area = centered_rect(60, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(form.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block.clone(), area);

    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(2), // Email
            Constraint::Length(2), // Designation
            Constraint::Length(2), // Department
            Constraint::Length(1), // Spacing
            Constraint::Length(2), // Submit
        ])
        .split(inner);

    let rows = [
        (" Name:        ", &form.name, NAME, Field::Name),
        (" Email:       ", &form.email, EMAIL, Field::Email),
        (" Designation: ", &form.designation, DESIGNATION, Field::Designation),
    ];
    for (label, value, index, field) in rows {
        let lines = vec![
            text_field(label, value, form.focused_field == index),
            error_line(form, field),
        ];
        frame.render_widget(Paragraph::new(lines), chunks[index]);
    }

    // Department selector
    let focused = form.is_department_field();
    let department = form
        .department
        .map(Department::name)
        .unwrap_or("Select department");
    let department_line = Line::from(vec![
        Span::styled(" Department:  ", Style::default().fg(Color::Cyan)),
        Span::styled(format!("\u{2039} {} \u{203a}", department), field_style(focused)),
        if focused {
            Span::styled(" (space / \u{2190} \u{2192})", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);
    frame.render_widget(
        Paragraph::new(vec![department_line, error_line(form, Field::Department)]),
        chunks[DEPARTMENT],
    );

    // Submit button
    let submit_style = if form.is_submit_field() {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let label = match (form.submitting, form.mode) {
        (true, _) => " [ Saving... ] ",
        (false, FormMode::Create) => " [ Create ] ",
        (false, FormMode::Edit(_)) => " [ Save ] ",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, submit_style)).alignment(Alignment::Center),
        chunks[5],
    );
}
