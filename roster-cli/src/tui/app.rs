use std::time::Instant;

use chrono::Local;
use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use roster_api::Employee;

use crate::tui::modals::employee_form::{EmployeeForm, FormMode};
use crate::tui::types::{Action, ActionResult, LoadState, Toast, ToastKind};

const BUSY_MESSAGE: &str = "another request is still running";

pub struct App {
    // Employee state
    pub employees: Vec<Employee>,
    pub table_state: TableState,
    pub load_state: LoadState,

    // Common state
    pub should_quit: bool,
    pub toast: Option<Toast>,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub result_rx: mpsc::UnboundedReceiver<ActionResult>,
    pub busy: bool,
    pub last_refresh: Option<chrono::DateTime<chrono::Local>>,
    pub server: String,

    // Overlays
    pub confirm_delete: Option<i64>,
    pub form: Option<EmployeeForm>,
    pub detail_view: Option<Employee>,
}

impl App {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        result_rx: mpsc::UnboundedReceiver<ActionResult>,
        server: String,
    ) -> Self {
        Self {
            employees: Vec::new(),
            table_state: TableState::default(),
            load_state: LoadState::Loading,

            should_quit: false,
            toast: None,
            action_tx,
            result_rx,
            busy: false,
            last_refresh: None,
            server,

            confirm_delete: None,
            form: None,
            detail_view: None,
        }
    }

    pub fn send_action(&mut self, action: Action) {
        if self.busy {
            return;
        }
        self.busy = true;
        let _ = self.action_tx.send(action);
    }

    pub fn refresh(&mut self) {
        if matches!(self.load_state, LoadState::Failed(_)) {
            self.load_state = LoadState::Loading;
        }
        self.send_action(Action::Refresh);
    }

    fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast::new(message, kind, Instant::now()));
    }

    /// Drops the notification once it has been shown long enough.
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn handle_result(&mut self, result: ActionResult) {
        self.busy = false;
        match result {
            ActionResult::Refreshed(Ok(employees)) => {
                self.employees = employees;
                self.load_state = LoadState::Ready;
                self.last_refresh = Some(Local::now());
                if self.employees.is_empty() {
                    self.table_state.select(None);
                } else if self.table_state.selected().is_none() {
                    self.table_state.select(Some(0));
                } else if let Some(selected) = self.table_state.selected()
                    && selected >= self.employees.len()
                {
                    self.table_state
                        .select(Some(self.employees.len().saturating_sub(1)));
                }
            }
            ActionResult::Refreshed(Err(e)) => {
                self.load_state = LoadState::Failed(e);
            }
            ActionResult::DetailLoaded(Ok(employee)) => {
                self.detail_view = Some(employee);
            }
            ActionResult::DetailLoaded(Err(e)) => {
                self.notify(format!("Failed to load employee: {}", e), ToastKind::Error);
            }
            ActionResult::Created(Ok(_)) => {
                self.form = None;
                self.notify("Employee created successfully", ToastKind::Success);
                self.refresh();
            }
            ActionResult::Updated(Ok(_)) => {
                self.form = None;
                self.notify("Employee updated successfully", ToastKind::Success);
                self.refresh();
            }
            ActionResult::Created(Err(e)) | ActionResult::Updated(Err(e)) => {
                // Form stays open with its values
                if let Some(form) = &mut self.form {
                    form.submitting = false;
                }
                self.notify(format!("Operation failed: {}", e), ToastKind::Error);
            }
            ActionResult::Deleted(id, Ok(())) => {
                self.employees.retain(|e| e.id != id);
                self.notify("Employee deleted successfully", ToastKind::Success);
                self.refresh();
            }
            ActionResult::Deleted(_, Err(e)) => {
                self.notify(format!("Failed to delete employee: {}", e), ToastKind::Error);
            }
        }
    }

    pub fn next(&mut self) {
        if self.employees.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => (i + 1) % self.employees.len(),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.employees.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.employees.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.table_state
            .selected()
            .and_then(|i| self.employees.get(i))
    }

    // Detail view

    pub fn open_detail_view(&mut self) {
        if let Some(id) = self.selected_employee().map(|e| e.id) {
            self.send_action(Action::LoadDetail(id));
        }
    }

    pub fn close_detail_view(&mut self) {
        self.detail_view = None;
    }

    // Form

    pub fn open_create_form(&mut self) {
        self.form = Some(EmployeeForm::new());
    }

    /// Edits the record shown in the detail view, or the selected row.
    pub fn open_edit_form(&mut self) {
        let employee = self
            .detail_view
            .take()
            .or_else(|| self.selected_employee().cloned());
        if let Some(employee) = employee {
            self.form = Some(EmployeeForm::edit(&employee));
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn submit_form(&mut self) {
        if self.form.is_none() {
            return;
        }
        if self.busy {
            // Form stays open so the user can retry
            self.notify(format!("Operation failed: {}", BUSY_MESSAGE), ToastKind::Error);
            return;
        }
        let Some(form) = &mut self.form else {
            return;
        };
        let Some(fields) = form.validate() else {
            return;
        };
        form.submitting = true;
        let action = match form.mode {
            FormMode::Create => Action::Create(fields),
            FormMode::Edit(id) => Action::Update { id, fields },
        };
        self.send_action(action);
    }

    // Delete

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_employee().map(|e| e.id) {
            self.confirm_delete = Some(id);
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.confirm_delete.take() else {
            return;
        };
        if self.busy {
            self.notify(
                format!("Failed to delete employee: {}", BUSY_MESSAGE),
                ToastKind::Error,
            );
            return;
        }
        self.send_action(Action::Delete(id));
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = None;
    }
}
