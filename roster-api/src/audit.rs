//! Audit trail for employee record changes.
//!
//! Events go to the `audit` tracing target so they can be routed separately
//! with `RUST_LOG=audit=info`.

use std::sync::Arc;

use crate::model::Employee;

/// Audit logger for employee lifecycle events
pub struct EmployeeAuditLogger {
    enabled: bool,
}

impl EmployeeAuditLogger {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn new_noop() -> Self {
        Self { enabled: false }
    }

    fn log(&self, message: String, employee_id: i64) {
        if !self.enabled {
            return;
        }
        tracing::info!(target: "audit", objects = ?[format!("employee-{}", employee_id)], "{}", message);
    }

    pub fn employee_created(&self, employee: &Employee) {
        self.log(
            format!(
                "Employee created: {} ({}) <{}>",
                employee.name, employee.id, employee.email
            ),
            employee.id,
        );
    }

    pub fn employee_updated(&self, employee: &Employee, fields: &[&str]) {
        self.log(
            format!(
                "Employee updated: {} ({}) fields [{}]",
                employee.name,
                employee.id,
                fields.join(", ")
            ),
            employee.id,
        );
    }

    pub fn employee_deleted(&self, employee_id: i64) {
        self.log(format!("Employee deleted: {}", employee_id), employee_id);
    }
}

impl Default for EmployeeAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_audit_logger() -> Arc<EmployeeAuditLogger> {
    Arc::new(EmployeeAuditLogger::new())
}
