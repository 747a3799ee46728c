//! Employee record service.
//!
//! Sits between the REST handlers and the store: parses identifiers, applies
//! validation, runs the five record operations and reports outcomes as
//! [`ServiceError`] variants that map one-to-one onto response codes.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::audit::EmployeeAuditLogger;
use crate::model::{Employee, EmployeeFields, EmployeePatch};
use crate::store::{EmployeeStore, StoreError};
use crate::validation::{self, Field, ValidationErrors};

/// Outcome of a failed service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing, empty or malformed field.
    #[error("invalid input: {0}")]
    InvalidInput(ValidationErrors),

    /// Path identifier is not an integer.
    #[error("invalid id: {0:?}")]
    InvalidId(String),

    /// No employee with this id.
    #[error("employee {0} not found")]
    NotFound(i64),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Parse a client-supplied identifier.
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ServiceError::InvalidId(raw.to_string()))
}

pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    audit: Arc<EmployeeAuditLogger>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>, audit: Arc<EmployeeAuditLogger>) -> Self {
        Self { store, audit }
    }

    pub async fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Employee> {
        let id = parse_id(raw_id)?;
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn create(&self, fields: EmployeeFields) -> Result<Employee> {
        let new = validation::validate_new(&fields).map_err(ServiceError::InvalidInput)?;
        let employee = self.store.insert(new).await?;
        self.audit.employee_created(&employee);
        Ok(employee)
    }

    /// Applies the non-empty provided fields; everything else is kept.
    pub async fn update(&self, raw_id: &str, fields: EmployeeFields) -> Result<Employee> {
        let id = parse_id(raw_id)?;
        if self.store.get(id).await?.is_none() {
            return Err(ServiceError::NotFound(id));
        }

        let patch = EmployeePatch::from_fields(&fields);
        validation::validate_patch(&patch).map_err(ServiceError::InvalidInput)?;
        if patch.is_empty() {
            debug!(id, "Update with no applicable fields");
        }
        let changed = changed_fields(&patch);

        let employee = self
            .store
            .update(id, patch)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        self.audit.employee_updated(&employee, &changed);
        Ok(employee)
    }

    pub async fn delete(&self, raw_id: &str) -> Result<()> {
        let id = parse_id(raw_id)?;
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        self.audit.employee_deleted(id);
        Ok(())
    }
}

fn changed_fields(patch: &EmployeePatch) -> Vec<&'static str> {
    [
        (Field::Name, patch.name.is_some()),
        (Field::Email, patch.email.is_some()),
        (Field::Designation, patch.designation.is_some()),
        (Field::Department, patch.department_id.is_some()),
    ]
    .into_iter()
    .filter_map(|(field, set)| set.then_some(field.as_str()))
    .collect()
}
