//! EmployeeStore trait definition.

use async_trait::async_trait;

use crate::model::{Employee, EmployeePatch, NewEmployee};

use super::error::Result;

/// Durable keyed storage of employee records.
///
/// Identifiers are assigned by the store on insert and never reissued.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// List all employees in id order.
    async fn list(&self) -> Result<Vec<Employee>>;

    /// Get an employee by ID.
    async fn get(&self, id: i64) -> Result<Option<Employee>>;

    /// Insert a new employee and return it with its assigned ID.
    async fn insert(&self, employee: NewEmployee) -> Result<Employee>;

    /// Apply a partial update. Returns `None` if no employee has this ID.
    async fn update(&self, id: i64, patch: EmployeePatch) -> Result<Option<Employee>>;

    /// Delete an employee. Returns `false` if no employee has this ID.
    async fn delete(&self, id: i64) -> Result<bool>;
}
