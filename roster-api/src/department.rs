//! Fixed department table.
//!
//! Departments are not stored; an employee's `departmentId` is looked up here.
//! Ids outside the table are accepted on write and display as
//! [`UNKNOWN_DEPARTMENT`].

use serde::Serialize;
use utoipa::ToSchema;

/// Display name for ids that are not in the table.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown Department";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Department {
    #[default]
    Engineering,
    Marketing,
    Sales,
    HumanResources,
    CustomerSupport,
}

impl Department {
    /// All departments in id order.
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::HumanResources,
        Department::CustomerSupport,
    ];

    pub fn id(self) -> i64 {
        match self {
            Department::Engineering => 1,
            Department::Marketing => 2,
            Department::Sales => 3,
            Department::HumanResources => 4,
            Department::CustomerSupport => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::HumanResources => "Human Resources",
            Department::CustomerSupport => "Customer Support",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Next department in id order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous department in id order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name for a stored `departmentId`.
pub fn department_name(id: i64) -> &'static str {
    Department::from_id(id)
        .map(Department::name)
        .unwrap_or(UNKNOWN_DEPARTMENT)
}

/// Department entry as served by `GET /api/departments`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentInfo {
    pub id: i64,
    pub name: String,
}

impl From<Department> for DepartmentInfo {
    fn from(d: Department) -> Self {
        Self {
            id: d.id(),
            name: d.name().to_string(),
        }
    }
}
