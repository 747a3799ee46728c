pub mod audit;
pub mod department;
pub mod model;
pub mod rest;
pub mod service;
pub mod store;
pub mod validation;

pub use audit::{EmployeeAuditLogger, create_audit_logger};
pub use department::{Department, DepartmentInfo, department_name};
pub use model::{Employee, EmployeeFields, EmployeePatch, NewEmployee};
pub use service::{EmployeeService, ServiceError};
pub use store::{EmployeeStore, SqliteStore, StoreError};
pub use validation::{Field, FieldError, ValidationErrors};
