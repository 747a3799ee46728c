//! Field validation for employee records.
//!
//! Pure functions; used by the service before writes and by clients before
//! submitting a form.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{EmployeeFields, EmployeePatch, NewEmployee};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid regex pattern"));

/// Validated employee field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Designation,
    Department,
}

impl Field {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Designation => "designation",
            Field::Department => "departmentId",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Designation => "Designation",
            Field::Department => "Department",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Missing, or empty after trimming.
    Required,
    /// Present but malformed.
    Invalid,
}

/// Field name to error mapping. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Human-readable message for one field, e.g. "Email is invalid".
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| match e {
            FieldError::Required => format!("{} is required", field.label()),
            FieldError::Invalid => format!("{} is invalid", field.label()),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Single-line summary for API error bodies.
    pub fn summary(&self) -> String {
        if self.0.values().any(|e| *e == FieldError::Required) {
            return "All fields are required".to_string();
        }
        self.0
            .keys()
            .filter_map(|f| self.message(*f))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.keys().filter_map(|k| self.message(*k)).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn required(value: Option<String>, field: Field, errors: &mut ValidationErrors) -> Option<String> {
    let value = value.filter(|s| !s.trim().is_empty());
    if value.is_none() {
        errors.add(field, FieldError::Required);
    }
    value
}

/// Validates a full record for creation and returns it trimmed.
pub fn validate_new(fields: &EmployeeFields) -> Result<NewEmployee, ValidationErrors> {
    let fields = fields.trimmed();
    let mut errors = ValidationErrors::new();

    let name = required(fields.name, Field::Name, &mut errors);
    let email = required(fields.email, Field::Email, &mut errors);
    if let Some(email) = &email
        && !is_valid_email(email)
    {
        errors.add(Field::Email, FieldError::Invalid);
    }
    let designation = required(fields.designation, Field::Designation, &mut errors);
    // Zero is treated as "not selected".
    let department_id = fields.department_id.filter(|id| *id != 0);
    if department_id.is_none() {
        errors.add(Field::Department, FieldError::Required);
    }

    match (name, email, designation, department_id) {
        (Some(name), Some(email), Some(designation), Some(department_id)) if errors.is_empty() => {
            Ok(NewEmployee {
                name,
                email,
                designation,
                department_id,
            })
        }
        _ => Err(errors),
    }
}

/// Validates the fields a patch would change. Absent fields are not checked.
pub fn validate_patch(patch: &EmployeePatch) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Some(email) = &patch.email
        && !is_valid_email(email)
    {
        errors.add(Field::Email, FieldError::Invalid);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, designation: &str, dept: Option<i64>) -> EmployeeFields {
        EmployeeFields {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            designation: Some(designation.to_string()),
            department_id: dept,
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("alice.smith@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_new_trims() {
        let new = validate_new(&fields("  Alice Smith ", " alice@co.com", "Engineer  ", Some(1)))
            .unwrap();
        assert_eq!(new.name, "Alice Smith");
        assert_eq!(new.email, "alice@co.com");
        assert_eq!(new.designation, "Engineer");
        assert_eq!(new.department_id, 1);
    }

    #[test]
    fn test_validate_new_reports_every_field() {
        let errors = validate_new(&EmployeeFields::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Designation), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Department), Some(FieldError::Required));
        assert_eq!(errors.summary(), "All fields are required");
    }

    #[test]
    fn test_validate_new_whitespace_is_empty() {
        let errors = validate_new(&fields("   ", "a@b.co", "\t", Some(2))).unwrap_err();
        assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
        assert_eq!(
            errors.message(Field::Designation).as_deref(),
            Some("Designation is required")
        );
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_validate_new_invalid_email() {
        let errors = validate_new(&fields("Bob", "not-an-email", "Clerk", Some(3))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some(FieldError::Invalid));
        assert_eq!(errors.summary(), "Email is invalid");
        assert_eq!(errors.to_string(), "Email is invalid");
    }

    #[test]
    fn test_validate_new_department_out_of_range_is_accepted() {
        let new = validate_new(&fields("Bob", "bob@co.com", "Clerk", Some(42))).unwrap();
        assert_eq!(new.department_id, 42);
    }

    #[test]
    fn test_validate_new_department_zero_is_missing() {
        let errors = validate_new(&fields("Bob", "bob@co.com", "Clerk", Some(0))).unwrap_err();
        assert_eq!(errors.get(Field::Department), Some(FieldError::Required));
    }

    #[test]
    fn test_validate_patch_only_checks_provided() {
        assert!(validate_patch(&EmployeePatch::default()).is_ok());

        let patch = EmployeePatch {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldError::Invalid));

        let patch = EmployeePatch {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_ok());
    }
}
