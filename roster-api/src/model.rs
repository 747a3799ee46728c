//! Employee record types shared by the store, the service and the REST layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Employee resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice Smith")]
    pub name: String,
    #[schema(example = "alice@co.com")]
    pub email: String,
    /// Free-text job title
    #[schema(example = "Engineer")]
    pub designation: String,
    /// Department id (1-5 are known departments)
    #[schema(example = 1)]
    pub department_id: i64,
}

/// Employee fields as submitted by a client.
///
/// Used for both create (all fields required) and update (any subset).
/// Values of the wrong JSON type read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub designation: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub department_id: Option<i64>,
}

impl EmployeeFields {
    /// Copy with surrounding whitespace removed from all string fields.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.as_deref().map(|s| s.trim().to_string()),
            email: self.email.as_deref().map(|s| s.trim().to_string()),
            designation: self.designation.as_deref().map(|s| s.trim().to_string()),
            department_id: self.department_id,
        }
    }
}

/// A validated, trimmed record ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub department_id: i64,
}

/// Fields to change on an existing record. `None` leaves the column as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub department_id: Option<i64>,
}

impl EmployeePatch {
    /// Builds a patch from client fields. Strings are trimmed and dropped if
    /// empty, so an empty value can never overwrite a stored one.
    pub fn from_fields(fields: &EmployeeFields) -> Self {
        let keep = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            name: keep(&fields.name),
            email: keep(&fields.email),
            designation: keep(&fields.designation),
            department_id: fields.department_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.designation.is_none()
            && self.department_id.is_none()
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        })
    }
}
