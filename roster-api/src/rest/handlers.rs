use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::department::{Department, DepartmentInfo};
use crate::model::{Employee, EmployeeFields};
use crate::service::{EmployeeService, ServiceError};

/// Shared application state
pub struct AppState {
    pub service: EmployeeService,
}

/// API error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub message: String,
    #[serde(skip)]
    pub code: u16,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            400 => StatusCode::BAD_REQUEST,
            404 => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidInput(errors) => ApiError::new(400, errors.summary()),
            ServiceError::InvalidId(_) => ApiError::new(400, "Invalid ID"),
            ServiceError::NotFound(_) => ApiError::new(404, "Employee not found"),
            ServiceError::Store(e) => {
                // Detail stays in the server log.
                error!(error = %e, "Store operation failed");
                ApiError::new(500, "Server error")
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::new(400, "Invalid ID")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            400,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

// === System ===

/// Liveness text
pub async fn root() -> &'static str {
    "Employee Management API is running"
}

/// Version information
#[derive(Serialize, ToSchema)]
pub struct VersionInfo {
    pub version: String,
}

/// Get service version
#[utoipa::path(
    get,
    path = "/api/version",
    responses(
        (status = 200, description = "Service version", body = VersionInfo)
    ),
    tag = "system"
)]
pub async fn get_version() -> Json<VersionInfo> {
    Json(VersionInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the fixed department table
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentInfo>)
    ),
    tag = "departments"
)]
pub async fn list_departments() -> Json<Vec<DepartmentInfo>> {
    Json(Department::ALL.into_iter().map(Into::into).collect())
}

// === Employee CRUD ===

/// Confirmation returned by delete
#[derive(Serialize, ToSchema)]
pub struct DeleteEmployeeResponse {
    pub message: String,
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, description = "Invalid ID", body = ApiError),
        (status = 404, description = "Employee not found", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.service.get(&id).await?))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = EmployeeFields,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing, empty or invalid field", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(fields) = payload?;
    let employee = state.service.create(fields).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Update an employee
///
/// Only provided, non-empty fields are applied. Empty strings are ignored,
/// so a field cannot be cleared.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = EmployeeFields,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid ID or field", body = ApiError),
        (status = 404, description = "Employee not found", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<EmployeeFields>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let Path(id) = id?;
    let Json(fields) = payload?;
    Ok(Json(state.service.update(&id, fields).await?))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteEmployeeResponse),
        (status = 400, description = "Invalid ID", body = ApiError),
        (status = 404, description = "Employee not found", body = ApiError),
        (status = 500, description = "Store error", body = ApiError)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteEmployeeResponse>, ApiError> {
    let Path(id) = id?;
    state.service.delete(&id).await?;
    Ok(Json(DeleteEmployeeResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}
