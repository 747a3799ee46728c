use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster Employee API",
        version = "0.1.0",
        description = "REST API for managing employee records.",
        license(name = "MIT")
    ),
    tags(
        (name = "system", description = "System information"),
        (name = "departments", description = "Fixed department table"),
        (name = "employees", description = "Employee CRUD operations")
    ),
    paths(
        handlers::get_version,
        handlers::list_departments,
        handlers::list_employees,
        handlers::get_employee,
        handlers::create_employee,
        handlers::update_employee,
        handlers::delete_employee,
    ),
    components(schemas(
        handlers::VersionInfo,
        handlers::ApiError,
        handlers::DeleteEmployeeResponse,
        crate::department::DepartmentInfo,
        crate::model::Employee,
        crate::model::EmployeeFields,
    ))
)]
pub struct ApiDoc;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // System
        .route("/version", get(handlers::get_version))
        .route("/departments", get(handlers::list_departments))
        // Employees
        .route("/employees", get(handlers::list_employees))
        .route("/employees", post(handlers::create_employee))
        .route("/employees/{id}", get(handlers::get_employee))
        .route("/employees/{id}", put(handlers::update_employee))
        .route("/employees/{id}", delete(handlers::delete_employee));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(handlers::root))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
