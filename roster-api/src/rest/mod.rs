//! REST surface for the employee service.

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState};
pub use routes::{ApiDoc, create_router};
