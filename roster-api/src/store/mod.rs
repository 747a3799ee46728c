//! Record store for employee rows.
//!
//! # Architecture
//!
//! ```text
//! EmployeeService → Arc<dyn EmployeeStore>
//!                         ↓
//!                   SqliteStore (sqlx pool, single `employee` table)
//! ```
//!
//! The service only sees domain types (`Employee`, `NewEmployee`,
//! `EmployeePatch`); SQL stays behind the trait.
//!
//! # Usage
//!
//! ```ignore
//! use roster_api::store::{EmployeeStore, SqliteStore};
//!
//! let store = SqliteStore::open(Path::new("/var/lib/roster")).await?;
//! let employee = store.insert(new_employee).await?;
//! let all = store.list().await?;
//! ```

mod error;
mod sqlite;
mod traits;

pub use error::{Result, StoreError};
pub use sqlite::SqliteStore;
pub use traits::EmployeeStore;
