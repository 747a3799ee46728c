use std::path::Path;

use async_trait::async_trait;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};

use crate::model::{Employee, EmployeePatch, NewEmployee};

use super::error::{Result, StoreError};
use super::traits::EmployeeStore;

/// SQLite-backed employee store
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) `roster.db` in `data_dir`.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        let db_path = data_dir.join("roster.db");
        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        Self::with_pool(pool).await
    }

    /// Ephemeral database, lost when the store is dropped.
    pub async fn in_memory() -> Result<Self> {
        // Every in-memory connection is a separate database, so pin exactly one.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        // AUTOINCREMENT keeps ids of deleted rows from being handed out again.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employee (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                designation TEXT NOT NULL,
                department_id INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl EmployeeStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, designation, department_id
            FROM employee ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_employee).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, designation, department_id
            FROM employee WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_employee))
    }

    async fn insert(&self, employee: NewEmployee) -> Result<Employee> {
        let result = sqlx::query(
            r#"
            INSERT INTO employee (name, email, designation, department_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.designation)
        .bind(employee.department_id)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name: employee.name,
            email: employee.email,
            designation: employee.designation,
            department_id: employee.department_id,
        })
    }

    async fn update(&self, id: i64, patch: EmployeePatch) -> Result<Option<Employee>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE employee SET
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                designation = COALESCE(?, designation),
                department_id = COALESCE(?, department_id)
            WHERE id = ?
            "#,
        )
        .bind(patch.name)
        .bind(patch.email)
        .bind(patch.designation)
        .bind(patch.department_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let row = sqlx::query(
            r#"
            SELECT id, name, email, designation, department_id
            FROM employee WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::Internal(format!("employee {} missing after update", id)))?;

        tx.commit().await?;
        Ok(Some(row_to_employee(&row)))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_employee(row: &SqliteRow) -> Employee {
    Employee {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        designation: row.get("designation"),
        department_id: row.get("department_id"),
    }
}
