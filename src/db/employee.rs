//! Row mapping for [`Employee`] against `springboot_schema.employees`.

use log::debug;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::Employee;

pub const SCHEMA: &str = "springboot_schema";
pub const TABLE: &str = "employees";
pub const COLUMNS: [&str; 4] = ["id", "first_name", "last_name", "email"];

pub fn qualified_table() -> String {
    format!("{}.{}", SCHEMA, TABLE)
}

pub fn create_schema_sql() -> String {
    format!("CREATE SCHEMA IF NOT EXISTS {}", SCHEMA)
}

pub fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY, \
         first_name TEXT NULL, \
         last_name TEXT NULL, \
         email TEXT NULL)",
        qualified_table()
    )
}

// id is left to the identity column
pub fn insert_sql() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ($1, $2, $3) RETURNING id",
        qualified_table(),
        COLUMNS[1..].join(", ")
    )
}

pub fn select_by_id_sql() -> String {
    format!(
        "SELECT {} FROM {} WHERE id = $1",
        COLUMNS.join(", "),
        qualified_table()
    )
}

/// Inserts `employee` and stores the generated id back into it.
///
/// A record that already carries an id is refused without touching the pool.
pub async fn insert(pool: &PgPool, employee: &mut Employee) -> Result<i64, AppError> {
    if let Some(id) = employee.id() {
        return Err(AppError::AlreadyPersisted(id));
    }

    let sql = insert_sql();
    debug!("{} -- {}", sql, employee);

    let id: i64 = sqlx::query_scalar(&sql)
        .bind(employee.first_name())
        .bind(employee.last_name())
        .bind(employee.email())
        .fetch_one(pool)
        .await?;

    employee.set_id(Some(id));
    debug!("Inserted {}", employee);
    Ok(id)
}

pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<Employee>, AppError> {
    let sql = select_by_id_sql();
    debug!("{} -- id={}", sql, id);

    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(employee)
}
