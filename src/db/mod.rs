pub mod employee;

use log::{debug, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::AppError;

pub async fn create_pool(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    info!("Connected to the database (max {} connections)", config.max_connections);
    Ok(pool)
}

/// Creates the schema and the employees table when they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    for statement in [employee::create_schema_sql(), employee::create_table_sql()] {
        debug!("{}", statement);
        sqlx::query(&statement).execute(pool).await?;
    }

    info!("Table {} is ready", employee::qualified_table());
    Ok(())
}
