use dotenv::dotenv;
use std::process;
use log::{error, info};

use employees_backend::config::Config;
use employees_backend::db;
use employees_backend::errors::AppError;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        error!("{}", err);
        process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let pool = db::create_pool(&config).await?;

    db::ensure_schema(&pool).await?;

    info!("Employee storage initialised");
    pool.close().await;
    Ok(())
}
