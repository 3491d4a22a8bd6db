//! Database migration command.

use vidhub_core::config::AppConfig;
use vidhub_core::error::AppError;

use crate::output;

/// Apply all pending migrations.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    println!("Running database migrations on {}...", config.database.path);
    let db = super::open_database(config).await?;
    db.close().await;
    output::print_success("All migrations applied successfully.");
    Ok(())
}
