//! `migrate` command: manual schema management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Unlike `serve`, nothing is applied on connect
    let db = Database::connect_without_migrations(&config.database_url).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Rolled back the latest migration");
        }
        MigrateAction::Status => print_status(&db).await?,
        MigrateAction::Fresh { force } => {
            if !force {
                return Err(AppError::bad_request(
                    "`migrate fresh` drops all marketplace data; pass --force to confirm",
                ));
            }
            tracing::warn!("Dropping all tables and re-running migrations");
            db.fresh_migrations().await?;
            tracing::info!("Schema recreated");
        }
    }

    Ok(())
}

async fn print_status(db: &Database) -> AppResult<()> {
    let migrations = db.migration_status().await?;
    let pending = migrations.iter().filter(|(_, applied)| !applied).count();

    for (name, applied) in &migrations {
        println!("{:<8} {}", if *applied { "applied" } else { "pending" }, name);
    }
    tracing::info!(total = migrations.len(), pending, "Migration status");

    Ok(())
}
