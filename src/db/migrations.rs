use migration::{Command, MigrateError, MigrationRunner, MigrationState, Report, UpTarget};
use sea_orm::DatabaseConnection;

/// Runs `command`; failures are returned for the caller to report.
pub async fn run(db: &DatabaseConnection, command: &Command) -> Result<Report, MigrateError> {
    MigrationRunner::new(db).run(command).await
}

/// Applies every pending migration.
pub async fn up(db: &DatabaseConnection) -> Result<Report, MigrateError> {
    run(
        db,
        &Command::Up {
            target: UpTarget::Latest,
        },
    )
    .await
}

pub async fn status(db: &DatabaseConnection) -> Result<MigrationState, MigrateError> {
    MigrationRunner::new(db).state().await
}
