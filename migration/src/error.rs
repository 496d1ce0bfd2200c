use sea_orm_migration::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Invalid target version: {0}")]
    InvalidVersion(String),

    #[error("Migration version {0} not found")]
    VersionNotFound(u64),

    #[error(
        "Target version ({target}) must be less than current version ({current}) for down migration"
    )]
    TargetNotBelowCurrent { target: u64, current: u64 },

    #[error(
        "Migration {pending} is pending below applied version {current}; use `up latest` or `down 0|prev`"
    )]
    OutOfOrder { pending: u64, current: u64 },

    #[error("Migration '{0}' does not start with a version stamp")]
    MalformedName(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}
