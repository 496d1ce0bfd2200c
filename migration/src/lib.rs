pub use sea_orm_migration::prelude::*;

pub mod command;
pub mod error;
pub mod plan;
pub mod runner;

mod m20250601_090000_create_users_table;
mod m20250601_091500_create_user_sessions_table;

pub use command::{Command, DownTarget, UpTarget};
pub use error::MigrateError;
pub use plan::Plan;
pub use runner::{MigrationEntry, MigrationRunner, MigrationState, Report};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_090000_create_users_table::Migration),
            Box::new(m20250601_091500_create_user_sessions_table::Migration),
        ]
    }
}

/// `POSTGRES_URI`, falling back to `DATABASE_URL`.
pub fn database_url_from_env() -> Option<String> {
    ["POSTGRES_URI", "DATABASE_URL"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|url| !url.is_empty())
}
