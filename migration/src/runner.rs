use std::collections::HashSet;

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseConnection;
use tracing::info;

use crate::Migrator;
use crate::command::Command;
use crate::error::MigrateError;
use crate::plan::{Plan, plan, version_of};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationEntry {
    pub version: u64,
    pub name: String,
    pub applied: bool,
}

/// Snapshot of the migration table against the migrations compiled into [`Migrator`].
#[derive(Debug, Clone)]
pub struct MigrationState {
    pub entries: Vec<MigrationEntry>,
    /// Number of applied entries, wherever they sit in `entries`.
    pub applied: usize,
}

impl MigrationState {
    pub fn versions(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.version).collect()
    }

    /// Version of the newest applied migration.
    pub fn current(&self) -> Option<u64> {
        self.entries.iter().rev().find(|e| e.applied).map(|e| e.version)
    }

    /// First pending migration stamped below an applied one, if any.
    pub fn gap(&self) -> Option<u64> {
        let current = self.current()?;
        self.entries
            .iter()
            .find(|e| !e.applied && e.version < current)
            .map(|e| e.version)
    }

    pub fn pending(&self) -> usize {
        self.entries.len() - self.applied
    }

    fn log_before(&self) {
        match self.current() {
            Some(version) => info!("Current migration version before operation: {}", version),
            None => info!("No migrations have been applied yet"),
        }
    }

    fn log_after(&self) {
        match self.current() {
            Some(version) => info!("Current migration version after operation: {}", version),
            None => info!("No migrations are applied"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub plan: Plan,
    pub before: Option<u64>,
    pub after: Option<u64>,
}

pub struct MigrationRunner<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn state(&self) -> Result<MigrationState, MigrateError> {
        let applied_names: HashSet<String> = Migrator::get_applied_migrations(self.db)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let entries = Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                Ok(MigrationEntry {
                    version: version_of(&name)?,
                    applied: applied_names.contains(&name),
                    name,
                })
            })
            .collect::<Result<Vec<_>, MigrateError>>()?;

        let applied = entries.iter().filter(|e| e.applied).count();

        Ok(MigrationState { entries, applied })
    }

    pub async fn run(&self, command: &Command) -> Result<Report, MigrateError> {
        let before = self.state().await?;
        before.log_before();

        // Version targets assume the applied migrations form a prefix of the list.
        if let Some(pending) = before.gap().filter(|_| command.targets_version()) {
            return Err(MigrateError::OutOfOrder {
                pending,
                current: before.current().unwrap_or(0),
            });
        }

        let plan = plan(&before.versions(), before.applied, command)?;

        info!("{}", command.action_message());
        match plan {
            Plan::NoChange => info!("No change: {}", command.no_change_message()),
            Plan::Up(steps) => {
                Migrator::up(self.db, Some(steps)).await?;
                info!("{}", command.success_message());
            }
            Plan::Down(steps) => {
                Migrator::down(self.db, Some(steps)).await?;
                info!("{}", command.success_message());
            }
        }

        let after = self.state().await?;
        after.log_after();

        Ok(Report {
            plan,
            before: before.current(),
            after: after.current(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(flags: &[bool]) -> MigrationState {
        let entries: Vec<MigrationEntry> = flags
            .iter()
            .enumerate()
            .map(|(idx, applied)| MigrationEntry {
                version: (idx as u64 + 1) * 100,
                name: format!("m{}_000000_step", idx + 1),
                applied: *applied,
            })
            .collect();
        let applied = entries.iter().filter(|e| e.applied).count();
        MigrationState { entries, applied }
    }

    #[test]
    fn contiguous_state_has_no_gap() {
        let s = state(&[true, true, false]);
        assert_eq!(s.current(), Some(200));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.gap(), None);
        assert_eq!(state(&[false, false]).gap(), None);
    }

    #[test]
    fn gap_reports_first_pending_below_current() {
        let s = state(&[false, true, false]);
        assert_eq!(s.applied, 1);
        assert_eq!(s.current(), Some(200));
        assert_eq!(s.gap(), Some(100));
    }
}
