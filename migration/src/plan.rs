use crate::command::{Command, DownTarget, UpTarget};
use crate::error::MigrateError;

/// What the migration library has to do to satisfy a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    NoChange,
    Up(u32),
    Down(u32),
}

/// Extracts the numeric version from a migration name such as
/// `m20250601_090000_create_users_table` (yields `20250601090000`).
pub fn version_of(name: &str) -> Result<u64, MigrateError> {
    let malformed = || MigrateError::MalformedName(name.to_string());

    let mut parts = name.strip_prefix('m').ok_or_else(malformed)?.splitn(3, '_');
    let date = parts.next().ok_or_else(malformed)?;
    let time = parts.next().ok_or_else(malformed)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(date) || !all_digits(time) {
        return Err(malformed());
    }

    format!("{date}{time}").parse().map_err(|_| malformed())
}

/// Version of the last applied migration. `applied` counts from the start of `versions`.
pub fn current_version(versions: &[u64], applied: usize) -> Option<u64> {
    applied
        .checked_sub(1)
        .and_then(|idx| versions.get(idx))
        .copied()
}

/// Number of migrations that must be applied for `version` to be the current one.
fn applied_count_for(versions: &[u64], version: u64) -> Result<usize, MigrateError> {
    versions
        .iter()
        .position(|v| *v == version)
        .map(|idx| idx + 1)
        .ok_or(MigrateError::VersionNotFound(version))
}

fn towards(applied: usize, wanted: usize) -> Plan {
    if wanted > applied {
        Plan::Up((wanted - applied) as u32)
    } else if wanted < applied {
        Plan::Down((applied - wanted) as u32)
    } else {
        Plan::NoChange
    }
}

pub fn plan(versions: &[u64], applied: usize, command: &Command) -> Result<Plan, MigrateError> {
    let applied = applied.min(versions.len());

    match command {
        Command::Up {
            target: UpTarget::Latest,
        } => Ok(towards(applied, versions.len())),

        Command::Up {
            target: UpTarget::Version(v),
        } => Ok(towards(applied, applied_count_for(versions, *v)?)),

        Command::Down {
            target: DownTarget::All,
        } => Ok(towards(applied, 0)),

        Command::Down {
            target: DownTarget::Prev,
        } => Ok(towards(applied, applied.saturating_sub(1))),

        Command::Down {
            target: DownTarget::Version(v),
        } => {
            let current = current_version(versions, applied).unwrap_or(0);
            if *v >= current {
                return Err(MigrateError::TargetNotBelowCurrent {
                    target: *v,
                    current,
                });
            }
            Ok(towards(applied, applied_count_for(versions, *v)?))
        }
    }
}
