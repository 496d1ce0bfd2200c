use std::fmt;
use std::str::FromStr;

use clap::Subcommand;

use crate::error::MigrateError;

/// Where `up` should take the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpTarget {
    Latest,
    Version(u64),
}

/// Where `down` should take the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownTarget {
    /// Roll back every applied migration (`down 0`).
    All,
    /// Roll back the last applied migration.
    Prev,
    Version(u64),
}

fn parse_version(s: &str) -> Result<u64, MigrateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MigrateError::InvalidVersion(s.to_string()));
    }
    s.parse::<u64>()
        .map_err(|_| MigrateError::InvalidVersion(s.to_string()))
}

impl FromStr for UpTarget {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            other => parse_version(other).map(Self::Version),
        }
    }
}

impl FromStr for DownTarget {
    type Err = MigrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            other => match parse_version(other)? {
                0 => Ok(Self::All),
                v => Ok(Self::Version(v)),
            },
        }
    }
}

impl fmt::Display for UpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Version(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for DownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("0"),
            Self::Prev => f.write_str("prev"),
            Self::Version(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply migrations up to `latest` or a specific version
    Up {
        #[arg(value_name = "latest|VERSION")]
        target: UpTarget,
    },

    /// Roll back all migrations (`0`), the last one (`prev`) or down to a version
    Down {
        #[arg(value_name = "0|prev|VERSION")]
        target: DownTarget,
    },
}

impl Command {
    /// True for `up <version>` and `down <version>`.
    pub fn targets_version(&self) -> bool {
        matches!(
            self,
            Self::Up { target: UpTarget::Version(_) } | Self::Down { target: DownTarget::Version(_) }
        )
    }

    pub fn action_message(&self) -> String {
        match self {
            Self::Up { target: UpTarget::Latest } => {
                "Migrating up to the latest version...".to_string()
            }
            Self::Up { target: UpTarget::Version(v) } => format!("Migrating up to version {v}..."),
            Self::Down { target: DownTarget::All } => "Rolling back all migrations...".to_string(),
            Self::Down { target: DownTarget::Prev } => "Rolling back one migration...".to_string(),
            Self::Down { target: DownTarget::Version(v) } => {
                format!("Rolling back to version {v}...")
            }
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Self::Up { target: UpTarget::Latest } => {
                "Successfully migrated to the latest version".to_string()
            }
            Self::Up { target: UpTarget::Version(v) } => {
                format!("Successfully migrated up to version {v}")
            }
            Self::Down { target: DownTarget::All } => {
                "Successfully rolled back all migrations".to_string()
            }
            Self::Down { target: DownTarget::Prev } => {
                "Successfully rolled back one migration".to_string()
            }
            Self::Down { target: DownTarget::Version(v) } => {
                format!("Successfully rolled back to version {v}")
            }
        }
    }

    pub fn no_change_message(&self) -> String {
        match self {
            Self::Up { target: UpTarget::Latest } => {
                "Database already at the latest version".to_string()
            }
            Self::Up { target: UpTarget::Version(v) }
            | Self::Down { target: DownTarget::Version(v) } => {
                format!("Database already at version {v}")
            }
            Self::Down { .. } => "No migrations to roll back".to_string(),
        }
    }
}
