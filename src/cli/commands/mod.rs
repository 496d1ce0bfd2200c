pub mod cmd_config;
pub mod cmd_migrate;
pub mod cmd_serve;
pub mod cmd_version;

use clap::Subcommand;

use crate::cli::commands::cmd_migrate::MigrateCommands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Apply or roll back database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },

    /// Print the effective configuration with secrets masked
    Config,

    /// Print version
    Version,
}

pub trait ExitOnErr<T> {
    fn exit_on_err(self, msg: &str) -> T;
}

impl<T, E: std::fmt::Display> ExitOnErr<T> for Result<T, E> {
    fn exit_on_err(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{}", failure_line(msg, &e));
                std::process::exit(1);
            }
        }
    }
}

fn failure_line(msg: &str, err: &impl std::fmt::Display) -> String {
    format!("❌ {}: {}", msg, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_line_names_context_and_cause() {
        let err = migration::MigrateError::VersionNotFound(42);
        assert_eq!(
            failure_line("Migration failed", &err),
            "❌ Migration failed: Migration version 42 not found"
        );
    }

    #[test]
    fn test_exit_on_err_passes_ok_through() {
        let ok: Result<u8, String> = Ok(7);
        assert_eq!(ok.exit_on_err("unused"), 7);
    }
}
