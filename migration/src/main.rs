use clap::Parser;
use migration::{Command, MigrationRunner, database_url_from_env};
use sea_orm_migration::sea_orm::Database;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "migration", about = "Apply or roll back database migrations")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn fatal(msg: &str, err: impl std::fmt::Display) -> ! {
    error!("{}: {}", msg, err);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=error")),
        )
        .init();

    println!("--Migrate Start--");

    if let Err(e) = dotenvy::dotenv() {
        warn!("Error loading .env file: {}", e);
    }

    let args = Args::parse();

    let Some(db_url) = database_url_from_env() else {
        fatal("Failed to create migrate instance", "POSTGRES_URI is not set");
    };

    let db = Database::connect(&db_url)
        .await
        .unwrap_or_else(|e| fatal("Failed to create migrate instance", e));

    if let Err(e) = MigrationRunner::new(&db).run(&args.command).await {
        fatal("Migration failed", e);
    }

    println!("--Migrate Complete--");
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use migration::{DownTarget, UpTarget};

    use super::*;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_both_directions() {
        let args = Args::try_parse_from(["migration", "up", "latest"]).unwrap();
        assert_eq!(args.command, Command::Up { target: UpTarget::Latest });

        let args = Args::try_parse_from(["migration", "down", "0"]).unwrap();
        assert_eq!(args.command, Command::Down { target: DownTarget::All });
    }

    #[test]
    fn rejects_missing_target_and_unknown_command() {
        assert!(Args::try_parse_from(["migration", "up"]).is_err());
        assert!(Args::try_parse_from(["migration", "sideways", "1"]).is_err());
        assert!(Args::try_parse_from(["migration", "down", "latest"]).is_err());
    }
}
