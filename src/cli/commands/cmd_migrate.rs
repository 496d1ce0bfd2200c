use chrono::Utc;
use clap::Subcommand;
use colored::*;
use migration::{Command, MigrationState};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};
use tracing::info;

use crate::cli::commands::ExitOnErr;
use crate::config::Settings;
use crate::db::{init_db, migrations};
use crate::utils::format_duration;

#[derive(Subcommand, Debug)]
pub enum MigrateCommands {
    #[command(flatten)]
    Run(Command),

    /// List applied and pending migrations
    Status,
}

#[derive(Tabled)]
struct MigrationRow {
    #[tabled(rename = "Version")]
    version: String,

    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Status")]
    status: String,
}

pub async fn execute(action: &MigrateCommands, settings: &Settings) {
    let url = settings
        .database
        .require_url()
        .exit_on_err("Failed to create migrate instance");
    let db = init_db(url)
        .await
        .exit_on_err("Failed to create migrate instance");

    match action {
        MigrateCommands::Run(command) => {
            println!("--Migrate Start--");
            let started_at = Utc::now();
            migrations::run(&db, command)
                .await
                .exit_on_err("Migration failed");
            info!("Finished in {}", format_duration(started_at, Utc::now()));
            println!("--Migrate Complete--");
        }
        MigrateCommands::Status => {
            let state = migrations::status(&db)
                .await
                .exit_on_err("Failed to read migration status");
            print_status(&state);
        }
    }
}

fn print_status(state: &MigrationState) {
    println!("{}", "=== Migrations ===".blue());

    if state.entries.is_empty() {
        println!("No migrations defined");
        return;
    }

    let rows: Vec<MigrationRow> = state
        .entries
        .iter()
        .map(|entry| MigrationRow {
            version: entry.version.to_string().bright_black().to_string(),
            name: entry.name.clone(),
            status: if entry.applied {
                "applied".green().to_string()
            } else {
                "pending".yellow().to_string()
            },
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string();

    println!("{}", table);

    match state.current() {
        Some(version) => println!("Current version: {}", version.to_string().green()),
        None => println!("No migrations have been applied yet"),
    }
    println!("Pending: {}", state.pending());
}
