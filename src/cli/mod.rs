pub mod commands;

use clap::Parser;
use colored::Colorize;

use crate::cli::commands::{Commands, cmd_config, cmd_migrate, cmd_serve, cmd_version};
use crate::config::Settings;

pub struct Context<'a> {
    pub settings: &'a Settings,
}

#[derive(Parser, Debug)]
#[command(
    name = "starter",
    about = "Backend starter: web server and database migrations",
    long_about = format!(
r#"{} - {}
Runs the HTTP server when no command is given."#,
"STARTER".green().bold(),
"Web backend skeleton wired to Supabase and Postgres."
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub async fn execute(&self, ctx: &Context<'_>) {
        match &self.command {
            Some(Commands::Migrate { action }) => cmd_migrate::execute(action, ctx.settings).await,
            Some(Commands::Config) => cmd_config::execute(ctx.settings),
            Some(Commands::Version) => cmd_version::execute(),
            Some(Commands::Serve) | None => cmd_serve::execute(ctx.settings).await,
        }
    }
}
