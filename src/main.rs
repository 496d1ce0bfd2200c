use starter::{
    cli::{Cli, Context, commands::ExitOnErr},
    config::{Settings, load_env_file},
    utils,
};
use tracing::warn;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let env_file = load_env_file();
    let settings = Settings::from_env().exit_on_err("Failed to load configuration");

    let _log_guard = utils::logger::init_logging(&settings.logs);

    if let Err(e) = env_file {
        warn!("Error loading .env file: {}", e);
    }

    cli.execute(&Context {
        settings: &settings,
    })
    .await;
}
