use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::config::{DatabaseConfig, LogConfig, ServerConfig, SupabaseConfig};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub supabase: SupabaseConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logs: LogConfig,
}

/// Deployment profile selected through `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AppEnv {
    Dev,
    Test,
    Prod,
}

impl AppEnv {
    pub fn env_file(self) -> &'static str {
        match self {
            Self::Dev => ".env.dev",
            Self::Test => ".env.test",
            Self::Prod => ".env",
        }
    }
}

fn get_env_file_name() -> String {
    if let Ok(env_file) = std::env::var("APP_ENV_FILE") {
        return env_file;
    }
    std::env::var("APP_ENV")
        .ok()
        .and_then(|profile| profile.parse::<AppEnv>().ok())
        .unwrap_or(AppEnv::Prod)
        .env_file()
        .to_string()
}

/// Loads the `.env` file picked by `APP_ENV_FILE` / `APP_ENV` into the process environment.
pub fn load_env_file() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::from_filename(get_env_file_name())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl Settings {
    /// Loads the env file (a missing file is ignored) and then the environment.
    pub fn new() -> Result<Self, ConfigError> {
        load_env_file().ok();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // APP__SERVER__PORT=3000 -> server.port
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("supabase.url", non_empty_env("SUPABASE_URL"))?
            .set_override_option("supabase.key", non_empty_env("SUPABASE_KEY"))?
            .set_override_option("database.url", non_empty_env("POSTGRES_URI"))?
            .build()?;

        settings.try_deserialize()
    }

    /// Copy safe to print: URLs and keys are masked.
    pub fn masked(&self) -> Self {
        Self {
            supabase: self.supabase.masked(),
            database: self.database.masked(),
            ..self.clone()
        }
    }

    pub fn print_config(&self) {
        match serde_json::to_string_pretty(&self.masked()) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Failed to serialize settings: {}", err),
        }
    }
}
