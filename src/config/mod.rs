pub mod database;
pub mod log;
pub mod server;
pub mod settings;
pub mod supabase;

pub use database::DatabaseConfig;
pub use log::LogConfig;
pub use server::ServerConfig;
pub use settings::{AppEnv, Settings, load_env_file};
pub use supabase::SupabaseConfig;
