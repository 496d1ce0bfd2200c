pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod server;
pub mod supabase;
pub mod utils;
