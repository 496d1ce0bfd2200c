#![allow(dead_code)]

use anyhow::Result;
use sea_orm::DatabaseConnection;
use starter::{config::Settings, db::init_db, server::AppState, supabase::SupabaseClient};

pub const TEST_KEY: &str = "test-anon-key";

pub async fn memory_db() -> Result<DatabaseConnection> {
    init_db("sqlite::memory:").await
}

pub fn test_state() -> AppState {
    let supabase = SupabaseClient::new("https://xyz.supabase.co", TEST_KEY)
        .expect("valid test client");
    AppState::new(Settings::default(), supabase)
}
