pub mod client;
pub mod query;

pub use client::SupabaseClient;
pub use query::QueryBuilder;
