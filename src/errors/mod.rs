use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("SUPABASE_URL not found")]
    MissingUrl,

    #[error("SUPABASE_KEY not found")]
    MissingKey,

    #[error("Invalid Supabase URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Supabase key is not a valid HTTP header value")]
    InvalidKey,

    #[error("Request to Supabase failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected Supabase response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Supabase responded with {status}: {message}")]
    Api { status: u16, message: String },
}
