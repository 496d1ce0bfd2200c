use tracing::info;

use crate::cli::commands::ExitOnErr;
use crate::config::Settings;
use crate::server;
use crate::supabase::SupabaseClient;
use crate::utils::mask_url;

pub async fn execute(settings: &Settings) {
    let supabase = SupabaseClient::from_config(&settings.supabase)
        .exit_on_err("Failed to initialize Supabase");
    info!(
        "Supabase client successfully initialized for {}",
        mask_url(supabase.url())
    );

    server::serve(settings.clone(), supabase)
        .await
        .exit_on_err("Server failed");
}
