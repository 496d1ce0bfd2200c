use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::config::SupabaseConfig;
use crate::errors::SupabaseError;
use crate::supabase::QueryBuilder;
use crate::utils::mask_url;

/// Thin handle over the Supabase HTTP APIs. Every request carries the
/// project key both as `apikey` and as a bearer token.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: String,
    http: Client,
}

impl SupabaseClient {
    pub fn new(url: &str, key: &str) -> Result<Self, SupabaseError> {
        info!("Connecting to Supabase...");
        match Self::build(url, key) {
            Ok(client) => {
                info!("Successfully connected to Supabase");
                Ok(client)
            }
            Err(e) => {
                error!("Failed to connect to Supabase: {}", e);
                Err(e)
            }
        }
    }

    /// Builds the client from settings, reporting which values are present.
    pub fn from_config(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        info!("Starting Supabase initialization...");
        let url = config.get_supabase_url();
        let key = config.get_supabase_key();

        let client = Self::new(
            url.ok_or(SupabaseError::MissingUrl)?,
            key.ok_or(SupabaseError::MissingKey)?,
        )?;
        info!("Supabase initialization completed");
        Ok(client)
    }

    fn build(url: &str, key: &str) -> Result<Self, SupabaseError> {
        if url.is_empty() {
            return Err(SupabaseError::MissingUrl);
        }
        if key.is_empty() {
            return Err(SupabaseError::MissingKey);
        }

        let invalid = |reason: String| SupabaseError::InvalidUrl {
            url: mask_url(url),
            reason,
        };
        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        let mut api_key = HeaderValue::from_str(key).map_err(|_| SupabaseError::InvalidKey)?;
        api_key.set_sensitive(true);
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|_| SupabaseError::InvalidKey)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base_url)
    }

    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base_url)
    }

    pub fn storage_url(&self) -> String {
        format!("{}/storage/v1", self.base_url)
    }

    pub fn functions_url(&self) -> String {
        format!("{}/functions/v1", self.base_url)
    }

    /// Starts a PostgREST query against `table`.
    pub fn from(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table)
    }

    /// Calls a Postgres function exposed through PostgREST.
    pub async fn rpc<P, T>(&self, function: &str, params: &P) -> Result<T, SupabaseError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/rpc/{}", self.rest_url(), function);
        debug!("Calling Supabase rpc: {}", url);

        let response = self.http.post(&url).json(params).send().await?;
        Self::decode(response).await
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Supabase API error: {}", status);
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        // 204 and `return=minimal` replies carry no body
        let body = response.bytes().await?;
        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

/// PostgREST and GoTrue put the human-readable text under different keys.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
