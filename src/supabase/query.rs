use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::SupabaseError;
use crate::supabase::SupabaseClient;

/// PostgREST request for a single table, e.g.
/// `client.from("users").select("id,email").eq("id", 1).execute()`.
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    fn set(mut self, key: &str, value: String) -> Self {
        self.params.retain(|(k, _)| k != key);
        self.params.push((key.to_string(), value));
        self
    }

    pub fn select(self, columns: &str) -> Self {
        self.set("select", columns.to_string())
    }

    /// Filters are additive; several `eq` calls on different columns combine with AND.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.set("order", format!("{}.{}", column, direction))
    }

    pub fn limit(self, count: usize) -> Self {
        self.set("limit", count.to_string())
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.client.rest_url(), self.table)
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, SupabaseError> {
        let url = self.url();
        debug!("Querying Supabase table: {}", url);

        let response = self
            .client
            .http()
            .get(&url)
            .query(&self.params)
            .send()
            .await?;

        SupabaseClient::decode(response).await
    }

    /// Inserts `body` (a row or an array of rows) and returns the stored representation.
    pub async fn insert<B, T>(self, body: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url();
        debug!("Inserting into Supabase table: {}", url);

        let response = self
            .client
            .http()
            .post(&url)
            .query(&self.params)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        SupabaseClient::decode(response).await
    }
}
