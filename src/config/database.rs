use serde::{Deserialize, Serialize};

use crate::utils::mask_url;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// Connection string, taken from `POSTGRES_URI`.
    #[serde(default)]
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn require_url(&self) -> anyhow::Result<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow::anyhow!("POSTGRES_URI not found"))
    }

    pub fn masked(&self) -> Self {
        Self {
            url: self.url.as_deref().map(mask_url),
        }
    }
}
