use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::utils::{mask_key, mask_url};

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct SupabaseConfig {
    /// Project URL, taken from `SUPABASE_URL`.
    #[serde(default)]
    pub url: Option<String>,

    /// API key, taken from `SUPABASE_KEY`.
    #[serde(default)]
    pub key: Option<String>,
}

impl SupabaseConfig {
    pub fn get_supabase_url(&self) -> Option<&str> {
        report("SUPABASE_URL", self.url.as_deref(), mask_url)
    }

    pub fn get_supabase_key(&self) -> Option<&str> {
        report("SUPABASE_KEY", self.key.as_deref(), mask_key)
    }

    pub fn masked(&self) -> Self {
        Self {
            url: self.url.as_deref().map(mask_url),
            key: self.key.as_deref().map(mask_key),
        }
    }
}

fn report<'a>(var: &str, value: Option<&'a str>, mask: fn(&str) -> String) -> Option<&'a str> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => {
            info!("{} successfully loaded: {}", var, mask(v));
            Some(v)
        }
        None => {
            error!("{} not found!", var);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_missing() {
        let cfg = SupabaseConfig {
            url: Some(String::new()),
            key: None,
        };
        assert_eq!(cfg.get_supabase_url(), None);
        assert_eq!(cfg.get_supabase_key(), None);
    }

    #[test]
    fn getters_return_raw_values() {
        let cfg = SupabaseConfig {
            url: Some("https://xyz.supabase.co".to_string()),
            key: Some("service-role-key".to_string()),
        };
        assert_eq!(cfg.get_supabase_url(), Some("https://xyz.supabase.co"));
        assert_eq!(cfg.get_supabase_key(), Some("service-role-key"));
    }

    #[test]
    fn masked_hides_secrets() {
        let cfg = SupabaseConfig {
            url: Some("https://xyz.supabase.co".to_string()),
            key: Some("service-role-key".to_string()),
        }
        .masked();
        assert_eq!(cfg.url.as_deref(), Some("https://***"));
        assert_eq!(cfg.key.as_deref(), Some("serv***"));
    }
}
