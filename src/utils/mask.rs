/// Masks a URL for diagnostic output, keeping at most the first 8 characters.
///
/// Example: `"https://abc.supabase.co"` -> `"https://***"`
pub fn mask_url(url: &str) -> String {
    mask(url, 12, 8)
}

/// Masks an API key for diagnostic output, keeping at most the first 4 characters.
pub fn mask_key(key: &str) -> String {
    mask(key, 8, 4)
}

fn mask(value: &str, hide_up_to: usize, visible: usize) -> String {
    if value.chars().count() <= hide_up_to {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(visible).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_url() {
        assert_eq!(mask_url("https://abc.supabase.co"), "https://***");
        assert_eq!(mask_url("http://a.b.cd"), "http://a***");
    }

    #[test]
    fn test_mask_short_url() {
        assert_eq!(mask_url(""), "***");
        assert_eq!(mask_url("http://a.bcd"), "***"); // exactly 12
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("eyJhbGciOiJIUzI1NiJ9"), "eyJh***");
        assert_eq!(mask_key("123456789"), "1234***");
    }

    #[test]
    fn test_mask_short_key() {
        assert_eq!(mask_key("12345678"), "***");
        assert_eq!(mask_key("abc"), "***");
    }

    #[test]
    fn test_mask_counts_chars_not_bytes() {
        // 9 chars, 18 bytes
        assert_eq!(mask_key("ééééééééé"), "éééé***");
    }
}
