pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the analysis service lives. Resolved once when the application starts
/// and handed to whoever needs it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Picks the first non-blank candidate, falling back to the local
    /// development address.
    pub fn resolve(primary: Option<&str>, fallback: Option<&str>) -> Self {
        [primary, fallback]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_order() {
        assert_eq!(
            ApiConfig::resolve(Some("https://api.example.com"), Some("http://other")).base_url,
            "https://api.example.com"
        );
        assert_eq!(
            ApiConfig::resolve(None, Some("http://other:9000")).base_url,
            "http://other:9000"
        );
        assert_eq!(ApiConfig::resolve(Some("  "), None).base_url, DEFAULT_API_BASE_URL);
        assert_eq!(ApiConfig::resolve(None, None), ApiConfig::default());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.endpoint("/api/analyze/base64"),
            "https://api.example.com/api/analyze/base64"
        );
        assert_eq!(
            ApiConfig::default().endpoint("/api/analyze/base64"),
            "http://localhost:8000/api/analyze/base64"
        );
    }
}
