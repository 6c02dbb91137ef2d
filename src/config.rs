use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Settings for the browser client.
///
/// The API base URL is fixed when the wasm bundle is built; set
/// `BOOKREVIEWS_API_URL` at build time to point the client at another server.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub toast_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::with_api_url(option_env!("BOOKREVIEWS_API_URL"))
    }

    fn with_api_url(api_url: Option<&str>) -> Self {
        match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                api_url: url.trim_end_matches('/').to_string(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_api() {
        assert_eq!(ClientConfig::with_api_url(None).api_url, DEFAULT_API_URL);
        assert_eq!(ClientConfig::with_api_url(Some("  ")).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn strips_trailing_slash() {
        let config = ClientConfig::with_api_url(Some("https://books.example.com/api/"));
        assert_eq!(config.api_url, "https://books.example.com/api");
        assert_eq!(config.toast_duration, Duration::from_millis(3000));
    }
}
