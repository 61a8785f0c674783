use crate::constants::API_GENERATE_FORM;

/// Build-time settings, read from `FORMNEST_*` variables when the wasm bundle is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub google_client_id: String,
    /// Empty means "current origin + `/`", resolved by the frontend.
    pub redirect_uri: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: API_GENERATE_FORM.to_string(),
            google_client_id: String::new(),
            redirect_uri: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("FORMNEST_API_URL"),
            option_env!("FORMNEST_GOOGLE_CLIENT_ID"),
            option_env!("FORMNEST_REDIRECT_URI"),
        )
    }

    fn from_values(api_url: Option<&str>, client_id: Option<&str>, redirect_uri: Option<&str>) -> Self {
        let defaults = AppConfig::default();
        let pick = |value: Option<&str>, default: String| {
            value.map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(default)
        };
        Self {
            api_url: pick(api_url, defaults.api_url),
            google_client_id: pick(client_id, defaults.google_client_id),
            redirect_uri: pick(redirect_uri, defaults.redirect_uri),
        }
    }

    pub fn redirect_uri_or(&self, origin: &str) -> String {
        if self.redirect_uri.is_empty() {
            format!("{}/", origin.trim_end_matches('/'))
        } else {
            self.redirect_uri.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(Some(" "), None, Some(""));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://localhost:5000/generate-form");
    }

    #[test]
    fn explicit_values_win() {
        let config = AppConfig::from_values(Some("https://api.example/gen"), Some("id.apps"), Some("https://app.example/"));
        assert_eq!(config.api_url, "https://api.example/gen");
        assert_eq!(config.google_client_id, "id.apps");
        assert_eq!(config.redirect_uri_or("http://ignored"), "https://app.example/");
    }

    #[test]
    fn redirect_defaults_to_origin_root() {
        assert_eq!(AppConfig::default().redirect_uri_or("http://localhost:8080"), "http://localhost:8080/");
        assert_eq!(AppConfig::default().redirect_uri_or("http://localhost:8080/"), "http://localhost:8080/");
    }
}
