use std::env;

/// Environment variable holding the default backend base URL.
pub const BASE_URL_ENV: &str = "RAG_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Loads `.env` if present, then reads `RAG_API_URL`. Unset means empty.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            base_url: env::var(BASE_URL_ENV).unwrap_or_default(),
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }
}

/// Joins an endpoint path such as `/query/` onto a base URL.
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}{}", base, path)
}
