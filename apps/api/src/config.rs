use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_openai_api_key: String,
    pub azure_openai_endpoint: String,
    pub azure_openai_deployment: String,
    pub azure_openai_api_version: String,
    pub llm_timeout_secs: u64,
    /// Interview rules used to review answers. Missing file = no review.
    pub review_rules_path: String,
    /// Empty or `*` means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            azure_openai_api_key: require_env("AZURE_OPENAI_API_KEY")?,
            azure_openai_endpoint: require_env("AZURE_OPENAI_ENDPOINT")?,
            azure_openai_deployment: env_or("AZURE_OPENAI_DEPLOYMENT", "gpt-4o-mini"),
            azure_openai_api_version: env_or("AZURE_OPENAI_API_VERSION", "2024-12-01-preview"),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            review_rules_path: env_or("REVIEW_RULES_PATH", "review_rules.txt"),
            cors_allowed_origins: parse_origins(&env_or(
                "CORS_ALLOWED_ORIGINS",
                "http://localhost,http://localhost:8080",
            )),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn cors_is_permissive(&self) -> bool {
        self.cors_allowed_origins.is_empty() || self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
impl Config {
    /// Config for handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            azure_openai_api_key: "test-key".to_string(),
            azure_openai_endpoint: "http://localhost:9".to_string(),
            azure_openai_deployment: "gpt-4o-mini".to_string(),
            azure_openai_api_version: "2024-12-01-preview".to_string(),
            llm_timeout_secs: 1,
            review_rules_path: "does-not-exist/review_rules.txt".to_string(),
            cors_allowed_origins: vec![],
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_blanks() {
        assert_eq!(
            parse_origins(" http://localhost , ,https://example.github.io"),
            vec!["http://localhost", "https://example.github.io"]
        );
    }

    #[test]
    fn test_wildcard_origin_is_permissive() {
        let mut config = Config::for_tests();
        assert!(config.cors_is_permissive());
        config.cors_allowed_origins = vec!["*".to_string()];
        assert!(config.cors_is_permissive());
        config.cors_allowed_origins = vec!["http://localhost".to_string()];
        assert!(!config.cors_is_permissive());
    }
}
