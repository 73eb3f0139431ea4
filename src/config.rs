use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::error::CliError;

pub const DEFAULT_API_URL: &str = "https://api.tavily.com";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        api_key: get_env("TAVILY_API_KEY"),
        api_url: get_env_or_default("TAVILY_API_URL", DEFAULT_API_URL),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
}

impl Config {
    /// The `--api-key` flag wins over the environment. Blank keys count as missing.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Result<String, CliError> {
        flag.map(str::trim)
            .filter(|key| !key.is_empty())
            .or(self.api_key.as_deref())
            .map(str::to_string)
            .ok_or(CliError::Authentication)
    }
}

fn get_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    get_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            api_key: api_key.map(str::to_string),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    #[test]
    fn test_flag_takes_precedence_over_environment() {
        let key = config(Some("from-env")).resolve_api_key(Some("from-flag"));
        assert_eq!(key.unwrap(), "from-flag");
    }

    #[test]
    fn test_environment_used_when_flag_missing_or_blank() {
        assert_eq!(config(Some("from-env")).resolve_api_key(None).unwrap(), "from-env");
        assert_eq!(config(Some("from-env")).resolve_api_key(Some("  ")).unwrap(), "from-env");
    }

    #[test]
    fn test_no_key_is_an_authentication_error() {
        let err = config(None).resolve_api_key(None).unwrap_err();
        assert!(matches!(err, CliError::Authentication));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.hints().len(), 2);
    }
}
