use thiserror::Error;

pub const API_KEY_URL: &str = "https://app.tavily.com";

/// Everything that can end an invocation with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad flags or arguments, caught before any network activity.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("No API key provided.")]
    Authentication,

    #[error("request to the Tavily API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Tavily API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from the Tavily API: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(err) => u8::try_from(err.exit_code()).unwrap_or(2),
            _ => 1,
        }
    }

    /// Follow-up lines printed after the error message.
    pub fn hints(&self) -> Vec<String> {
        match self {
            CliError::Authentication => vec![
                "Set TAVILY_API_KEY environment variable or use --api-key option.".to_string(),
                format!("Get your free API key at: {API_KEY_URL}"),
            ],
            CliError::Transport(err) if err.is_timeout() => {
                vec!["The API did not answer before the request timeout.".to_string()]
            }
            _ => Vec::new(),
        }
    }
}
