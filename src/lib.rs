//! Command-line client for the hosted Tavily search, extract, crawl and map API.
//!
//! Each invocation validates its flags ([`cli`]), builds one request
//! ([`api::models`]), performs a single HTTP call ([`api::client`]) and prints
//! the payload as JSON, text or Markdown ([`render`]).

use std::io::IsTerminal;

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod types;

pub use error::CliError;

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::config::CONFIG;
use crate::render::Renderer;

/// Resolves the API key, then dispatches the parsed command against the live API.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let api_key = CONFIG.resolve_api_key(cli.global.api_key.as_deref())?;
    let client = ApiClient::new(&CONFIG.api_url, api_key)?;

    let stdout = std::io::stdout();
    let renderer = Renderer::new(cli.global.format, stdout.is_terminal());
    let mut out = stdout.lock();
    api::handlers::dispatch(&cli.command, &client, &renderer, &mut out).await
}
