use std::io::Write;
use tracing::{debug, info};

use super::TavilyApi;
use super::models::ApiRequest;
use crate::cli::Command;
use crate::error::CliError;
use crate::render::Renderer;

/// Builds the request for `command`, sends it and renders the response to `out`.
pub async fn dispatch<A, W>(
    command: &Command,
    api: &A,
    renderer: &Renderer,
    out: &mut W,
) -> Result<(), CliError>
where
    A: TavilyApi,
    W: Write,
{
    let request = ApiRequest::from(command);
    let endpoint = request.endpoint();
    debug!(?request, "built request");

    let response = api.send(&request).await?;
    info!(endpoint = endpoint.path(), "request succeeded");

    renderer.render(endpoint, &response, out)?;
    out.flush()?;
    Ok(())
}
