use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use super::TavilyApi;
use super::models::ApiRequest;
use crate::error::CliError;

/// Single-shot HTTP adapter for the hosted API. No retries.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tavily-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}/{}", self.base_url, request.endpoint().path())
    }
}

impl TavilyApi for ApiClient {
    async fn send(&self, request: &ApiRequest) -> Result<Value, CliError> {
        let url = self.url(request);
        let builder = match request.body()? {
            Some(body) => {
                debug!(%url, payload = %body, "sending request");
                self.http.post(&url).json(&body)
            }
            None => {
                debug!(%url, "sending request");
                self.http.get(&url)
            }
        };

        let response = builder
            .bearer_auth(&self.api_key)
            .timeout(request.timeout())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, %body, "received response");

        if !status.is_success() {
            return Err(CliError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Pulls a readable message out of an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        let detail = json.get("detail");
        detail
            .and_then(|d| d.get("error"))
            .or(detail)
            .or_else(|| json.get("error"))
            .or_else(|| json.get("message"))
            .and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
    });

    from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail_error() {
        let body = r#"{"detail": {"error": "Invalid regex in select_paths"}}"#;
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, body),
            "Invalid regex in select_paths"
        );
    }

    #[test]
    fn test_error_message_accepts_flat_shapes() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"detail": "Unauthorized: missing or invalid API key."}"#),
            "Unauthorized: missing or invalid API key."
        );
        assert_eq!(
            error_message(StatusCode::TOO_MANY_REQUESTS, r#"{"error": "quota exceeded"}"#),
            "quota exceeded"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message": "bad input"}"#),
            "bad input"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, ""), "Bad Gateway");
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"other": 1}"#),
            r#"{"other": 1}"#
        );
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:9/", "key".into()).unwrap();
        assert_eq!(client.url(&ApiRequest::Usage), "http://localhost:9/usage");
    }
}
