//! CLI error types and the local-variables API client.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use reqwest::{Client, Url};
use tokenpress_config::{ConfigError, SourceConfig};
use tokenpress_graph::{LocalVariablesResponse, TokenGraph};
use tracing::{debug, info};

pub(crate) const HEADER_FIGMA_TOKEN: &str = "X-Figma-Token";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Configuration problems are the caller's to fix.
pub(crate) fn config_error(error: ConfigError) -> CliError {
    match error {
        ConfigError::Missing { key } => CliError::validation(format!("{key} must be set")),
        ConfigError::InvalidField {
            key,
            value: Some(value),
            reason,
        } => CliError::validation(format!("invalid {key} '{value}': {reason}")),
        ConfigError::InvalidField {
            key,
            value: None,
            reason,
        } => CliError::validation(format!("invalid {key}: {reason}")),
    }
}

/// Client for the design tool's local-variables endpoint.
pub(crate) struct FigmaClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl FigmaClient {
    /// Build a client from the source configuration.
    pub(crate) fn new(source: &SourceConfig) -> CliResult<Self> {
        let credentials = source.credentials().map_err(config_error)?;
        let endpoint = source.endpoint().map_err(config_error)?;
        let client = Client::builder()
            .timeout(source.timeout)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            endpoint,
            access_token: credentials.access_token.to_string(),
        })
    }

    /// Fetch the token graph; transport errors, non-2xx responses, and
    /// API-reported errors are all failures.
    pub(crate) async fn fetch_token_graph(&self) -> CliResult<TokenGraph> {
        info!(endpoint = %self.endpoint, "fetching local variables");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(HEADER_FIGMA_TOKEN, &self.access_token)
            .send()
            .await
            .map_err(|err| {
                CliError::failure(anyhow!("request to {} failed: {err}", self.endpoint))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            return Err(CliError::failure(if body.is_empty() {
                anyhow!("variables request failed with status {status}")
            } else {
                anyhow!("variables request failed with status {status}: {body}")
            }));
        }

        let bytes = response.bytes().await.map_err(|err| {
            CliError::failure(anyhow!("failed to read variables response: {err}"))
        })?;
        debug!(bytes = bytes.len(), "variables response received");

        let payload: LocalVariablesResponse = serde_json::from_slice(&bytes).map_err(|err| {
            CliError::failure(anyhow!("failed to parse variables response: {err}"))
        })?;
        if !payload.is_success() {
            let status = payload
                .status
                .map_or_else(|| "none".to_string(), |s| s.to_string());
            let message = payload.message.as_deref().unwrap_or("no message");
            return Err(CliError::failure(anyhow!(
                "variables API reported an error (status {status}): {message}"
            )));
        }
        Ok(payload.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::error::Error;
    use tokenpress_config::from_lookup;

    fn source_for(server: &MockServer, token: Option<&str>) -> Result<SourceConfig, ConfigError> {
        let mut vars = HashMap::from([
            ("FIGMA_FILE_ID".to_string(), "file1".to_string()),
            (
                "FIGMA_VARIABLE_API_URL".to_string(),
                server.url("/v1/files/{{fileId}}/variables/local"),
            ),
        ]);
        if let Some(token) = token {
            vars.insert("FIGMA_ACCESS_TOKEN".to_string(), token.to_string());
        }
        Ok(from_lookup(|key| vars.get(key).cloned())?.source)
    }

    #[test]
    fn exit_codes_and_messages() {
        let validation = CliError::validation("FIGMA_FILE_ID must be set");
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.display_message(), "FIGMA_FILE_ID must be set");

        let failure =
            CliError::failure(anyhow!("fsops io failure").context("failed to read tokens.json"));
        assert_eq!(failure.exit_code(), 3);
        assert_eq!(
            failure.display_message(),
            "failed to read tokens.json: fsops io failure"
        );
        assert_eq!(failure.to_string(), "cli error");
    }

    #[test]
    fn config_errors_become_validation_errors() {
        let missing = config_error(ConfigError::Missing {
            key: "FIGMA_ACCESS_TOKEN",
        });
        assert_eq!(missing.display_message(), "FIGMA_ACCESS_TOKEN must be set");
        assert_eq!(missing.exit_code(), 2);

        let invalid = config_error(ConfigError::InvalidField {
            key: "TOKENPRESS_GENERATORS",
            value: Some("less".into()),
            reason: "unknown generator",
        });
        assert_eq!(
            invalid.display_message(),
            "invalid TOKENPRESS_GENERATORS 'less': unknown generator"
        );
    }

    #[tokio::test]
    async fn sends_token_and_returns_graph() -> Result<(), Box<dyn Error>> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/files/file1/variables/local")
                .header("x-figma-token", "secret");
            then.status(200).json_body(json!({
                "status": 200,
                "error": false,
                "meta": { "variableCollections": {}, "variables": {} }
            }));
        });

        let client = FigmaClient::new(&source_for(&server, Some("secret"))?)
            .map_err(|err| err.display_message())?;
        let graph = client
            .fetch_token_graph()
            .await
            .map_err(|err| err.display_message())?;

        mock.assert();
        assert_eq!(graph.collection_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_failure() -> Result<(), Box<dyn Error>> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET);
            then.status(403).body("Invalid token");
        });

        let client = FigmaClient::new(&source_for(&server, Some("bad"))?)
            .map_err(|err| err.display_message())?;
        let err = client.fetch_token_graph().await.err();
        let Some(CliError::Failure(error)) = err else {
            return Err("expected a failure".into());
        };
        assert!(format!("{error:#}").contains("403"));
        assert!(format!("{error:#}").contains("Invalid token"));
        Ok(())
    }

    #[tokio::test]
    async fn api_reported_error_is_failure() -> Result<(), Box<dyn Error>> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({
                "status": 404,
                "error": true,
                "message": "File not found"
            }));
        });

        let client = FigmaClient::new(&source_for(&server, Some("secret"))?)
            .map_err(|err| err.display_message())?;
        let err = client.fetch_token_graph().await.err();
        let message = match err {
            Some(CliError::Failure(error)) => error.to_string(),
            _ => String::new(),
        };
        assert_eq!(
            message,
            "variables API reported an error (status 404): File not found"
        );
        Ok(())
    }

    #[test]
    fn missing_token_is_validation_error() -> Result<(), Box<dyn Error>> {
        let server = MockServer::start();
        let result = FigmaClient::new(&source_for(&server, None)?);
        assert!(matches!(result, Err(CliError::Validation(_))));
        Ok(())
    }
}
