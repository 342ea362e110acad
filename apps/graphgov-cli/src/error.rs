//! Error types for the graphgov CLI

use graphgov::GraphError;
use graphgov_http::ConfigError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types with user-friendly messages
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Could not reach Microsoft Graph: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Microsoft Graph returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Microsoft Graph sent a response the CLI could not read: {0}")]
    InvalidResponse(String),

    #[error("Service is throttling requests, giving up for now")]
    Throttled,

    #[error("Failed to render output: {0}")]
    Output(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Authentication(_) => 2,
            CliError::Network(_) | CliError::Throttled => 3,
            CliError::NotFound(_) | CliError::Validation(_) => 4,
            CliError::Api { status, .. } => match *status {
                401 | 403 => 2,
                429 => 3,
                s if s >= 500 => 5,
                _ => 4,
            },
            CliError::InvalidResponse(_) => 5,
            CliError::Output(_) => 1,
        }
    }

    /// Print the error to stderr, with a suggestion when one applies.
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Config(_) => Some(
                "Set GRAPHGOV_TENANT_ID, GRAPHGOV_CLIENT_ID and GRAPHGOV_CLIENT_SECRET, or put them in a .env file.",
            ),
            CliError::Authentication(_) => {
                Some("Check the client secret and that the app registration has admin consent.")
            }
            CliError::Network(_) => Some("Check your network connection and try again."),
            CliError::Throttled => Some("Wait a few minutes before retrying."),
            CliError::Api { status: 401, .. } | CliError::Api { status: 403, .. } => Some(
                "Grant the app the required application permissions (for example EntitlementManagement.Read.All).",
            ),
            _ => None,
        }
    }
}

impl From<GraphError> for CliError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::OData(odata) => {
                let status = odata.response_status_code;
                let message = format!("{} ({})", odata.error.message, odata.error.code);
                if status == 404 {
                    CliError::NotFound(message)
                } else {
                    CliError::Api { status, message }
                }
            }
            GraphError::Api(api) => CliError::Api {
                status: api.response_status_code,
                message: api.message,
            },
            GraphError::Authentication(msg) => CliError::Authentication(msg),
            GraphError::Transport(e) => CliError::Network(e.to_string()),
            GraphError::CircuitOpen => CliError::Throttled,
            GraphError::Config(msg) => CliError::Config(msg),
            GraphError::Serialization(e) => CliError::InvalidResponse(e.to_string()),
            GraphError::UnexpectedContentType(content_type) => {
                CliError::InvalidResponse(format!("unexpected content type {content_type}"))
            }
            GraphError::InvalidPrimitive(msg) => CliError::InvalidResponse(msg),
            GraphError::UrlTemplate(msg) => {
                CliError::Validation(format!("could not build request URL: {msg}"))
            }
            GraphError::InvalidUrl(e) => CliError::Validation(format!("invalid request URL: {e}")),
            GraphError::MissingRequestInformation => {
                CliError::Validation("request is missing its URL template".to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 2);
        assert_eq!(CliError::Authentication("x".into()).exit_code(), 2);
        assert_eq!(CliError::Network("x".into()).exit_code(), 3);
        assert_eq!(CliError::Throttled.exit_code(), 3);
        assert_eq!(CliError::NotFound("x".into()).exit_code(), 4);
        assert_eq!(CliError::Validation("x".into()).exit_code(), 4);
        assert_eq!(CliError::Output("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_api_exit_codes_by_status() {
        let api = |status| CliError::Api {
            status,
            message: String::new(),
        };
        assert_eq!(api(403).exit_code(), 2);
        assert_eq!(api(429).exit_code(), 3);
        assert_eq!(api(400).exit_code(), 4);
        assert_eq!(api(503).exit_code(), 5);
    }

    #[test]
    fn test_from_config_error() {
        let err: CliError = ConfigError::MissingVar("GRAPHGOV_TENANT_ID".into()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("GRAPHGOV_TENANT_ID"));
    }

    #[test]
    fn test_from_graph_error() {
        let err: CliError = GraphError::Authentication("invalid_client".into()).into();
        assert_eq!(err.exit_code(), 2);

        let err: CliError = GraphError::CircuitOpen.into();
        assert!(matches!(err, CliError::Throttled));
    }

    #[test]
    fn test_unreadable_response_is_not_an_output_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CliError = GraphError::Serialization(parse_err).into();
        assert!(matches!(err, CliError::InvalidResponse(_)));
        assert_eq!(err.exit_code(), 5);

        let err: CliError = GraphError::UnexpectedContentType("text/html".into()).into();
        assert!(matches!(err, CliError::InvalidResponse(_)));
        assert!(err.to_string().contains("text/html"));

        let err: CliError = GraphError::InvalidPrimitive("expected a number".into()).into();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_request_building_errors_are_validation() {
        let err: CliError = GraphError::UrlTemplate("unclosed expression".into()).into();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("unclosed expression"));
        assert_eq!(err.exit_code(), 4);

        let err: CliError = GraphError::MissingRequestInformation.into();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
