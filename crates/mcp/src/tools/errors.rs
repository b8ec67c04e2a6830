//! Normalization of failures caught inside tool handlers.
//!
//! Every tool turns a failure into exactly one line of text:
//!
//! - `"<Label> error (<status>): <message>"` for a failed remote call, where
//!   `<status>` is the HTTP status or `unknown` when no response arrived
//! - `"<Label> error: <message>"` for anything else

use crate::protocol::ToolResult;
use exa_sdk::ExaError;
use serde_json::Value;
use std::fmt;

/// HTTP status of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Code(u16),
    Unknown,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Structured view of a failed remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteErrorInfo {
    pub status_code: StatusCode,
    pub message: String,
    pub response_body: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub include_response_body: bool,
}

/// Extract remote-call details, or `None` when `err` is not a remote failure.
pub fn extract(err: &anyhow::Error) -> Option<RemoteErrorInfo> {
    let exa = err.downcast_ref::<ExaError>()?;
    if !exa.is_remote() {
        return None;
    }

    let status_code = exa.status().map_or(StatusCode::Unknown, StatusCode::Code);
    let body = exa.body();

    let message = body
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| exa.to_string(), str::to_string);

    let response_body = body.map(|b| match b {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    });

    Some(RemoteErrorInfo {
        status_code,
        message,
        response_body,
    })
}

/// Log lines for a remote failure, body first when requested and available.
pub fn format(info: &RemoteErrorInfo, label: &str, options: FormatOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if options.include_response_body {
        if let Some(ref body) = info.response_body {
            lines.push(format!("Response body: {}", body));
        }
    }
    lines.push(format!("{} error ({}): {}", label, info.status_code, info.message));
    lines
}

/// The single user-facing line for a failure caught by a tool.
pub fn describe_failure(label: &str, err: &anyhow::Error) -> String {
    match extract(err) {
        Some(info) => format!("{} error ({}): {}", label, info.status_code, info.message),
        None => format!("{} error: {}", label, err),
    }
}

/// Log the failure and wrap it in an error result.
pub fn failure_result(label: &str, err: &anyhow::Error) -> ToolResult {
    if let Some(info) = extract(err) {
        let options = FormatOptions {
            include_response_body: tracing::enabled!(tracing::Level::DEBUG),
        };
        for line in format(&info, label, options) {
            tracing::warn!("{}", line);
        }
    } else {
        tracing::warn!("{} error: {:#}", label, err);
    }
    ToolResult::error(describe_failure(label, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_error(status: u16, body: Option<Value>) -> anyhow::Error {
        ExaError::Api { status, body }.into()
    }

    #[test]
    fn test_message_from_body() {
        let err = api_error(500, Some(json!({"message": "bad"})));
        let info = extract(&err).unwrap();

        assert_eq!(info.status_code, StatusCode::Code(500));
        assert_eq!(info.message, "bad");
        assert_eq!(info.response_body.as_deref(), Some(r#"{"message":"bad"}"#));
        assert_eq!(describe_failure("Search", &err), "Search error (500): bad");
    }

    #[test]
    fn test_non_string_message_falls_back() {
        let err = api_error(400, Some(json!({"message": 42})));
        let info = extract(&err).unwrap();
        assert_eq!(info.message, "Request failed with status code 400");
    }

    #[test]
    fn test_raw_string_body_kept_verbatim() {
        let err = api_error(502, Some(json!("Bad Gateway")));
        let info = extract(&err).unwrap();
        assert_eq!(info.response_body.as_deref(), Some("Bad Gateway"));
        assert_eq!(info.message, "Request failed with status code 502");
    }

    #[test]
    fn test_missing_body() {
        let err = api_error(404, None);
        let info = extract(&err).unwrap();
        assert!(info.response_body.is_none());
        assert_eq!(
            describe_failure("Crawling", &err),
            "Crawling error (404): Request failed with status code 404"
        );
    }

    #[tokio::test]
    async fn test_no_response_is_unknown_status() {
        let client = exa_sdk::ExaClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let source = client
            .research()
            .get("r_1")
            .await
            .unwrap_err();
        let original = source.to_string();
        let err = anyhow::Error::from(source);

        let info = extract(&err).unwrap();
        assert_eq!(info.status_code, StatusCode::Unknown);
        assert_eq!(
            describe_failure("Research check", &err),
            format!("Research check error (unknown): {}", original)
        );
    }

    #[test]
    fn test_generic_failures() {
        let err = anyhow::anyhow!("boom");
        assert!(extract(&err).is_none());
        assert_eq!(describe_failure("Search", &err), "Search error: boom");

        let err: anyhow::Error = ExaError::Config("bad header".to_string()).into();
        assert!(extract(&err).is_none());
        assert_eq!(
            describe_failure("Search", &err),
            "Search error: Configuration error: bad header"
        );
    }

    #[test]
    fn test_format_lines() {
        let info = RemoteErrorInfo {
            status_code: StatusCode::Code(429),
            message: "slow down".to_string(),
            response_body: Some(r#"{"message":"slow down"}"#.to_string()),
        };

        assert_eq!(
            format(&info, "Search", FormatOptions::default()),
            vec!["Search error (429): slow down"]
        );
        assert_eq!(
            format(
                &info,
                "Axios",
                FormatOptions {
                    include_response_body: true
                }
            ),
            vec![
                r#"Response body: {"message":"slow down"}"#,
                "Axios error (429): slow down"
            ]
        );
    }

    #[test]
    fn test_failure_result_is_error() {
        let result = failure_result("Search", &anyhow::anyhow!("boom"));
        assert!(result.is_error());
        assert_eq!(result.first_text(), "Search error: boom");
    }
}
