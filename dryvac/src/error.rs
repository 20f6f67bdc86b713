use crate::ast::Span;
use std::sync::Arc;
use thiserror::Error;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Fatal errors raised while loading DRY source or writing platform output.
///
/// Problems found during expansion itself (undefined slots, undefined
/// variables, unparsable fragments) are never fatal; they are reported as
/// [`crate::Diagnostic`]s instead.
#[derive(Debug, Error)]
pub enum DryError {
    /// Malformed source line, with its location
    #[error("{}", describe_parse_error(.0))]
    Parse(Box<ErrorDetails>),

    /// Engine error without specific source location
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Multiple errors collected together
    #[error("{}", describe_multiple(.0))]
    MultipleErrors(Vec<DryError>),
}

impl DryError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }
}

fn describe_parse_error(details: &ErrorDetails) -> String {
    let mut out = format!("Parse error: {}", details.message);
    if let Some(suggestion) = &details.suggestion {
        out.push_str(&format!(" (suggestion: {})", suggestion));
    }
    out.push_str(&format!(
        " at {}:{}:{}",
        details.source_id, details.span.line, details.span.col
    ));
    out
}

fn describe_multiple(errors: &[DryError]) -> String {
    let mut out = String::from("Multiple errors:");
    for (i, error) in errors.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, error));
    }
    out
}
