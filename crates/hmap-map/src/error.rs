//! Error types for header reconciliation.

use thiserror::Error;

/// Errors from reconciling an oracle response against actual headers.
///
/// Neither variant is retried or defaulted: a malformed oracle response
/// fails the whole reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The oracle response contains no `{...}` span.
    #[error("oracle response does not contain a JSON object")]
    Extraction,
    /// The extracted span is not a JSON object of string values.
    #[error("oracle response is not a JSON object of strings: {0}")]
    Parse(String),
}
