#![deny(unsafe_code)]

pub mod error;
pub mod gemini;
pub mod prompt;

pub use error::OracleError;
pub use gemini::{GeminiConfig, GeminiOracle};
pub use prompt::build_mapping_prompt;

use async_trait::async_trait;

/// An external text-generation service consulted for a header mapping.
///
/// Text in, text out: the response is expected to contain a JSON object
/// mapping actual headers to template headers, but nothing is enforced
/// here. Parsing and validation belong to the reconciler.
#[async_trait]
pub trait HeaderOracle: Send + Sync {
    async fn propose_mapping(&self, prompt: &str) -> Result<String, OracleError>;
}
