//! Taxpayer facts loading from JSON.
//!
//! Thin wrapper over the lenient serde model in `return-core`: structural
//! defects (wrong field shape, defective numerics) already coerce to
//! defaults during deserialization, so the only loader errors left are
//! unreadable files and malformed JSON.

use std::fs;
use std::path::Path;

use thiserror::Error;

use return_core::models::TaxpayerFacts;

/// Errors that can occur when loading a facts file.
#[derive(Debug, Error)]
pub enum FactsFileError {
    #[error("failed to read facts file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Loader for taxpayer facts from JSON files.
pub struct FactsLoader;

impl FactsLoader {
    pub fn parse(text: &str) -> Result<TaxpayerFacts, FactsFileError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<TaxpayerFacts, FactsFileError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}
