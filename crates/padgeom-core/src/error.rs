// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PadgeomError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PadgeomError {
    /// A size or coordinate the converter can't make sense of.
    /// `reference` is whatever the value was being measured against.
    #[error("unsupported format: {value} (applied to {reference})")]
    InvalidFormat { value: String, reference: String },
}

impl PadgeomError {
    pub fn invalid_format(value: impl Into<String>, reference: impl ToString) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            reference: reference.to_string(),
        }
    }
}
