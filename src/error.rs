// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised by the ledger, reminder book and state file.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("Malformed record on line {line}: invalid amount '{value}'")]
    MalformedRecord { line: u64, value: String },
    #[error("Total of {what} is too large to represent")]
    Overflow { what: &'static str },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn validation(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LedgerError::Validation {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
