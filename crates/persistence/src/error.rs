// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use course_plan::CoreError;
use course_plan_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing plan data.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A catalog record could not be converted to a course reference.
    #[error("Invalid catalog record for '{course}': {message}")]
    InvalidRecord { course: String, message: String },

    /// Stored data violates a structural rule.
    #[error("Invalid plan data: {0}")]
    Domain(#[from] DomainError),

    /// A stored schedule does not fit the catalog or standing.
    #[error("Inconsistent plan: {0}")]
    Core(#[from] CoreError),

    /// No schedule has been saved yet.
    #[error("No schedule stored at {0}")]
    NotFound(PathBuf),

    /// An audit timestamp could not be formatted.
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] time::error::Format),
}
