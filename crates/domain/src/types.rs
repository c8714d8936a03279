// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a course identifier, e.g. `CMP SCI 1250`.
///
/// The identifier is the subject followed by the course number and is the
/// sole key for a course across the catalog and the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId {
    /// The identifier value with surrounding whitespace removed.
    value: String,
}

impl CourseId {
    /// Creates a new `CourseId`.
    ///
    /// Surrounding whitespace is trimmed; inner spacing is preserved since
    /// `CMP SCI 1250` and `CMPSCI 1250` are different identifiers.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Creates a `CourseId`, rejecting blank identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty after trimming.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let id: Self = Self::new(value);
        if id.value.is_empty() {
            return Err(DomainError::InvalidCourseId(String::from(
                "Course id cannot be empty",
            )));
        }
        Ok(id)
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The term in which a semester runs.
///
/// Courses declare the semester types during which they are offered and each
/// semester of a plan carries exactly one type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum SemesterType {
    /// Autumn term.
    #[default]
    Fall,
    /// Winter/spring term.
    Spring,
    /// Optional summer term.
    Summer,
}

impl FromStr for SemesterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Fall" => Ok(Self::Fall),
            "Spring" => Ok(Self::Spring),
            "Summer" => Ok(Self::Summer),
            other => Err(DomainError::InvalidSemesterType(other.to_string())),
        }
    }
}

impl std::fmt::Display for SemesterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SemesterType {
    /// Converts this semester type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        }
    }

    /// Returns the semester type that follows this one.
    ///
    /// - Fall → Spring
    /// - Spring → Summer, or Fall when summers are skipped
    /// - Summer → Fall
    #[must_use]
    pub const fn next(&self, include_summer: bool) -> Self {
        match self {
            Self::Fall => Self::Spring,
            Self::Spring => {
                if include_summer {
                    Self::Summer
                } else {
                    Self::Fall
                }
            }
            Self::Summer => Self::Fall,
        }
    }
}
