// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use course_plan_domain::{CourseId, DomainError};

/// Errors that abort a plan operation without mutating anything.
///
/// Curriculum rule violations are never errors; they travel as marker
/// directives on the move outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The catalog or schedule data is inconsistent.
    DomainViolation(DomainError),
    /// The course is not placed in any semester of the plan.
    CourseNotPlaced(CourseId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CourseNotPlaced(course) => {
                write!(f, "Course '{course}' is not placed in the plan")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
