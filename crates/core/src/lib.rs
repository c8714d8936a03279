// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod outcome;
mod policy;
mod prerequisite;
mod review;
mod rules;
mod session;
mod state;

#[cfg(test)]
mod tests;

use course_plan_domain::{Catalog, CourseId, DomainError, Schedule};

// Re-export public types and functions
pub use apply::{apply_move, preview_move};
pub use command::MoveRequest;
pub use error::CoreError;
pub use outcome::{CreditUpdate, Marker, MarkerDirective, MoveOutcome, Rejection, RuleKind};
pub use policy::{CreditThreshold, FixedPlacement, MovePolicy, RuleEnforcement};
pub use prerequisite::{Evaluation, Evaluator};
pub use review::review_schedule;
pub use session::PlanningSession;
pub use state::{PlanState, Standing, TransitionResult};

/// Validates that a course exists in the catalog.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns `DomainError::CourseNotFound` if the course is unknown.
pub fn validate_course_exists(catalog: &Catalog, course: &CourseId) -> Result<(), DomainError> {
    catalog.require(course).map(|_| ())
}

/// Validates that a semester exists in the schedule.
///
/// This is a read-only validation that does not create audit events.
///
/// # Errors
///
/// Returns `DomainError::SemesterNotFound` if the index is out of range.
pub fn validate_semester_exists(schedule: &Schedule, index: usize) -> Result<(), DomainError> {
    schedule.require_semester(index).map(|_| ())
}
