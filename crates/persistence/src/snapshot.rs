// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use course_plan::{MovePolicy, Standing};
use course_plan_domain::{Schedule, SemesterEntry};

/// Parses a schedule snapshot.
///
/// Both the current keys (`semesterIndex`, `semesterType`, `creditTotal`,
/// `courses`) and the legacy keys are accepted.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the indices are not
/// contiguous from zero, or a credit total disagrees with its courses.
pub fn parse_schedule(json: &str) -> Result<Schedule, PersistenceError> {
    let semesters: Vec<SemesterEntry> = serde_json::from_str(json)?;
    Ok(Schedule::new(semesters)?)
}

/// Renders a schedule snapshot with the current keys.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_schedule(schedule: &Schedule) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Parses a standing document: `{"completed": [...], "earned_credits": n}`.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn parse_standing(json: &str) -> Result<Standing, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a policy document. Missing fields take their defaults.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn parse_policy(json: &str) -> Result<MovePolicy, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}
