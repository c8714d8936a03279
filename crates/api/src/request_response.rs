// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names follow the camelCase keys the presentation layer sends and
//! reads.

use course_plan::{CreditUpdate, MarkerDirective, Rejection};
use course_plan_domain::Schedule;
use serde::{Deserialize, Serialize};

/// API request to move a course, as emitted by a drag-release gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCourseRequest {
    /// The course being moved.
    pub course_id: String,
    /// The credit value shown on the dragged item.
    pub credit_value: u8,
    /// The display name shown on the dragged item.
    #[serde(default)]
    pub display_name: String,
    /// The semester the course is leaving.
    pub source_semester_index: usize,
    /// The semester the course was dropped on.
    pub target_semester_index: usize,
}

/// API response for a move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCourseResponse {
    /// Whether the schedule changed.
    pub applied: bool,
    /// Why the move did not apply.
    pub rejection: Option<Rejection>,
    /// Marker directives for the moved course and its dependents.
    pub directives: Vec<MarkerDirective>,
    /// New credit totals of the touched semesters.
    pub credit_updates: Vec<CreditUpdate>,
    /// The schedule after the attempt.
    pub schedule: Schedule,
    /// A summary message.
    pub message: String,
}

/// API request to check a course at a semester without moving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePlacementRequest {
    /// The course to check.
    pub course_id: String,
    /// The semester to check it against.
    pub target_semester_index: usize,
}

/// API response for a placement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePlacementResponse {
    /// The course checked.
    pub course_id: String,
    /// The semester checked.
    pub target_semester_index: usize,
    /// Whether the prerequisites hold there.
    pub satisfied: bool,
    /// Why they do not.
    pub reason: Option<String>,
    /// The directives moving the course there would produce; empty when the
    /// course is not placed.
    pub directives: Vec<MarkerDirective>,
}

/// A course that lists another as a prerequisite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentInfo {
    /// The dependent course.
    pub course_id: String,
    /// Where it is placed, if it is.
    pub semester_index: Option<usize>,
}

/// API response listing the dependents of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDependentsResponse {
    /// The prerequisite course.
    pub course_id: String,
    /// Its dependents in catalog order.
    pub dependents: Vec<DependentInfo>,
}

/// API response for a whole-plan review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPlanResponse {
    /// One directive per applicable rule per placed course.
    pub directives: Vec<MarkerDirective>,
    /// The number of warning directives.
    pub warning_count: usize,
    /// The credit total of the whole plan.
    pub total_credits: u32,
}

/// Summary of a catalog course for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// The course identifier.
    pub course_id: String,
    /// The display name.
    pub name: String,
    /// The credit value.
    pub credits: u8,
}

/// API response listing required courses not yet placed or completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnplacedCoursesResponse {
    /// The courses in catalog order.
    pub courses: Vec<CourseSummary>,
}

/// API request to start a fresh plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPlanRequest {
    /// The term of the first semester.
    pub first_semester: String,
    /// Whether summer semesters are part of the plan.
    pub include_summer: bool,
    /// The number of semesters.
    pub semester_count: usize,
    /// Whether to place every required course not yet completed into the
    /// first semester, which then serves as the unplaced bucket.
    #[serde(default)]
    pub place_required: bool,
}

/// API response for a fresh plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPlanResponse {
    /// The empty schedule.
    pub schedule: Schedule,
    /// A success message.
    pub message: String,
}
