// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::outcome::MoveOutcome;
use course_plan_audit::{AuditEvent, StateSnapshot};
use course_plan_domain::{Catalog, CourseId, CourseReference, Schedule, validate_schedule};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Academic standing carried into the plan from before its first semester.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Courses taken or waived before the plan; they satisfy prerequisites
    /// in every semester.
    #[serde(default)]
    pub completed: BTreeSet<CourseId>,
    /// Credit hours earned before the plan.
    #[serde(default)]
    pub earned_credits: u32,
}

impl Standing {
    /// Creates a standing with the given completed courses and credits.
    #[must_use]
    pub fn new(completed: &[&str], earned_credits: u32) -> Self {
        Self {
            completed: completed.iter().map(|id| CourseId::new(id)).collect(),
            earned_credits,
        }
    }

    /// Returns whether the course was completed before the plan.
    #[must_use]
    pub fn is_completed(&self, course: &CourseId) -> bool {
        self.completed.contains(course)
    }
}

/// The mutable side of a planning session: the schedule and the standing it
/// builds on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanState {
    /// The semesters and their placed courses.
    pub schedule: Schedule,
    /// Prior coursework.
    pub standing: Standing,
}

impl PlanState {
    /// Creates a plan state without validating it against a catalog.
    #[must_use]
    pub const fn new(schedule: Schedule, standing: Standing) -> Self {
        Self { schedule, standing }
    }

    /// Creates a plan state after checking the schedule against the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule places an unknown course, carries a
    /// wrong credit value, duplicates a non-elective course, or places a
    /// completed course.
    pub fn load(
        catalog: &Catalog,
        schedule: Schedule,
        standing: Standing,
    ) -> Result<Self, CoreError> {
        validate_schedule(&schedule, catalog, &standing.completed)?;
        Ok(Self { schedule, standing })
    }

    /// Returns the required courses that are neither placed nor completed,
    /// in catalog order.
    #[must_use]
    pub fn unplaced<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CourseReference> {
        catalog
            .required_courses()
            .filter(|course| {
                !self.standing.is_completed(&course.id)
                    && self.schedule.locate(&course.id).is_none()
            })
            .collect()
    }

    /// Summarises the schedule for the audit trail.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::of_schedule(&self.schedule)
    }
}

/// The result of a move attempt.
///
/// A committed move carries the new state and exactly one audit event. A
/// rejected move carries an unchanged copy of the input state and no event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the attempt.
    pub new_state: PlanState,
    /// What the presentation layer should show.
    pub outcome: MoveOutcome,
    /// The audit record of a committed move.
    pub audit_event: Option<AuditEvent>,
}

impl TransitionResult {
    /// Creates a result that leaves the state untouched.
    #[must_use]
    pub const fn unchanged(state: PlanState, outcome: MoveOutcome) -> Self {
        Self {
            new_state: state,
            outcome,
            audit_event: None,
        }
    }
}
