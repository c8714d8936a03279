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
    clippy::all
)]

use course_plan_domain::{Schedule, SemesterEntry};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The kind of party editing a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// The student who owns the plan.
    Student,
    /// An advisor editing on the student's behalf.
    Advisor,
    /// An automated process such as an import.
    System,
}

/// Represents the party performing a plan change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// What kind of party this actor is.
    pub kind: ActorKind,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `kind` - The kind of party
    #[must_use]
    pub const fn new(id: String, kind: ActorKind) -> Self {
        Self { id, kind }
    }

    /// Creates a student actor.
    #[must_use]
    pub fn student(id: &str) -> Self {
        Self::new(id.to_string(), ActorKind::Student)
    }
}

/// Represents the trigger for a plan change, such as one drag-release
/// gesture or a scripted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, gesture ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this change
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the change that was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`MoveCourse`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact summary of a schedule at a point in time.
///
/// The summary records the number of semesters, the per-semester credit
/// totals and the number of placed courses. It is meant for human review of
/// the audit trail, not for restoring a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Summarises a schedule as
    /// `semesters=N,credits=[i:c,...],courses=M`.
    #[must_use]
    pub fn of_schedule(schedule: &Schedule) -> Self {
        let credits: Vec<String> = schedule
            .semesters()
            .iter()
            .map(|semester| format!("{}:{}", semester.semester_index, semester.credit_total()))
            .collect();
        let courses: usize = schedule
            .semesters()
            .iter()
            .map(|semester: &SemesterEntry| semester.courses().len())
            .sum();

        Self::new(format!(
            "semesters={},credits=[{}],courses={courses}",
            schedule.len(),
            credits.join(",")
        ))
    }
}

/// An immutable record of one committed plan change.
///
/// Every committed move produces exactly one audit event. Rejected and
/// redundant moves produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The plan before the change.
    pub before: StateSnapshot,
    /// The plan after the change.
    pub after: StateSnapshot,
    /// Indices of the semesters whose contents changed.
    pub semesters: Vec<usize>,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The plan before the change
    /// * `after` - The plan after the change
    /// * `semesters` - The semesters whose contents changed
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        semesters: Vec<usize>,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            semesters,
        }
    }
}
