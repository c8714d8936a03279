// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use course_plan_domain::CourseId;
use serde::{Deserialize, Serialize};

/// The curriculum rule a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Earliest/latest semester window of a designated course.
    FixedPlacement,
    /// Semester type the course is offered in.
    Offering,
    /// Prerequisite terms and credit standing.
    Prerequisite,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedPlacement => write!(f, "fixed placement"),
            Self::Offering => write!(f, "offering"),
            Self::Prerequisite => write!(f, "prerequisite"),
        }
    }
}

/// Advisory state for one rule on one course item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "marker", rename_all = "snake_case")]
pub enum Marker {
    /// Show a warning with the given reason.
    Warn {
        /// Human-readable reason.
        reason: String,
    },
    /// Remove any warning for this rule.
    Clear,
}

/// An instruction to the presentation layer to mark or clear a course item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerDirective {
    /// The course item the directive applies to.
    pub course: CourseId,
    /// The rule the marker tracks.
    pub rule: RuleKind,
    /// The marker state.
    #[serde(flatten)]
    pub marker: Marker,
}

impl MarkerDirective {
    /// Creates a warning directive.
    #[must_use]
    pub const fn warn(course: CourseId, rule: RuleKind, reason: String) -> Self {
        Self {
            course,
            rule,
            marker: Marker::Warn { reason },
        }
    }

    /// Creates a clear directive.
    #[must_use]
    pub const fn clear(course: CourseId, rule: RuleKind) -> Self {
        Self {
            course,
            rule,
            marker: Marker::Clear,
        }
    }

    /// Returns whether the directive is a warning.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.marker, Marker::Warn { .. })
    }

    /// Returns the warning reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match &self.marker {
            Marker::Warn { reason } => Some(reason),
            Marker::Clear => None,
        }
    }
}

/// Why a move did not commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The course was dropped where it already is.
    Redundant,
    /// A rule configured as blocking failed for the moved course.
    Blocked {
        /// The first blocking rule that failed.
        rule: RuleKind,
    },
}

/// The new credit total of a semester touched by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditUpdate {
    /// The semester index.
    pub semester_index: usize,
    /// The recomputed credit total.
    pub credit_total: u32,
}

/// Everything the presentation layer needs after a move attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the schedule changed.
    pub applied: bool,
    /// Present when `applied` is false.
    pub rejection: Option<Rejection>,
    /// Mark/clear directives for the moved course and its dependents.
    pub directives: Vec<MarkerDirective>,
    /// Credit totals of the source and target semesters after the move.
    pub credit_updates: Vec<CreditUpdate>,
}

impl MoveOutcome {
    /// The silent no-op outcome.
    #[must_use]
    pub const fn redundant() -> Self {
        Self {
            applied: false,
            rejection: Some(Rejection::Redundant),
            directives: Vec::new(),
            credit_updates: Vec::new(),
        }
    }

    /// Returns the warning directives.
    pub fn warnings(&self) -> impl Iterator<Item = &MarkerDirective> {
        self.directives.iter().filter(|directive| directive.is_warning())
    }

    /// Returns the directives that apply to one course.
    pub fn directives_for<'a>(
        &'a self,
        course: &'a CourseId,
    ) -> impl Iterator<Item = &'a MarkerDirective> {
        self.directives
            .iter()
            .filter(move |directive| &directive.course == course)
    }
}
