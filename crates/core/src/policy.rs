// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::outcome::RuleKind;
use course_plan_domain::CourseId;
use serde::{Deserialize, Serialize};

/// Whether a rule violation on the moved course stops the commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleEnforcement {
    /// The move commits and the course is marked with a warning.
    #[default]
    Advisory,
    /// The move is rejected when the moved course violates the rule.
    Blocking,
}

/// An earliest/latest semester window for a designated course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPlacement {
    /// The designated course.
    pub course: CourseId,
    /// The earliest allowed semester index.
    #[serde(default)]
    pub earliest: usize,
    /// The latest allowed semester index, if bounded.
    #[serde(default)]
    pub latest: Option<usize>,
}

impl FixedPlacement {
    /// Creates a placement window.
    #[must_use]
    pub fn new(course: &str, earliest: usize, latest: Option<usize>) -> Self {
        Self {
            course: CourseId::new(course),
            earliest,
            latest,
        }
    }

    /// Returns whether the course may sit in the semester at `index`.
    #[must_use]
    pub fn allows(&self, index: usize) -> bool {
        index >= self.earliest && self.latest.is_none_or(|latest| index <= latest)
    }

    /// Builds the warning text for a placement outside the window.
    #[must_use]
    pub fn violation_reason(&self) -> String {
        match self.latest {
            Some(latest) if latest == self.earliest => format!(
                "{} has to be taken in semester {}",
                self.course,
                latest + 1
            ),
            Some(latest) if self.earliest == 0 => format!(
                "{} has to be taken in or before semester {}",
                self.course,
                latest + 1
            ),
            Some(latest) => format!(
                "{} has to be taken between semesters {} and {}",
                self.course,
                self.earliest + 1,
                latest + 1
            ),
            None => format!(
                "{} cannot be taken before semester {}",
                self.course,
                self.earliest + 1
            ),
        }
    }
}

/// A minimum cumulative credit standing for a designated course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditThreshold {
    /// The designated course.
    pub course: CourseId,
    /// Credits that must be earned through the course's semester.
    pub minimum_credits: u32,
}

impl CreditThreshold {
    /// Creates a credit threshold.
    #[must_use]
    pub fn new(course: &str, minimum_credits: u32) -> Self {
        Self {
            course: CourseId::new(course),
            minimum_credits,
        }
    }
}

/// The rule configuration for a planning session.
///
/// The defaults reproduce the curriculum's observed policy: every rule is
/// advisory, the two orientation courses have fixed windows, and the
/// capstone writing course needs 56 credits of standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovePolicy {
    /// Enforcement of unmet prerequisites on the moved course.
    pub prerequisite: RuleEnforcement,
    /// Enforcement of semester-offering mismatches on the moved course.
    pub offering: RuleEnforcement,
    /// Enforcement of fixed placement windows on the moved course.
    pub fixed_placement: RuleEnforcement,
    /// Designated courses with an earliest/latest semester.
    pub fixed_placements: Vec<FixedPlacement>,
    /// Designated courses with a minimum credit standing.
    pub credit_thresholds: Vec<CreditThreshold>,
}

impl MovePolicy {
    /// Creates a policy with every rule advisory and no designated courses.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            prerequisite: RuleEnforcement::Advisory,
            offering: RuleEnforcement::Advisory,
            fixed_placement: RuleEnforcement::Advisory,
            fixed_placements: Vec::new(),
            credit_thresholds: Vec::new(),
        }
    }

    /// Returns the enforcement configured for a rule.
    #[must_use]
    pub const fn enforcement(&self, rule: RuleKind) -> RuleEnforcement {
        match rule {
            RuleKind::Prerequisite => self.prerequisite,
            RuleKind::Offering => self.offering,
            RuleKind::FixedPlacement => self.fixed_placement,
        }
    }

    /// Returns the placement window for a course, if it has one.
    #[must_use]
    pub fn fixed_placement_for(&self, course: &CourseId) -> Option<&FixedPlacement> {
        self.fixed_placements
            .iter()
            .find(|placement| &placement.course == course)
    }

    /// Returns the minimum credit standing for a course, if it has one.
    #[must_use]
    pub fn credit_threshold_for(&self, course: &CourseId) -> Option<u32> {
        self.credit_thresholds
            .iter()
            .find(|threshold| &threshold.course == course)
            .map(|threshold| threshold.minimum_credits)
    }
}

impl Default for MovePolicy {
    fn default() -> Self {
        Self {
            fixed_placements: vec![
                FixedPlacement::new("INTDSC 1003", 0, Some(0)),
                FixedPlacement::new("CMP SCI 1000", 0, Some(1)),
            ],
            credit_thresholds: vec![CreditThreshold::new("ENGLISH 3130", 56)],
            ..Self::empty()
        }
    }
}
