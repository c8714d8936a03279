// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::policy::MovePolicy;
use crate::state::Standing;
use course_plan_domain::{Catalog, CourseId, CourseReference, PrerequisiteTerm, Schedule};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The verdict of a prerequisite evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the course may sit in the target semester.
    pub satisfied: bool,
    /// Why it may not; `None` when satisfied.
    pub reason: Option<String>,
}

impl Evaluation {
    /// A satisfied evaluation.
    #[must_use]
    pub const fn satisfied() -> Self {
        Self {
            satisfied: true,
            reason: None,
        }
    }

    /// An unsatisfied evaluation with a reason.
    #[must_use]
    pub const fn unsatisfied(reason: String) -> Self {
        Self {
            satisfied: false,
            reason: Some(reason),
        }
    }
}

/// Decides whether a course's prerequisites hold at a semester of a
/// schedule.
///
/// The evaluator borrows everything it reads and never mutates; cascade
/// checks call it repeatedly against the same hypothetical schedule.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    policy: &'a MovePolicy,
    standing: &'a Standing,
}

/// Courses and credits visible from one target semester.
struct SemesterView<'s> {
    prior: HashSet<&'s CourseId>,
    concurrent: HashSet<&'s CourseId>,
    credits_through_target: u32,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for a session.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, policy: &'a MovePolicy, standing: &'a Standing) -> Self {
        Self {
            catalog,
            policy,
            standing,
        }
    }

    /// Evaluates `course` as if placed in semester `target` of `schedule`.
    ///
    /// Prerequisite terms are walked in order and the first satisfied term
    /// wins. A course with no terms is satisfied. A credit threshold failure
    /// overrides the term outcome.
    #[must_use]
    pub fn evaluate(
        &self,
        course: &CourseReference,
        target: usize,
        schedule: &Schedule,
    ) -> Evaluation {
        let view: SemesterView<'_> = self.view(target, schedule);

        let shortfall: Option<u32> = self
            .policy
            .credit_threshold_for(&course.id)
            .filter(|&minimum| view.credits_through_target < minimum);
        if let Some(minimum) = shortfall {
            return Evaluation::unsatisfied(format!(
                "{} requires at least {minimum} credit hours completed through the selected semester ({} scheduled)",
                course.id, view.credits_through_target
            ));
        }

        let mut last_reason: Option<String> = None;
        for term in &course.prerequisites {
            if term_satisfied(course, term, &view) {
                return Evaluation::satisfied();
            }
            last_reason = Some(format!(
                "{} prerequisite ({term}) has to be completed prior to the selected semester",
                course.id
            ));
        }

        last_reason.map_or_else(Evaluation::satisfied, Evaluation::unsatisfied)
    }

    fn view<'s>(&'s self, target: usize, schedule: &'s Schedule) -> SemesterView<'s> {
        let mut prior: HashSet<&'s CourseId> = self.standing.completed.iter().collect();
        let mut concurrent: HashSet<&'s CourseId> = HashSet::new();

        for semester in schedule.semesters().iter().take(target.saturating_add(1)) {
            for entry in semester.courses() {
                if semester.semester_index == target {
                    concurrent.insert(&entry.course);
                } else if !self.catalog.is_elective(&entry.course) {
                    prior.insert(&entry.course);
                }
            }
        }

        SemesterView {
            prior,
            concurrent,
            credits_through_target: self
                .standing
                .earned_credits
                .saturating_add(schedule.credits_through(target)),
        }
    }
}

fn term_satisfied(
    course: &CourseReference,
    term: &PrerequisiteTerm,
    view: &SemesterView<'_>,
) -> bool {
    term.members().iter().any(|member| {
        view.prior.contains(member)
            || (view.concurrent.contains(member) && course.allows_concurrent(member))
    })
}
