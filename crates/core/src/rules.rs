// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-rule directive builders shared by move coordination and plan review.

use crate::outcome::{MarkerDirective, RuleKind};
use crate::policy::{FixedPlacement, MovePolicy, RuleEnforcement};
use crate::prerequisite::{Evaluation, Evaluator};
use course_plan_domain::{Catalog, CourseId, CourseReference, Schedule, SemesterType};

/// Checks a designated course against its placement window.
///
/// Returns `None` for courses without a window.
pub fn fixed_placement_directive(
    policy: &MovePolicy,
    course: &CourseReference,
    semester_index: usize,
) -> Option<MarkerDirective> {
    let placement: &FixedPlacement = policy.fixed_placement_for(&course.id)?;
    if placement.allows(semester_index) {
        Some(MarkerDirective::clear(
            course.id.clone(),
            RuleKind::FixedPlacement,
        ))
    } else {
        Some(MarkerDirective::warn(
            course.id.clone(),
            RuleKind::FixedPlacement,
            placement.violation_reason(),
        ))
    }
}

pub fn offering_directive(
    course: &CourseReference,
    semester_type: SemesterType,
) -> MarkerDirective {
    if course.is_offered_in(semester_type) {
        return MarkerDirective::clear(course.id.clone(), RuleKind::Offering);
    }

    let offered: Vec<&str> = course
        .semesters_offered
        .iter()
        .map(SemesterType::as_str)
        .collect();
    MarkerDirective::warn(
        course.id.clone(),
        RuleKind::Offering,
        format!(
            "{} is not offered in {semester_type} semesters (offered: {})",
            course.id,
            offered.join(", ")
        ),
    )
}

pub fn prerequisite_directive(
    evaluator: &Evaluator<'_>,
    course: &CourseReference,
    semester_index: usize,
    schedule: &Schedule,
) -> MarkerDirective {
    let evaluation: Evaluation = evaluator.evaluate(course, semester_index, schedule);
    match evaluation.reason {
        Some(reason) if !evaluation.satisfied => {
            MarkerDirective::warn(course.id.clone(), RuleKind::Prerequisite, reason)
        }
        _ => MarkerDirective::clear(course.id.clone(), RuleKind::Prerequisite),
    }
}

/// Re-evaluates every placed, non-elective dependent of `moved` at its own
/// semester.
pub fn cascade_directives(
    catalog: &Catalog,
    evaluator: &Evaluator<'_>,
    moved: &CourseId,
    schedule: &Schedule,
) -> Vec<MarkerDirective> {
    catalog
        .dependents_of(moved)
        .iter()
        .filter_map(|dependent| catalog.get(dependent))
        .filter(|dependent| !dependent.is_elective)
        .filter_map(|dependent| {
            schedule.locate(&dependent.id).map(|semester_index| {
                prerequisite_directive(evaluator, dependent, semester_index, schedule)
            })
        })
        .collect()
}

/// Returns the first rule that warns on `course` and is configured as
/// blocking.
pub fn blocking_rule(
    policy: &MovePolicy,
    course: &CourseId,
    directives: &[MarkerDirective],
) -> Option<RuleKind> {
    directives
        .iter()
        .filter(|directive| &directive.course == course && directive.is_warning())
        .map(|directive| directive.rule)
        .find(|&rule| policy.enforcement(rule) == RuleEnforcement::Blocking)
}
