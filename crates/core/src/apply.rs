// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::MoveRequest;
use crate::error::CoreError;
use crate::outcome::{CreditUpdate, MarkerDirective, MoveOutcome, Rejection};
use crate::policy::MovePolicy;
use crate::prerequisite::Evaluator;
use crate::rules::{
    blocking_rule, cascade_directives, fixed_placement_directive, offering_directive,
    prerequisite_directive,
};
use crate::state::{PlanState, TransitionResult};
use course_plan_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use course_plan_domain::{
    Catalog, CourseEntry, CourseReference, DomainError, Schedule, SemesterEntry,
};
use tracing::{debug, info, warn};

/// The checked move before anything is committed.
struct MovePlan {
    outcome: MoveOutcome,
    /// The post-move schedule; `None` when the move is rejected.
    schedule: Option<Schedule>,
}

/// Applies a move request to a plan state, returning a new state.
///
/// This function is pure: the input state is never mutated. The checks run
/// in order (fixed placement, duplicate, offering, prerequisite, dependent
/// cascade) against the hypothetical post-move schedule. Rule violations
/// become warning directives and, unless the policy marks the rule as
/// blocking, the move still commits.
///
/// # Arguments
///
/// * `catalog` - The session catalog
/// * `policy` - The rule configuration
/// * `state` - The current plan state
/// * `request` - The move to apply
/// * `actor` - The party performing the move
/// * `cause` - The trigger for the move
///
/// # Returns
///
/// * `Ok(TransitionResult)` with an audit event if the move committed
/// * `Ok(TransitionResult)` with the unchanged state if it was redundant or
///   blocked
///
/// # Errors
///
/// Returns an error if:
/// - The course is not in the catalog
/// - Either semester does not exist
/// - The course is not placed in the source semester
/// - The request's credit value disagrees with the placed entry
pub fn apply_move(
    catalog: &Catalog,
    policy: &MovePolicy,
    state: &PlanState,
    request: MoveRequest,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let plan: MovePlan = plan_move(catalog, policy, state, &request)?;

    let Some(schedule) = plan.schedule else {
        return Ok(TransitionResult::unchanged(state.clone(), plan.outcome));
    };

    let before: StateSnapshot = state.to_snapshot();
    let new_state: PlanState = PlanState::new(schedule, state.standing.clone());
    let after: StateSnapshot = new_state.to_snapshot();

    let action: Action = Action::new(
        String::from("MoveCourse"),
        Some(format!(
            "Moved '{}' from semester {} to semester {}",
            request.course, request.source, request.target
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        after,
        vec![request.source, request.target],
    );

    info!(
        course = %request.course,
        source = request.source,
        target = request.target,
        warnings = plan.outcome.warnings().count(),
        "Applied move"
    );

    Ok(TransitionResult {
        new_state,
        outcome: plan.outcome,
        audit_event: Some(audit_event),
    })
}

/// Runs every check of a move without committing it.
///
/// The returned outcome is the one [`apply_move`] would produce for the
/// same request.
///
/// # Errors
///
/// Returns the same structural errors as [`apply_move`].
pub fn preview_move(
    catalog: &Catalog,
    policy: &MovePolicy,
    state: &PlanState,
    request: &MoveRequest,
) -> Result<MoveOutcome, CoreError> {
    Ok(plan_move(catalog, policy, state, request)?.outcome)
}

fn plan_move(
    catalog: &Catalog,
    policy: &MovePolicy,
    state: &PlanState,
    request: &MoveRequest,
) -> Result<MovePlan, CoreError> {
    let course: &CourseReference = catalog.require(&request.course)?;
    let source: &SemesterEntry = state.schedule.require_semester(request.source)?;
    let target: &SemesterEntry = state.schedule.require_semester(request.target)?;

    let placed: &CourseEntry = source
        .entry(&course.id)
        .ok_or_else(|| DomainError::CourseNotInSemester {
            course: course.id.clone(),
            semester_index: request.source,
        })?;
    if placed.credits != request.credits {
        return Err(DomainError::CreditValueMismatch {
            course: course.id.clone(),
            expected: placed.credits,
            found: request.credits,
        }
        .into());
    }

    let mut directives: Vec<MarkerDirective> = Vec::new();
    directives.extend(fixed_placement_directive(policy, course, request.target));

    if request.source == request.target || (!course.is_elective && target.contains(&course.id)) {
        debug!(
            course = %course.id,
            semester = request.target,
            "Ignoring redundant move"
        );
        return Ok(MovePlan {
            outcome: MoveOutcome::redundant(),
            schedule: None,
        });
    }

    if !course.is_elective {
        directives.push(offering_directive(course, target.semester_type));
    }

    let mut hypothetical: Schedule = state.schedule.clone();
    hypothetical.move_entry(&course.id, request.source, request.target)?;

    let evaluator: Evaluator<'_> = Evaluator::new(catalog, policy, &state.standing);
    if !course.is_elective {
        directives.push(prerequisite_directive(
            &evaluator,
            course,
            request.target,
            &hypothetical,
        ));
    }
    directives.extend(cascade_directives(
        catalog,
        &evaluator,
        &course.id,
        &hypothetical,
    ));

    if let Some(rule) = blocking_rule(policy, &course.id, &directives) {
        warn!(course = %course.id, %rule, "Move blocked by policy");
        return Ok(MovePlan {
            outcome: MoveOutcome {
                applied: false,
                rejection: Some(Rejection::Blocked { rule }),
                directives,
                credit_updates: Vec::new(),
            },
            schedule: None,
        });
    }

    let credit_updates: Vec<CreditUpdate> = [request.source, request.target]
        .into_iter()
        .filter_map(|index| hypothetical.semester(index))
        .map(|semester| CreditUpdate {
            semester_index: semester.semester_index,
            credit_total: semester.credit_total(),
        })
        .collect();

    Ok(MovePlan {
        outcome: MoveOutcome {
            applied: true,
            rejection: None,
            directives,
            credit_updates,
        },
        schedule: Some(hypothetical),
    })
}
