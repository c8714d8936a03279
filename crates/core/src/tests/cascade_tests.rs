// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    advisory_policy, create_move_request, create_test_actor, create_test_catalog,
    create_test_cause, create_test_state, semester_courses,
};
use crate::{
    MarkerDirective, MovePolicy, PlanState, RuleEnforcement, RuleKind, TransitionResult,
    apply_move,
};
use course_plan_domain::{Catalog, CourseId};

fn move_course(
    catalog: &Catalog,
    policy: &MovePolicy,
    state: &PlanState,
    course: &str,
    source: usize,
    target: usize,
) -> TransitionResult {
    apply_move(
        catalog,
        policy,
        state,
        create_move_request(catalog, course, source, target),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap()
}

fn dependent_directives<'a>(
    transition: &'a TransitionResult,
    course: &str,
) -> Vec<&'a MarkerDirective> {
    transition
        .outcome
        .directives
        .iter()
        .filter(|directive| directive.course.as_str() == course)
        .collect()
}

#[test]
fn test_moving_prerequisite_after_dependent_warns_dependent() {
    let catalog: Catalog = create_test_catalog();
    let state: PlanState = create_test_state(&catalog, &[&["A"], &["X"], &[]]);

    let transition: TransitionResult =
        move_course(&catalog, &advisory_policy(), &state, "A", 0, 2);

    let directives: Vec<&MarkerDirective> = dependent_directives(&transition, "X");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].rule, RuleKind::Prerequisite);
    assert!(directives[0].is_warning());
    // The dependent stays where it was
    assert_eq!(semester_courses(&transition.new_state, 1), vec!["X"]);
    assert_eq!(
        transition.new_state.schedule.locate(&CourseId::new("X")),
        Some(1)
    );
}

#[test]
fn test_moving_prerequisite_earlier_clears_dependent() {
    let catalog: Catalog = create_test_catalog();
    let state: PlanState = create_test_state(&catalog, &[&[], &["X"], &["A"]]);

    let transition: TransitionResult =
        move_course(&catalog, &advisory_policy(), &state, "A", 2, 0);

    let directives: Vec<&MarkerDirective> = dependent_directives(&transition, "X");
    assert_eq!(directives.len(), 1);
    assert!(!directives[0].is_warning());
}

#[test]
fn test_cascade_checks_every_placed_dependent() {
    let catalog: Catalog = create_test_catalog();
    let state: PlanState =
        create_test_state(&catalog, &[&["A"], &["X", "Y"], &["Z", "ENGLISH 3130"], &[]]);

    let transition: TransitionResult =
        move_course(&catalog, &advisory_policy(), &state, "A", 0, 3);

    let warned: Vec<&str> = transition
        .outcome
        .warnings()
        .filter(|directive| directive.rule == RuleKind::Prerequisite)
        .map(|directive| directive.course.as_str())
        .collect();
    // W is a dependent of A but is not placed
    assert_eq!(warned, vec!["X", "Y", "Z", "ENGLISH 3130"]);
}

#[test]
fn test_cascade_skips_unplaced_dependents() {
    let catalog: Catalog = create_test_catalog();
    let state: PlanState = create_test_state(&catalog, &[&["A"], &[]]);

    let transition: TransitionResult =
        move_course(&catalog, &advisory_policy(), &state, "A", 0, 1);

    assert!(
        transition
            .outcome
            .directives
            .iter()
            .all(|directive| directive.course.as_str() == "A")
    );
}

#[test]
fn test_dependent_failure_never_blocks_moved_course() {
    let catalog: Catalog = create_test_catalog();
    let policy: MovePolicy = MovePolicy {
        prerequisite: RuleEnforcement::Blocking,
        ..MovePolicy::default()
    };
    let state: PlanState = create_test_state(&catalog, &[&["A"], &["X"], &[]]);

    let transition: TransitionResult = move_course(&catalog, &policy, &state, "A", 0, 2);

    assert!(transition.outcome.applied);
    assert!(dependent_directives(&transition, "X")[0].is_warning());
}

#[test]
fn test_cascade_uses_post_move_arrangement() {
    let catalog: Catalog = create_test_catalog();
    // Y allows A concurrently; moving A into Y's semester keeps Y satisfied
    let state: PlanState = create_test_state(&catalog, &[&["A"], &["Y"]]);

    let transition: TransitionResult =
        move_course(&catalog, &advisory_policy(), &state, "A", 0, 1);

    let directives: Vec<&MarkerDirective> = dependent_directives(&transition, "Y");
    assert_eq!(directives.len(), 1);
    assert!(!directives[0].is_warning());
}
