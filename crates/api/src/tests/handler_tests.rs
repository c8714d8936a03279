// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    FailingRepository, create_move, create_test_actor, create_test_catalog, create_test_cause,
    create_test_repository, create_test_session,
};
use crate::{
    ApiError, EvaluatePlacementRequest, EvaluatePlacementResponse, InitPlanRequest,
    InitPlanResponse, ListDependentsResponse, MoveCourseRequest, MoveCourseResponse,
    ReviewPlanResponse, UnplacedCoursesResponse, evaluate_placement, init_plan, list_dependents,
    list_unplaced, load_session, move_course, review_plan,
};
use course_plan::{MovePolicy, PlanningSession, Rejection, RuleKind, Standing};
use course_plan_domain::{Catalog, CourseId, Schedule, SemesterType};
use course_plan_persistence::{InMemoryRepository, ScheduleRepository};

#[test]
fn test_move_course_persists_schedule_and_audit() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);

    let response: MoveCourseResponse = move_course(
        &mut session,
        &mut repository,
        create_move("CMP SCI 2250", 1, 2),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert!(response.applied);
    assert_eq!(response.message, "Moved 'CMP SCI 2250' to semester 2 with 0 warning(s)");
    let stored: Schedule = repository.load().unwrap();
    assert_eq!(stored, response.schedule);
    assert_eq!(stored.locate(&CourseId::new("CMP SCI 2250")), Some(2));
    assert_eq!(repository.audit_log().len(), 1);
    assert_eq!(repository.audit_log()[0].event.action.name, "MoveCourse");
}

#[test]
fn test_move_course_reports_cascade_warning() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);

    let response: MoveCourseResponse = move_course(
        &mut session,
        &mut repository,
        create_move("CMP SCI 1250", 0, 2),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert!(response.applied);
    let warned: Vec<&str> = response
        .directives
        .iter()
        .filter(|directive| directive.is_warning())
        .map(|directive| directive.course.as_str())
        .collect();
    assert_eq!(warned, vec!["CMP SCI 2250"]);
}

#[test]
fn test_redundant_move_stores_nothing() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);
    let before: Schedule = repository.load().unwrap();

    let response: MoveCourseResponse = move_course(
        &mut session,
        &mut repository,
        create_move("CMP SCI 1250", 0, 0),
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert!(!response.applied);
    assert_eq!(response.rejection, Some(Rejection::Redundant));
    assert_eq!(repository.load().unwrap(), before);
    assert!(repository.audit_log().is_empty());
}

#[test]
fn test_move_of_unknown_course_is_not_found() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);

    let result: Result<MoveCourseResponse, ApiError> = move_course(
        &mut session,
        &mut repository,
        create_move("PHYSICS 2111", 0, 1),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Course"
    ));
}

#[test]
fn test_move_with_blank_course_id_is_invalid_input() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);

    let result: Result<MoveCourseResponse, ApiError> = move_course(
        &mut session,
        &mut repository,
        create_move("  ", 0, 1),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "course_id"
    ));
}

#[test]
fn test_move_with_wrong_credit_value_is_rule_violation() {
    let catalog: Catalog = create_test_catalog();
    let mut repository: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&repository);
    let mut request: MoveCourseRequest = create_move("CMP SCI 1250", 0, 1);
    request.credit_value = 4;

    let result: Result<MoveCourseResponse, ApiError> = move_course(
        &mut session,
        &mut repository,
        request,
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "credit_value_consistency"
    ));
}

#[test]
fn test_evaluate_placement_of_placed_course_includes_preview() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let response: EvaluatePlacementResponse = evaluate_placement(
        &session,
        &EvaluatePlacementRequest {
            course_id: String::from("CMP SCI 2250"),
            target_semester_index: 0,
        },
    )
    .unwrap();

    assert!(!response.satisfied);
    assert!(
        response
            .directives
            .iter()
            .any(|directive| directive.rule == RuleKind::Prerequisite && directive.is_warning())
    );
    // Nothing moved
    assert_eq!(
        session.schedule().locate(&CourseId::new("CMP SCI 2250")),
        Some(1)
    );
}

#[test]
fn test_evaluate_placement_of_unplaced_course() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let response: EvaluatePlacementResponse = evaluate_placement(
        &session,
        &EvaluatePlacementRequest {
            course_id: String::from("CMP SCI 2261"),
            target_semester_index: 1,
        },
    )
    .unwrap();

    assert!(response.satisfied);
    assert!(response.directives.is_empty());
}

#[test]
fn test_list_dependents_reports_placements() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let response: ListDependentsResponse = list_dependents(&session, "CMP SCI 1250").unwrap();

    let pairs: Vec<(&str, Option<usize>)> = response
        .dependents
        .iter()
        .map(|dependent| (dependent.course_id.as_str(), dependent.semester_index))
        .collect();
    assert_eq!(
        pairs,
        vec![("CMP SCI 2250", Some(1)), ("CMP SCI 2261", None)]
    );
}

#[test]
fn test_list_dependents_of_unknown_course_is_not_found() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let result: Result<ListDependentsResponse, ApiError> = list_dependents(&session, "ART 1000");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_review_plan_counts_warnings() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let response: ReviewPlanResponse = review_plan(&session).unwrap();

    assert_eq!(response.warning_count, 0);
    assert_eq!(response.directives.len(), 4);
    assert_eq!(response.total_credits, 6);
}

#[test]
fn test_list_unplaced_in_catalog_order() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);
    let session: PlanningSession = create_test_session(&repository);

    let response: UnplacedCoursesResponse = list_unplaced(&session);

    let ids: Vec<&str> = response
        .courses
        .iter()
        .map(|course| course.course_id.as_str())
        .collect();
    assert_eq!(ids, vec!["CMP SCI 2261", "MATH 1320"]);
}

#[test]
fn test_load_session_rejects_completed_course_in_schedule() {
    let catalog: Catalog = create_test_catalog();
    let repository: InMemoryRepository = create_test_repository(&catalog);

    let result: Result<PlanningSession, ApiError> = load_session(
        &repository,
        catalog,
        MovePolicy::default(),
        Standing::new(&["CMP SCI 1250"], 3),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "completed_not_placed"
    ));
}

#[test]
fn test_load_session_without_schedule_is_not_found() {
    let repository: InMemoryRepository = InMemoryRepository::new();

    let result: Result<PlanningSession, ApiError> = load_session(
        &repository,
        create_test_catalog(),
        MovePolicy::default(),
        Standing::default(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Schedule"
    ));
}

#[test]
fn test_init_plan_stores_rotation() {
    let mut repository: InMemoryRepository = InMemoryRepository::new();

    let response: InitPlanResponse = init_plan(
        &mut repository,
        &create_test_catalog(),
        &Standing::default(),
        &InitPlanRequest {
            first_semester: String::from("Spring"),
            include_summer: true,
            semester_count: 4,
            place_required: false,
        },
    )
    .unwrap();

    let types: Vec<SemesterType> = response
        .schedule
        .semesters()
        .iter()
        .map(|semester| semester.semester_type)
        .collect();
    assert_eq!(
        types,
        vec![
            SemesterType::Spring,
            SemesterType::Summer,
            SemesterType::Fall,
            SemesterType::Spring
        ]
    );
    assert_eq!(repository.load().unwrap(), response.schedule);
}

#[test]
fn test_init_plan_rejects_unknown_term() {
    let mut repository: InMemoryRepository = InMemoryRepository::new();

    let result: Result<InitPlanResponse, ApiError> = init_plan(
        &mut repository,
        &create_test_catalog(),
        &Standing::default(),
        &InitPlanRequest {
            first_semester: String::from("Winter"),
            include_summer: false,
            semester_count: 8,
            place_required: false,
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "semester_type"
    ));
}

#[test]
fn test_init_plan_places_required_courses_in_first_semester() {
    let mut repository: InMemoryRepository = InMemoryRepository::new();

    let response: InitPlanResponse = init_plan(
        &mut repository,
        &create_test_catalog(),
        &Standing::new(&["CMP SCI 1250"], 3),
        &InitPlanRequest {
            first_semester: String::from("Fall"),
            include_summer: false,
            semester_count: 2,
            place_required: true,
        },
    )
    .unwrap();

    let first: Vec<&str> = response
        .schedule
        .semester(0)
        .unwrap()
        .courses()
        .iter()
        .map(|entry| entry.course.as_str())
        .collect();
    assert_eq!(first, vec!["CMP SCI 2250", "CMP SCI 2261", "MATH 1320"]);
    assert_eq!(response.schedule.semester(0).unwrap().credit_total(), 9);
}

#[test]
fn test_init_plan_cannot_place_into_empty_plan() {
    let mut repository: InMemoryRepository = InMemoryRepository::new();

    let result: Result<InitPlanResponse, ApiError> = init_plan(
        &mut repository,
        &create_test_catalog(),
        &Standing::default(),
        &InitPlanRequest {
            first_semester: String::from("Fall"),
            include_summer: false,
            semester_count: 0,
            place_required: true,
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    assert!(repository.load().is_err());
}

#[test]
fn test_move_course_leaves_session_unchanged_when_save_fails() {
    let catalog: Catalog = create_test_catalog();
    let inner: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&inner);
    let before: Schedule = session.schedule().clone();
    let mut repository: FailingRepository = FailingRepository {
        inner,
        fail_save: true,
        fail_audit: false,
    };

    let result: Result<MoveCourseResponse, ApiError> = move_course(
        &mut session,
        &mut repository,
        create_move("CMP SCI 2250", 1, 2),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
    assert_eq!(session.schedule(), &before);
    assert!(session.history().is_empty());
    assert_eq!(repository.inner.load().unwrap(), before);
}

#[test]
fn test_move_course_leaves_session_unchanged_when_audit_fails() {
    let catalog: Catalog = create_test_catalog();
    let inner: InMemoryRepository = create_test_repository(&catalog);
    let mut session: PlanningSession = create_test_session(&inner);
    let before: Schedule = session.schedule().clone();
    let mut repository: FailingRepository = FailingRepository {
        inner,
        fail_save: false,
        fail_audit: true,
    };

    let result: Result<MoveCourseResponse, ApiError> = move_course(
        &mut session,
        &mut repository,
        create_move("CMP SCI 2250", 1, 2),
        create_test_actor(),
        create_test_cause(),
    );

    assert!(result.is_err());
    assert_eq!(session.schedule(), &before);
    assert!(session.history().is_empty());
}
