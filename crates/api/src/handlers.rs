// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    CourseSummary, DependentInfo, EvaluatePlacementRequest, EvaluatePlacementResponse,
    InitPlanRequest, InitPlanResponse, ListDependentsResponse, MoveCourseRequest,
    MoveCourseResponse, ReviewPlanResponse, UnplacedCoursesResponse,
};
use course_plan::{
    Evaluation, MarkerDirective, MoveOutcome, MovePolicy, MoveRequest, PlanState,
    PlanningSession, Rejection, Standing, TransitionResult,
};
use course_plan_audit::{Actor, Cause};
use course_plan_domain::{Catalog, CourseEntry, CourseId, Schedule, SemesterType};
use course_plan_persistence::ScheduleRepository;
use tracing::{debug, info};

fn parse_course_id(value: &str) -> Result<CourseId, ApiError> {
    CourseId::parse(value).map_err(translate_domain_error)
}

/// Opens a planning session on the stored schedule.
///
/// The stored schedule is validated against the catalog and standing
/// before the session opens.
///
/// # Arguments
///
/// * `repository` - Where the schedule is stored
/// * `catalog` - The session catalog
/// * `policy` - The rule configuration
/// * `standing` - Prior coursework
///
/// # Errors
///
/// Returns an error if:
/// - No schedule is stored
/// - The stored schedule is malformed
/// - The schedule places unknown, duplicated or completed courses
pub fn load_session<R: ScheduleRepository>(
    repository: &R,
    catalog: Catalog,
    policy: MovePolicy,
    standing: Standing,
) -> Result<PlanningSession, ApiError> {
    let schedule: Schedule = repository.load().map_err(translate_persistence_error)?;
    let state: PlanState =
        PlanState::load(&catalog, schedule, standing).map_err(translate_core_error)?;

    info!(
        courses = catalog.len(),
        semesters = state.schedule.len(),
        "Opened planning session"
    );
    Ok(PlanningSession::new(catalog, policy, state))
}

/// Creates and stores a fresh plan following the term rotation.
///
/// With `place_required` set, every required course that is not completed
/// is placed into the first semester in catalog order.
///
/// # Errors
///
/// Returns an error if:
/// - The first semester is not Fall, Spring or Summer
/// - The rotation starts on Summer while summers are excluded
/// - Courses are to be placed but the plan has no semesters
/// - The schedule cannot be stored
pub fn init_plan<R: ScheduleRepository>(
    repository: &mut R,
    catalog: &Catalog,
    standing: &Standing,
    request: &InitPlanRequest,
) -> Result<InitPlanResponse, ApiError> {
    let first: SemesterType = request
        .first_semester
        .parse()
        .map_err(translate_domain_error)?;
    let mut schedule: Schedule =
        Schedule::with_rotation(first, request.include_summer, request.semester_count)
            .map_err(translate_domain_error)?;

    let mut placed: usize = 0;
    if request.place_required {
        for course in catalog.required_courses() {
            if standing.is_completed(&course.id) {
                continue;
            }
            schedule
                .place(0, CourseEntry::from_reference(course))
                .map_err(translate_domain_error)?;
            placed += 1;
        }
    }

    repository
        .save(&schedule)
        .map_err(translate_persistence_error)?;

    info!(
        semesters = schedule.len(),
        %first,
        include_summer = request.include_summer,
        placed,
        "Initialised plan"
    );
    Ok(InitPlanResponse {
        message: format!(
            "Created a plan of {} semesters starting in {first} with {placed} course(s) placed",
            schedule.len()
        ),
        schedule,
    })
}

/// Moves a course and, if the move applied, persists the new schedule and
/// its audit event.
///
/// This function:
/// - Translates the API request into a core move request
/// - Applies the move through the session
/// - Saves the schedule and appends the audit event on commit
/// - Translates any errors to API errors
///
/// # Arguments
///
/// * `session` - The open planning session
/// * `repository` - Where the schedule is stored
/// * `request` - The move request from the presentation layer
/// * `actor` - The party performing the move
/// * `cause` - The trigger for the move
///
/// # Errors
///
/// Returns an error if:
/// - The course id is blank
/// - The course or either semester does not exist
/// - The course is not in the source semester
/// - The credit value disagrees with the schedule
/// - The schedule or audit event cannot be stored
pub fn move_course<R: ScheduleRepository>(
    session: &mut PlanningSession,
    repository: &mut R,
    request: MoveCourseRequest,
    actor: Actor,
    cause: Cause,
) -> Result<MoveCourseResponse, ApiError> {
    let course: CourseId = parse_course_id(&request.course_id)?;
    let move_request: MoveRequest = MoveRequest {
        course: course.clone(),
        credits: request.credit_value,
        display_name: request.display_name,
        source: request.source_semester_index,
        target: request.target_semester_index,
    };

    let result: TransitionResult = session
        .transition(move_request, actor, cause)
        .map_err(translate_core_error)?;

    // Storage first; the session only adopts a move that was written
    if let Some(event) = &result.audit_event {
        repository
            .save(&result.new_state.schedule)
            .map_err(translate_persistence_error)?;
        repository
            .append_audit(event)
            .map_err(translate_persistence_error)?;
    }
    let outcome: MoveOutcome = session.commit(result);

    let message: String = match outcome.rejection {
        None => format!(
            "Moved '{course}' to semester {} with {} warning(s)",
            request.target_semester_index,
            outcome.warnings().count()
        ),
        Some(Rejection::Redundant) => format!("'{course}' is already in that semester"),
        Some(Rejection::Blocked { rule }) => {
            format!("Move of '{course}' blocked by the {rule} rule")
        }
    };
    debug!(%course, applied = outcome.applied, "Handled move request");

    Ok(MoveCourseResponse {
        applied: outcome.applied,
        rejection: outcome.rejection,
        directives: outcome.directives,
        credit_updates: outcome.credit_updates,
        schedule: session.schedule().clone(),
        message,
    })
}

/// Checks a course against a semester without moving it.
///
/// # Errors
///
/// Returns an error if the course or the semester does not exist.
pub fn evaluate_placement(
    session: &PlanningSession,
    request: &EvaluatePlacementRequest,
) -> Result<EvaluatePlacementResponse, ApiError> {
    let course: CourseId = parse_course_id(&request.course_id)?;
    let evaluation: Evaluation = session
        .evaluate(&course, request.target_semester_index)
        .map_err(translate_core_error)?;

    let directives: Vec<MarkerDirective> = if session.schedule().locate(&course).is_some() {
        session
            .check_placement(&course, request.target_semester_index)
            .map_err(translate_core_error)?
            .directives
    } else {
        Vec::new()
    };

    Ok(EvaluatePlacementResponse {
        course_id: course.as_str().to_string(),
        target_semester_index: request.target_semester_index,
        satisfied: evaluation.satisfied,
        reason: evaluation.reason,
        directives,
    })
}

/// Lists the courses that depend on a course, with their placements.
///
/// # Errors
///
/// Returns an error if the course does not exist.
pub fn list_dependents(
    session: &PlanningSession,
    course_id: &str,
) -> Result<ListDependentsResponse, ApiError> {
    let course: CourseId = parse_course_id(course_id)?;
    session
        .catalog()
        .require(&course)
        .map_err(translate_domain_error)?;

    let dependents: Vec<DependentInfo> = session
        .catalog()
        .dependents_of(&course)
        .iter()
        .map(|dependent| DependentInfo {
            course_id: dependent.as_str().to_string(),
            semester_index: session.schedule().locate(dependent),
        })
        .collect();

    Ok(ListDependentsResponse {
        course_id: course.as_str().to_string(),
        dependents,
    })
}

/// Reviews every placed course where it sits.
///
/// # Errors
///
/// Returns an error if a placed course is not in the catalog.
pub fn review_plan(session: &PlanningSession) -> Result<ReviewPlanResponse, ApiError> {
    let directives: Vec<MarkerDirective> = session.review().map_err(translate_core_error)?;
    let warning_count: usize = directives.iter().filter(|d| d.is_warning()).count();

    Ok(ReviewPlanResponse {
        directives,
        warning_count,
        total_credits: session.schedule().total_credits(),
    })
}

/// Lists the required courses not yet placed or completed.
#[must_use]
pub fn list_unplaced(session: &PlanningSession) -> UnplacedCoursesResponse {
    UnplacedCoursesResponse {
        courses: session
            .unplaced()
            .into_iter()
            .map(|course| CourseSummary {
                course_id: course.id.as_str().to_string(),
                name: course.name.clone(),
                credits: course.credits,
            })
            .collect(),
    }
}
