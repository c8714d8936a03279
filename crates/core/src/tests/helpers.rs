// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MovePolicy, MoveRequest, PlanState, Standing};
use course_plan_audit::{Actor, Cause};
use course_plan_domain::{
    Catalog, CourseEntry, CourseId, CourseReference, PrerequisiteTerm, Schedule, SemesterEntry,
    SemesterType,
};

pub fn create_test_actor() -> Actor {
    Actor::student("student-123")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("drag-456"), String::from("Drag release"))
}

/// A small curriculum:
/// - `A`, `B`: 3 credits, no prerequisites
/// - `X`: requires `A`
/// - `Y`: requires `A`, which may be taken concurrently
/// - `Z`: requires `A` or `B`
/// - `W`: two single-course terms, `A` then `B`
/// - `ENGLISH 3130`: requires `A` and 56 credits of standing
/// - `INTDSC 1003`, `CMP SCI 1000`: fixed-placement orientation courses
/// - `F`: offered in Fall only
/// - `Gen Ed or Elective`: elective slot
pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        CourseReference::new("A", "Course A", 3),
        CourseReference::new("B", "Course B", 3),
        CourseReference::new("X", "Course X", 3)
            .with_prerequisites(vec![PrerequisiteTerm::course("A")]),
        CourseReference::new("Y", "Course Y", 4)
            .with_prerequisites(vec![PrerequisiteTerm::course("A")])
            .with_concurrent("A"),
        CourseReference::new("Z", "Course Z", 3)
            .with_prerequisites(vec![PrerequisiteTerm::any_of(&["A", "B"])]),
        CourseReference::new("W", "Course W", 3).with_prerequisites(vec![
            PrerequisiteTerm::course("A"),
            PrerequisiteTerm::course("B"),
        ]),
        CourseReference::new("ENGLISH 3130", "Technical Writing", 3)
            .with_prerequisites(vec![PrerequisiteTerm::course("A")]),
        CourseReference::new("INTDSC 1003", "University Studies", 1),
        CourseReference::new("CMP SCI 1000", "Computer Science Experiences", 1),
        CourseReference::new("F", "Fall Only", 3).offered_in(&[SemesterType::Fall]),
        CourseReference::new("Gen Ed or Elective", "[User Selects]", 3).elective(),
    ])
    .unwrap()
}

/// Builds a schedule of alternating Fall/Spring semesters holding the given
/// courses, with entries taken from the catalog.
pub fn create_test_schedule(catalog: &Catalog, placements: &[&[&str]]) -> Schedule {
    let mut schedule: Schedule =
        Schedule::with_rotation(SemesterType::Fall, false, placements.len()).unwrap();
    for (index, courses) in placements.iter().enumerate() {
        for id in *courses {
            let reference: &CourseReference = catalog.get(&CourseId::new(id)).unwrap();
            schedule
                .place(index, CourseEntry::from_reference(reference))
                .unwrap();
        }
    }
    schedule
}

pub fn create_test_state(catalog: &Catalog, placements: &[&[&str]]) -> PlanState {
    PlanState::new(create_test_schedule(catalog, placements), Standing::default())
}

pub fn create_test_state_with_standing(
    catalog: &Catalog,
    placements: &[&[&str]],
    standing: Standing,
) -> PlanState {
    PlanState::new(create_test_schedule(catalog, placements), standing)
}

/// Builds a request carrying the catalog credit value of the course.
pub fn create_move_request(
    catalog: &Catalog,
    course: &str,
    source: usize,
    target: usize,
) -> MoveRequest {
    let credits: u8 = catalog.get(&CourseId::new(course)).unwrap().credits;
    MoveRequest::new(course, credits, source, target)
}

pub fn semester_courses(state: &PlanState, index: usize) -> Vec<String> {
    state
        .schedule
        .semester(index)
        .unwrap()
        .courses()
        .iter()
        .map(|entry| entry.course.as_str().to_string())
        .collect()
}

pub fn semester_total(state: &PlanState, index: usize) -> u32 {
    state
        .schedule
        .semester(index)
        .map(SemesterEntry::credit_total)
        .unwrap()
}

pub fn advisory_policy() -> MovePolicy {
    MovePolicy::default()
}
