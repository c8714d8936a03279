// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MoveCourseRequest, load_session};
use course_plan::{MovePolicy, PlanningSession, Standing};
use course_plan_audit::{Actor, AuditEvent, Cause};
use course_plan_domain::{
    Catalog, CourseEntry, CourseId, CourseReference, PrerequisiteTerm, Schedule, SemesterType,
};
use course_plan_persistence::{InMemoryRepository, PersistenceError, ScheduleRepository};
use std::io;

pub fn create_test_actor() -> Actor {
    Actor::student("student-123")
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("drag-1"), String::from("Drag release"))
}

pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        CourseReference::new("CMP SCI 1250", "Introduction to Computing", 3),
        CourseReference::new("CMP SCI 2250", "Programming and Data Structures", 3)
            .with_prerequisites(vec![PrerequisiteTerm::course("CMP SCI 1250")])
            .offered_in(&[SemesterType::Fall, SemesterType::Spring]),
        CourseReference::new("CMP SCI 2261", "Object-Oriented Programming", 3)
            .with_prerequisites(vec![PrerequisiteTerm::course("CMP SCI 1250")]),
        CourseReference::new("MATH 1320", "Applied Calculus", 3),
        CourseReference::new("Gen Ed or Elective", "[User Selects]", 3).elective(),
    ])
    .unwrap()
}

/// Semester 0 holds CMP SCI 1250, semester 1 holds CMP SCI 2250 and
/// semester 2 is empty.
pub fn create_test_repository(catalog: &Catalog) -> InMemoryRepository {
    let mut schedule: Schedule = Schedule::with_rotation(SemesterType::Fall, false, 3).unwrap();
    for (index, id) in [(0, "CMP SCI 1250"), (1, "CMP SCI 2250")] {
        let reference: &CourseReference = catalog.get(&CourseId::new(id)).unwrap();
        schedule
            .place(index, CourseEntry::from_reference(reference))
            .unwrap();
    }
    InMemoryRepository::with_schedule(schedule)
}

pub fn create_test_session(repository: &InMemoryRepository) -> PlanningSession {
    load_session(
        repository,
        create_test_catalog(),
        MovePolicy::default(),
        Standing::default(),
    )
    .unwrap()
}

pub fn create_move(course: &str, source: usize, target: usize) -> MoveCourseRequest {
    MoveCourseRequest {
        course_id: course.to_string(),
        credit_value: 3,
        display_name: String::new(),
        source_semester_index: source,
        target_semester_index: target,
    }
}

/// A repository that reads from an inner store but refuses the selected
/// writes.
pub struct FailingRepository {
    pub inner: InMemoryRepository,
    pub fail_save: bool,
    pub fail_audit: bool,
}

impl ScheduleRepository for FailingRepository {
    fn load(&self) -> Result<Schedule, PersistenceError> {
        self.inner.load()
    }

    fn save(&mut self, schedule: &Schedule) -> Result<(), PersistenceError> {
        if self.fail_save {
            return Err(PersistenceError::Io(io::Error::other("disk full")));
        }
        self.inner.save(schedule)
    }

    fn append_audit(&mut self, event: &AuditEvent) -> Result<(), PersistenceError> {
        if self.fail_audit {
            return Err(PersistenceError::Io(io::Error::other("disk full")));
        }
        self.inner.append_audit(event)
    }
}
