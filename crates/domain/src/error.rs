// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{CourseId, SemesterType};

/// Structural errors raised by the catalog and the schedule store.
///
/// Every variant indicates inconsistent data rather than a curriculum rule
/// violation. Curriculum rule violations are advisory and never surface as
/// a `DomainError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The course identifier is empty or invalid.
    InvalidCourseId(String),
    /// The course does not exist in the catalog.
    CourseNotFound(CourseId),
    /// The course appears more than once in the catalog.
    DuplicateCourse(CourseId),
    /// The course has a non-positive credit value.
    InvalidCreditValue {
        /// The offending course.
        course: CourseId,
        /// The credit value supplied.
        credits: u8,
    },
    /// The course lists itself as a prerequisite.
    SelfPrerequisite(CourseId),
    /// Semester type label is not recognized.
    InvalidSemesterType(String),
    /// A rotation cannot start on a semester type that is not included.
    InvalidRotation {
        /// The requested first semester type.
        first: SemesterType,
    },
    /// The semester index does not exist in the schedule.
    SemesterNotFound {
        /// The requested index.
        index: usize,
        /// The number of semesters in the schedule.
        semester_count: usize,
    },
    /// Semester records are not numbered `0..n` in order.
    NonContiguousSemesterIndex {
        /// Position of the record within the snapshot.
        position: usize,
        /// The index the record declared.
        found: usize,
    },
    /// A semester's recorded credit total disagrees with its courses.
    CreditTotalMismatch {
        /// The semester index.
        semester_index: usize,
        /// The credit total recorded in the snapshot.
        recorded: u32,
        /// The sum of the semester's course credits.
        computed: u32,
    },
    /// A non-elective course is placed in more than one semester.
    DuplicatePlacement {
        /// The duplicated course.
        course: CourseId,
        /// The first semester holding the course.
        first_semester: usize,
        /// The second semester holding the course.
        second_semester: usize,
    },
    /// The course is not present in the named semester.
    CourseNotInSemester {
        /// The course.
        course: CourseId,
        /// The semester index searched.
        semester_index: usize,
    },
    /// A course recorded as completed is also placed in the schedule.
    CourseAlreadyCompleted {
        /// The course.
        course: CourseId,
        /// The semester it was found in.
        semester_index: usize,
    },
    /// The credit value carried by a request disagrees with the schedule.
    CreditValueMismatch {
        /// The course.
        course: CourseId,
        /// The credit value recorded in the schedule.
        expected: u8,
        /// The credit value supplied.
        found: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCourseId(msg) => write!(f, "Invalid course id: {msg}"),
            Self::CourseNotFound(course) => write!(f, "Course '{course}' not found in catalog"),
            Self::DuplicateCourse(course) => {
                write!(f, "Course '{course}' appears more than once in the catalog")
            }
            Self::InvalidCreditValue { course, credits } => {
                write!(
                    f,
                    "Invalid credit value for '{course}': {credits}. Must be greater than 0"
                )
            }
            Self::SelfPrerequisite(course) => {
                write!(f, "Course '{course}' cannot be its own prerequisite")
            }
            Self::InvalidSemesterType(label) => write!(f, "Invalid semester type: {label}"),
            Self::InvalidRotation { first } => {
                write!(
                    f,
                    "Cannot start a rotation on {first} when {first} semesters are excluded"
                )
            }
            Self::SemesterNotFound {
                index,
                semester_count,
            } => {
                write!(
                    f,
                    "Semester {index} not found: schedule has {semester_count} semesters"
                )
            }
            Self::NonContiguousSemesterIndex { position, found } => {
                write!(
                    f,
                    "Semester record at position {position} declares index {found}"
                )
            }
            Self::CreditTotalMismatch {
                semester_index,
                recorded,
                computed,
            } => {
                write!(
                    f,
                    "Semester {semester_index} records {recorded} credits but its courses sum to {computed}"
                )
            }
            Self::DuplicatePlacement {
                course,
                first_semester,
                second_semester,
            } => {
                write!(
                    f,
                    "Course '{course}' is placed in both semester {first_semester} and semester {second_semester}"
                )
            }
            Self::CourseNotInSemester {
                course,
                semester_index,
            } => {
                write!(f, "Course '{course}' is not in semester {semester_index}")
            }
            Self::CourseAlreadyCompleted {
                course,
                semester_index,
            } => {
                write!(
                    f,
                    "Course '{course}' is already completed but is placed in semester {semester_index}"
                )
            }
            Self::CreditValueMismatch {
                course,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Course '{course}' carries {expected} credits in the schedule, request says {found}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
