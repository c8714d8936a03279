// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::course::CourseReference;
use crate::error::DomainError;
use crate::rotation::semester_rotation;
use crate::types::{CourseId, SemesterType};
use serde::{Deserialize, Serialize};

/// A course placed in a semester, with the display metadata cached at
/// placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// The course identifier.
    pub course: CourseId,
    /// Credit hours awarded.
    pub credits: u8,
    /// Catalog description.
    #[serde(default)]
    pub description: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl CourseEntry {
    /// Creates an entry from a catalog reference.
    #[must_use]
    pub fn from_reference(reference: &CourseReference) -> Self {
        Self {
            course: reference.id.clone(),
            credits: reference.credits,
            description: reference.description.clone(),
            name: reference.name.clone(),
        }
    }
}

/// One semester of a plan.
///
/// The credit total is never set directly; it is recomputed from the course
/// list whenever the list changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterEntry {
    /// Zero-based position in the plan; lower is earlier.
    #[serde(alias = "semester_number", alias = "semester number")]
    pub semester_index: usize,
    /// The term this semester runs in.
    #[serde(alias = "semester")]
    pub semester_type: SemesterType,
    #[serde(alias = "credits")]
    credit_total: u32,
    #[serde(alias = "schedule")]
    courses: Vec<CourseEntry>,
}

impl SemesterEntry {
    /// Creates an empty semester.
    #[must_use]
    pub const fn new(semester_index: usize, semester_type: SemesterType) -> Self {
        Self {
            semester_index,
            semester_type,
            credit_total: 0,
            courses: Vec::new(),
        }
    }

    /// Creates a semester holding the given courses.
    #[must_use]
    pub fn with_courses(
        semester_index: usize,
        semester_type: SemesterType,
        courses: Vec<CourseEntry>,
    ) -> Self {
        let mut semester: Self = Self {
            semester_index,
            semester_type,
            credit_total: 0,
            courses,
        };
        semester.recompute_credit_total();
        semester
    }

    /// Returns the courses in placement order.
    #[must_use]
    pub fn courses(&self) -> &[CourseEntry] {
        &self.courses
    }

    /// Returns the semester's credit total.
    #[must_use]
    pub const fn credit_total(&self) -> u32 {
        self.credit_total
    }

    /// Returns the sum of the credit values of the semester's courses.
    #[must_use]
    pub fn computed_credit_total(&self) -> u32 {
        self.courses.iter().map(|entry| u32::from(entry.credits)).sum()
    }

    /// Returns whether the course is placed in this semester.
    #[must_use]
    pub fn contains(&self, course: &CourseId) -> bool {
        self.courses.iter().any(|entry| &entry.course == course)
    }

    /// Returns the entry for the course, if placed here.
    #[must_use]
    pub fn entry(&self, course: &CourseId) -> Option<&CourseEntry> {
        self.courses.iter().find(|entry| &entry.course == course)
    }

    fn push(&mut self, entry: CourseEntry) {
        self.courses.push(entry);
        self.recompute_credit_total();
    }

    fn remove(&mut self, course: &CourseId) -> Option<CourseEntry> {
        let position: usize = self
            .courses
            .iter()
            .position(|entry| &entry.course == course)?;
        let entry: CourseEntry = self.courses.remove(position);
        self.recompute_credit_total();
        Some(entry)
    }

    fn recompute_credit_total(&mut self) {
        self.credit_total = self.computed_credit_total();
    }
}

/// The ordered collection of semesters making up a plan.
///
/// Serializes as the bare array of semester records. Deserialization goes
/// through [`Schedule::new`], so a snapshot with gaps in its indices or a
/// drifted credit total is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SemesterEntry>", into = "Vec<SemesterEntry>")]
pub struct Schedule {
    semesters: Vec<SemesterEntry>,
}

impl Schedule {
    /// Builds a schedule from semester records.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Semester indices are not `0..n` in order
    /// - A recorded credit total differs from the sum of its courses
    pub fn new(semesters: Vec<SemesterEntry>) -> Result<Self, DomainError> {
        for (position, semester) in semesters.iter().enumerate() {
            if semester.semester_index != position {
                return Err(DomainError::NonContiguousSemesterIndex {
                    position,
                    found: semester.semester_index,
                });
            }

            let computed: u32 = semester.computed_credit_total();
            if semester.credit_total != computed {
                return Err(DomainError::CreditTotalMismatch {
                    semester_index: position,
                    recorded: semester.credit_total,
                    computed,
                });
            }
        }
        Ok(Self { semesters })
    }

    /// Builds `count` empty semesters following the term rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotation starts on Summer while summers are
    /// excluded.
    pub fn with_rotation(
        first: SemesterType,
        include_summer: bool,
        count: usize,
    ) -> Result<Self, DomainError> {
        let semesters: Vec<SemesterEntry> = semester_rotation(first, include_summer, count)?
            .into_iter()
            .enumerate()
            .map(|(index, semester_type)| SemesterEntry::new(index, semester_type))
            .collect();
        Ok(Self { semesters })
    }

    /// Returns all semesters in plan order.
    #[must_use]
    pub fn semesters(&self) -> &[SemesterEntry] {
        &self.semesters
    }

    /// Returns the semester at `index`.
    #[must_use]
    pub fn semester(&self, index: usize) -> Option<&SemesterEntry> {
        self.semesters.get(index)
    }

    /// Returns the semester at `index`, treating absence as a structural error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SemesterNotFound` if the index is out of range.
    pub fn require_semester(&self, index: usize) -> Result<&SemesterEntry, DomainError> {
        self.semesters
            .get(index)
            .ok_or(DomainError::SemesterNotFound {
                index,
                semester_count: self.semesters.len(),
            })
    }

    /// Returns the number of semesters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Returns whether the schedule has no semesters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Returns the index of the first semester holding the course.
    #[must_use]
    pub fn locate(&self, course: &CourseId) -> Option<usize> {
        self.semesters
            .iter()
            .position(|semester| semester.contains(course))
    }

    /// Returns the credit total of every semester up to and including `index`.
    #[must_use]
    pub fn credits_through(&self, index: usize) -> u32 {
        self.semesters
            .iter()
            .take(index.saturating_add(1))
            .map(SemesterEntry::credit_total)
            .sum()
    }

    /// Returns the credit total of the whole plan.
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.semesters.iter().map(SemesterEntry::credit_total).sum()
    }

    /// Appends a course to a semester.
    ///
    /// # Errors
    ///
    /// Returns an error if the semester does not exist.
    pub fn place(&mut self, index: usize, entry: CourseEntry) -> Result<(), DomainError> {
        self.semester_mut(index)?.push(entry);
        Ok(())
    }

    /// Moves a course entry from one semester to the end of another and
    /// recomputes both credit totals.
    ///
    /// Only the first matching entry in the source semester moves, which
    /// matters for elective slots that may repeat.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either semester does not exist
    /// - The course is not in the source semester
    pub fn move_entry(
        &mut self,
        course: &CourseId,
        source: usize,
        target: usize,
    ) -> Result<(), DomainError> {
        self.require_semester(target)?;
        let entry: CourseEntry =
            self.semester_mut(source)?
                .remove(course)
                .ok_or_else(|| DomainError::CourseNotInSemester {
                    course: course.clone(),
                    semester_index: source,
                })?;
        self.semester_mut(target)?.push(entry);
        Ok(())
    }

    fn semester_mut(&mut self, index: usize) -> Result<&mut SemesterEntry, DomainError> {
        let semester_count: usize = self.semesters.len();
        self.semesters
            .get_mut(index)
            .ok_or(DomainError::SemesterNotFound {
                index,
                semester_count,
            })
    }
}

impl TryFrom<Vec<SemesterEntry>> for Schedule {
    type Error = DomainError;

    fn try_from(semesters: Vec<SemesterEntry>) -> Result<Self, Self::Error> {
        Self::new(semesters)
    }
}

impl From<Schedule> for Vec<SemesterEntry> {
    fn from(schedule: Schedule) -> Self {
        schedule.semesters
    }
}
