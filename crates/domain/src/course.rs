// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CourseId, SemesterType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One clause of a course's prerequisite sequence.
///
/// In the catalog format a bare string is a single required course and an
/// array is a set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrerequisiteTerm {
    /// A single course that must be completed.
    Course(CourseId),
    /// A set of alternatives; any one member satisfies the term.
    AnyOf(Vec<CourseId>),
}

impl PrerequisiteTerm {
    /// Creates a single-course term.
    #[must_use]
    pub fn course(id: &str) -> Self {
        Self::Course(CourseId::new(id))
    }

    /// Creates a term satisfied by any one of the given courses.
    #[must_use]
    pub fn any_of(ids: &[&str]) -> Self {
        Self::AnyOf(ids.iter().map(|id| CourseId::new(id)).collect())
    }

    /// Returns the course ids referenced by this term.
    #[must_use]
    pub fn members(&self) -> &[CourseId] {
        match self {
            Self::Course(id) => std::slice::from_ref(id),
            Self::AnyOf(ids) => ids,
        }
    }

    /// Returns whether this term references the given course.
    #[must_use]
    pub fn references(&self, course: &CourseId) -> bool {
        self.members().contains(course)
    }
}

impl std::fmt::Display for PrerequisiteTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.members().iter().map(CourseId::as_str).collect();
        f.write_str(&names.join(" or "))
    }
}

/// Read-only catalog description of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseReference {
    /// The course identifier.
    pub id: CourseId,
    /// Display name of the course.
    pub name: String,
    /// Catalog description of the course.
    pub description: String,
    /// Credit hours awarded.
    pub credits: u8,
    /// Elective slots are exempt from prerequisite bookkeeping and from
    /// duplicate placement checks.
    pub is_elective: bool,
    /// Ordered prerequisite terms.
    pub prerequisites: Vec<PrerequisiteTerm>,
    /// A prerequisite that may instead be taken in the same semester.
    pub concurrent: Option<CourseId>,
    /// Semester types during which the course may be placed.
    pub semesters_offered: BTreeSet<SemesterType>,
}

impl CourseReference {
    /// Creates a course offered in every semester type with no prerequisites.
    ///
    /// # Arguments
    ///
    /// * `id` - The course identifier
    /// * `name` - The display name
    /// * `credits` - The credit value
    #[must_use]
    pub fn new(id: &str, name: &str, credits: u8) -> Self {
        Self {
            id: CourseId::new(id),
            name: name.to_string(),
            description: String::new(),
            credits,
            is_elective: false,
            prerequisites: Vec::new(),
            concurrent: None,
            semesters_offered: [SemesterType::Fall, SemesterType::Spring, SemesterType::Summer]
                .into_iter()
                .collect(),
        }
    }

    /// Sets the catalog description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Sets the prerequisite terms.
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: Vec<PrerequisiteTerm>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    /// Sets the prerequisite that may be taken concurrently.
    #[must_use]
    pub fn with_concurrent(mut self, concurrent: &str) -> Self {
        self.concurrent = Some(CourseId::new(concurrent));
        self
    }

    /// Restricts the semester types in which the course is offered.
    #[must_use]
    pub fn offered_in(mut self, semesters: &[SemesterType]) -> Self {
        self.semesters_offered = semesters.iter().copied().collect();
        self
    }

    /// Marks the course as an elective slot.
    #[must_use]
    pub const fn elective(mut self) -> Self {
        self.is_elective = true;
        self
    }

    /// Returns whether the course may be placed in a semester of this type.
    #[must_use]
    pub fn is_offered_in(&self, semester_type: SemesterType) -> bool {
        self.semesters_offered.contains(&semester_type)
    }

    /// Returns whether any prerequisite term references the given course.
    #[must_use]
    pub fn requires(&self, course: &CourseId) -> bool {
        self.prerequisites.iter().any(|term| term.references(course))
    }

    /// Returns whether the given course may satisfy a term by being taken in
    /// the same semester.
    #[must_use]
    pub fn allows_concurrent(&self, course: &CourseId) -> bool {
        self.concurrent.as_ref() == Some(course)
    }

    /// Validates the field constraints of this course.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The course id is blank
    /// - The credit value is zero
    /// - The course lists itself as a prerequisite
    pub fn validate(&self) -> Result<(), DomainError> {
        CourseId::parse(self.id.as_str())?;

        if self.credits == 0 {
            return Err(DomainError::InvalidCreditValue {
                course: self.id.clone(),
                credits: self.credits,
            });
        }

        if self.requires(&self.id) {
            return Err(DomainError::SelfPrerequisite(self.id.clone()));
        }

        Ok(())
    }
}
