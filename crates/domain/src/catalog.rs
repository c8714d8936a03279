// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::course::CourseReference;
use crate::error::DomainError;
use crate::types::CourseId;
use std::collections::HashMap;

/// Immutable reference data for every course in a planning session.
///
/// The catalog keeps the load order of its entries and precomputes the
/// inverse prerequisite index (`dependents`) once at construction, so
/// cascade checks never rescan the entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CourseReference>,
    positions: HashMap<CourseId, usize>,
    dependents: HashMap<CourseId, Vec<CourseId>>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of course references.
    ///
    /// # Arguments
    ///
    /// * `entries` - The course references in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any course fails field validation
    /// - A course id appears more than once
    pub fn new(entries: Vec<CourseReference>) -> Result<Self, DomainError> {
        let mut positions: HashMap<CourseId, usize> = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if positions.insert(entry.id.clone(), position).is_some() {
                return Err(DomainError::DuplicateCourse(entry.id.clone()));
            }
        }

        let mut dependents: HashMap<CourseId, Vec<CourseId>> = HashMap::new();
        for entry in &entries {
            for term in &entry.prerequisites {
                for prerequisite in term.members() {
                    let list: &mut Vec<CourseId> =
                        dependents.entry(prerequisite.clone()).or_default();
                    // A course may mention the same prerequisite in two terms
                    if !list.contains(&entry.id) {
                        list.push(entry.id.clone());
                    }
                }
            }
        }

        Ok(Self {
            entries,
            positions,
            dependents,
        })
    }

    /// Looks up a course by id.
    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&CourseReference> {
        self.positions.get(id).map(|&position| &self.entries[position])
    }

    /// Looks up a course by id, treating absence as a structural error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CourseNotFound` if the course is not in the catalog.
    pub fn require(&self, id: &CourseId) -> Result<&CourseReference, DomainError> {
        self.get(id).ok_or_else(|| DomainError::CourseNotFound(id.clone()))
    }

    /// Returns whether the course exists in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CourseId) -> bool {
        self.positions.contains_key(id)
    }

    /// Returns whether the course is an elective slot.
    ///
    /// Unknown ids are not electives.
    #[must_use]
    pub fn is_elective(&self, id: &CourseId) -> bool {
        self.get(id).is_some_and(|course| course.is_elective)
    }

    /// Returns the courses whose prerequisite terms reference `id`, in
    /// catalog order.
    #[must_use]
    pub fn dependents_of(&self, id: &CourseId) -> &[CourseId] {
        self.dependents
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the non-elective courses in catalog order.
    pub fn required_courses(&self) -> impl Iterator<Item = &CourseReference> {
        self.entries.iter().filter(|course| !course.is_elective)
    }

    /// Returns all courses in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseReference> {
        self.entries.iter()
    }

    /// Returns the number of courses in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
