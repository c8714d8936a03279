// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::course::CourseReference;
use crate::error::DomainError;
use crate::schedule::{CourseEntry, Schedule};
use crate::types::CourseId;
use std::collections::{BTreeSet, HashMap};

/// Validates a schedule snapshot against the catalog.
///
/// Index contiguity and credit totals are already guaranteed by
/// [`Schedule::new`]; this checks the rules that need catalog context.
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `schedule` - The schedule to validate
/// * `catalog` - The session catalog
/// * `completed` - Courses already taken or waived before the plan
///
/// # Errors
///
/// Returns an error if:
/// - A placed course is not in the catalog
/// - A placed entry's credits disagree with the catalog
/// - A non-elective course is placed in more than one semester
/// - A completed course is placed in the schedule
pub fn validate_schedule(
    schedule: &Schedule,
    catalog: &Catalog,
    completed: &BTreeSet<CourseId>,
) -> Result<(), DomainError> {
    let mut seen: HashMap<&CourseId, usize> = HashMap::new();

    for semester in schedule.semesters() {
        for entry in semester.courses() {
            let reference: &CourseReference = catalog.require(&entry.course)?;
            validate_entry_credits(entry, reference)?;

            if reference.is_elective {
                continue;
            }

            if completed.contains(&entry.course) {
                return Err(DomainError::CourseAlreadyCompleted {
                    course: entry.course.clone(),
                    semester_index: semester.semester_index,
                });
            }

            // Rule: a non-elective course occupies at most one slot in the plan
            if let Some(&first_semester) = seen.get(&entry.course) {
                return Err(DomainError::DuplicatePlacement {
                    course: entry.course.clone(),
                    first_semester,
                    second_semester: semester.semester_index,
                });
            }
            seen.insert(&entry.course, semester.semester_index);
        }
    }

    Ok(())
}

/// Validates that a placed entry carries the catalog's credit value.
///
/// # Errors
///
/// Returns `DomainError::CreditValueMismatch` if the values differ.
pub fn validate_entry_credits(
    entry: &CourseEntry,
    reference: &CourseReference,
) -> Result<(), DomainError> {
    if entry.credits != reference.credits {
        return Err(DomainError::CreditValueMismatch {
            course: entry.course.clone(),
            expected: reference.credits,
            found: entry.credits,
        });
    }
    Ok(())
}
