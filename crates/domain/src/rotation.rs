// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::SemesterType;

/// Computes the semester types for `count` consecutive semesters.
///
/// # Arguments
///
/// * `first` - The type of the first semester
/// * `include_summer` - Whether summer semesters are part of the plan
/// * `count` - The number of semesters to produce
///
/// # Errors
///
/// Returns `DomainError::InvalidRotation` if `first` is Summer and summers
/// are excluded.
pub fn semester_rotation(
    first: SemesterType,
    include_summer: bool,
    count: usize,
) -> Result<Vec<SemesterType>, DomainError> {
    if first == SemesterType::Summer && !include_summer {
        return Err(DomainError::InvalidRotation { first });
    }

    let mut rotation: Vec<SemesterType> = Vec::with_capacity(count);
    let mut current: SemesterType = first;
    for _ in 0..count {
        rotation.push(current);
        current = current.next(include_summer);
    }
    Ok(rotation)
}
