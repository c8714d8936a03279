// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, CourseEntry, CourseReference, PrerequisiteTerm, SemesterType};

pub fn create_test_catalog() -> Catalog {
    Catalog::new(vec![
        CourseReference::new("CMP SCI 1250", "Introduction to Computing", 3),
        CourseReference::new("CMP SCI 2250", "Programming and Data Structures", 3)
            .with_prerequisites(vec![PrerequisiteTerm::course("CMP SCI 1250")])
            .offered_in(&[SemesterType::Fall, SemesterType::Spring]),
        CourseReference::new("CMP SCI 2261", "Object-Oriented Programming", 3)
            .with_prerequisites(vec![
                PrerequisiteTerm::course("CMP SCI 1250"),
                PrerequisiteTerm::any_of(&["CMP SCI 2250", "CMP SCI 2700"]),
            ]),
        CourseReference::new("Gen Ed or Elective", "[User Selects]", 3).elective(),
    ])
    .unwrap()
}

pub fn entry(course: &str, credits: u8) -> CourseEntry {
    CourseEntry {
        course: crate::CourseId::new(course),
        credits,
        description: String::new(),
        name: String::from(course),
    }
}
