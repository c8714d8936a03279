// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use course_plan_domain::CourseId;

/// A request to relocate one course, as produced by a drag-release gesture.
///
/// Requests are data only; [`crate::apply_move`] decides what happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    /// The course being moved.
    pub course: CourseId,
    /// The credit value the presentation layer believes the course carries.
    pub credits: u8,
    /// The display name shown on the dragged item.
    pub display_name: String,
    /// The semester the course currently occupies.
    pub source: usize,
    /// The semester the course was dropped on.
    pub target: usize,
}

impl MoveRequest {
    /// Creates a move request.
    ///
    /// # Arguments
    ///
    /// * `course` - The course identifier
    /// * `credits` - The course's credit value
    /// * `source` - The current semester index
    /// * `target` - The requested semester index
    #[must_use]
    pub fn new(course: &str, credits: u8, source: usize, target: usize) -> Self {
        Self {
            course: CourseId::new(course),
            credits,
            display_name: String::new(),
            source,
            target,
        }
    }
}
