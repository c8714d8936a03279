// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::outcome::MarkerDirective;
use crate::policy::MovePolicy;
use crate::prerequisite::Evaluator;
use crate::rules::{fixed_placement_directive, offering_directive, prerequisite_directive};
use crate::state::PlanState;
use course_plan_domain::{Catalog, CourseReference};
use tracing::debug;

/// Evaluates every placed course where it currently sits.
///
/// Used after a session load to paint the initial markers. Directives are
/// produced in plan order, one per applicable rule per course.
///
/// # Errors
///
/// Returns an error if a placed course is not in the catalog.
pub fn review_schedule(
    catalog: &Catalog,
    policy: &MovePolicy,
    state: &PlanState,
) -> Result<Vec<MarkerDirective>, CoreError> {
    let evaluator: Evaluator<'_> = Evaluator::new(catalog, policy, &state.standing);
    let mut directives: Vec<MarkerDirective> = Vec::new();

    for semester in state.schedule.semesters() {
        for entry in semester.courses() {
            let course: &CourseReference = catalog.require(&entry.course)?;
            directives.extend(fixed_placement_directive(
                policy,
                course,
                semester.semester_index,
            ));
            if course.is_elective {
                continue;
            }
            directives.push(offering_directive(course, semester.semester_type));
            directives.push(prerequisite_directive(
                &evaluator,
                course,
                semester.semester_index,
                &state.schedule,
            ));
        }
    }

    debug!(
        directives = directives.len(),
        warnings = directives.iter().filter(|d| d.is_warning()).count(),
        "Reviewed schedule"
    );
    Ok(directives)
}
