// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    evaluate_placement, init_plan, list_dependents, list_unplaced, load_session, move_course,
    review_plan,
};
pub use request_response::{
    CourseSummary, DependentInfo, EvaluatePlacementRequest, EvaluatePlacementResponse,
    InitPlanRequest, InitPlanResponse, ListDependentsResponse, MoveCourseRequest,
    MoveCourseResponse, ReviewPlanResponse, UnplacedCoursesResponse,
};
