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

mod catalog;
mod course;
mod error;
mod rotation;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use course::{CourseReference, PrerequisiteTerm};
pub use error::DomainError;
pub use rotation::semester_rotation;
pub use schedule::{CourseEntry, Schedule, SemesterEntry};
pub use types::{CourseId, SemesterType};
pub use validation::{validate_entry_credits, validate_schedule};
