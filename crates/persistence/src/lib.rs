// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the course planner.
//!
//! This crate converts between the domain types and their stored forms:
//!
//! - **Catalog documents**: ordered `[courseId, record]` pairs in the
//!   registrar export format, read once per session.
//! - **Schedule snapshots**: the array of semester records the engine reads
//!   before a move and writes after it.
//! - **Standing and policy documents**: optional JSON inputs of a session.
//!
//! Schedules are stored through the [`ScheduleRepository`] trait. Two
//! backends exist: [`InMemoryRepository`] for tests and previews, and
//! [`JsonFileRepository`], which keeps the snapshot in one file and appends
//! audit events as JSON lines to a sibling log.

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
mod error;
mod repository;
mod snapshot;

#[cfg(test)]
mod tests;

pub use catalog::{parse_catalog, render_catalog};
pub use error::PersistenceError;
pub use repository::{AuditRecord, InMemoryRepository, JsonFileRepository, ScheduleRepository};
pub use snapshot::{parse_policy, parse_schedule, parse_standing, render_schedule};
