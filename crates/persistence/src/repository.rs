// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::snapshot::{parse_schedule, render_schedule};
use course_plan_audit::AuditEvent;
use course_plan_domain::Schedule;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;
use tracing::{debug, info};

/// One line of the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the event was written, ISO 8601 in UTC.
    pub recorded_at: String,
    /// The committed move.
    pub event: AuditEvent,
}

/// Storage for one plan's schedule and its audit trail.
///
/// The trait is synchronous; a session performs one move at a time.
pub trait ScheduleRepository {
    /// Loads the stored schedule.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if nothing has been saved, or
    /// a decoding error if the stored snapshot is invalid.
    fn load(&self) -> Result<Schedule, PersistenceError>;

    /// Replaces the stored schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot be written.
    fn save(&mut self, schedule: &Schedule) -> Result<(), PersistenceError>;

    /// Appends an audit event to the trail.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be written.
    fn append_audit(&mut self, event: &AuditEvent) -> Result<(), PersistenceError>;
}

fn stamp(event: &AuditEvent) -> Result<AuditRecord, PersistenceError> {
    Ok(AuditRecord {
        recorded_at: OffsetDateTime::now_utc().format(&Iso8601::DEFAULT)?,
        event: event.clone(),
    })
}

/// A repository held entirely in memory, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    schedule: Option<Schedule>,
    audit: Vec<AuditRecord>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schedule: None,
            audit: Vec::new(),
        }
    }

    /// Creates a repository holding a schedule.
    #[must_use]
    pub const fn with_schedule(schedule: Schedule) -> Self {
        Self {
            schedule: Some(schedule),
            audit: Vec::new(),
        }
    }

    /// Returns the audit trail, oldest first.
    #[must_use]
    pub fn audit_log(&self) -> &[AuditRecord] {
        &self.audit
    }
}

impl ScheduleRepository for InMemoryRepository {
    fn load(&self) -> Result<Schedule, PersistenceError> {
        self.schedule
            .clone()
            .ok_or_else(|| PersistenceError::NotFound(PathBuf::from(":memory:")))
    }

    fn save(&mut self, schedule: &Schedule) -> Result<(), PersistenceError> {
        self.schedule = Some(schedule.clone());
        Ok(())
    }

    fn append_audit(&mut self, event: &AuditEvent) -> Result<(), PersistenceError> {
        self.audit.push(stamp(event)?);
        Ok(())
    }
}

/// A repository backed by a schedule snapshot file and a JSON-lines audit
/// log next to it.
///
/// For `plan.json` the audit log is `plan.audit.jsonl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    schedule_path: PathBuf,
    audit_path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the given schedule file.
    #[must_use]
    pub fn new(schedule_path: &Path) -> Self {
        Self {
            schedule_path: schedule_path.to_path_buf(),
            audit_path: schedule_path.with_extension("audit.jsonl"),
        }
    }

    /// Returns the schedule file path.
    #[must_use]
    pub fn schedule_path(&self) -> &Path {
        &self.schedule_path
    }

    /// Returns the audit log path.
    #[must_use]
    pub fn audit_path(&self) -> &Path {
        &self.audit_path
    }

    /// Reads back every audit record.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read or a line is malformed.
    pub fn read_audit(&self) -> Result<Vec<AuditRecord>, PersistenceError> {
        if !self.audit_path.exists() {
            return Ok(Vec::new());
        }
        fs::read_to_string(&self.audit_path)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(PersistenceError::from))
            .collect()
    }
}

impl ScheduleRepository for JsonFileRepository {
    fn load(&self) -> Result<Schedule, PersistenceError> {
        if !self.schedule_path.exists() {
            return Err(PersistenceError::NotFound(self.schedule_path.clone()));
        }
        let schedule: Schedule = parse_schedule(&fs::read_to_string(&self.schedule_path)?)?;
        info!(
            path = %self.schedule_path.display(),
            semesters = schedule.len(),
            "Loaded schedule"
        );
        Ok(schedule)
    }

    fn save(&mut self, schedule: &Schedule) -> Result<(), PersistenceError> {
        // The snapshot is replaced by rename, never truncated in place
        let staging: PathBuf = self.schedule_path.with_extension("json.tmp");
        fs::write(&staging, render_schedule(schedule)?)?;
        fs::rename(&staging, &self.schedule_path)?;
        info!(path = %self.schedule_path.display(), "Saved schedule");
        Ok(())
    }

    fn append_audit(&mut self, event: &AuditEvent) -> Result<(), PersistenceError> {
        let line: String = serde_json::to_string(&stamp(event)?)?;
        let mut file: fs::File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.audit_path)?;
        writeln!(file, "{line}")?;
        debug!(
            path = %self.audit_path.display(),
            action = %event.action.name,
            "Appended audit event"
        );
        Ok(())
    }
}
