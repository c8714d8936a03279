// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use course_plan::{MovePolicy, PlanningSession, Standing};
use course_plan_api::{
    EvaluatePlacementRequest, InitPlanRequest, InitPlanResponse, MoveCourseRequest,
    MoveCourseResponse, ReviewPlanResponse, evaluate_placement, init_plan, list_dependents,
    list_unplaced, load_session, review_plan,
};
use course_plan_audit::{Actor, Cause};
use course_plan_domain::{Catalog, CourseId};
use course_plan_persistence::{
    AuditRecord, JsonFileRepository, parse_catalog, parse_policy, parse_standing,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// The documents a command works on.
#[derive(Debug, Clone)]
pub struct PlanFiles {
    pub catalog: PathBuf,
    pub schedule: PathBuf,
    pub policy: Option<PathBuf>,
    pub standing: Option<PathBuf>,
}

impl PlanFiles {
    fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(&self.schedule)
    }

    fn catalog(&self) -> Result<Catalog> {
        let json: String = read(&self.catalog)?;
        parse_catalog(&json)
            .wrap_err_with(|| format!("Failed to parse catalog {}", self.catalog.display()))
    }

    fn policy(&self) -> Result<MovePolicy> {
        let Some(path) = &self.policy else {
            debug!("Using the built-in policy");
            return Ok(MovePolicy::default());
        };
        let json: String = read(path)?;
        parse_policy(&json).wrap_err_with(|| format!("Failed to parse policy {}", path.display()))
    }

    fn standing(&self) -> Result<Standing> {
        let Some(path) = &self.standing else {
            return Ok(Standing::default());
        };
        let json: String = read(path)?;
        parse_standing(&json)
            .wrap_err_with(|| format!("Failed to parse standing {}", path.display()))
    }

    fn open_session(&self, repository: &JsonFileRepository) -> Result<PlanningSession> {
        load_session(repository, self.catalog()?, self.policy()?, self.standing()?)
            .wrap_err_with(|| format!("Failed to open plan {}", self.schedule.display()))
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json: String = serde_json::to_string_pretty(value).wrap_err("Failed to render output")?;
    println!("{json}");
    Ok(())
}

pub fn init(
    files: &PlanFiles,
    first: &str,
    include_summer: bool,
    semester_count: usize,
    place_required: bool,
) -> Result<()> {
    let mut repository: JsonFileRepository = files.repository();
    if repository.schedule_path().exists() {
        return Err(eyre!(
            "{} already exists; remove it to start over",
            repository.schedule_path().display()
        ));
    }

    let catalog: Catalog = files.catalog()?;
    let standing: Standing = files.standing()?;
    let request: InitPlanRequest = InitPlanRequest {
        first_semester: first.to_string(),
        include_summer,
        semester_count,
        place_required,
    };
    let response: InitPlanResponse = init_plan(&mut repository, &catalog, &standing, &request)?;

    info!("{}", response.message);
    print_json(&response.schedule)
}

pub fn move_course(
    files: &PlanFiles,
    course: &str,
    source: usize,
    target: usize,
    credits: Option<u8>,
) -> Result<()> {
    let mut repository: JsonFileRepository = files.repository();
    let mut session: PlanningSession = files.open_session(&repository)?;

    // Unknown courses fall through to the engine, which reports them
    let credit_value: u8 = credits.unwrap_or_else(|| {
        CourseId::parse(course)
            .ok()
            .and_then(|id| session.catalog().get(&id).map(|reference| reference.credits))
            .unwrap_or_default()
    });

    let request: MoveCourseRequest = MoveCourseRequest {
        course_id: course.to_string(),
        credit_value,
        display_name: String::new(),
        source_semester_index: source,
        target_semester_index: target,
    };
    let cause: Cause = Cause::new(
        format!("cli-{}", OffsetDateTime::now_utc().unix_timestamp()),
        String::from("Command line move"),
    );
    let response: MoveCourseResponse = course_plan_api::move_course(
        &mut session,
        &mut repository,
        request,
        Actor::student(&whoami()),
        cause,
    )?;

    if response.applied {
        info!("{}", response.message);
    } else {
        warn!("{}", response.message);
    }
    print_json(&response)
}

pub fn check(files: &PlanFiles, course: &str, target: usize) -> Result<()> {
    let repository: JsonFileRepository = files.repository();
    let session: PlanningSession = files.open_session(&repository)?;

    let request: EvaluatePlacementRequest = EvaluatePlacementRequest {
        course_id: course.to_string(),
        target_semester_index: target,
    };
    print_json(&evaluate_placement(&session, &request)?)
}

pub fn dependents(files: &PlanFiles, course: &str) -> Result<()> {
    let repository: JsonFileRepository = files.repository();
    let session: PlanningSession = files.open_session(&repository)?;

    print_json(&list_dependents(&session, course)?)
}

pub fn review(files: &PlanFiles) -> Result<()> {
    let repository: JsonFileRepository = files.repository();
    let session: PlanningSession = files.open_session(&repository)?;

    let response: ReviewPlanResponse = review_plan(&session)?;
    info!(
        warnings = response.warning_count,
        total_credits = response.total_credits,
        "Reviewed plan"
    );
    print_json(&response)
}

pub fn unplaced(files: &PlanFiles) -> Result<()> {
    let repository: JsonFileRepository = files.repository();
    let session: PlanningSession = files.open_session(&repository)?;

    print_json(&list_unplaced(&session))
}

pub fn history(files: &PlanFiles) -> Result<()> {
    let repository: JsonFileRepository = files.repository();
    let records: Vec<AuditRecord> = repository.read_audit().wrap_err_with(|| {
        format!(
            "Failed to read move history {}",
            repository.audit_path().display()
        )
    })?;

    print_json(&records)
}

fn whoami() -> String {
    std::env::var("USER").unwrap_or_else(|_| String::from("student"))
}
