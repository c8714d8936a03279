// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{apply_move, preview_move};
use crate::command::MoveRequest;
use crate::error::CoreError;
use crate::outcome::{MarkerDirective, MoveOutcome};
use crate::policy::MovePolicy;
use crate::prerequisite::{Evaluation, Evaluator};
use crate::review::review_schedule;
use crate::state::{PlanState, TransitionResult};
use course_plan_audit::{Actor, AuditEvent, Cause};
use course_plan_domain::{Catalog, CourseEntry, CourseId, CourseReference, Schedule};

/// One student's planning session: the catalog and policy it was opened
/// with, the current plan and the audit trail of committed moves.
///
/// The session owns its state outright; every move goes through
/// [`apply_move`] and replaces the state only on commit.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    catalog: Catalog,
    policy: MovePolicy,
    state: PlanState,
    history: Vec<AuditEvent>,
}

impl PlanningSession {
    /// Opens a session on a plan state already validated against the
    /// catalog.
    #[must_use]
    pub const fn new(catalog: Catalog, policy: MovePolicy, state: PlanState) -> Self {
        Self {
            catalog,
            policy,
            state,
            history: Vec::new(),
        }
    }

    /// Returns the session catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the session policy.
    #[must_use]
    pub const fn policy(&self) -> &MovePolicy {
        &self.policy
    }

    /// Returns the current plan state.
    #[must_use]
    pub const fn state(&self) -> &PlanState {
        &self.state
    }

    /// Returns the current schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }

    /// Returns the audit events of every committed move, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AuditEvent] {
        &self.history
    }

    /// Returns the audit event of the most recent committed move.
    #[must_use]
    pub fn last_event(&self) -> Option<&AuditEvent> {
        self.history.last()
    }

    /// Moves a course and commits the result if the move applied.
    ///
    /// # Errors
    ///
    /// Returns the structural errors of [`apply_move`]; the session is
    /// unchanged in that case.
    pub fn move_course(
        &mut self,
        request: MoveRequest,
        actor: Actor,
        cause: Cause,
    ) -> Result<MoveOutcome, CoreError> {
        let result: TransitionResult = self.transition(request, actor, cause)?;
        Ok(self.commit(result))
    }

    /// Computes the transition for a move without touching the session.
    ///
    /// Callers that persist moves store the result first and then hand it
    /// to [`PlanningSession::commit`].
    ///
    /// # Errors
    ///
    /// Returns the structural errors of [`apply_move`].
    pub fn transition(
        &self,
        request: MoveRequest,
        actor: Actor,
        cause: Cause,
    ) -> Result<TransitionResult, CoreError> {
        apply_move(&self.catalog, &self.policy, &self.state, request, actor, cause)
    }

    /// Adopts a transition computed by [`PlanningSession::transition`].
    ///
    /// Only transitions carrying an audit event change the session.
    pub fn commit(&mut self, result: TransitionResult) -> MoveOutcome {
        if let Some(event) = result.audit_event {
            self.state = result.new_state;
            self.history.push(event);
        }
        result.outcome
    }

    /// Previews moving a placed course to `target` without committing.
    ///
    /// # Errors
    ///
    /// Returns an error if the course is unknown or not placed, or the
    /// target semester does not exist.
    pub fn check_placement(
        &self,
        course: &CourseId,
        target: usize,
    ) -> Result<MoveOutcome, CoreError> {
        let source: usize = self
            .state
            .schedule
            .locate(course)
            .ok_or_else(|| CoreError::CourseNotPlaced(course.clone()))?;
        let credits: u8 = self
            .state
            .schedule
            .semester(source)
            .and_then(|semester| semester.entry(course))
            .map_or(0, |entry: &CourseEntry| entry.credits);

        let request: MoveRequest = MoveRequest {
            course: course.clone(),
            credits,
            display_name: String::new(),
            source,
            target,
        };
        preview_move(&self.catalog, &self.policy, &self.state, &request)
    }

    /// Evaluates a course's prerequisites at `target` on the current
    /// schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the course is unknown or the target semester does
    /// not exist.
    pub fn evaluate(&self, course: &CourseId, target: usize) -> Result<Evaluation, CoreError> {
        let reference: &CourseReference = self.catalog.require(course)?;
        self.state.schedule.require_semester(target)?;
        let evaluator: Evaluator<'_> =
            Evaluator::new(&self.catalog, &self.policy, &self.state.standing);
        Ok(evaluator.evaluate(reference, target, &self.state.schedule))
    }

    /// Evaluates every placed course where it sits.
    ///
    /// # Errors
    ///
    /// Returns an error if a placed course is not in the catalog.
    pub fn review(&self) -> Result<Vec<MarkerDirective>, CoreError> {
        review_schedule(&self.catalog, &self.policy, &self.state)
    }

    /// Returns the required courses not yet placed or completed.
    #[must_use]
    pub fn unplaced(&self) -> Vec<&CourseReference> {
        self.state.unplaced(&self.catalog)
    }

    /// Ends the session, returning the final state.
    #[must_use]
    pub fn into_state(self) -> PlanState {
        self.state
    }
}
