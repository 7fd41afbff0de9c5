use crate::config::{CancelPolicy, OffsetSettings, OverridePolicy};
use crate::error::{GridOffsetError, InteractionError, Result};
use crate::operations::offset::OffsetRequest;

use super::confirm::{propose, NameDistanceOverride};
use super::host::{ConfirmationSurface, GridCategoryFilter, GridStore, Reporter, Selection};

/// Outcome of a single pick-and-offset attempt.
#[derive(Debug)]
pub enum AttemptOutcome<Id> {
    /// A new grid was created.
    Created(Id),
    /// The user cancelled a pick or dismissed the confirmation.
    Cancelled,
    /// The attempt failed; nothing was created.
    Failed(GridOffsetError),
    /// The user has no more grids to pick.
    Finished,
}

/// Summary of an interactive session.
#[derive(Debug)]
pub struct SessionReport<Id> {
    /// Grids created, in order.
    pub created: Vec<Id>,
    /// Number of cancelled attempts.
    pub cancelled: usize,
    /// Messages of failed attempts, in order.
    pub failures: Vec<String>,
}

impl<Id> Default for SessionReport<Id> {
    fn default() -> Self {
        Self {
            created: Vec::new(),
            cancelled: 0,
            failures: Vec::new(),
        }
    }
}

/// Interactive loop: pick a grid, pick a side, confirm, create.
///
/// Each attempt is independent. A failure is reported and ends only that
/// attempt; grids created earlier stay in the document.
#[derive(Debug, Clone)]
pub struct OffsetSession {
    settings: OffsetSettings,
    filter: GridCategoryFilter,
}

impl OffsetSession {
    /// Creates a session with the given settings.
    #[must_use]
    pub fn new(settings: OffsetSettings) -> Self {
        let filter = GridCategoryFilter::new(settings.grid_category.clone());
        Self { settings, filter }
    }

    /// Returns the session settings.
    #[must_use]
    pub fn settings(&self) -> &OffsetSettings {
        &self.settings
    }

    /// Runs attempts until the user finishes, or cancels under
    /// [`CancelPolicy::Stop`].
    pub fn run<G, S, C, R>(
        &self,
        store: &mut G,
        selection: &mut S,
        confirmation: &mut C,
        reporter: &mut R,
    ) -> SessionReport<G::Id>
    where
        G: GridStore,
        S: Selection<G::Id>,
        C: ConfirmationSurface,
        R: Reporter,
    {
        let mut report = SessionReport::default();
        loop {
            match self.attempt(store, selection, confirmation) {
                AttemptOutcome::Created(id) => report.created.push(id),
                AttemptOutcome::Cancelled => {
                    report.cancelled += 1;
                    if self.settings.on_cancel == CancelPolicy::Stop {
                        tracing::debug!("session stopped on cancellation");
                        break;
                    }
                }
                AttemptOutcome::Failed(err) => {
                    let message = err.to_string();
                    tracing::warn!(%message, "grid offset failed");
                    reporter.report(&message);
                    report.failures.push(message);
                }
                AttemptOutcome::Finished => break,
            }
        }
        report
    }

    /// Performs one attempt.
    pub fn attempt<G, S, C>(&self, store: &mut G, selection: &mut S, confirmation: &mut C) -> AttemptOutcome<G::Id>
    where
        G: GridStore,
        S: Selection<G::Id>,
        C: ConfirmationSurface,
    {
        match self.try_attempt(store, selection, confirmation) {
            Ok(Some(id)) => AttemptOutcome::Created(id),
            Ok(None) => AttemptOutcome::Finished,
            Err(err) if err.is_cancelled() => AttemptOutcome::Cancelled,
            Err(err) => AttemptOutcome::Failed(err),
        }
    }

    fn try_attempt<G, S, C>(&self, store: &mut G, selection: &mut S, confirmation: &mut C) -> Result<Option<G::Id>>
    where
        G: GridStore,
        S: Selection<G::Id>,
        C: ConfirmationSurface,
    {
        let Some(source_id) = selection.pick_grid(&self.filter)? else {
            return Ok(None);
        };
        let reference = selection.pick_point()?;
        let source = store.grid(source_id)?;

        let request = OffsetRequest::with_tolerance(
            source.curve.clone(),
            reference,
            self.settings.coordinate_tolerance,
        );
        let computed = request.execute()?;

        let proposal = propose(&source.name, &computed, source.curve.kind(), &self.settings);
        let input = confirmation
            .confirm(&proposal)?
            .ok_or(InteractionError::NoConfirmation)?;

        let (name, result) = match NameDistanceOverride::parse(&input, &proposal, &self.settings) {
            Ok(confirmed) => {
                let result = confirmed.apply(&computed)?;
                (confirmed.name, result)
            }
            Err(err) if self.settings.on_invalid_override == OverridePolicy::KeepComputed => {
                tracing::warn!(%err, "ignoring distance override");
                let name = match input.name.trim() {
                    "" => proposal.name,
                    name => name.to_owned(),
                };
                (name, computed)
            }
            Err(err) => return Err(err),
        };

        let id = store.create_grid(result.to_curve()?, &name)?;
        tracing::info!(source = %source.name, %name, distance = result.distance(), "created offset grid");
        Ok(Some(id))
    }
}
