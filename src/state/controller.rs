//! List state controller.
//!
//! Single source of truth for what the feed displays: the ordered rows, which
//! of them are expanded, and the load phase. All mutation happens here, on
//! the caller's thread; the rendering layer only reads rows by index and
//! reports affordance taps.
//!
//! # Load generations
//! Every `load` bumps a generation counter and only the completion carrying
//! the current generation is applied. A slower, superseded load that
//! resolves late is discarded instead of overwriting fresher rows.

use std::collections::{HashMap, HashSet};
use std::rc::{Rc, Weak};

use futures::future::LocalBoxFuture;
use tracing::Dispatch;

use super::observer::{ListChange, ListObserver};
use crate::model::{
    LineLimit, LoadFailure, Review, RowContent, RowId, RowIndexOutOfRange, SourceError,
};
use crate::source::ReviewSource;
use crate::style::Theme;

/// Load phase of the list.
///
/// `Loaded` and `Failed` are not terminal: both accept a new load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No load issued yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The latest load succeeded.
    Loaded,
    /// The latest load failed; the list is empty.
    Failed(LoadFailure),
}

impl LoadPhase {
    /// True while a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// The recorded failure, if the last applied load failed.
    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadPhase::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Generation tag of one issued load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// Monotonic generation number of the load.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a completion changed the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The completion was current and replaced the list state.
    Applied,
    /// A newer load was issued (or this one was already applied); ignored.
    Stale,
}

/// A load whose data source call is in flight.
///
/// Awaiting `resolve` does not borrow the controller, so the host can keep
/// using it (and even issue a newer load) while this one is pending.
#[must_use = "a pending load does nothing until resolved and applied"]
pub struct PendingLoad {
    ticket: LoadTicket,
    fetch: LocalBoxFuture<'static, Result<Vec<Review>, SourceError>>,
}

impl PendingLoad {
    /// Ticket the response will be applied under.
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Wait for the data source.
    pub async fn resolve(self) -> LoadResponse {
        let result = self.fetch.await;
        LoadResponse {
            ticket: self.ticket,
            result,
        }
    }
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// A resolved data source call, ready to be applied.
#[derive(Debug)]
pub struct LoadResponse {
    /// Load this response belongs to.
    pub ticket: LoadTicket,
    /// What the data source returned.
    pub result: Result<Vec<Review>, SourceError>,
}

/// Owner of the row collection, expansion set and load phase.
pub struct ReviewsController {
    theme: Theme,
    line_limit: LineLimit,
    phase: LoadPhase,
    rows: Vec<RowContent>,
    /// Row id => current index; rebuilt whenever rows are replaced.
    positions: HashMap<RowId, usize>,
    expanded: HashSet<RowId>,
    generation: u64,
    in_flight: Option<LoadTicket>,
    observer: Option<Weak<dyn ListObserver>>,
    log: Option<Dispatch>,
}

impl ReviewsController {
    /// Create an idle, empty controller.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            line_limit: LineLimit::DEFAULT,
            phase: LoadPhase::Idle,
            rows: Vec::new(),
            positions: HashMap::new(),
            expanded: HashSet::new(),
            generation: 0,
            in_flight: None,
            observer: None,
            log: None,
        }
    }

    /// Truncation limit for review rows built by later loads.
    pub fn with_line_limit(mut self, limit: LineLimit) -> Self {
        self.line_limit = limit;
        self
    }

    /// Send this controller's log events to `dispatch` instead of the
    /// global default subscriber.
    pub fn with_log_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.log = Some(dispatch);
        self
    }

    /// Attach the rendering layer. Only a weak reference is kept; once the
    /// observer is dropped notifications silently stop.
    pub fn set_observer<O: ListObserver + 'static>(&mut self, observer: &Rc<O>) {
        let weak: Weak<O> = Rc::downgrade(observer);
        self.observer = Some(weak);
    }

    /// Stop notifying any observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Styles used to build rows.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // === Load ===

    /// Start a load: one call to `source`, phase becomes `Loading`.
    ///
    /// Existing rows stay readable until the load is applied.
    pub fn load<S: ReviewSource + ?Sized>(&mut self, source: &S) -> PendingLoad {
        let ticket = self.begin_load();
        PendingLoad {
            ticket,
            fetch: source.fetch_reviews(),
        }
    }

    /// Apply a resolved load. Stale responses are ignored.
    pub fn apply(&mut self, response: LoadResponse) -> LoadOutcome {
        self.finish_load(response.ticket, response.result)
    }

    /// Load from `source` and apply the result once it arrives.
    pub async fn refresh<S: ReviewSource + ?Sized>(&mut self, source: &S) -> LoadOutcome {
        let response = self.load(source).resolve().await;
        self.apply(response)
    }

    /// Synchronous first half of a load: issue a new generation.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
        };
        if let Some(previous) = self.in_flight.replace(ticket) {
            self.log(|| {
                tracing::debug!(
                    superseded = previous.generation,
                    generation = ticket.generation,
                    "Superseding in-flight load"
                )
            });
        }
        self.phase = LoadPhase::Loading;
        self.log(|| tracing::info!(generation = ticket.generation, "Loading reviews"));
        ticket
    }

    /// Synchronous second half of a load: apply `result` if `ticket` is
    /// the load currently in flight.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Review>, SourceError>,
    ) -> LoadOutcome {
        if self.in_flight != Some(ticket) {
            self.log(|| {
                tracing::debug!(
                    generation = ticket.generation,
                    current = self.generation,
                    "Discarding stale load completion"
                )
            });
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                let rows = self.log_scope(|| build_rows(&self.theme, self.line_limit, &records));
                self.replace_rows(rows);
                self.phase = LoadPhase::Loaded;
                self.log(|| {
                    tracing::info!(
                        generation = ticket.generation,
                        reviews = records.len(),
                        "Reviews loaded"
                    )
                });
            }
            Err(err) => {
                self.replace_rows(Vec::new());
                self.phase = LoadPhase::Failed(LoadFailure::from(&err));
                self.log(|| {
                    tracing::warn!(generation = ticket.generation, error = %err, "Failed to load reviews")
                });
            }
        }

        self.notify(ListChange::Reloaded);
        LoadOutcome::Applied
    }

    // === Read access for the rendering layer ===

    /// Current load phase.
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Number of rows currently displayed.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row at `index`.
    ///
    /// # Errors
    ///
    /// `RowIndexOutOfRange` if `index >= row_count()`.
    pub fn row(&self, index: usize) -> Result<&RowContent, RowIndexOutOfRange> {
        self.rows.get(index).ok_or(RowIndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    /// Iterate over all rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &RowContent> {
        self.rows.iter()
    }

    /// Current index of the row with `id`, if it is still present.
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Whether the row with `id` has been expanded since the last load.
    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded.contains(&id)
    }

    // === Expand ===

    /// Expand the review row with `id`.
    ///
    /// Returns the row's index if it changed. An unknown id (the row went
    /// away with a reload), an already expanded row or a summary row is a
    /// no-op returning `None`.
    pub fn expand(&mut self, id: RowId) -> Option<usize> {
        let Some(index) = self.index_of(id) else {
            self.log(|| tracing::debug!(%id, "Ignoring expand for unknown row"));
            return None;
        };
        if self.expanded.contains(&id) {
            return None;
        }

        match &mut self.rows[index] {
            RowContent::Review(row) => row.expand(),
            RowContent::Summary(_) => return None,
        }
        self.expanded.insert(id);

        self.log(|| tracing::debug!(%id, index, "Expanded review"));
        self.notify(ListChange::RowChanged(index));
        Some(index)
    }

    // === Internals ===

    fn replace_rows(&mut self, rows: Vec<RowContent>) {
        self.positions = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (row.id(), index))
            .collect();
        self.rows = rows;
        self.expanded.clear();
    }

    fn notify(&self, change: ListChange) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.list_changed(change);
        }
    }

    /// Run `f` with the injected dispatch (if any) as default subscriber.
    fn log_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.log {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    fn log(&self, event: impl FnOnce()) {
        self.log_scope(event)
    }
}

impl std::fmt::Debug for ReviewsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewsController")
            .field("phase", &self.phase)
            .field("rows", &self.rows.len())
            .field("expanded", &self.expanded.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// One review row per record, then the summary row.
fn build_rows(theme: &Theme, limit: LineLimit, records: &[Review]) -> Vec<RowContent> {
    records
        .iter()
        .map(|review| RowContent::Review(theme.review_row(review, limit)))
        .chain(std::iter::once(RowContent::Summary(
            theme.summary_row(records.len()),
        )))
        .collect()
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
