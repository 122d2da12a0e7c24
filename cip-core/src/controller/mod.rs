//! View-controllers: one small state machine per dashboard view.
//!
//! Controllers do no I/O. A driver (the web app or the CLI) calls a
//! `begin_*` method, which records the intent and returns a request ticket,
//! performs the HTTP call, then hands the outcome to the matching
//! `complete_*` method together with the ticket.
//!
//! Every ticket carries a [`Generation`]. Only the outcome of the most
//! recently issued request is applied; outcomes of superseded requests are
//! discarded when they resolve, whatever order they resolve in.

mod cluster;
mod current;
mod forecast;
mod prediction;

pub use cluster::{AnalysisRequest, ClusterAnalysis};
pub use current::{CurrentConditions, CurrentDisplay, CurrentRequest};
pub use forecast::{Forecast, ForecastRequest};
pub use prediction::{Prediction, PredictionRequest, PREDICTION_ALERT};

/// Sequence number of an issued request.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues generations and remembers the latest one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        Generation(self.latest)
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }
}

/// Whether a controller is waiting on a request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Fetching(Generation),
}

impl Phase {
    pub fn is_fetching(&self) -> bool {
        matches!(self, Phase::Fetching(_))
    }
}

/// What a `complete_*` call did with an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The response replaced the view's data.
    Applied,
    /// The request failed; the view keeps its previous data. Carries the
    /// message to surface, if the view surfaces one.
    Failed(String),
    /// A newer request was issued after this one; the outcome was ignored.
    Stale,
}
