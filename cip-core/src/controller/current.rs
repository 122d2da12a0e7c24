use super::{Generation, Outcome, Phase, RequestGuard};
use crate::error::ApiError;
use crate::weather::{Snapshot, SnapshotDisplay};
use crate::City;

/// Ticket for `GET /weather/current?city={city}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRequest {
    pub generation: Generation,
    pub city: City,
}

/// What the current-conditions panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentDisplay {
    Loading,
    NoData,
    Ready(SnapshotDisplay),
}

/// State of the current-conditions view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CurrentConditions {
    selected: City,
    snapshot: Option<Snapshot>,
    phase: Phase,
    guard: RequestGuard,
}

impl CurrentConditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> City {
        self.selected
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.phase.is_fetching()
    }

    /// Select `city` and start fetching its snapshot.
    pub fn begin_select(&mut self, city: City) -> CurrentRequest {
        let generation = self.guard.issue();
        self.selected = city;
        self.phase = Phase::Fetching(generation);
        CurrentRequest { generation, city }
    }

    pub fn complete_select(
        &mut self,
        request: CurrentRequest,
        result: Result<Snapshot, ApiError>,
    ) -> Outcome {
        if !self.guard.is_latest(request.generation) {
            log::debug!(
                "discarding stale current conditions for {} (generation {})",
                request.city,
                request.generation.value()
            );
            return Outcome::Stale;
        }
        self.phase = Phase::Idle;
        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to fetch current weather for {}: {}", request.city, e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    pub fn display(&self) -> CurrentDisplay {
        if self.loading() {
            return CurrentDisplay::Loading;
        }
        match &self.snapshot {
            Some(snapshot) => CurrentDisplay::Ready(snapshot.display()),
            None => CurrentDisplay::NoData,
        }
    }
}
