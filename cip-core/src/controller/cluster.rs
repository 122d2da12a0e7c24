use super::{Generation, Outcome, RequestGuard};
use crate::cluster::{ClusterPoint, Partition};
use crate::error::ApiError;

/// Ticket for `GET /predict/analysis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub generation: Generation,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum AnalysisPhase {
    /// Mounted, nothing requested yet. Counts as loading.
    #[default]
    NotStarted,
    Fetching(Generation),
    Settled,
}

/// State of the cluster-analysis view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterAnalysis {
    partition: Partition,
    phase: AnalysisPhase,
    guard: RequestGuard,
}

impl ClusterAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// True until the first load settles, and while any later reload runs.
    pub fn loading(&self) -> bool {
        !matches!(self.phase, AnalysisPhase::Settled)
    }

    pub fn begin_load(&mut self) -> AnalysisRequest {
        let generation = self.guard.issue();
        self.phase = AnalysisPhase::Fetching(generation);
        AnalysisRequest { generation }
    }

    /// Partition the returned points. Loading ends whether or not the call succeeded.
    pub fn complete_load(
        &mut self,
        request: AnalysisRequest,
        result: Result<Vec<ClusterPoint>, ApiError>,
    ) -> Outcome {
        if !self.guard.is_latest(request.generation) {
            log::debug!(
                "discarding stale analysis (generation {})",
                request.generation.value()
            );
            return Outcome::Stale;
        }
        self.phase = AnalysisPhase::Settled;
        match result {
            Ok(points) => {
                let total = points.len();
                self.partition = Partition::from_points(points);
                log::info!(
                    "Partitioned {} of {} analysis points",
                    self.partition.len(),
                    total
                );
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to fetch cluster analysis: {}", e);
                Outcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterLabel;

    #[test]
    fn test_loading_until_settled() {
        let mut view = ClusterAnalysis::new();
        assert!(view.loading());
        let request = view.begin_load();
        assert!(view.loading());
        view.complete_load(request, Ok(Vec::new()));
        assert!(!view.loading());
        assert!(view.partition().is_empty());
    }

    #[test]
    fn test_load_partitions_points() {
        let mut view = ClusterAnalysis::new();
        let request = view.begin_load();
        let points = vec![
            ClusterPoint::new(1.0, 2.0, 0),
            ClusterPoint::new(3.0, 4.0, 1),
            ClusterPoint::new(5.0, 6.0, 9),
        ];
        assert_eq!(view.complete_load(request, Ok(points)), Outcome::Applied);
        let partition = view.partition();
        assert_eq!(partition.get(ClusterLabel::LowPollution).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Industrial).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Extreme).len(), 0);
    }

    #[test]
    fn test_failure_leaves_buckets_empty_and_stops_loading() {
        let mut view = ClusterAnalysis::new();
        let request = view.begin_load();
        let outcome = view.complete_load(request, Err(ApiError::Decode("expected array".into())));
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(!view.loading());
        assert!(view.partition().is_empty());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut view = ClusterAnalysis::new();
        let first = view.begin_load();
        let second = view.begin_load();
        view.complete_load(second, Ok(vec![ClusterPoint::new(1.0, 1.0, 2)]));
        assert_eq!(
            view.complete_load(first, Ok(Vec::new())),
            Outcome::Stale
        );
        assert_eq!(view.partition().len(), 1);
    }
}
