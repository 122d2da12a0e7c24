use super::{Generation, Outcome, Phase, RequestGuard};
use std::collections::HashMap;
use crate::error::ApiError;
use crate::prediction::{
    FeatureVector, FieldError, PollutionPrediction, PredictionField, PredictionMode,
    PredictionResult, RiskPrediction,
};

/// Message shown to the user when an inference request fails.
pub const PREDICTION_ALERT: &str = "Error fetching prediction";

/// Ticket for a submitted prediction form.
///
/// `mode` and `features` are captured at submit time; the result is rendered
/// with this mode regardless of later toggling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionRequest {
    pub generation: Generation,
    pub mode: PredictionMode,
    pub features: FeatureVector,
}

impl PredictionRequest {
    pub fn endpoint(&self) -> &'static str {
        self.mode.endpoint()
    }
}

/// State of the prediction form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Prediction {
    mode: PredictionMode,
    form: FeatureVector,
    /// Last rejection per field, cleared when that field accepts input.
    field_errors: HashMap<PredictionField, FieldError>,
    result: Option<PredictionResult>,
    phase: Phase,
    guard: RequestGuard,
}

impl Prediction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PredictionMode {
        self.mode
    }

    /// Switch the toggle. Has no effect on a result already shown or pending.
    pub fn set_mode(&mut self, mode: PredictionMode) {
        self.mode = mode;
    }

    pub fn form(&self) -> &FeatureVector {
        &self.form
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.phase.is_fetching()
    }

    /// Store a form field. Rejected input leaves the field unchanged and is
    /// remembered against that field only.
    pub fn set_field(&mut self, field: PredictionField, input: &str) -> Result<f64, FieldError> {
        match self.form.set(field, input) {
            Ok(value) => {
                self.field_errors.remove(&field);
                Ok(value)
            }
            Err(e) => {
                log::warn!("Rejected form input: {}", e);
                self.field_errors.insert(field, e.clone());
                Err(e)
            }
        }
    }

    pub fn field_error(&self, field: PredictionField) -> Option<&FieldError> {
        self.field_errors.get(&field)
    }

    pub fn begin_submit(&mut self) -> PredictionRequest {
        let generation = self.guard.issue();
        self.phase = Phase::Fetching(generation);
        self.result = None;
        PredictionRequest {
            generation,
            mode: self.mode,
            features: self.form,
        }
    }

    pub fn complete_risk(
        &mut self,
        request: PredictionRequest,
        result: Result<RiskPrediction, ApiError>,
    ) -> Outcome {
        self.complete(request, result.map(PredictionResult::Risk))
    }

    pub fn complete_pollution(
        &mut self,
        request: PredictionRequest,
        result: Result<PollutionPrediction, ApiError>,
    ) -> Outcome {
        self.complete(request, result.map(PredictionResult::Pollution))
    }

    /// Apply an inference outcome.
    ///
    /// On failure the returned [`Outcome::Failed`] carries [`PREDICTION_ALERT`],
    /// which the driver must show to the user.
    pub fn complete(
        &mut self,
        request: PredictionRequest,
        result: Result<PredictionResult, ApiError>,
    ) -> Outcome {
        if !self.guard.is_latest(request.generation) {
            log::debug!(
                "discarding stale {} prediction (generation {})",
                request.mode,
                request.generation.value()
            );
            return Outcome::Stale;
        }
        self.phase = Phase::Idle;
        match result {
            Ok(result) if result.mode() == request.mode => {
                self.result = Some(result);
                Outcome::Applied
            }
            Ok(result) => {
                log::error!(
                    "Got a {} result for a {} request",
                    result.mode(),
                    request.mode
                );
                Outcome::Failed(PREDICTION_ALERT.to_string())
            }
            Err(e) => {
                log::error!("Prediction request to {} failed: {}", request.endpoint(), e);
                Outcome::Failed(PREDICTION_ALERT.to_string())
            }
        }
    }
}
