//! `predict` command.

use cip_core::client::ApiClient;
use cip_core::controller::{Outcome, Prediction};
use cip_core::prediction::{PredictionField, PredictionMode};
use clap::Args;

/// Form overrides. Values are passed through as text so they get the same
/// validation as the dashboard form; unset fields keep the form defaults.
#[derive(Args, Debug, Default)]
pub struct FeatureArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub temperature: Option<String>,
    #[arg(long)]
    pub humidity: Option<String>,
    #[arg(long)]
    pub rain: Option<String>,
    #[arg(long)]
    pub pressure: Option<String>,
    #[arg(long)]
    pub wind_speed: Option<String>,
    #[arg(long)]
    pub month: Option<String>,
    #[arg(long)]
    pub hour: Option<String>,
}

impl FeatureArgs {
    fn value(&self, field: PredictionField) -> Option<&str> {
        let value = match field {
            PredictionField::Temperature => &self.temperature,
            PredictionField::Humidity => &self.humidity,
            PredictionField::Rain => &self.rain,
            PredictionField::Pressure => &self.pressure,
            PredictionField::WindSpeed => &self.wind_speed,
            PredictionField::Month => &self.month,
            PredictionField::Hour => &self.hour,
        };
        value.as_deref()
    }
}

/// Build the prediction state from the CLI arguments.
fn prepare(mode: PredictionMode, features: &FeatureArgs) -> anyhow::Result<Prediction> {
    let mut view = Prediction::new();
    view.set_mode(mode);
    for field in PredictionField::ALL {
        if let Some(input) = features.value(field) {
            view.set_field(field, input)?;
        }
    }
    Ok(view)
}

pub async fn run_predict(
    client: &ApiClient,
    mode: PredictionMode,
    features: &FeatureArgs,
) -> anyhow::Result<()> {
    let mut view = prepare(mode, features)?;
    let request = view.begin_submit();
    log::info!("Submitting {} prediction to {}", request.mode, request.endpoint());

    let outcome = match request.mode {
        PredictionMode::Risk => {
            let result = client.predict_air_quality(&request.features).await;
            view.complete_risk(request, result)
        }
        PredictionMode::Pollution => {
            let result = client.predict_pollution(&request.features).await;
            view.complete_pollution(request, result)
        }
    };

    match (outcome, view.result()) {
        (Outcome::Failed(message), _) => anyhow::bail!(message),
        (_, Some(result)) => {
            println!("{}: {}", request.mode.label(), result.display());
            Ok(())
        }
        (_, None) => anyhow::bail!("No prediction result"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cip_core::prediction::FeatureVector;

    #[test]
    fn test_prepare_applies_overrides() {
        let args = FeatureArgs {
            temperature: Some("-3.5".to_string()),
            hour: Some(" 18 ".to_string()),
            ..Default::default()
        };
        let view = prepare(PredictionMode::Pollution, &args).unwrap();
        assert_eq!(view.mode(), PredictionMode::Pollution);
        assert_eq!(view.form().get(PredictionField::Temperature), -3.5);
        assert_eq!(view.form().get(PredictionField::Hour), 18.0);
        assert_eq!(
            view.form().get(PredictionField::Pressure),
            FeatureVector::default().get(PredictionField::Pressure)
        );
    }

    #[test]
    fn test_prepare_rejects_bad_input() {
        let args = FeatureArgs {
            humidity: Some("damp".to_string()),
            ..Default::default()
        };
        assert!(prepare(PredictionMode::Risk, &args).is_err());

        let args = FeatureArgs {
            rain: Some("inf".to_string()),
            ..Default::default()
        };
        assert!(prepare(PredictionMode::Risk, &args).is_err());
    }
}
