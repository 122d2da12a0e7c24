//! Feature vector, inference modes and result shapes for the prediction form.

use crate::format::to_fixed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which inference endpoint the form submits to.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMode {
    /// Air quality risk category (classifier)
    #[default]
    Risk,
    /// PM2.5 concentration (regressor)
    Pollution,
}

impl PredictionMode {
    pub const ALL: [PredictionMode; 2] = [PredictionMode::Risk, PredictionMode::Pollution];

    pub fn endpoint(&self) -> &'static str {
        match self {
            PredictionMode::Risk => "/predict/air-quality",
            PredictionMode::Pollution => "/predict/pollution",
        }
    }

    /// Label of the mode toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            PredictionMode::Risk => "Air Quality Risk",
            PredictionMode::Pollution => "Pollution (PM2.5) Level",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMode::Risk => "risk",
            PredictionMode::Pollution => "pollution",
        }
    }
}

impl fmt::Display for PredictionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "risk" => Ok(PredictionMode::Risk),
            "pollution" => Ok(PredictionMode::Pollution),
            other => Err(format!("unknown prediction mode: {}", other)),
        }
    }
}

/// Keys of the prediction form, in form order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PredictionField {
    Temperature,
    Humidity,
    Rain,
    Pressure,
    WindSpeed,
    Month,
    Hour,
}

impl PredictionField {
    pub const ALL: [PredictionField; 7] = [
        PredictionField::Temperature,
        PredictionField::Humidity,
        PredictionField::Rain,
        PredictionField::Pressure,
        PredictionField::WindSpeed,
        PredictionField::Month,
        PredictionField::Hour,
    ];

    /// Wire key, identical to the serialized field name of [`FeatureVector`].
    pub fn key(&self) -> &'static str {
        match self {
            PredictionField::Temperature => "temperature",
            PredictionField::Humidity => "humidity",
            PredictionField::Rain => "rain",
            PredictionField::Pressure => "pressure",
            PredictionField::WindSpeed => "wind_speed",
            PredictionField::Month => "month",
            PredictionField::Hour => "hour",
        }
    }

    /// Form label: the key with underscores replaced by spaces.
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }
}

/// Rejected form input. The field keeps its previous value.
#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum FieldError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },
    #[error("{field}: '{input}' is not a finite number")]
    NotFinite { field: &'static str, input: String },
}

/// The seven model inputs. Serialized as-is as the request body of both
/// inference endpoints.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: f64,
    pub humidity: f64,
    pub rain: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub month: f64,
    pub hour: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            temperature: 20.0,
            humidity: 50.0,
            rain: 0.0,
            pressure: 1012.0,
            wind_speed: 10.0,
            month: 6.0,
            hour: 12.0,
        }
    }
}

impl FeatureVector {
    pub fn get(&self, field: PredictionField) -> f64 {
        match field {
            PredictionField::Temperature => self.temperature,
            PredictionField::Humidity => self.humidity,
            PredictionField::Rain => self.rain,
            PredictionField::Pressure => self.pressure,
            PredictionField::WindSpeed => self.wind_speed,
            PredictionField::Month => self.month,
            PredictionField::Hour => self.hour,
        }
    }

    fn slot(&mut self, field: PredictionField) -> &mut f64 {
        match field {
            PredictionField::Temperature => &mut self.temperature,
            PredictionField::Humidity => &mut self.humidity,
            PredictionField::Rain => &mut self.rain,
            PredictionField::Pressure => &mut self.pressure,
            PredictionField::WindSpeed => &mut self.wind_speed,
            PredictionField::Month => &mut self.month,
            PredictionField::Hour => &mut self.hour,
        }
    }

    /// Parse `input` and store it under `field`.
    ///
    /// No range checks are applied. Input that is not a finite number is
    /// rejected and the previous value is kept, so the record is always
    /// serializable to plain JSON numbers.
    pub fn set(&mut self, field: PredictionField, input: &str) -> Result<f64, FieldError> {
        let trimmed = input.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| FieldError::NotANumber {
                field: field.key(),
                input: input.to_string(),
            })?;
        if !value.is_finite() {
            return Err(FieldError::NotFinite {
                field: field.key(),
                input: input.to_string(),
            });
        }
        *self.slot(field) = value;
        Ok(value)
    }
}

/// Response of `/predict/air-quality`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub aqi_category: String,
    /// Classifier probability in [0, 1]. The backend may send `null`.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Response of `/predict/pollution`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PollutionPrediction {
    pub predicted_pm25: f64,
}

/// A prediction tagged with the mode that was active when it was requested.
#[derive(Debug, PartialEq, Clone)]
pub enum PredictionResult {
    Risk(RiskPrediction),
    Pollution(PollutionPrediction),
}

/// What the result panel shows.
#[derive(Debug, PartialEq, Clone)]
pub enum ResultDisplay {
    Risk {
        category: String,
        /// `true` when the category is "Good"; drives the highlight color.
        good: bool,
        confidence: Option<String>,
    },
    Pollution {
        concentration: String,
    },
}

impl PredictionResult {
    pub fn mode(&self) -> PredictionMode {
        match self {
            PredictionResult::Risk(_) => PredictionMode::Risk,
            PredictionResult::Pollution(_) => PredictionMode::Pollution,
        }
    }

    pub fn display(&self) -> ResultDisplay {
        match self {
            PredictionResult::Risk(risk) => ResultDisplay::Risk {
                category: risk.aqi_category.clone(),
                good: risk.aqi_category == "Good",
                confidence: risk
                    .confidence
                    .map(|c| format!("Confidence: {}%", to_fixed(c * 100.0, 1))),
            },
            PredictionResult::Pollution(pollution) => ResultDisplay::Pollution {
                concentration: format!("{} µg/m³", to_fixed(pollution.predicted_pm25, 2)),
            },
        }
    }
}

impl fmt::Display for ResultDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultDisplay::Risk {
                category,
                confidence,
                ..
            } => match confidence {
                Some(confidence) => write!(f, "{} ({})", category, confidence),
                None => write!(f, "{}", category),
            },
            ResultDisplay::Pollution { concentration } => {
                write!(f, "{} (Estimated PM2.5 Concentration)", concentration)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_payload_keys_match_form_keys() {
        let value = serde_json::to_value(FeatureVector::default()).unwrap();
        let payload_keys: BTreeSet<String> = value.as_object().unwrap().keys().cloned().collect();
        let form_keys: BTreeSet<String> = PredictionField::ALL
            .iter()
            .map(|f| f.key().to_string())
            .collect();
        assert_eq!(payload_keys, form_keys);
    }

    #[test]
    fn test_defaults() {
        let form = FeatureVector::default();
        let values: Vec<f64> = PredictionField::ALL.iter().map(|f| form.get(*f)).collect();
        assert_eq!(values, vec![20.0, 50.0, 0.0, 1012.0, 10.0, 6.0, 12.0]);
    }

    #[test]
    fn test_set_accepts_numbers_without_range_checks() {
        let mut form = FeatureVector::default();
        assert_eq!(form.set(PredictionField::Hour, "27"), Ok(27.0));
        assert_eq!(form.set(PredictionField::WindSpeed, " 12.5 "), Ok(12.5));
        assert_eq!(form.set(PredictionField::Temperature, "-40"), Ok(-40.0));
        assert_eq!(form.hour, 27.0);
        assert_eq!(form.wind_speed, 12.5);
        assert_eq!(form.temperature, -40.0);
    }

    #[test]
    fn test_set_rejects_bad_input_and_keeps_previous_value() {
        let mut form = FeatureVector::default();
        assert!(matches!(
            form.set(PredictionField::Pressure, "abc"),
            Err(FieldError::NotANumber { field: "pressure", .. })
        ));
        assert!(matches!(
            form.set(PredictionField::Pressure, ""),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(matches!(
            form.set(PredictionField::Pressure, "NaN"),
            Err(FieldError::NotFinite { .. })
        ));
        assert!(matches!(
            form.set(PredictionField::Pressure, "inf"),
            Err(FieldError::NotFinite { .. })
        ));
        assert_eq!(form.pressure, 1012.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PredictionField::WindSpeed.label(), "wind speed");
        assert_eq!(PredictionMode::Risk.endpoint(), "/predict/air-quality");
        assert_eq!(PredictionMode::Pollution.endpoint(), "/predict/pollution");
        assert_eq!("Pollution".parse::<PredictionMode>(), Ok(PredictionMode::Pollution));
    }

    #[test]
    fn test_pollution_display_rounds_to_two_decimals() {
        let result = PredictionResult::Pollution(PollutionPrediction {
            predicted_pm25: 42.567,
        });
        assert_eq!(
            result.display(),
            ResultDisplay::Pollution {
                concentration: "42.57 µg/m³".to_string()
            }
        );
    }

    #[test]
    fn test_half_way_results_round_up() {
        let pollution = PredictionResult::Pollution(PollutionPrediction {
            predicted_pm25: 10.125,
        });
        assert_eq!(pollution.display().to_string(), "10.13 µg/m³ (Estimated PM2.5 Concentration)");

        let risk = PredictionResult::Risk(RiskPrediction {
            aqi_category: "Moderate".to_string(),
            confidence: Some(0.8125),
        });
        match risk.display() {
            ResultDisplay::Risk { confidence, .. } => {
                assert_eq!(confidence.as_deref(), Some("Confidence: 81.3%"))
            }
            other => panic!("expected risk display, got {:?}", other),
        }
    }

    #[test]
    fn test_risk_display() {
        let result = PredictionResult::Risk(RiskPrediction {
            aqi_category: "Good".to_string(),
            confidence: Some(0.873),
        });
        assert_eq!(
            result.display(),
            ResultDisplay::Risk {
                category: "Good".to_string(),
                good: true,
                confidence: Some("Confidence: 87.3%".to_string()),
            }
        );

        let missing: RiskPrediction =
            serde_json::from_str(r#"{"aqi_category":"Unhealthy","confidence":null}"#).unwrap();
        let display = PredictionResult::Risk(missing).display();
        assert_eq!(display.to_string(), "Unhealthy");
    }
}
