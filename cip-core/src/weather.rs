//! Current conditions and multi-day forecast records as served by
//! `/weather/current` and `/forecast/weather`.

use crate::format::to_fixed;
use serde::{Deserialize, Serialize};

/// Current conditions for a single city.
///
/// Humidity arrives as a float from the backend (e.g. `70.0`) even though it
/// is a whole percentage, so it is kept as `f64` and printed with `Display`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Short condition label, e.g. "Cloudy"
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Display strings for the four stat cards of the current-conditions view.
#[derive(Debug, PartialEq, Clone)]
pub struct SnapshotDisplay {
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
    pub status: String,
}

impl Snapshot {
    pub fn display(&self) -> SnapshotDisplay {
        SnapshotDisplay {
            temperature: format!("{}°", to_fixed(self.temperature, 1)),
            humidity: format!("{}%", self.humidity),
            wind: format!("{} km/h", to_fixed(self.wind_speed, 2)),
            status: self.condition.clone(),
        }
    }
}

/// One day of the forecast series.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    /// Mean of the daily max and min, °C
    pub temperature: f64,
    /// Daily max wind speed, km/h
    pub wind_speed: f64,
    /// Precipitation sum, mm
    pub rain: f64,
    /// Chance of precipitation in percent (0-100)
    pub precipitation_probability: f64,
}

/// Body of a `/forecast/weather` response. Only `forecast` is consumed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub city: Option<String>,
    pub forecast: Vec<ForecastDay>,
}

/// A (date, temperature) point on the forecast line chart.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub temperature: f64,
}

/// Display strings for a single forecast outlook card.
#[derive(Debug, PartialEq, Clone)]
pub struct ForecastCard {
    pub date: String,
    pub temperature: String,
    pub wind: String,
    pub rain: String,
    pub chance: String,
}

impl ForecastDay {
    pub fn chart_point(&self) -> ChartPoint {
        ChartPoint {
            date: self.date.clone(),
            temperature: self.temperature,
        }
    }

    pub fn card(&self) -> ForecastCard {
        ForecastCard {
            date: self.date.clone(),
            temperature: format!("{}°", to_fixed(self.temperature, 1)),
            wind: format!("Wind: {} km/h", to_fixed(self.wind_speed, 1)),
            rain: format!("Rain: {} mm", to_fixed(self.rain, 1)),
            chance: format!("Chance: {}%", self.precipitation_probability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_display_matches_stat_cards() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "temperature": 26.5,
            "humidity": 70,
            "wind_speed": 12.3,
            "condition": "Cloudy"
        }))
        .unwrap();
        let display = snapshot.display();
        assert_eq!(display.temperature, "26.5°");
        assert_eq!(display.humidity, "70%");
        assert_eq!(display.wind, "12.30 km/h");
        assert_eq!(display.status, "Cloudy");
    }

    #[test]
    fn test_snapshot_accepts_float_humidity_and_city_name() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"city_name":"Delhi","temperature":31.04,"humidity":44.0,"wind_speed":3.0,"condition":"Clear"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.city_name.as_deref(), Some("Delhi"));
        assert_eq!(snapshot.display().humidity, "44%");
        assert_eq!(snapshot.display().temperature, "31.0°");
    }

    #[test]
    fn test_forecast_card_formatting() {
        let day = ForecastDay {
            date: "Mon".to_string(),
            temperature: 18.2,
            wind_speed: 5.0,
            rain: 0.0,
            precipitation_probability: 10.0,
        };
        let card = day.card();
        assert_eq!(card.date, "Mon");
        assert_eq!(card.temperature, "18.2°");
        assert_eq!(card.wind, "Wind: 5.0 km/h");
        assert_eq!(card.rain, "Rain: 0.0 mm");
        assert_eq!(card.chance, "Chance: 10%");
        assert_eq!(
            day.chart_point(),
            ChartPoint {
                date: "Mon".to_string(),
                temperature: 18.2
            }
        );
    }

    #[test]
    fn test_half_way_values_round_up() {
        let day = ForecastDay {
            date: "Tue".to_string(),
            temperature: 18.25,
            wind_speed: 0.25,
            rain: 2.75,
            precipitation_probability: 40.0,
        };
        let card = day.card();
        assert_eq!(card.temperature, "18.3°");
        assert_eq!(card.wind, "Wind: 0.3 km/h");
        assert_eq!(card.rain, "Rain: 2.8 mm");

        let snapshot = Snapshot {
            temperature: 26.25,
            humidity: 70.0,
            wind_speed: 1.125,
            condition: "Clear".to_string(),
            city_name: None,
        };
        let display = snapshot.display();
        assert_eq!(display.temperature, "26.3°");
        assert_eq!(display.wind, "1.13 km/h");
    }

    #[test]
    fn test_forecast_response_ignores_extra_fields() {
        let response: ForecastResponse = serde_json::from_str(
            r#"{"city":"Paris","forecast":[{"date":"2025-06-01","temperature":21.5,"wind_speed":14.2,"rain":1.24,"precipitation_probability":35.0,"aqi":null}]}"#,
        )
        .unwrap();
        assert_eq!(response.forecast.len(), 1);
        assert_eq!(response.forecast[0].card().rain, "Rain: 1.2 mm");
    }
}
