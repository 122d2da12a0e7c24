use super::{Generation, Outcome, Phase, RequestGuard};
use crate::error::ApiError;
use crate::weather::{ChartPoint, ForecastCard, ForecastDay, ForecastResponse};
use crate::City;

/// Ticket for `POST /forecast/weather?city={city}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastRequest {
    pub generation: Generation,
    pub city: City,
}

/// State of the forecast (analytics) view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Forecast {
    selected: City,
    series: Vec<ForecastDay>,
    phase: Phase,
    guard: RequestGuard,
}

impl Forecast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> City {
        self.selected
    }

    pub fn series(&self) -> &[ForecastDay] {
        &self.series
    }

    pub fn loading(&self) -> bool {
        self.phase.is_fetching()
    }

    pub fn begin_select(&mut self, city: City) -> ForecastRequest {
        let generation = self.guard.issue();
        self.selected = city;
        self.phase = Phase::Fetching(generation);
        ForecastRequest { generation, city }
    }

    pub fn complete_select(
        &mut self,
        request: ForecastRequest,
        result: Result<ForecastResponse, ApiError>,
    ) -> Outcome {
        if !self.guard.is_latest(request.generation) {
            log::debug!(
                "discarding stale forecast for {} (generation {})",
                request.city,
                request.generation.value()
            );
            return Outcome::Stale;
        }
        self.phase = Phase::Idle;
        match result {
            Ok(response) => {
                self.series = response.forecast;
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to fetch forecast for {}: {}", request.city, e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    /// Line chart series: date on the category axis, temperature as value.
    pub fn chart_series(&self) -> Vec<ChartPoint> {
        self.series.iter().map(ForecastDay::chart_point).collect()
    }

    /// One outlook card per day, mirroring the chart series.
    pub fn cards(&self) -> Vec<ForecastCard> {
        self.series.iter().map(ForecastDay::card).collect()
    }

    pub fn insight(&self) -> &'static str {
        self.selected.insight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, temperature: f64) -> ForecastDay {
        ForecastDay {
            date: date.to_string(),
            temperature,
            wind_speed: 5.0,
            rain: 0.0,
            precipitation_probability: 10.0,
        }
    }

    fn response(days: Vec<ForecastDay>) -> ForecastResponse {
        ForecastResponse {
            city: None,
            forecast: days,
        }
    }

    #[test]
    fn test_chart_and_cards_mirror_series() {
        for n in [0usize, 1, 3, 7] {
            let mut view = Forecast::new();
            let days: Vec<ForecastDay> = (0..n).map(|i| day(&format!("D{}", i), i as f64)).collect();
            let request = view.begin_select(City::London);
            view.complete_select(request, Ok(response(days.clone())));

            let chart = view.chart_series();
            let cards = view.cards();
            assert_eq!(chart.len(), n);
            assert_eq!(cards.len(), n);
            for (i, d) in days.iter().enumerate() {
                assert_eq!(chart[i].date, d.date);
                assert_eq!(cards[i].date, d.date);
            }
        }
    }

    #[test]
    fn test_single_day_scenario() {
        let mut view = Forecast::new();
        let request = view.begin_select(City::London);
        let parsed: ForecastResponse = serde_json::from_str(
            r#"{"forecast":[{"date":"Mon","temperature":18.2,"wind_speed":5.0,"rain":0.0,"precipitation_probability":10}]}"#,
        )
        .unwrap();
        assert_eq!(view.complete_select(request, Ok(parsed)), Outcome::Applied);

        assert_eq!(
            view.chart_series(),
            vec![ChartPoint {
                date: "Mon".to_string(),
                temperature: 18.2
            }]
        );
        let card = &view.cards()[0];
        assert_eq!(card.temperature, "18.2°");
        assert_eq!(card.wind, "Wind: 5.0 km/h");
        assert_eq!(card.rain, "Rain: 0.0 mm");
        assert_eq!(card.chance, "Chance: 10%");
    }

    #[test]
    fn test_failure_keeps_prior_series() {
        let mut view = Forecast::new();
        let request = view.begin_select(City::Beijing);
        view.complete_select(request, Ok(response(vec![day("Tue", 12.0)])));

        let request = view.begin_select(City::Berlin);
        let outcome = view.complete_select(
            request,
            Err(ApiError::Status {
                status: 404,
                body: "City not found".to_string(),
            }),
        );
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(view.series(), &[day("Tue", 12.0)]);
        assert_eq!(view.selected(), City::Berlin);
    }

    #[test]
    fn test_stale_forecast_is_discarded() {
        let mut view = Forecast::new();
        let slow = view.begin_select(City::Tokyo);
        let fast = view.begin_select(City::Paris);
        view.complete_select(fast, Ok(response(vec![day("Wed", 20.0)])));
        assert_eq!(
            view.complete_select(slow, Ok(response(vec![day("Wed", 30.0)]))),
            Outcome::Stale
        );
        assert_eq!(view.series(), &[day("Wed", 20.0)]);
    }

    #[test]
    fn test_insight_follows_selection() {
        let mut view = Forecast::new();
        assert_eq!(view.insight(), City::London.insight());
        view.begin_select(City::Sydney);
        assert!(view.insight().contains("bushfire"));
    }
}
