//! `current` and `forecast` commands.

use cip_core::client::ApiClient;
use cip_core::controller::{CurrentConditions, CurrentDisplay, Forecast, Outcome};
use cip_core::weather::ForecastCard;
use cip_core::City;

pub async fn run_current(client: &ApiClient, city: City) -> anyhow::Result<()> {
    let mut view = CurrentConditions::new();
    let request = view.begin_select(city);
    let result = client.current_weather(request.city).await;
    if let Outcome::Failed(e) = view.complete_select(request, result) {
        anyhow::bail!("Failed to fetch current weather for {}: {}", city, e);
    }
    for line in current_lines(city, &view.display()) {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_forecast(client: &ApiClient, city: City) -> anyhow::Result<()> {
    let mut view = Forecast::new();
    let request = view.begin_select(city);
    let result = client.forecast(request.city).await;
    if let Outcome::Failed(e) = view.complete_select(request, result) {
        anyhow::bail!("Failed to fetch forecast for {}: {}", city, e);
    }
    println!("{} - {}-day outlook", city, view.series().len());
    for card in view.cards() {
        println!("{}", card_line(&card));
    }
    println!();
    println!("{}", view.insight());
    Ok(())
}

fn current_lines(city: City, display: &CurrentDisplay) -> Vec<String> {
    match display {
        CurrentDisplay::Ready(d) => vec![
            format!("{} Overview", city),
            format!("  Temp:     {}", d.temperature),
            format!("  Humidity: {}", d.humidity),
            format!("  Wind:     {}", d.wind),
            format!("  Status:   {}", d.status),
        ],
        CurrentDisplay::NoData => vec!["No data available.".to_string()],
        CurrentDisplay::Loading => vec!["Loading live data...".to_string()],
    }
}

fn card_line(card: &ForecastCard) -> String {
    format!(
        "  {:<12} {:>7}  {}  {}  {}",
        card.date, card.temperature, card.wind, card.rain, card.chance
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cip_core::weather::{ForecastDay, Snapshot};

    #[test]
    fn test_current_lines() {
        let snapshot = Snapshot {
            temperature: 26.5,
            humidity: 70.0,
            wind_speed: 12.3,
            condition: "Cloudy".to_string(),
            city_name: None,
        };
        let lines = current_lines(City::Tokyo, &CurrentDisplay::Ready(snapshot.display()));
        assert_eq!(lines[0], "Tokyo Overview");
        assert!(lines[1].ends_with("26.5°"));
        assert!(lines[3].ends_with("12.30 km/h"));
        assert!(lines[4].ends_with("Cloudy"));

        assert_eq!(
            current_lines(City::Tokyo, &CurrentDisplay::NoData),
            vec!["No data available.".to_string()]
        );
    }

    #[test]
    fn test_card_line() {
        let day = ForecastDay {
            date: "Mon".to_string(),
            temperature: 18.2,
            wind_speed: 5.0,
            rain: 0.0,
            precipitation_probability: 10.0,
        };
        let line = card_line(&day.card());
        assert!(line.contains("18.2°"));
        assert!(line.contains("Wind: 5.0 km/h"));
        assert!(line.contains("Rain: 0.0 mm"));
        assert!(line.ends_with("Chance: 10%"));
    }
}
