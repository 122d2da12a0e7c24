use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown in place of an environmental profile for cities missing from the insight table.
pub const INSIGHT_FALLBACK: &str =
    "Detailed environmental data not available for this location.";

/// One of the monitored cities offered by every location selector.
///
/// The backend only resolves coordinates for these eight names, so the
/// selector never offers anything else.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    London,
    #[serde(rename = "New York")]
    NewYork,
    Tokyo,
    Delhi,
    Beijing,
    Paris,
    Berlin,
    Sydney,
}

/// Returned when a name does not match any monitored city.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("unknown city: {0}")]
pub struct UnknownCity(pub String);

impl City {
    /// All cities in selector order. The first entry is the default selection.
    pub const ALL: [City; 8] = [
        City::London,
        City::NewYork,
        City::Tokyo,
        City::Delhi,
        City::Beijing,
        City::Paris,
        City::Berlin,
        City::Sydney,
    ];

    /// Display name, also used verbatim as the `city` query parameter.
    pub fn name(&self) -> &'static str {
        match self {
            City::London => "London",
            City::NewYork => "New York",
            City::Tokyo => "Tokyo",
            City::Delhi => "Delhi",
            City::Beijing => "Beijing",
            City::Paris => "Paris",
            City::Berlin => "Berlin",
            City::Sydney => "Sydney",
        }
    }

    /// Short climate and pollution profile shown next to the forecast chart.
    pub fn insight(&self) -> &'static str {
        insight_for(self.name())
    }
}

impl Default for City {
    fn default() -> Self {
        City::ALL[0]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = UnknownCity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}

/// Look up the environmental profile for a city by name.
///
/// Names outside the table get [`INSIGHT_FALLBACK`].
pub fn insight_for(name: &str) -> &'static str {
    match name {
        "London" => "Temperate maritime climate. Frequent cloud cover and light precipitation. Primary pollution source: Road traffic (NO2).",
        "New York" => "Humid subtropical climate. Significant seasonal temperature variation. Pollution risks: Ozone in summer, PM2.5 from urban density.",
        "Tokyo" => "Humid subtropical. Wet summers, dry winters. High urban density leads to heat island effect and localized particulate accumulation.",
        "Delhi" => "Semi-arid climate. Extreme temperatures. Critical air quality issues in winter due to inversion layers and agricultural burning (PM2.5/PM10).",
        "Beijing" => "Humid continental. Hot, humid summers; cold, dry winters. Historically high PM2.5, though significantly improved recent years. Dust storms in spring.",
        "Paris" => "Oceanic climate. Mild temperatures. key pollutants: Nitrogen dioxide from diesel vehicles and particulate matter.",
        "Berlin" => "Temperate seasonal climate. Moderate rainfall. Air quality generally good but winter smog episodes occur due to wood burning and traffic.",
        "Sydney" => "Humid subtropical. Sunny with mild winters. Occasional bushfire smoke events impact air quality (PM2.5) severely in summer.",
        _ => INSIGHT_FALLBACK,
    }
}
