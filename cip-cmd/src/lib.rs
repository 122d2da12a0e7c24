//! Command implementations for the climate platform CLI.
//!
//! Each subcommand drives the same controller the dashboard view uses and
//! prints that controller's display strings. A failed request ends the
//! command with an error.

use cip_core::client::ApiClient;
use cip_core::prediction::PredictionMode;
use cip_core::{ApiConfig, City};
use clap::{Args, Subcommand};

pub mod analysis;
pub mod predict;
pub mod status;
pub mod weather;

#[derive(Subcommand)]
pub enum Command {
    /// Show current conditions for a city
    Current {
        /// City name, e.g. "Tokyo" or "New York"
        #[arg(short, long, default_value_t = City::default())]
        city: City,
    },

    /// Show the multi-day forecast and the city insight
    Forecast {
        #[arg(short, long, default_value_t = City::default())]
        city: City,
    },

    /// Run an air-quality risk or PM2.5 prediction
    Predict {
        /// Prediction mode: risk or pollution
        #[arg(short, long, default_value_t = PredictionMode::default())]
        mode: PredictionMode,

        #[command(flatten)]
        features: predict::FeatureArgs,
    },

    /// Show the city cluster analysis
    Analysis,

    /// Classify a set of conditions into a city cluster
    Classify(ClassifyArgs),

    /// Check that the API is up
    Status,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[arg(long)]
    pub temperature: f64,
    #[arg(long)]
    pub humidity: f64,
    #[arg(long)]
    pub rain: f64,
    /// PM2.5 concentration in µg/m³
    #[arg(long = "pm25")]
    pub pm2_5: f64,
}

pub async fn run(command: Command, config: ApiConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(config)?;
    log::debug!("Using API at {}", client.base_url());
    match command {
        Command::Current { city } => weather::run_current(&client, city).await,
        Command::Forecast { city } => weather::run_forecast(&client, city).await,
        Command::Predict { mode, features } => predict::run_predict(&client, mode, &features).await,
        Command::Analysis => analysis::run_analysis(&client).await,
        Command::Classify(args) => analysis::run_classify(&client, &args).await,
        Command::Status => status::run_status(&client).await,
    }
}
