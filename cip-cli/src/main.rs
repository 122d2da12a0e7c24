//! CIP CLI - query weather, forecasts, predictions and city clusters from the
//! Climate Intelligence Platform API.

use cip_core::config::API_URL_ENV;
use cip_core::ApiConfig;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cip-cli",
    version,
    about = "Climate Intelligence Platform command line client"
)]
struct Cli {
    /// API base URL, e.g. http://127.0.0.1:8000/api
    #[arg(long, env = API_URL_ENV, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: cip_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ApiConfig::resolve(cli.api_url.as_deref());
    log::debug!("API base path: {}", config.base_path);
    cip_cmd::run(cli.command, config).await
}
