//! `status` command.

use cip_core::client::ApiClient;

pub async fn run_status(client: &ApiClient) -> anyhow::Result<()> {
    let status = client.status().await?;
    println!("{}: {}", status.service, status.status);
    Ok(())
}
