//! `analysis` and `classify` commands.

use crate::ClassifyArgs;
use cip_core::client::ApiClient;
use cip_core::cluster::{ClassifyRequest, Partition};
use cip_core::controller::{ClusterAnalysis, Outcome};

pub async fn run_analysis(client: &ApiClient) -> anyhow::Result<()> {
    let mut view = ClusterAnalysis::new();
    let request = view.begin_load();
    let result = client.analysis().await;
    if let Outcome::Failed(e) = view.complete_load(request, result) {
        anyhow::bail!("Failed to fetch cluster analysis: {}", e);
    }
    for line in partition_lines(view.partition()) {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_classify(client: &ApiClient, args: &ClassifyArgs) -> anyhow::Result<()> {
    let request = ClassifyRequest {
        temperature: args.temperature,
        humidity: args.humidity,
        rain: args.rain,
        pm2_5: args.pm2_5,
    };
    let response = client.classify_city(&request).await?;
    println!("Cluster {}: {}", response.cluster_id, response.cluster_name);
    Ok(())
}

fn partition_lines(partition: &Partition) -> Vec<String> {
    let mut lines = Vec::new();
    for (label, points) in partition.iter() {
        lines.push(format!("{} ({})", label.name(), points.len()));
        for point in points {
            lines.push(format!(
                "  {:<12} temperature {:>6.1}  pm2.5 {:>7.1}",
                point.city().unwrap_or("-"),
                point.x,
                point.y
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use cip_core::cluster::ClusterPoint;

    #[test]
    fn test_partition_lines_groups_by_label() {
        let partition = Partition::from_points(vec![
            ClusterPoint::new(1.0, 2.0, 0),
            ClusterPoint::new(3.0, 4.0, 1),
            ClusterPoint::new(5.0, 6.0, 9),
        ]);
        let lines = partition_lines(&partition);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Low Pollution (1)");
        assert!(lines[1].contains("temperature    1.0"));
        assert_eq!(lines[2], "Industrial (1)");
        assert_eq!(lines[4], "Extreme (0)");
    }
}
