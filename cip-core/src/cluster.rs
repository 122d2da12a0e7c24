//! Cluster-analysis points and their three-way partition by label.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A city profile placed on the temperature / PM2.5 plane by the clustering model.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ClusterPoint {
    /// Mean temperature, °C
    pub x: f64,
    /// Mean PM2.5, µg/m³
    pub y: f64,
    /// Model cluster id. Kept as raw JSON: a point with a missing, null or
    /// non-integral id is dropped on its own instead of failing the batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Value>,
    /// Anything else the backend attaches (e.g. `city`), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClusterPoint {
    pub fn new(x: f64, y: f64, cluster: i64) -> Self {
        Self {
            x,
            y,
            cluster: Some(Value::from(cluster)),
            extra: Map::new(),
        }
    }

    /// Label of this point's cluster id. `1` and `1.0` both name a label;
    /// anything else (strings, null, fractions, ids outside 0..=2) does not.
    pub fn label(&self) -> Option<ClusterLabel> {
        let id = self.cluster.as_ref()?.as_f64()?;
        if id.fract() != 0.0 {
            return None;
        }
        ClusterLabel::from_id(id as i64)
    }

    pub fn city(&self) -> Option<&str> {
        self.extra.get("city").and_then(Value::as_str)
    }
}

/// The fixed cluster labels, in legend order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum ClusterLabel {
    LowPollution,
    Industrial,
    Extreme,
}

impl ClusterLabel {
    pub const ALL: [ClusterLabel; 3] = [
        ClusterLabel::LowPollution,
        ClusterLabel::Industrial,
        ClusterLabel::Extreme,
    ];

    /// Map a model cluster id to its label. Ids outside 0..=2 have no label.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(ClusterLabel::LowPollution),
            1 => Some(ClusterLabel::Industrial),
            2 => Some(ClusterLabel::Extreme),
            _ => None,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ClusterLabel::LowPollution => 0,
            ClusterLabel::Industrial => 1,
            ClusterLabel::Extreme => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClusterLabel::LowPollution => "Low Pollution",
            ClusterLabel::Industrial => "Industrial",
            ClusterLabel::Extreme => "Extreme",
        }
    }

    /// Series fill color on the scatter plot.
    pub fn color(&self) -> &'static str {
        match self {
            ClusterLabel::LowPollution => "#34d399",
            ClusterLabel::Industrial => "#f472b6",
            ClusterLabel::Extreme => "#60a5fa",
        }
    }
}

/// Points grouped into the three labeled buckets, each in input order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Partition {
    low_pollution: Vec<ClusterPoint>,
    industrial: Vec<ClusterPoint>,
    extreme: Vec<ClusterPoint>,
}

impl Partition {
    /// Group `points` by cluster id. Points with an id that has no label are dropped.
    pub fn from_points(points: Vec<ClusterPoint>) -> Self {
        let mut partition = Partition::default();
        for point in points {
            match point.label() {
                Some(label) => partition.bucket_mut(label).push(point),
                None => log::debug!(
                    "dropping point with unrecognized cluster id {:?}",
                    point.cluster
                ),
            }
        }
        partition
    }

    pub fn get(&self, label: ClusterLabel) -> &[ClusterPoint] {
        match label {
            ClusterLabel::LowPollution => &self.low_pollution,
            ClusterLabel::Industrial => &self.industrial,
            ClusterLabel::Extreme => &self.extreme,
        }
    }

    fn bucket_mut(&mut self, label: ClusterLabel) -> &mut Vec<ClusterPoint> {
        match label {
            ClusterLabel::LowPollution => &mut self.low_pollution,
            ClusterLabel::Industrial => &mut self.industrial,
            ClusterLabel::Extreme => &mut self.extreme,
        }
    }

    /// Buckets in legend order.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterLabel, &[ClusterPoint])> {
        ClusterLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }

    pub fn len(&self) -> usize {
        self.low_pollution.len() + self.industrial.len() + self.extreme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Request body of `/cluster/cities`: a single city profile to classify.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub temperature: f64,
    pub humidity: f64,
    pub rain: f64,
    pub pm2_5: f64,
}

/// Response of `/cluster/cities`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub cluster_id: i64,
    pub cluster_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(json: &str) -> Vec<ClusterPoint> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_partition_drops_unknown_ids() {
        let partition = Partition::from_points(points(
            r#"[{"x":1,"y":2,"cluster":0},{"x":3,"y":4,"cluster":1},{"x":5,"y":6,"cluster":9}]"#,
        ));
        assert_eq!(partition.get(ClusterLabel::LowPollution).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Industrial).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Extreme).len(), 0);
        assert_eq!(partition.len(), 2);
        assert!(partition
            .iter()
            .all(|(_, bucket)| bucket.iter().all(|p| p.cluster != Some(Value::from(9)))));
    }

    #[test]
    fn test_partition_is_exact_and_keeps_order() {
        let input: Vec<ClusterPoint> = (0..30)
            .map(|i| ClusterPoint::new(i as f64, (i * 2) as f64, (i % 5) - 1))
            .collect();
        let valid = input
            .iter()
            .filter(|p| p.label().is_some())
            .count();
        let partition = Partition::from_points(input.clone());

        assert_eq!(partition.len(), valid);
        for (label, bucket) in partition.iter() {
            let expected: Vec<&ClusterPoint> =
                input.iter().filter(|p| p.label() == Some(label)).collect();
            let actual: Vec<&ClusterPoint> = bucket.iter().collect();
            assert_eq!(actual, expected, "bucket {}", label.name());
        }
    }

    #[test]
    fn test_passthrough_fields_survive() {
        let parsed = points(r#"[{"city":"Delhi","x":25.1,"y":98.4,"cluster":2}]"#);
        assert_eq!(parsed[0].city(), Some("Delhi"));
        let partition = Partition::from_points(parsed);
        let extreme = partition.get(ClusterLabel::Extreme);
        assert_eq!(extreme[0].city(), Some("Delhi"));
        let back = serde_json::to_value(&extreme[0]).unwrap();
        assert_eq!(back["city"], "Delhi");
        assert_eq!(back["cluster"], 2);
    }

    #[test]
    fn test_malformed_cluster_id_drops_only_that_point() {
        let parsed = points(
            r#"[
                {"x":1,"y":2,"cluster":0},
                {"x":2,"y":3,"cluster":null},
                {"x":3,"y":4},
                {"x":4,"y":5,"cluster":1.0},
                {"x":5,"y":6,"cluster":1.5},
                {"x":6,"y":7,"cluster":"2"},
                {"x":7,"y":8,"cluster":2}
            ]"#,
        );
        assert_eq!(parsed.len(), 7);
        let partition = Partition::from_points(parsed);
        assert_eq!(partition.get(ClusterLabel::LowPollution)[0].x, 1.0);
        assert_eq!(partition.get(ClusterLabel::Industrial).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Industrial)[0].x, 4.0);
        assert_eq!(partition.get(ClusterLabel::Extreme).len(), 1);
        assert_eq!(partition.get(ClusterLabel::Extreme)[0].x, 7.0);
        assert_eq!(partition.len(), 3);
        for label in ClusterLabel::ALL {
            assert_eq!(ClusterLabel::from_id(label.id()), Some(label));
        }
    }

    #[test]
    fn test_empty_partition() {
        let partition = Partition::default();
        assert!(partition.is_empty());
        assert_eq!(partition.iter().count(), 3);
    }
}
