//! One component per dashboard tab.

mod analysis;
mod analytics;
mod dashboard;
mod predict;

pub use analysis::AnalysisView;
pub use analytics::AnalyticsView;
pub use dashboard::DashboardView;
pub use predict::PredictView;
