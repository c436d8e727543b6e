pub mod metrics;

pub use metrics::{FixedMetrics, MetricsError, MetricsProvider, SharedMetrics};
