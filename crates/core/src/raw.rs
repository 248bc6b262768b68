use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of the metrics service response: `{"x": <epoch secs>, "y": <value>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub x: i64,
    pub y: f64,
}

impl RawEntry {
    pub fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whole response body: metric name → entries in arrival order.
///
/// Keys outside the known metric table are kept and flow through parsing
/// like any other metric.
pub type RawMetrics = BTreeMap<String, Vec<RawEntry>>;
