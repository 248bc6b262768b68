/// One query against the metrics service: `GET {base}/{endpoint}?start=&stop=&step=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Path segment appended to the base URL, e.g. `"hour_metrics"`.
    pub endpoint: String,
    /// Inclusive lower bound, epoch seconds.
    pub start:    Option<i64>,
    /// Inclusive upper bound, epoch seconds.
    pub stop:     Option<i64>,
    /// Sampling interval in seconds.
    pub step:     Option<u64>,
}

impl FetchRequest {
    /// A pre-aggregated rollup endpoint queried without parameters.
    pub fn recent(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            start:    None,
            stop:     None,
            step:     None,
        }
    }

    /// An explicit timestamp-range query.
    pub fn range(endpoint: impl Into<String>, start: i64, stop: i64, step: Option<u64>) -> Self {
        Self {
            endpoint: endpoint.into(),
            start:    Some(start),
            stop:     Some(stop),
            step,
        }
    }

    /// Full URL for this request under `base` (trailing slashes tolerated).
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    /// Query parameters that are set, in `start`, `stop`, `step` order.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(start) = self.start {
            query.push(("start", start.to_string()));
        }
        if let Some(stop) = self.stop {
            query.push(("stop", stop.to_string()));
        }
        if let Some(step) = self.step {
            query.push(("step", step.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_has_no_query() {
        let req = FetchRequest::recent("hour_metrics");
        assert!(req.query().is_empty());
        assert_eq!(req.url("http://host/api/"), "http://host/api/hour_metrics");
    }

    #[test]
    fn range_query_skips_missing_step() {
        let req = FetchRequest::range("timestamp_metrics", 100, 200, None);
        assert_eq!(
            req.query(),
            vec![("start", "100".to_string()), ("stop", "200".to_string())]
        );
    }

    #[test]
    fn range_query_with_step() {
        let req = FetchRequest::range("timestamp_metrics", 100, 200, Some(60));
        assert_eq!(req.query().last(), Some(&("step", "60".to_string())));
    }
}
