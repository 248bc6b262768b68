/// A telemetry stream the plotter knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Key in the metrics service response, e.g. `"cpu_percent"`.
    pub key:   &'static str,
    /// Human-readable label used for the y-axis and chart title.
    pub label: &'static str,
}

/// Every metric that gets its own chart, in output order.
pub const METRICS: [MetricSpec; 4] = [
    MetricSpec { key: "cpu_percent", label: "CPU %" },
    MetricSpec { key: "ram_used",    label: "RAM Used (GiB)" },
    MetricSpec { key: "disk_used",   label: "Disk Used (GiB)" },
    MetricSpec { key: "cpu_temp",    label: "CPU Temp (°C)" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in METRICS.iter().enumerate() {
            assert!(METRICS[i + 1..].iter().all(|b| b.key != a.key));
        }
    }
}
