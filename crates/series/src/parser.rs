use chrono::DateTime;
use plot_core::{PlotError, RawMetrics, Result, Sample, Timeline};
use std::collections::BTreeMap;

/// Output of [`parse`]: the shared timeline and every metric's own samples.
#[derive(Debug, Clone, Default)]
pub struct ParsedMetrics {
    pub timeline: Timeline,
    series:       BTreeMap<String, Vec<Sample>>,
}

impl ParsedMetrics {
    /// Samples for `key`, ordered by timestamp.  Absent keys yield an empty slice.
    pub fn samples(&self, key: &str) -> &[Sample] {
        self.series.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every metric key present in the response, including unknown ones.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

/// Convert a raw response into a [`Timeline`] plus per-metric sample lists.
///
/// Each metric's samples are stably sorted by timestamp, so duplicates keep
/// their arrival order.  An empty timeline is a normal result, not an error.
pub fn parse(raw: &RawMetrics) -> Result<ParsedMetrics> {
    let mut series = BTreeMap::new();
    let mut times = Vec::new();

    for (key, entries) in raw {
        let mut samples = Vec::with_capacity(entries.len());
        for entry in entries {
            let at = DateTime::from_timestamp(entry.x, 0).ok_or_else(|| {
                PlotError::Parse(format!("{key}: timestamp {} out of range", entry.x))
            })?;
            samples.push(Sample::new(at, entry.y));
            times.push(at);
        }
        samples.sort_by_key(|s| s.at);
        series.insert(key.clone(), samples);
    }

    let timeline = Timeline::from_unsorted(times);
    tracing::debug!(
        metrics = series.len(),
        points = timeline.len(),
        "parsed metrics response"
    );

    Ok(ParsedMetrics { timeline, series })
}
