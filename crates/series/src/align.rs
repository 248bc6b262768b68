use plot_core::{AlignedSeries, AlignedValue, Sample, Timeline};
use std::collections::HashMap;

/// Project one metric's samples onto the full timeline.
///
/// Positions without a sample at that exact timestamp become
/// [`AlignedValue::Missing`]; nothing is interpolated.  If a metric reports the
/// same timestamp twice, the later sample wins.
pub fn align(timeline: &Timeline, samples: &[Sample]) -> AlignedSeries {
    let lookup: HashMap<_, _> = samples.iter().map(|s| (s.at, s.value)).collect();

    let values = timeline
        .iter()
        .map(|at| match lookup.get(at) {
            Some(&v) => AlignedValue::Value(v),
            None => AlignedValue::Missing,
        })
        .collect();

    AlignedSeries::new(values)
}
