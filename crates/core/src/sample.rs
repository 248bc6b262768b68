use chrono::{DateTime, Duration, Utc};

/// One telemetry reading: a point in time and the value observed there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub at:    DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(at: DateTime<Utc>, value: f64) -> Self {
        Self { at, value }
    }
}

/// Sorted union of every distinct timestamp seen in one fetch.
///
/// Strictly increasing, no duplicates.  An empty timeline means the fetch
/// returned no samples at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    points: Vec<DateTime<Utc>>,
}

impl Timeline {
    /// Build a timeline from timestamps in any order, dropping duplicates.
    pub fn from_unsorted(mut points: Vec<DateTime<Utc>>) -> Self {
        points.sort_unstable();
        points.dedup();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<DateTime<Utc>> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DateTime<Utc>> {
        self.points.last().copied()
    }

    /// Elapsed time between the first and last timestamp (zero when empty).
    pub fn span(&self) -> Duration {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last - first,
            _ => Duration::zero(),
        }
    }

    pub fn as_slice(&self) -> &[DateTime<Utc>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateTime<Utc>> {
        self.points.iter()
    }
}

/// A metric's value at one timeline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignedValue {
    Value(f64),
    /// The metric had no sample at this timestamp.  Never zero, never filled.
    Missing,
}

impl AlignedValue {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One metric projected onto a [`Timeline`]; index `i` belongs to timeline[i].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedSeries {
    values: Vec<AlignedValue>,
}

impl AlignedSeries {
    pub fn new(values: Vec<AlignedValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[AlignedValue] {
        &self.values
    }

    /// `true` when every position is [`AlignedValue::Missing`].
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(|v| v.is_missing())
    }

    /// Split into contiguous runs of present values, breaking at every gap.
    ///
    /// Each run pairs timestamps from `timeline` with the values at those
    /// positions, so a renderer can draw one unbroken line per run.
    pub fn runs(&self, timeline: &Timeline) -> Vec<Vec<(DateTime<Utc>, f64)>> {
        let mut runs = Vec::new();
        let mut current = Vec::new();

        for (at, value) in timeline.iter().zip(&self.values) {
            match value {
                AlignedValue::Value(v) => current.push((*at, *v)),
                AlignedValue::Missing => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs
    }

    /// Smallest and largest present value, if any.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .filter_map(|v| v.value())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
