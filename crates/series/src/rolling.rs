use chrono::Duration;
use plot_core::Sample;
use std::collections::VecDeque;

/// Window widths (in points) for each span tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingWindows {
    /// Span of at most one hour.
    pub short:  usize,
    /// Span of at most one day.
    pub medium: usize,
    /// Anything longer.
    pub long:   usize,
}

impl Default for RollingWindows {
    fn default() -> Self {
        Self {
            short:  12,
            medium: 60,
            long:   360,
        }
    }
}

impl RollingWindows {
    /// Pick the window width for a series covering `span`.
    ///
    /// Both tier boundaries are inclusive: exactly one hour is still `short`,
    /// exactly one day is still `medium`.
    pub fn for_span(&self, span: Duration) -> usize {
        if span <= Duration::hours(1) {
            self.short
        } else if span <= Duration::days(1) {
            self.medium
        } else {
            self.long
        }
    }
}

/// Trailing window of the most recent values.
#[derive(Debug, Clone)]
struct TrailingWindow {
    values:   VecDeque<f64>,
    capacity: usize,
}

impl TrailingWindow {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new value, evicting the oldest if at capacity.
    fn push(&mut self, value: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    fn average(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

/// Trailing moving average: position `i` is the mean of
/// `values[max(0, i - window + 1) ..= i]`.
///
/// The window grows from one point up to `window` and never pads, so the
/// output has the same length as the input.  A `window` of zero is treated
/// as one.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut trailing = TrailingWindow::new(window);
    values
        .iter()
        .map(|&v| {
            trailing.push(v);
            trailing.average()
        })
        .collect()
}

/// [`rolling_mean`] over a gap-free sample list, keeping each sample's timestamp.
pub fn smooth(samples: &[Sample], window: usize) -> Vec<Sample> {
    let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
    samples
        .iter()
        .zip(rolling_mean(&values, window))
        .map(|(s, mean)| Sample::new(s.at, mean))
        .collect()
}
