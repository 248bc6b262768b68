pub mod error;
pub mod metric;
pub mod raw;
pub mod sample;

pub use error::{PlotError, Result};
pub use metric::{MetricSpec, METRICS};
pub use raw::{RawEntry, RawMetrics};
pub use sample::{AlignedSeries, AlignedValue, Sample, Timeline};
