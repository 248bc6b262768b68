//! Time-series normalisation for fetched telemetry.
//!
//! - [`parser`]: raw response → union [`Timeline`](plot_core::Timeline) + per-metric samples
//! - [`align`]: project one metric onto the timeline, marking gaps as missing
//! - [`rolling`]: trailing moving average with span-scaled window width
//! - [`axis`]: date-label tier for the x-axis

pub mod align;
pub mod axis;
pub mod parser;
pub mod rolling;

pub use align::align;
pub use axis::AxisFormat;
pub use parser::{parse, ParsedMetrics};
pub use rolling::{rolling_mean, smooth, RollingWindows};
