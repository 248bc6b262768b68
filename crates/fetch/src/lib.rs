pub mod client;
pub mod request;

pub use client::{MetricSource, MetricsClient};
pub use request::FetchRequest;
