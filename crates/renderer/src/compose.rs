use crate::ChartRenderer;
use plot_core::{AlignedSeries, MetricSpec, Result, Sample, Timeline};
use plot_series::{align, smooth, AxisFormat, ParsedMetrics, RollingWindows};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything a renderer needs to draw one metric's chart.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    /// Target file, `{output_dir}/{prefix}_{metric}.png`.
    pub path:     PathBuf,
    pub title:    String,
    pub y_label:  &'static str,
    pub timeline: &'a Timeline,
    /// Raw values aligned to `timeline`; gaps stay [`plot_core::AlignedValue::Missing`].
    pub raw:      AlignedSeries,
    /// Rolling average over the metric's own samples, when smoothing is on
    /// and the metric has data.
    pub rolling:  Option<Vec<Sample>>,
    pub axis:     AxisFormat,
}

/// Builds render requests for one plotting pass.
#[derive(Debug, Clone)]
pub struct ChartComposer {
    output_dir: PathBuf,
    windows:    RollingWindows,
    smoothing:  bool,
}

impl ChartComposer {
    pub fn new(output_dir: impl Into<PathBuf>, windows: RollingWindows, smoothing: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            windows,
            smoothing,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Assemble the request for `metric` from one parsed fetch.
    ///
    /// A metric missing from the response still yields a request; its raw
    /// series is all-missing and it carries no rolling line.
    pub fn compose<'a>(
        &self,
        prefix: &str,
        metric: &MetricSpec,
        parsed: &'a ParsedMetrics,
    ) -> RenderRequest<'a> {
        let timeline = &parsed.timeline;
        let samples = parsed.samples(metric.key);

        let rolling = if self.smoothing && !samples.is_empty() {
            let window = self.windows.for_span(timeline.span());
            debug!(metric = metric.key, window, "rolling window");
            Some(smooth(samples, window))
        } else {
            None
        };

        RenderRequest {
            path: self.path_for(prefix, metric.key),
            title: format!("{} ({})", metric.label, title_case(prefix)),
            y_label: metric.label,
            timeline,
            raw: align(timeline, samples),
            rolling,
            axis: AxisFormat::for_timeline(timeline),
        }
    }

    /// Hand `request` to `renderer` and log the produced artifact.
    pub fn dispatch<R: ChartRenderer>(
        &self,
        renderer: &R,
        request: &RenderRequest<'_>,
    ) -> Result<PathBuf> {
        renderer.render(request)?;
        info!("Saved plot: {}", request.path.display());
        Ok(request.path.clone())
    }

    fn path_for(&self, prefix: &str, key: &str) -> PathBuf {
        self.output_dir.join(format!("{prefix}_{key}.png"))
    }
}

/// `"last_hour"` → `"Last Hour"`: underscores become spaces and each word is
/// capitalised with the rest lower-cased.
pub fn title_case(prefix: &str) -> String {
    prefix
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
