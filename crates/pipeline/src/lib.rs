//! One plotting pass: fetch → parse → compose → render.
//!
//! Wires together the collaborators for a single invocation:
//! - a [`MetricSource`] answering fetch requests
//! - the series pipeline (parse, align, smooth) via [`ChartComposer`]
//! - a [`ChartRenderer`] writing one image per metric
//!
//! Everything runs on the caller's task; the fetch is the only await point.

use plot_config::{PlotConfig, RangeConfig};
use plot_core::{Result, METRICS};
use plot_fetch::{FetchRequest, MetricSource};
use plot_renderer::{ChartComposer, ChartRenderer};
use plot_series::{parse, RollingWindows};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of one pass over one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The response held no samples for any metric; nothing was rendered.
    NoData,
    /// One artifact per known metric, in metric-table order.
    Rendered(Vec<PathBuf>),
}

impl PassOutcome {
    pub fn artifacts(&self) -> &[PathBuf] {
        match self {
            Self::NoData => &[],
            Self::Rendered(paths) => paths,
        }
    }
}

/// Build the composer described by the `[output]` and `[smoothing]` sections.
pub fn composer_from_config(config: &PlotConfig) -> ChartComposer {
    let s = &config.smoothing;
    let windows = RollingWindows {
        short:  s.short_window,
        medium: s.medium_window,
        long:   s.long_window,
    };
    ChartComposer::new(&config.output.dir, windows, s.enabled)
}

/// Drives plotting passes against one source and one renderer.
pub struct Plotter<S, R> {
    source:         S,
    renderer:       R,
    composer:       ChartComposer,
    range_endpoint: String,
}

impl<S: MetricSource, R: ChartRenderer> Plotter<S, R> {
    pub fn new(source: S, renderer: R, composer: ChartComposer, range_endpoint: impl Into<String>) -> Self {
        Self {
            source,
            renderer,
            composer,
            range_endpoint: range_endpoint.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Fetch `request` and render one chart per known metric under `prefix`.
    ///
    /// A fetch or render failure aborts the pass.  An empty response is not a
    /// failure: it is logged and yields [`PassOutcome::NoData`].
    pub async fn run_pass(&self, request: &FetchRequest, prefix: &str) -> Result<PassOutcome> {
        let raw = self.source.fetch(request).await?;
        let parsed = parse(&raw)?;

        if parsed.timeline.is_empty() {
            info!("No data for {prefix}.");
            return Ok(PassOutcome::NoData);
        }
        debug!(
            prefix,
            points = parsed.timeline.len(),
            span_secs = parsed.timeline.span().num_seconds(),
            "timeline ready"
        );

        let mut artifacts = Vec::with_capacity(METRICS.len());
        for metric in &METRICS {
            let request = self.composer.compose(prefix, metric, &parsed);
            artifacts.push(self.composer.dispatch(&self.renderer, &request)?);
        }

        Ok(PassOutcome::Rendered(artifacts))
    }

    /// Plot each fixed recent range in turn.
    pub async fn plot_recent(&self, ranges: &[RangeConfig]) -> Result<Vec<PassOutcome>> {
        let mut outcomes = Vec::with_capacity(ranges.len());
        for range in ranges {
            let request = FetchRequest::recent(&range.endpoint);
            outcomes.push(self.run_pass(&request, &range.prefix).await?);
        }
        Ok(outcomes)
    }

    /// Plot an explicit timestamp range.  `prefix` defaults to `range_{start}_{stop}`.
    pub async fn plot_range(
        &self,
        start: i64,
        stop: i64,
        step: Option<u64>,
        prefix: Option<&str>,
    ) -> Result<PassOutcome> {
        let request = FetchRequest::range(&self.range_endpoint, start, stop, step);
        let prefix = prefix
            .map(str::to_string)
            .unwrap_or_else(|| format!("range_{start}_{stop}"));
        self.run_pass(&request, &prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_core::{AlignedValue, PlotError, RawMetrics};
    use plot_renderer::RenderRequest;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Canned responses keyed by endpoint; unknown endpoints fail like a 404.
    #[derive(Default)]
    struct FakeSource {
        responses: HashMap<String, &'static str>,
        requests:  RefCell<Vec<FetchRequest>>,
    }

    impl FakeSource {
        fn with(mut self, endpoint: &str, body: &'static str) -> Self {
            self.responses.insert(endpoint.to_string(), body);
            self
        }
    }

    impl MetricSource for FakeSource {
        async fn fetch(&self, request: &FetchRequest) -> Result<RawMetrics> {
            self.requests.borrow_mut().push(request.clone());
            let body = self
                .responses
                .get(&request.endpoint)
                .ok_or_else(|| PlotError::Http(format!("{}: status 404 Not Found", request.endpoint)))?;
            Ok(serde_json::from_str(body).unwrap())
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        rendered: RefCell<Vec<(PathBuf, Vec<AlignedValue>, bool)>>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&self, request: &RenderRequest<'_>) -> Result<()> {
            self.rendered.borrow_mut().push((
                request.path.clone(),
                request.raw.values().to_vec(),
                request.rolling.is_some(),
            ));
            Ok(())
        }
    }

    fn plotter(source: FakeSource) -> Plotter<FakeSource, RecordingRenderer> {
        let composer = ChartComposer::new("out", RollingWindows::default(), true);
        Plotter::new(source, RecordingRenderer::default(), composer, "timestamp_metrics")
    }

    #[tokio::test]
    async fn empty_response_short_circuits() {
        let plotter = plotter(FakeSource::default().with("hour_metrics", "{}"));

        let outcome = plotter.run_pass(&FetchRequest::recent("hour_metrics"), "last_hour").await.unwrap();

        assert_eq!(outcome, PassOutcome::NoData);
        assert!(outcome.artifacts().is_empty());
        assert!(plotter.renderer().rendered.borrow().is_empty());
    }

    #[tokio::test]
    async fn every_metric_is_rendered_even_when_absent() {
        let plotter = plotter(
            FakeSource::default().with("hour_metrics", r#"{"cpu_percent":[{"x":1000,"y":10},{"x":1060,"y":20}],"ram_used":[{"x":1000,"y":2.0}]}"#),
        );

        let outcome = plotter.run_pass(&FetchRequest::recent("hour_metrics"), "last_hour").await.unwrap();

        let expected: Vec<PathBuf> = ["cpu_percent", "ram_used", "disk_used", "cpu_temp"]
            .iter()
            .map(|k| PathBuf::from(format!("out/last_hour_{k}.png")))
            .collect();
        assert_eq!(outcome.artifacts(), expected.as_slice());

        let rendered = plotter.renderer().rendered.borrow();
        assert_eq!(rendered[0].1, vec![AlignedValue::Value(10.0), AlignedValue::Value(20.0)]);
        assert_eq!(rendered[1].1, vec![AlignedValue::Value(2.0), AlignedValue::Missing]);
        assert_eq!(rendered[3].1, vec![AlignedValue::Missing, AlignedValue::Missing]);
        assert!(rendered[0].2);
        assert!(!rendered[3].2);
    }

    #[tokio::test]
    async fn fetch_failure_aborts_without_artifacts() {
        let plotter = plotter(FakeSource::default());

        let err = plotter.run_pass(&FetchRequest::recent("hour_metrics"), "last_hour").await.unwrap_err();

        assert!(matches!(err, PlotError::Http(_)));
        assert!(plotter.renderer().rendered.borrow().is_empty());
    }

    #[tokio::test]
    async fn recent_ranges_run_in_order() {
        let plotter = plotter(
            FakeSource::default()
                .with("hour_metrics", r#"{"cpu_percent":[{"x":1000,"y":1}]}"#)
                .with("compressed_metrics", "{}"),
        );
        let ranges = [
            RangeConfig::new("hour_metrics", "last_hour"),
            RangeConfig::new("compressed_metrics", "all_data"),
        ];

        let outcomes = plotter.plot_recent(&ranges).await.unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].artifacts().len(), METRICS.len());
        assert_eq!(outcomes[1], PassOutcome::NoData);
        let endpoints: Vec<String> =
            plotter.source().requests.borrow().iter().map(|r| r.endpoint.clone()).collect();
        assert_eq!(endpoints, vec!["hour_metrics", "compressed_metrics"]);
    }

    #[tokio::test]
    async fn explicit_range_sends_bounds_and_default_prefix() {
        let plotter = plotter(FakeSource::default().with("timestamp_metrics", r#"{"cpu_temp":[{"x":100,"y":40.5}]}"#));

        let outcome = plotter.plot_range(100, 200, Some(10), None).await.unwrap();

        assert_eq!(
            plotter.source().requests.borrow()[0],
            FetchRequest::range("timestamp_metrics", 100, 200, Some(10))
        );
        assert_eq!(outcome.artifacts()[3], PathBuf::from("out/range_100_200_cpu_temp.png"));
    }

    #[test]
    fn composer_follows_config() {
        let mut config = PlotConfig::default();
        config.output.dir = PathBuf::from("charts");
        let composer = composer_from_config(&config);
        assert_eq!(composer.output_dir(), std::path::Path::new("charts"));
    }
}
