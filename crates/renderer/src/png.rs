use crate::{ChartRenderer, RenderRequest};
use chrono::{DateTime, Duration, Utc};
use plot_core::{PlotError, Result, Timeline};
use plot_theme::Theme;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{register_font, FontStyle};
use std::path::Path;
use std::sync::OnceLock;

const FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTERED: OnceLock<()> = OnceLock::new();

/// Renders charts to PNG files with the plotters bitmap backend.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    theme:  Theme,
    width:  u32,
    height: u32,
}

impl PngRenderer {
    /// Create a renderer, registering the theme's font for chart text.
    pub fn new(theme: Theme, width: u32, height: u32) -> Result<Self> {
        register_theme_font(&theme.font_path)?;
        Ok(Self { theme, width, height })
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<()> {
        let root = BitMapBackend::new(&request.path, (self.width, self.height)).into_drawing_area();
        let fail = |e: &dyn std::fmt::Display| {
            PlotError::Render(format!("{}: {e}", request.path.display()))
        };

        draw_chart(&self.theme, request, &root).map_err(|e| fail(&e))?;
        root.present().map_err(|e| fail(&e))
    }
}

/// Fonts are process-global in plotters; the first successful registration wins.
fn register_theme_font(path: &Path) -> Result<()> {
    if FONT_REGISTERED.get().is_some() {
        return Ok(());
    }

    let bytes = std::fs::read(path)
        .map_err(|e| PlotError::Render(format!("cannot read font '{}': {e}", path.display())))?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| PlotError::Render(format!("'{}' is not a usable font", path.display())))?;

    let _ = FONT_REGISTERED.set(());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    theme: &Theme,
    request: &RenderRequest<'_>,
    root: &DrawingArea<DB, Shift>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let fg = theme.foreground.to_rgb();
    let bg = theme.background.to_rgb();
    root.fill(&bg)?;

    let (x_min, x_max) = time_range(request.timeline);
    let (y_min, y_max) = value_range(request);
    let label_font = (FONT_FAMILY, f64::from(theme.font_size)).into_font().color(&fg);

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(&request.title, (FONT_FAMILY, f64::from(theme.title_size())).into_font().color(&fg))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    let axis = request.axis;
    let x_formatter = |at: &DateTime<Utc>| axis.label(at);

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&x_formatter)
        .y_desc(request.y_label)
        .axis_style(fg)
        .bold_line_style(fg.mix(0.15))
        .light_line_style(fg.mix(0.05))
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    // ── Raw series, one line per contiguous run ──────────────────────────────
    let raw_style = theme.raw.to_rgba().stroke_width(1);
    for (i, run) in request.raw.runs(request.timeline).into_iter().enumerate() {
        let anno = if run.len() == 1 {
            chart.draw_series(run.into_iter().map(|p| Circle::new(p, 2, raw_style.filled())))?
        } else {
            chart.draw_series(LineSeries::new(run, raw_style))?
        };
        if i == 0 {
            anno.label("Raw")
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], raw_style));
        }
    }

    // ── Rolling average ──────────────────────────────────────────────────────
    if let Some(rolling) = &request.rolling {
        let rolling_style = theme.rolling.to_rgb().stroke_width(2);
        let points: Vec<(DateTime<Utc>, f64)> = rolling.iter().map(|s| (s.at, s.value)).collect();

        chart
            .draw_series(DashedLineSeries::new(points, 6, 4, rolling_style))?
            .label("Rolling Avg")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], rolling_style));

        chart
            .configure_series_labels()
            .label_font(label_font)
            .background_style(bg.mix(0.8))
            .border_style(fg)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    Ok(())
}

/// X-axis bounds.  A single timestamp is widened by a minute on each side.
fn time_range(timeline: &Timeline) -> (DateTime<Utc>, DateTime<Utc>) {
    match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) if first < last => (first, last),
        (Some(at), _) => (at - Duration::minutes(1), at + Duration::minutes(1)),
        _ => {
            let now = Utc::now();
            (now - Duration::hours(1), now)
        }
    }
}

/// Y-axis bounds covering raw and rolling values with 5% headroom.
/// Falls back to `0..1` for a chart with no values at all.
fn value_range(request: &RenderRequest<'_>) -> (f64, f64) {
    let rolling = request
        .rolling
        .iter()
        .flatten()
        .map(|s| (s.value, s.value));

    let bounds = request
        .raw
        .bounds()
        .into_iter()
        .chain(rolling)
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));

    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}
