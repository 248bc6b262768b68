use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `metrics-plot.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Where metrics are fetched from.
    pub source: SourceConfig,
    /// Where and how large charts are written.
    pub output: OutputConfig,
    /// Rolling-average settings.
    pub smoothing: SmoothingConfig,
    /// Fixed recent ranges plotted by `metrics-plot recent`.
    pub ranges: Vec<RangeConfig>,
    /// Chart colours and font.
    pub theme: ThemeConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            source:    SourceConfig::default(),
            output:    OutputConfig::default(),
            smoothing: SmoothingConfig::default(),
            ranges: vec![
                RangeConfig::new("hour_metrics", "last_hour"),
                RangeConfig::new("compressed_metrics", "all_data"),
            ],
            theme:     ThemeConfig::default(),
        }
    }
}

/// Remote metrics service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL; endpoints are appended as `{base_url}/{endpoint}`.
    pub base_url: String,
    /// Endpoint serving explicit `start`/`stop`/`step` queries.
    pub range_endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url:       "http://zubekanov.com/api".to_string(),
            range_endpoint: "timestamp_metrics".to_string(),
        }
    }
}

/// Chart output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives `{prefix}_{metric}.png` files.
    pub dir: PathBuf,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir:    PathBuf::from("plots"),
            width:  1000,
            height: 400,
        }
    }
}

/// Rolling-average window widths (in points) per span tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub enabled: bool,
    /// Span up to one hour.
    pub short_window: usize,
    /// Span up to one day.
    pub medium_window: usize,
    /// Anything longer.
    pub long_window: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled:       true,
            short_window:  12,
            medium_window: 60,
            long_window:   360,
        }
    }
}

/// One pre-aggregated range: which endpoint to query and the file prefix to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub endpoint: String,
    pub prefix:   String,
}

impl RangeConfig {
    pub fn new(endpoint: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            prefix:   prefix.into(),
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Chart background color (hex, e.g. `"#ffffff"`).
    pub background: String,
    /// Axis, caption and label color.
    pub foreground: String,
    /// Raw series line color.
    pub raw: String,
    /// Rolling-average line color.
    pub rolling: String,
    /// TrueType font used for all chart text.
    pub font_path: PathBuf,
    /// Font size for axis labels, in pixels; the title is drawn larger.
    pub font_size: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#262626".to_string(),
            raw:        "#1f77b4".to_string(),
            rolling:    "#ff7f0e".to_string(),
            font_path:  PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            font_size:  14.0,
        }
    }
}
