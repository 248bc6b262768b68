pub mod schema;

pub use schema::{OutputConfig, PlotConfig, RangeConfig, SmoothingConfig, SourceConfig, ThemeConfig};

use plot_core::{PlotError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `PlotConfig::default()` if
/// the file doesn't exist so the plotter always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<PlotConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PlotConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| PlotError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: PlotConfig =
        toml::from_str(&raw).map_err(|e| PlotError::Config(format!("TOML parse error: {e}")))?;
    validate(&config)?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("metrics-plot").join("metrics-plot.toml")
}

fn validate(config: &PlotConfig) -> Result<()> {
    let s = &config.smoothing;
    if s.short_window == 0 || s.medium_window == 0 || s.long_window == 0 {
        return Err(PlotError::Config("smoothing windows must be at least 1 point".into()));
    }
    if config.output.width == 0 || config.output.height == 0 {
        return Err(PlotError::Config("output width and height must be non-zero".into()));
    }
    Ok(())
}
