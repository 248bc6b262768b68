pub mod colors;

pub use colors::Color;

use plot_config::ThemeConfig;
use std::path::PathBuf;

/// Opacity of the raw series line, so the rolling average reads on top of it.
pub const RAW_ALPHA: f32 = 0.5;

/// Compiled chart theme derived from [`ThemeConfig`].
///
/// Colors are pre-parsed from hex strings.  Calling [`Theme::from_config`] is
/// infallible: invalid color strings fall back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Raw series color, already faded to [`RAW_ALPHA`].
    pub raw:        Color,
    pub rolling:    Color,
    pub font_path:  PathBuf,
    pub font_size:  f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::WHITE),
            foreground: Color::from_hex(&cfg.foreground).unwrap_or(Color::DARK),
            raw:        Color::from_hex(&cfg.raw)
                .unwrap_or(Color::BLUE)
                .with_alpha(RAW_ALPHA),
            rolling:    Color::from_hex(&cfg.rolling).unwrap_or(Color::ORANGE),
            font_path:  cfg.font_path.clone(),
            font_size:  cfg.font_size,
        }
    }

    /// Caption size, scaled up from the label size.
    pub fn title_size(&self) -> f32 {
        self.font_size * 1.3
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            background: "nope".into(),
            raw:        "#00ff00".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.background, Color::WHITE);
        assert_eq!(theme.raw, Color { r: 0, g: 0xff, b: 0, a: 128 });
    }
}
