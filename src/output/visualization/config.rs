//! Plot configuration shared by every chart
//!
//! Styling lives here, not in the chart descriptions: a [`Chart`] only names a
//! colour key per series (`"guided"`, `"atomic"`, ...) and the renderer looks
//! it up in [`PlotConfig`].
//!
//! [`Chart`]: super::chart::Chart

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Example
///
/// ```rust,ignore
/// use parbench_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.panel_width = 640;
/// config.set_color("local", RGBColor(0, 128, 128));
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Width of one panel in pixels (default: 500); the image is
    /// `panel_width * panels` wide
    pub panel_width: u32,

    /// Image height in pixels (default: 500)
    pub height: u32,

    /// Font size of the figure title (default: 28)
    pub title_font_size: u32,

    /// Font size of panel captions (default: 20)
    pub caption_font_size: u32,

    /// Named colours, matched against a series colour key
    pub series_colors: Vec<(String, RGBColor)>,

    /// Fallback palette for series without a named colour
    pub palette: Vec<RGBColor>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels (default: 4)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            panel_width: 500,
            height: 500,
            title_font_size: 28,
            caption_font_size: 20,
            series_colors: vec![
                ("seq".to_string(), RGBColor(0x33, 0x33, 0x33)),
                ("static".to_string(), RGBColor(0x1f, 0x77, 0xb4)),
                ("dynamic".to_string(), RGBColor(0xff, 0x7f, 0x0e)),
                ("guided".to_string(), RGBColor(0x2c, 0xa0, 0x2c)),
                ("critical".to_string(), RGBColor(0xd6, 0x27, 0x28)),
                ("atomic".to_string(), RGBColor(0x94, 0x67, 0xbd)),
                ("local".to_string(), RGBColor(0x17, 0xbe, 0xcf)),
            ],
            palette: vec![
                RGBColor(0x1f, 0x77, 0xb4),
                RGBColor(0xff, 0x7f, 0x0e),
                RGBColor(0x2c, 0xa0, 0x2c),
                RGBColor(0xd6, 0x27, 0x28),
                RGBColor(0x94, 0x67, 0xbd),
                RGBColor(0x8c, 0x56, 0x4b),
                RGBColor(0xe3, 0x77, 0xc2),
                RGBColor(0x7f, 0x7f, 0x7f),
                RGBColor(0xbc, 0xbd, 0x22),
                RGBColor(0x17, 0xbe, 0xcf),
            ],
            background: WHITE,
            line_width: 2,
            marker_size: 4,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Override (or add) the colour used for a series key
    pub fn set_color(&mut self, key: &str, color: RGBColor) {
        match self.series_colors.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = color,
            None => self.series_colors.push((key.to_string(), color)),
        }
    }

    /// Builder pattern: set panel size
    pub fn with_panel_size(mut self, width: u32, height: u32) -> Self {
        self.panel_width = width;
        self.height = height;
        self
    }

    /// Pixel size of an image holding `panels` panels side by side
    pub fn image_size(&self, panels: usize) -> (u32, u32) {
        (self.panel_width * panels.max(1) as u32, self.height)
    }

    /// Colour for a series: its named colour if the key is known,
    /// otherwise the palette entry at `index`
    pub(crate) fn series_color(&self, key: Option<&str>, index: usize) -> RGBColor {
        if let Some(key) = key {
            if let Some((_, color)) = self.series_colors.iter().find(|(k, _)| k == key) {
                return *color;
            }
        }

        if self.palette.is_empty() {
            return BLACK;
        }
        self.palette[index % self.palette.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.panel_width, 500);
        assert_eq!(config.height, 500);
        assert!(config.show_grid);
    }

    #[test]
    fn test_image_size_scales_with_panels() {
        let config = PlotConfig::default().with_panel_size(400, 300);
        assert_eq!(config.image_size(3), (1200, 300));
        assert_eq!(config.image_size(0), (400, 300));
    }

    #[test]
    fn test_named_series_color() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(Some("guided"), 7), RGBColor(0x2c, 0xa0, 0x2c));
        assert_eq!(config.series_color(Some("seq"), 0), RGBColor(0x33, 0x33, 0x33));
    }

    #[test]
    fn test_unknown_key_falls_back_to_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(Some("chunk=64"), 1), config.palette[1]);
        assert_eq!(config.series_color(None, 10), config.palette[0]); // wraparound
    }

    #[test]
    fn test_set_color_overrides() {
        let mut config = PlotConfig::default();
        config.set_color("local", RED);
        config.set_color("hybrid", BLUE);
        assert_eq!(config.series_color(Some("local"), 0), RED);
        assert_eq!(config.series_color(Some("hybrid"), 0), BLUE);
    }
}
