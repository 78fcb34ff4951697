use barviz_common::time::Duration;
use barviz_common::types::{parse_css_color, RgbaColor};
use serde::{Deserialize, Serialize};

use crate::animate::Easing;
use crate::error::BarChartError;
use crate::geometry::PlottingArea;

pub const DEFAULT_MARGIN: f32 = 60.0;
pub const DEFAULT_DURATION_MS: u64 = 1000;
pub const DEFAULT_BAR_FILL: &str = "steelblue";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(margin: f32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    fn validate(&self) -> Result<(), BarChartError> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BarChartError::Config(format!(
                    "{side} margin must be a non-negative finite number, received {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::Linear,
        }
    }
}

/// Everything one render pass needs besides the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub margins: Margins,
    #[serde(alias = "xField")]
    pub x_field: String,
    #[serde(alias = "yField")]
    pub y_field: String,
    #[serde(default)]
    pub animation: AnimationConfig,
    /// CSS color of every bar
    #[serde(default = "default_bar_fill")]
    pub bar_fill: String,
}

fn default_bar_fill() -> String {
    DEFAULT_BAR_FILL.to_string()
}

impl ChartConfig {
    pub fn new(
        width: f32,
        height: f32,
        x_field: impl Into<String>,
        y_field: impl Into<String>,
    ) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
            x_field: x_field.into(),
            y_field: y_field.into(),
            animation: AnimationConfig::default(),
            bar_fill: default_bar_fill(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_bar_fill(mut self, fill: impl Into<String>) -> Self {
        self.bar_fill = fill.into();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, BarChartError> {
        serde_json::from_str(json)
            .map_err(|e| BarChartError::Config(format!("invalid chart config: {e}")))
    }

    /// Checks the margins, the plotting area left inside them, and the bar fill
    pub fn validate(&self) -> Result<(), BarChartError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(BarChartError::Config(format!(
                "chart size must be finite, received {}x{}",
                self.width, self.height
            )));
        }
        self.margins.validate()?;

        let area = PlottingArea::from_dimensions(self.width, self.height, &self.margins);
        if area.chart_width <= 0.0 || area.chart_height <= 0.0 {
            return Err(BarChartError::Config(format!(
                "margins leave no room to plot: {}x{} chart with {:?} gives a {}x{} plotting area",
                self.width, self.height, self.margins, area.chart_width, area.chart_height
            )));
        }

        self.fill_color()?;
        Ok(())
    }

    pub fn fill_color(&self) -> Result<RgbaColor, BarChartError> {
        Ok(parse_css_color(&self.bar_fill)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_defaults_and_aliases() {
        let config =
            ChartConfig::from_json_str(r#"{"width": 400, "height": 300, "xField": "cat", "y-field": "val"}"#)
                .unwrap();
        assert_eq!(config.x_field, "cat");
        assert_eq!(config.y_field, "val");
        assert_eq!(config.margins, Margins::uniform(60.0));
        assert_eq!(config.animation.duration(), Duration::from_millis(1000));
        assert_eq!(config.animation.easing, Easing::Linear);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_animation() {
        let config = ChartConfig::from_json_str(
            r#"{
                "width": 400, "height": 300, "x-field": "a", "y-field": "b",
                "margins": {"left": 80},
                "animation": {"duration-ms": 250, "easing": "cubic-in-out"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.margins.left, 80.0);
        assert_eq!(config.margins.top, 60.0);
        assert_eq!(config.animation.duration_ms, 250);
        assert_eq!(config.animation.easing, Easing::CubicInOut);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ChartConfig::from_json_str(r#"{"width": 400}"#).unwrap_err();
        assert!(matches!(err, BarChartError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_margins() {
        let negative = ChartConfig::new(400.0, 400.0, "a", "b").with_margins(Margins {
            left: -1.0,
            ..Default::default()
        });
        assert!(matches!(negative.validate(), Err(BarChartError::Config(_))));

        let nan = ChartConfig::new(400.0, 400.0, "a", "b").with_margins(Margins::uniform(f32::NAN));
        assert!(matches!(nan.validate(), Err(BarChartError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_plotting_area() {
        let config = ChartConfig::new(120.0, 400.0, "a", "b");
        assert!(matches!(config.validate(), Err(BarChartError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_fill() {
        let config = ChartConfig::new(400.0, 400.0, "a", "b").with_bar_fill("not-a-color");
        assert!(matches!(config.validate(), Err(BarChartError::Config(_))));
    }
}
