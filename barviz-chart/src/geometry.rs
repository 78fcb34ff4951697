use serde::{Deserialize, Serialize};

use crate::config::{ChartConfig, Margins};

/// Size of the region inside the margins where bars are drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlottingArea {
    pub chart_width: f32,
    pub chart_height: f32,
}

impl PlottingArea {
    /// Subtracts the margins from the total size. Results are not clamped.
    pub fn from_dimensions(width: f32, height: f32, margins: &Margins) -> Self {
        Self {
            chart_width: width - margins.left - margins.right,
            chart_height: height - margins.top - margins.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Dimensions {
    width: f32,
    height: f32,
    margins: Margins,
}

impl Dimensions {
    fn of(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            margins: config.margins,
        }
    }
}

/// Remembers the last plotting area and recomputes it only when the width,
/// height, or margins change.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    cached: Option<(Dimensions, PlottingArea)>,
}

impl GeometryCache {
    pub fn plotting_area(&mut self, config: &ChartConfig) -> PlottingArea {
        let dims = Dimensions::of(config);
        match self.cached {
            Some((cached_dims, area)) if cached_dims == dims => area,
            _ => {
                let area = PlottingArea::from_dimensions(dims.width, dims.height, &dims.margins);
                log::debug!(
                    "plotting area {}x{} for {}x{} chart",
                    area.chart_width,
                    area.chart_height,
                    dims.width,
                    dims.height
                );
                self.cached = Some((dims, area));
                area
            }
        }
    }

    pub fn current(&self) -> Option<PlottingArea> {
        self.cached.map(|(_, area)| area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400.0, 400.0, Margins::uniform(60.0), 280.0, 280.0)]
    #[case(640.0, 480.0, Margins { top: 10.0, right: 20.0, bottom: 30.0, left: 40.0 }, 580.0, 440.0)]
    #[case(100.0, 100.0, Margins::uniform(60.0), -20.0, -20.0)]
    fn test_from_dimensions(
        #[case] width: f32,
        #[case] height: f32,
        #[case] margins: Margins,
        #[case] chart_width: f32,
        #[case] chart_height: f32,
    ) {
        let area = PlottingArea::from_dimensions(width, height, &margins);
        assert_eq!(area.chart_width, chart_width);
        assert_eq!(area.chart_height, chart_height);
        assert_eq!(area.chart_width + margins.left + margins.right, width);
        assert_eq!(area.chart_height + margins.top + margins.bottom, height);
        // Pure: same inputs, same output
        assert_eq!(area, PlottingArea::from_dimensions(width, height, &margins));
    }

    #[test]
    fn test_cache_follows_dimensions() {
        let mut cache = GeometryCache::default();
        assert_eq!(cache.current(), None);

        let config = ChartConfig::new(400.0, 400.0, "a", "b");
        let first = cache.plotting_area(&config);
        assert_eq!(cache.plotting_area(&config.clone().with_bar_fill("red")), first);

        let wider = ChartConfig::new(500.0, 400.0, "a", "b");
        let second = cache.plotting_area(&wider);
        assert_eq!(second.chart_width, 380.0);
        assert_eq!(cache.current(), Some(second));
    }
}
