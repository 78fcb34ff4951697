use barviz_scales::numeric::ContinuousNumericScale;

use crate::animate::BarAnimator;
use crate::axes::render_axes;
use crate::canvas::{DrawingSurface, MarkHandle};
use crate::config::ChartConfig;
use crate::data::{extract_field, Category, Dataset};
use crate::error::BarChartError;
use crate::geometry::{GeometryCache, PlottingArea};
use crate::scales::ChartScales;
use crate::tooltip::{NoTooltips, TooltipLabels, TooltipService};

/// What a successful render produced
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub plotting_area: PlottingArea,
    pub x_domain: Vec<Category>,
    pub y_domain: (f32, f32),
    pub bandwidth: f32,
    pub bar_count: usize,
    pub bars: MarkHandle,
}

/// Draws an animated bar chart onto a [`DrawingSurface`].
///
/// Every [`render`](Self::render) redraws from scratch: the surface is cleared,
/// both axes are appended, then one bar per record grows from the zero
/// baseline. Dropping the chart releases the surface and tooltip service.
#[derive(Debug)]
pub struct BarChart<S: DrawingSurface, T: TooltipService = NoTooltips> {
    surface: S,
    tooltips: Option<T>,
    geometry: GeometryCache,
}

impl<S: DrawingSurface> BarChart<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            tooltips: None,
            geometry: GeometryCache::default(),
        }
    }
}

impl<S: DrawingSurface, T: TooltipService> BarChart<S, T> {
    /// Hands the bars of every later render to `tooltips`
    pub fn with_tooltips<U: TooltipService>(self, tooltips: U) -> BarChart<S, U> {
        BarChart {
            surface: self.surface,
            tooltips: Some(tooltips),
            geometry: self.geometry,
        }
    }

    pub fn render(
        &mut self,
        config: &ChartConfig,
        dataset: Option<&Dataset>,
    ) -> Result<RenderSummary, BarChartError> {
        let dataset = dataset.ok_or(BarChartError::MissingData)?;

        config.validate()?;
        let fill = config.fill_color()?;
        let area = self.geometry.plotting_area(config);

        let x_values = extract_field(dataset, &config.x_field);
        let y_values = extract_field(dataset, &config.y_field);
        let scales = ChartScales::build(&x_values, &y_values, &area)?;
        log::debug!(
            "rendering {} bars: x domain {:?}, bandwidth {}, y domain {:?}",
            dataset.len(),
            scales.x.domain(),
            scales.x.bandwidth(),
            scales.y.domain()
        );

        // Nothing above touches the surface, so a failed render keeps the last frame
        self.surface.clear();
        self.surface.set_viewport(
            config.width,
            config.height,
            [config.margins.left, config.margins.top],
        );
        render_axes(&mut self.surface, &scales, &area, config)?;

        let animator = BarAnimator::new(&scales, area, config.animation, fill);
        let (handle, settled) = animator.animate(&mut self.surface, &x_values, &y_values)?;

        if let Some(tooltips) = self.tooltips.as_mut() {
            let labels =
                TooltipLabels::new(&config.x_field, &config.y_field, &x_values, &y_values);
            tooltips.attach(&settled, &labels);
        }

        Ok(RenderSummary {
            plotting_area: area,
            x_domain: scales.x.domain().iter().cloned().collect(),
            y_domain: scales.y.domain(),
            bandwidth: scales.x.bandwidth(),
            bar_count: settled.len as usize,
            bars: handle,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn tooltips(&self) -> Option<&T> {
        self.tooltips.as_ref()
    }

    /// Plotting area computed by the most recent render that got past validation
    pub fn plotting_area(&self) -> Option<PlottingArea> {
        self.geometry.current()
    }
}
