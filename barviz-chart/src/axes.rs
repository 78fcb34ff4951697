use barviz_guides::axis::band::make_band_axis_marks;
use barviz_guides::axis::make_axis_title;
use barviz_guides::axis::numeric::make_numeric_axis_marks;
use barviz_guides::axis::opts::{AxisConfig, AxisOrientation};
use barviz_scenegraph::marks::group::SceneGroup;
use barviz_scenegraph::marks::text::TextBaselineSpec;

use crate::canvas::{DrawingSurface, MarkHandle};
use crate::config::ChartConfig;
use crate::error::BarChartError;
use crate::geometry::PlottingArea;
use crate::scales::ChartScales;

pub const X_AXIS_NAME: &str = "x-axis";
pub const Y_AXIS_NAME: &str = "y-axis";

/// Gap between the x axis title and the bottom edge of the chart
const X_TITLE_INSET: f32 = 5.0;

/// Bottom band axis at `y = chart_height`, titled with the x field name
pub fn make_x_axis(
    scales: &ChartScales,
    area: &PlottingArea,
    config: &ChartConfig,
) -> Result<SceneGroup, BarChartError> {
    let mut group = make_band_axis_marks(
        &scales.x,
        [0.0, area.chart_height],
        &AxisConfig::new(AxisOrientation::Bottom),
    )?;
    group.name = X_AXIS_NAME.to_string();

    // Relative to the group origin, which already sits on the bottom edge
    group.push(make_axis_title(
        &config.x_field,
        [
            area.chart_width / 2.0,
            config.margins.bottom - X_TITLE_INSET,
        ],
        0.0,
        TextBaselineSpec::Alphabetic,
    ));
    Ok(group)
}

/// Left value axis at `x = 0`, titled with the y field name rotated -90°
/// and hung from the left edge of the chart
pub fn make_y_axis(
    scales: &ChartScales,
    area: &PlottingArea,
    config: &ChartConfig,
) -> Result<SceneGroup, BarChartError> {
    let mut group = make_numeric_axis_marks(
        &scales.y,
        [0.0, 0.0],
        &AxisConfig::new(AxisOrientation::Left),
    )?;
    group.name = Y_AXIS_NAME.to_string();

    group.push(make_axis_title(
        &config.y_field,
        [-config.margins.left, area.chart_height / 2.0],
        -90.0,
        TextBaselineSpec::Top,
    ));
    Ok(group)
}

/// Appends both axes, x first
pub fn render_axes<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    scales: &ChartScales,
    area: &PlottingArea,
    config: &ChartConfig,
) -> Result<[MarkHandle; 2], BarChartError> {
    let x_axis = make_x_axis(scales, area, config)?;
    let y_axis = make_y_axis(scales, area, config)?;
    Ok([surface.append_group(x_axis), surface.append_group(y_axis)])
}
