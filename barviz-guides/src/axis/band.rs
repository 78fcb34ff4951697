use std::fmt::{Debug, Display};
use std::hash::Hash;

use barviz_scales::band::{BandScale, BandScaleOptions};
use barviz_scenegraph::marks::group::SceneGroup;

use crate::error::GuidesError;

use super::make_axis_group;
use super::opts::AxisConfig;

/// Axis for a band scale with one tick per domain value, centered in its band
pub fn make_band_axis_marks<D>(
    scale: &BandScale<D>,
    origin: [f32; 2],
    config: &AxisConfig,
) -> Result<SceneGroup, GuidesError>
where
    D: Debug + Display + Clone + Hash + Eq,
{
    let centered = BandScaleOptions {
        band: Some(0.5),
        ..Default::default()
    };
    let positions = scale.scale_domain(&centered);
    let labels = scale.domain().iter().map(|d| d.to_string()).collect();

    make_axis_group(
        "band-axis",
        scale.get_range(),
        positions,
        labels,
        origin,
        config,
    )
}
