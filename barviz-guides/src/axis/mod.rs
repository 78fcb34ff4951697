pub mod band;
pub mod numeric;
pub mod opts;

use barviz_common::types::BLACK;
use barviz_common::value::ScalarOrArray;
use barviz_scales::error::ScaleError;
use barviz_scenegraph::marks::group::SceneGroup;
use barviz_scenegraph::marks::rule::SceneRuleMark;
use barviz_scenegraph::marks::text::{
    FontWeightSpec, SceneTextMark, TextAlignSpec, TextBaselineSpec,
};

use crate::error::GuidesError;
use opts::{AxisConfig, AxisOrientation};

const TEXT_MARGIN: f32 = 3.0;
const TITLE_FONT_SIZE: f32 = 12.0;
// Shift half a pixel so one pixel wide lines land on pixel centers
const PIXEL_OFFSET: f32 = 0.5;

/// Builds the domain line, ticks, and tick labels of an axis in a group at `origin`.
///
/// `positions` are tick coordinates along the axis, `range` is the scale's
/// output range spanned by the domain line.
pub(crate) fn make_axis_group(
    name: &str,
    range: (f32, f32),
    positions: Vec<f32>,
    labels: Vec<String>,
    origin: [f32; 2],
    config: &AxisConfig,
) -> Result<SceneGroup, GuidesError> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(ScaleError::InvalidRange(range.0, range.1).into());
    }
    if positions.len() != labels.len() {
        return Err(GuidesError::TickLabelMismatch {
            positions: positions.len(),
            labels: labels.len(),
        });
    }

    let mut group = SceneGroup::new(name, origin);
    group.zindex = Some(1);
    group.push(make_domain_line(range, &config.orientation));
    group.push(make_tick_marks(&positions, config));
    group.push(make_tick_labels(positions, labels, config));
    Ok(group)
}

fn make_domain_line(range: (f32, f32), orientation: &AxisOrientation) -> SceneRuleMark {
    let start = f32::min(range.0, range.1) - PIXEL_OFFSET;
    let end = f32::max(range.0, range.1) + PIXEL_OFFSET;

    let (x, x2, y, y2) = if orientation.is_vertical() {
        (0.0, 0.0, start, end)
    } else {
        (start, end, 0.0, 0.0)
    };

    SceneRuleMark {
        name: "domain".to_string(),
        clip: false,
        x: x.into(),
        x2: x2.into(),
        y: y.into(),
        y2: y2.into(),
        ..Default::default()
    }
}

fn make_tick_marks(positions: &[f32], config: &AxisConfig) -> SceneRuleMark {
    let along = ScalarOrArray::new_array(positions.iter().map(|p| p + PIXEL_OFFSET).collect());
    let across = ScalarOrArray::new_scalar(config.tick_length * config.orientation.tick_direction());

    let (x, x2, y, y2) = if config.orientation.is_vertical() {
        (0.0.into(), across, along.clone(), along)
    } else {
        (along.clone(), along, 0.0.into(), across)
    };

    SceneRuleMark {
        name: "ticks".to_string(),
        clip: false,
        len: positions.len() as u32,
        x,
        x2,
        y,
        y2,
        stroke: BLACK.into(),
        ..Default::default()
    }
}

fn make_tick_labels(positions: Vec<f32>, labels: Vec<String>, config: &AxisConfig) -> SceneTextMark {
    let offset = (config.tick_length + TEXT_MARGIN) * config.orientation.tick_direction();
    let len = positions.len() as u32;

    let (x, y, align, baseline) = match config.orientation {
        AxisOrientation::Left => (
            offset.into(),
            positions.into(),
            TextAlignSpec::Right,
            TextBaselineSpec::Middle,
        ),
        AxisOrientation::Right => (
            offset.into(),
            positions.into(),
            TextAlignSpec::Left,
            TextBaselineSpec::Middle,
        ),
        AxisOrientation::Top => (
            positions.into(),
            offset.into(),
            TextAlignSpec::Center,
            TextBaselineSpec::Bottom,
        ),
        AxisOrientation::Bottom => (
            positions.into(),
            offset.into(),
            TextAlignSpec::Center,
            TextBaselineSpec::Top,
        ),
    };

    SceneTextMark {
        name: "labels".to_string(),
        len,
        text: labels.into(),
        x,
        y,
        align: align.into(),
        baseline: baseline.into(),
        font_size: config.tick_font_size.into(),
        ..Default::default()
    }
}

/// A single centered axis title at `position`, rotated by `angle` degrees
pub fn make_axis_title(
    title: &str,
    position: [f32; 2],
    angle: f32,
    baseline: TextBaselineSpec,
) -> SceneTextMark {
    SceneTextMark {
        name: "title".to_string(),
        len: 1,
        text: title.to_string().into(),
        x: position[0].into(),
        y: position[1].into(),
        align: TextAlignSpec::Center.into(),
        baseline: baseline.into(),
        angle: angle.into(),
        font_size: TITLE_FONT_SIZE.into(),
        font_weight: FontWeightSpec::Bold.into(),
        ..Default::default()
    }
}
