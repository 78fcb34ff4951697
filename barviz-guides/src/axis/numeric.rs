use barviz_scales::format::{NumberFormatter, TickFormatter};
use barviz_scales::numeric::ContinuousNumericScale;
use barviz_scenegraph::marks::group::SceneGroup;

use crate::error::GuidesError;

use super::make_axis_group;
use super::opts::AxisConfig;

/// Axis for a continuous scale with evenly spaced, nicely rounded ticks
pub fn make_numeric_axis_marks(
    scale: &impl ContinuousNumericScale,
    origin: [f32; 2],
    config: &AxisConfig,
) -> Result<SceneGroup, GuidesError> {
    let ticks = scale.ticks(Some(config.tick_count));
    let positions = scale.scale_all(&ticks);

    let (d0, d1) = scale.domain();
    let labels = TickFormatter::for_domain(d0, d1, config.tick_count).format(&ticks);

    make_axis_group(
        "numeric-axis",
        scale.range(),
        positions,
        labels,
        origin,
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::opts::AxisOrientation;
    use barviz_scales::numeric::linear::{LinearNumericScale, LinearNumericScaleConfig};
    use barviz_scenegraph::marks::mark::SceneMark;

    #[test]
    fn test_left_numeric_axis() -> Result<(), GuidesError> {
        let scale = LinearNumericScale::try_new(&LinearNumericScaleConfig {
            domain: (0.0, 20.0),
            range: (280.0, 0.0),
            ..Default::default()
        })?;
        let group =
            make_numeric_axis_marks(&scale, [0.0, 0.0], &AxisConfig::new(AxisOrientation::Left))?;

        let SceneMark::Rule(domain) = &group.marks[0] else {
            panic!("expected domain line");
        };
        assert_eq!(domain.x_vec(), vec![0.0]);
        assert_eq!(domain.y_vec(), vec![-0.5]);
        assert_eq!(domain.y2_vec(), vec![280.5]);

        let SceneMark::Rule(ticks) = &group.marks[1] else {
            panic!("expected tick rules");
        };
        assert_eq!(ticks.len, 11);
        assert_eq!(ticks.x2_vec()[0], -6.0);

        let SceneMark::Text(labels) = &group.marks[2] else {
            panic!("expected tick labels");
        };
        let text = labels.text_vec();
        assert_eq!(text.first().map(String::as_str), Some("0"));
        assert_eq!(text.last().map(String::as_str), Some("20"));
        // Zero sits at the bottom of the range
        assert_eq!(labels.y_vec()[0], 280.0);
        Ok(())
    }
}
