use barviz_scales::band::{BandScale, BandScaleOptions};
use barviz_scales::numeric::linear::{LinearNumericScale, LinearNumericScaleConfig};
use barviz_scales::numeric::ContinuousNumericScale;

use crate::data::{Category, FieldValue};
use crate::error::BarChartError;
use crate::geometry::PlottingArea;

/// The two scales of a bar chart, rebuilt on every render
#[derive(Debug, Clone)]
pub struct ChartScales {
    pub x: BandScale<Category>,
    pub y: LinearNumericScale,
}

impl ChartScales {
    pub fn build(
        x_values: &[FieldValue],
        y_values: &[FieldValue],
        area: &PlottingArea,
    ) -> Result<Self, BarChartError> {
        Ok(Self {
            x: build_band_scale(x_values, area.chart_width)?,
            y: build_linear_scale(y_values, area.chart_height)?,
        })
    }

    /// Left edge of the band for `value`, NaN when it is not in the domain
    pub fn x_position(&self, value: &FieldValue) -> f32 {
        self.x.scale(&value.as_category(), &BandScaleOptions::default())
    }

    /// Screen y of `value`, NaN when it is not numeric
    pub fn y_position(&self, value: &FieldValue) -> f32 {
        self.y.scale(value.as_number().unwrap_or(f32::NAN))
    }
}

/// Band scale over the distinct categories, rounded to whole pixels across
/// `[0, chart_width]`
pub fn build_band_scale(
    x_values: &[FieldValue],
    chart_width: f32,
) -> Result<BandScale<Category>, BarChartError> {
    if x_values.is_empty() {
        return Err(BarChartError::Data("dataset has no records".to_string()));
    }

    let missing = x_values.iter().filter(|v| v.is_missing()).count();
    if missing > 0 {
        log::warn!("{missing} records have no x value and share the \"undefined\" band");
    }

    let scale = BandScale::try_new(x_values.iter().map(FieldValue::as_category))?
        .range_round((0.0, chart_width))?;
    Ok(scale)
}

/// Linear scale from `[0, max]` onto `[chart_height, 0]` so zero sits on the
/// bottom edge. Values that are not numeric do not count toward the maximum.
pub fn build_linear_scale(
    y_values: &[FieldValue],
    chart_height: f32,
) -> Result<LinearNumericScale, BarChartError> {
    let numbers: Vec<f32> = y_values
        .iter()
        .filter_map(FieldValue::as_number)
        .filter(|v| v.is_finite())
        .collect();

    let skipped = y_values.len() - numbers.len();
    if skipped > 0 {
        log::warn!("{skipped} records have a non-numeric y value");
    }

    let Some(max) = numbers.into_iter().reduce(f32::max) else {
        return Err(BarChartError::Data(
            "y field has no numeric values to size the value axis".to_string(),
        ));
    };
    if max <= 0.0 {
        return Err(BarChartError::Data(format!(
            "largest y value is {max}, the value axis needs a positive maximum"
        )));
    }

    Ok(LinearNumericScale::try_new(&LinearNumericScaleConfig {
        domain: (0.0, max),
        range: (chart_height, 0.0),
        ..Default::default()
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn texts(values: &[&str]) -> Vec<FieldValue> {
        values.iter().map(|v| FieldValue::from(*v)).collect()
    }

    #[test]
    fn test_band_scale_dedups_in_first_seen_order() {
        let scale = build_band_scale(&texts(&["B", "A", "B", "C"]), 280.0).unwrap();
        let domain: Vec<_> = scale.domain().iter().cloned().collect();
        assert_eq!(
            domain,
            vec![Category::from("B"), Category::from("A"), Category::from("C")]
        );
        assert_eq!(scale.bandwidth(), 93.0);
        assert!(scale.bandwidth() * 3.0 <= 280.0);
    }

    #[test]
    fn test_band_scale_missing_values_share_a_band() {
        let values = vec![FieldValue::from("A"), FieldValue::Missing, FieldValue::Null];
        let scale = build_band_scale(&values, 200.0).unwrap();
        assert_eq!(scale.domain().len(), 2);
        assert_eq!(scale.bandwidth(), 100.0);
    }

    #[test]
    fn test_band_scale_empty_is_data_error() {
        assert!(matches!(
            build_band_scale(&[], 280.0),
            Err(BarChartError::Data(_))
        ));
    }

    #[test]
    fn test_linear_scale_is_zero_anchored() {
        let values = vec![
            FieldValue::Number(-5.0),
            FieldValue::Number(10.0),
            FieldValue::Number(3.0),
        ];
        let scale = build_linear_scale(&values, 280.0).unwrap();
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert_approx_eq!(f32, scale.scale(0.0), 280.0);
        assert_approx_eq!(f32, scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_linear_scale_ignores_non_numeric() {
        let values = vec![
            FieldValue::from("n/a"),
            FieldValue::Number(f32::NAN),
            FieldValue::from("12.5"),
            FieldValue::Null,
        ];
        let scale = build_linear_scale(&values, 100.0).unwrap();
        assert_eq!(scale.domain(), (0.0, 12.5));
    }

    #[test]
    fn test_linear_scale_without_positive_max() {
        let none = vec![FieldValue::Null, FieldValue::from("x")];
        assert!(matches!(
            build_linear_scale(&none, 100.0),
            Err(BarChartError::Data(_))
        ));

        let non_positive = vec![FieldValue::Number(-3.0), FieldValue::Number(0.0)];
        assert!(matches!(
            build_linear_scale(&non_positive, 100.0),
            Err(BarChartError::Data(_))
        ));
    }

    #[test]
    fn test_positions() {
        let x = texts(&["A", "B", "C"]);
        let y = vec![
            FieldValue::Number(10.0),
            FieldValue::Number(20.0),
            FieldValue::Number(5.0),
        ];
        let area = PlottingArea::from_dimensions(400.0, 400.0, &Default::default());
        let scales = ChartScales::build(&x, &y, &area).unwrap();
        assert_eq!(scales.x_position(&"B".into()), 94.0);
        assert!(scales.x_position(&"Z".into()).is_nan());
        assert_approx_eq!(f32, scales.y_position(&FieldValue::Number(5.0)), 210.0);
        assert!(scales.y_position(&FieldValue::Null).is_nan());
    }
}
