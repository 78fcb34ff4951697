use barviz_scenegraph::marks::rect::SceneRectMark;

use crate::data::FieldValue;

/// Text shown when hovering one bar
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub x: String,
    pub y: String,
}

/// Field names plus one entry per bar, index aligned with the bars
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLabels {
    pub x_field: String,
    pub y_field: String,
    pub entries: Vec<TooltipEntry>,
}

impl TooltipLabels {
    pub fn new(
        x_field: impl Into<String>,
        y_field: impl Into<String>,
        x_values: &[FieldValue],
        y_values: &[FieldValue],
    ) -> Self {
        Self {
            x_field: x_field.into(),
            y_field: y_field.into(),
            entries: x_values
                .iter()
                .zip(y_values)
                .map(|(x, y)| TooltipEntry {
                    x: x.to_string(),
                    y: y.to_string(),
                })
                .collect(),
        }
    }

    /// `"<x_field>: <x>, <y_field>: <y>"` for bar `index`
    pub fn describe(&self, index: usize) -> Option<String> {
        let entry = self.entries.get(index)?;
        Some(format!(
            "{}: {}, {}: {}",
            self.x_field, entry.x, self.y_field, entry.y
        ))
    }
}

/// Receives freshly drawn bars so it can attach hover behavior to them
pub trait TooltipService {
    fn attach(&mut self, bars: &SceneRectMark, labels: &TooltipLabels);
}

/// Tooltip service that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTooltips;

impl TooltipService for NoTooltips {
    fn attach(&mut self, _bars: &SceneRectMark, _labels: &TooltipLabels) {}
}

/// Hit-tests the settled bars of the latest render.
///
/// `origin` is the offset of the bar mark on screen, usually the left and top
/// margins of the chart.
#[derive(Debug, Clone, Default)]
pub struct BarTooltips {
    origin: [f32; 2],
    bounds: Vec<[f32; 4]>,
    labels: Option<TooltipLabels>,
}

impl BarTooltips {
    pub fn new(origin: [f32; 2]) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    pub fn set_origin(&mut self, origin: [f32; 2]) {
        self.origin = origin;
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Tooltip text for the bar under `point`, if any
    pub fn tooltip_at(&self, point: [f32; 2]) -> Option<String> {
        let labels = self.labels.as_ref()?;
        // Last drawn wins where bars overlap
        let index = self.bounds.iter().rposition(|[x0, y0, x1, y1]| {
            point[0] >= *x0 && point[0] <= *x1 && point[1] >= *y0 && point[1] <= *y1
        })?;
        labels.describe(index)
    }
}

impl TooltipService for BarTooltips {
    fn attach(&mut self, bars: &SceneRectMark, labels: &TooltipLabels) {
        self.bounds = bars.bounds_iter(self.origin).collect();
        self.labels = Some(labels.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate::{make_bar_mark, BarFrame};

    #[test]
    fn test_tooltip_hit_testing() {
        let bars = make_bar_mark(
            &[
                BarFrame {
                    x: 0.0,
                    y: 50.0,
                    width: 10.0,
                    height: 50.0,
                },
                BarFrame {
                    x: 10.0,
                    y: 20.0,
                    width: 10.0,
                    height: 80.0,
                },
            ],
            [0.0, 0.0, 1.0, 1.0],
        );
        let labels = TooltipLabels::new(
            "cat",
            "val",
            &[FieldValue::from("A"), FieldValue::from("B")],
            &[FieldValue::Number(10.0), FieldValue::Number(16.0)],
        );

        let mut tooltips = BarTooltips::new([60.0, 60.0]);
        tooltips.attach(&bars, &labels);
        assert_eq!(tooltips.len(), 2);

        assert_eq!(
            tooltips.tooltip_at([65.0, 150.0]).as_deref(),
            Some("cat: A, val: 10")
        );
        assert_eq!(
            tooltips.tooltip_at([75.0, 90.0]).as_deref(),
            Some("cat: B, val: 16")
        );
        // Above the shorter bar
        assert_eq!(tooltips.tooltip_at([65.0, 90.0]), None);
    }
}
