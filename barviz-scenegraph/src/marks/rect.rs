use barviz_common::types::{RgbaColor, TRANSPARENT};
use barviz_common::value::{deserialize_f32_channel, ScalarOrArray};
use itertools::izip;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    // Geometry may be NaN for bars without a usable value
    #[serde(deserialize_with = "deserialize_f32_channel")]
    pub x: ScalarOrArray<f32>,
    #[serde(deserialize_with = "deserialize_f32_channel")]
    pub y: ScalarOrArray<f32>,
    #[serde(deserialize_with = "deserialize_f32_channel")]
    pub width: ScalarOrArray<f32>,
    #[serde(deserialize_with = "deserialize_f32_channel")]
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<RgbaColor>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub corner_radius: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn y_vec(&self) -> Vec<f32> {
        self.y.as_vec(self.len as usize)
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize)
    }

    pub fn width_vec(&self) -> Vec<f32> {
        self.width.as_vec(self.len as usize)
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height.as_iter(self.len as usize)
    }

    pub fn height_vec(&self) -> Vec<f32> {
        self.height.as_vec(self.len as usize)
    }

    pub fn fill_vec(&self) -> Vec<RgbaColor> {
        self.fill.as_vec(self.len as usize)
    }

    /// Normalized `[x0, y0, x1, y1]` bounds of each rect, offset by `origin`.
    ///
    /// Negative widths or heights extend left or up from `(x, y)`.
    pub fn bounds_iter(&self, origin: [f32; 2]) -> Box<dyn Iterator<Item = [f32; 4]> + '_> {
        Box::new(
            izip!(
                self.x_iter(),
                self.y_iter(),
                self.width_iter(),
                self.height_iter()
            )
            .map(move |(x, y, width, height)| {
                let x2 = x + width;
                let y2 = y + height;
                [
                    f32::min(*x, x2) + origin[0],
                    f32::min(*y, y2) + origin[1],
                    f32::max(*x, x2) + origin[0],
                    f32::max(*y, y2) + origin[1],
                ]
            }),
        )
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            clip: true,
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(1.0),
            height: ScalarOrArray::new_scalar(1.0),
            fill: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            corner_radius: ScalarOrArray::new_scalar(0.0),
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_normalize_negative_extent() {
        let mark = SceneRectMark {
            len: 2,
            x: vec![10.0, 20.0].into(),
            y: vec![100.0, 50.0].into(),
            width: 5.0.into(),
            height: vec![-40.0, 30.0].into(),
            ..Default::default()
        };
        let bounds: Vec<_> = mark.bounds_iter([1.0, 2.0]).collect();
        assert_eq!(bounds[0], [11.0, 62.0, 16.0, 102.0]);
        assert_eq!(bounds[1], [21.0, 52.0, 26.0, 82.0]);
    }
}
