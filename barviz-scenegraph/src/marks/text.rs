use barviz_common::types::{RgbaColor, BLACK};
use barviz_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub text: ScalarOrArray<String>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub align: ScalarOrArray<TextAlignSpec>,
    pub baseline: ScalarOrArray<TextBaselineSpec>,
    /// Rotation in degrees, negative values turn counter-clockwise
    pub angle: ScalarOrArray<f32>,
    pub color: ScalarOrArray<RgbaColor>,
    pub font: ScalarOrArray<String>,
    pub font_size: ScalarOrArray<f32>,
    pub font_weight: ScalarOrArray<FontWeightSpec>,
    pub zindex: Option<i32>,
}

impl SceneTextMark {
    pub fn text_vec(&self) -> Vec<String> {
        self.text.as_vec(self.len as usize)
    }
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }
    pub fn y_vec(&self) -> Vec<f32> {
        self.y.as_vec(self.len as usize)
    }
    pub fn angle_vec(&self) -> Vec<f32> {
        self.angle.as_vec(self.len as usize)
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            clip: false,
            len: 1,
            text: ScalarOrArray::new_scalar(String::new()),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            align: ScalarOrArray::new_scalar(TextAlignSpec::Left),
            baseline: ScalarOrArray::new_scalar(TextBaselineSpec::Alphabetic),
            angle: ScalarOrArray::new_scalar(0.0),
            color: ScalarOrArray::new_scalar(BLACK),
            font: ScalarOrArray::new_scalar("sans-serif".to_string()),
            font_size: ScalarOrArray::new_scalar(10.0),
            font_weight: ScalarOrArray::new_scalar(FontWeightSpec::Normal),
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(mark)
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignSpec {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBaselineSpec {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightSpec {
    #[default]
    Normal,
    Bold,
}
