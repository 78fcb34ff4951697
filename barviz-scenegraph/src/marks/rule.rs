use super::mark::SceneMark;
use barviz_common::types::{RgbaColor, BLACK};
use barviz_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize)
    }
    pub fn y_vec(&self) -> Vec<f32> {
        self.y.as_vec(self.len as usize)
    }
    pub fn x2_vec(&self) -> Vec<f32> {
        self.x2.as_vec(self.len as usize)
    }
    pub fn y2_vec(&self) -> Vec<f32> {
        self.y2.as_vec(self.len as usize)
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            clip: true,
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(BLACK),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}
