use crate::marks::mark::SceneMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneGroup {
    pub name: String,
    /// Offset applied to every child, relative to the parent group
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    pub fn new(name: impl Into<String>, origin: [f32; 2]) -> Self {
        Self {
            name: name.into(),
            origin,
            ..Default::default()
        }
    }

    pub fn push(&mut self, mark: impl Into<SceneMark>) {
        self.marks.push(mark.into());
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
