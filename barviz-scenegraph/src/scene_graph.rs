use crate::error::SceneGraphError;
use crate::marks::mark::SceneMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn new(width: f32, height: f32, origin: [f32; 2]) -> Self {
        Self {
            marks: vec![],
            width,
            height,
            origin,
        }
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    pub fn get_mark_mut(&mut self, mark_path: &[usize]) -> Result<&mut SceneMark, SceneGraphError> {
        let not_found = || SceneGraphError::MarkNotFound(mark_path.to_vec());
        let (first, rest) = mark_path.split_first().ok_or_else(not_found)?;
        let mut child = self.marks.get_mut(*first).ok_or_else(not_found)?;
        for index in rest {
            let SceneMark::Group(group) = child else {
                return Err(not_found());
            };
            child = group.marks.get_mut(*index).ok_or_else(not_found)?;
        }
        Ok(child)
    }

    /// Top-level marks with the given name
    pub fn marks_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SceneMark> + 'a {
        self.marks.iter().filter(move |m| m.name() == name)
    }

    pub fn to_json(&self) -> Result<String, SceneGraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneGraphError> {
        Ok(serde_json::from_str(json)?)
    }
}
