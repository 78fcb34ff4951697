use crate::marks::group::SceneGroup;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SceneMark {
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(SceneTextMark),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn name(&self) -> &str {
        match self {
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
            Self::Group(mark) => &mark.name,
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }
}
