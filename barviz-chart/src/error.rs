use barviz_common::types::ColorParseError;
use barviz_guides::error::GuidesError;
use barviz_scales::error::ScaleError;
use barviz_scenegraph::error::SceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarChartError {
    #[error("Missing data: no dataset was provided")]
    MissingData,

    #[error("Data error: {0}")]
    Data(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Scale error: `{0}`")]
    Scale(#[from] ScaleError),

    #[error("Guides error: `{0}`")]
    Guides(#[from] GuidesError),

    #[error("SceneGraph error: `{0}`")]
    SceneGraph(#[from] SceneGraphError),

    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}

impl From<ColorParseError> for BarChartError {
    fn from(value: ColorParseError) -> Self {
        BarChartError::Config(value.to_string())
    }
}
