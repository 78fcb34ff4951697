use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneGraphError {
    #[error("Internal error: `{0}`")]
    InternalError(String),

    #[error("No mark at path {0:?}")]
    MarkNotFound(Vec<usize>),

    #[error("Scene graph serialization error: `{0}`")]
    SerializationError(#[from] serde_json::Error),
}
