#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Empty domain")]
    EmptyDomain,

    #[error("Invalid domain ({0}, {1}): bounds must be finite")]
    InvalidDomain(f32, f32),

    #[error("Invalid range ({0}, {1}): bounds must be finite")]
    InvalidRange(f32, f32),
}
