use barviz_scales::error::ScaleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuidesError {
    #[error("Invalid scale: {0}")]
    InvalidScale(#[from] ScaleError),

    #[error("Mismatched tick positions ({positions}) and labels ({labels})")]
    TickLabelMismatch { positions: usize, labels: usize },
}
