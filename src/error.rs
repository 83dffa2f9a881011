use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line position must lie strictly between 0 and 1, got {0}")]
    InvalidLinePosition(f32),
}
