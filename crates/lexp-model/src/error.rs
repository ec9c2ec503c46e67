use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown region code: {code}")]
    UnknownRegion { code: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
