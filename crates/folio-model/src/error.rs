use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("invalid root margin {value:?}: {message}")]
    InvalidMargin { value: String, message: String },
    #[error("project id {0} is out of range")]
    InvalidProjectId(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
