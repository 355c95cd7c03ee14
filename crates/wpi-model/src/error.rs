use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown target field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
