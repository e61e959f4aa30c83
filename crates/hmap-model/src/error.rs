use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("template schema is empty")]
    EmptyTemplate,
    #[error("duplicate template header: {0}")]
    DuplicateTemplateHeader(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
