use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown questionnaire item: {0}")]
    UnknownCatItem(String),
}
