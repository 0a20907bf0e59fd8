use thiserror::Error;

/// Failure at the document boundary. The schema carries no validation of its
/// own; anything that decodes is a well-formed devfile.
#[derive(Debug, Error)]
pub enum DevfileError {
    #[error("malformed devfile document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("malformed devfile document: {0}")]
    Json(#[from] serde_json::Error),
}
