use thiserror::Error;

/// Common error type shared by the covlet crates
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CommonError {
    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommonError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
