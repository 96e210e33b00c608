//! Error types for the editor

use std::path::PathBuf;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    #[error("Render error: {0}")]
    RenderExecution(String),

    #[error("Path {} is outside the templates directory {}", path.display(), root.display())]
    OutsideTemplateRoot { path: PathBuf, root: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] covlet_common::CommonError),
}

impl EditorError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, EditorError::TemplateSyntax(_))
    }

    pub fn is_execution(&self) -> bool {
        matches!(self, EditorError::RenderExecution(_))
    }
}
