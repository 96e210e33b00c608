//! # Template Store
//!
//! Saves and opens template files under `<home_dir>/templates`. Writes
//! outside that folder are refused.

use crate::{EditorError, EditorResult};
use covlet_common::{is_within, normalize_path, FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};
use tracing::info;

/// Extensions recognised as template files
pub const TEMPLATE_EXTENSIONS: [&str; 3] = ["tpl", "tmpl", "gotmpl"];

const DEFAULT_EXTENSION: &str = "tpl";

const DEFAULT_FILE_STEM: &str = "untitled";

/// Template files rooted at a single directory
pub struct TemplateStore<F: FileSystem = RealFileSystem> {
    root: PathBuf,
    fs: F,
}

impl TemplateStore<RealFileSystem> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, RealFileSystem)
    }
}

impl<F: FileSystem> TemplateStore<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: normalize_path(&root.into()),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the templates directory if needed
    pub fn ensure_root(&self) -> EditorResult<()> {
        if !self.fs.exists(&self.root) {
            self.fs.create_dir_all(&self.root)?;
        }
        Ok(())
    }

    /// Save under a new user-supplied file name, returning the final path
    pub fn save_as(&self, file_name: &str, text: &str) -> EditorResult<PathBuf> {
        let mut name = sanitize_file_name(file_name.trim());
        if name.is_empty() || name.starts_with('.') {
            name.insert_str(0, DEFAULT_FILE_STEM);
        }
        if !has_template_extension(Path::new(&name)) {
            name.push('.');
            name.push_str(DEFAULT_EXTENSION);
        }

        self.ensure_root()?;
        let path = self.root.join(name);
        self.save(&path, text)?;
        Ok(path)
    }

    /// Overwrite an existing template path
    pub fn save(&self, path: &Path, text: &str) -> EditorResult<()> {
        let path = self.check_contained(path)?;
        self.fs.write(&path, text)?;
        info!(path = %path.display(), bytes = text.len(), "saved template");
        Ok(())
    }

    pub fn open(&self, path: &Path) -> EditorResult<String> {
        let path = self.check_contained(path)?;
        Ok(self.fs.read_to_string(&path)?)
    }

    fn check_contained(&self, path: &Path) -> EditorResult<PathBuf> {
        let path = if path.is_relative() {
            self.root.join(path)
        } else {
            path.to_path_buf()
        };

        if !is_within(&self.root, &path) {
            return Err(EditorError::OutsideTemplateRoot {
                path,
                root: self.root.clone(),
            });
        }
        Ok(normalize_path(&path))
    }
}

/// True when `path` ends in one of [`TEMPLATE_EXTENSIONS`]
pub fn has_template_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Replace characters that are invalid in file names on common platforms
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}
