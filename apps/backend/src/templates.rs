//! Template resources loaded from disk

use std::path::{Path, PathBuf};

use flashcard_core::{render, Context, TemplateName};

use crate::error::{AppError, Result};

/// Reads named templates from a directory and renders them.
///
/// Files are read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the raw template text
    pub async fn load(&self, name: TemplateName) -> Result<String> {
        let path = self.dir.join(name.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| AppError::Template { name, source })
    }

    /// Load a template and substitute its placeholders
    pub async fn render(&self, name: TemplateName, context: &Context) -> Result<String> {
        let template = self.load(name).await?;

        tracing::debug!(template = %name, keys = context.iter().count(), "rendering template");
        let omitted = context.omitted_keys();
        if !omitted.is_empty() {
            tracing::debug!(template = %name, ?omitted, "placeholders left unsubstituted");
        }

        Ok(render(&template, context))
    }
}
