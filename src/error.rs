use thiserror::Error;

use crate::storage::MemeId;
use crate::template::TemplateId;

/// Failures of the meme storage collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to encode meme image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("meme {0} not found")]
    NotFound(MemeId),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Failures of the share collaborator
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no memes to share")]
    NothingToShare,
    #[error("share dispatch failed: {0}")]
    Dispatch(String),
}

/// Failures producing the composed bitmap
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rasterization failed: {0}")]
    Failed(String),
}

/// Failures looking up templates in the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("template {0} is not in the catalog")]
    TemplateNotFound(TemplateId),
}

/// Failures of a save or share attempt. The edit session is left untouched
/// whenever one of these is returned.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no template has been chosen")]
    NoTemplate,
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Share(#[from] ShareError),
}

/// Failures loading an editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse editor config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid editor config: {0}")]
    Invalid(String),
}
