use std::path::PathBuf;

use crate::error::ShareError;
use crate::storage::StoredMeme;

/// MIME type handed to the platform share surface
pub const SHARE_MIME_TYPE: &str = "image/*";

/// Hands stored memes to the platform share surface
pub trait ShareDispatcher: Send + Sync {
    fn share(&self, memes: &[StoredMeme]) -> Result<(), ShareError>;
}

/// What a dispatcher should ask the platform for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareRequest {
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
}

impl ShareRequest {
    pub fn for_memes(memes: &[StoredMeme]) -> Result<Self, ShareError> {
        match memes {
            [] => Err(ShareError::NothingToShare),
            [meme] => Ok(ShareRequest::Single(meme.file_path.clone())),
            _ => Ok(ShareRequest::Multiple(
                memes.iter().map(|meme| meme.file_path.clone()).collect(),
            )),
        }
    }

    /// Title for the platform chooser
    pub fn chooser_title(&self) -> &'static str {
        match self {
            ShareRequest::Single(_) => "Share Meme",
            ShareRequest::Multiple(_) => "Share Memes",
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            ShareRequest::Single(path) => std::slice::from_ref(path),
            ShareRequest::Multiple(paths) => paths,
        }
    }
}
