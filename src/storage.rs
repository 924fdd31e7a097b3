use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StorageError;
use crate::util::time;

/// The composed template-plus-text bitmap produced by the rasterizer
pub type RenderedImage = image::RgbaImage;

/// JPEG quality saved memes are encoded with
pub const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemeId(pub Uuid);

impl MemeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for MemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A finished meme as the storage collaborator knows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMeme {
    pub id: MemeId,
    pub template_name: String,
    pub created_at: SystemTime,
    #[serde(default)]
    pub is_favorite: bool,
    pub file_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Favorites first, newest first within each group
    #[default]
    FavoritesFirst,
    Newest,
}

/// Persistence of finished memes
pub trait MemeStore: Send + Sync {
    fn save(&self, template_name: &str, image: &RenderedImage) -> Result<StoredMeme, StorageError>;

    fn delete(&self, meme: &StoredMeme) -> Result<(), StorageError>;

    fn list_all(&self, order: SortOrder) -> Result<Vec<StoredMeme>, StorageError>;

    /// Flips the favorite flag and returns the updated record
    fn toggle_favorite(&self, meme: &StoredMeme) -> Result<StoredMeme, StorageError>;
}

/// Orders memes for display. Ties on `created_at` keep their incoming order
/// reversed, so later insertions count as newer.
pub fn sort_memes(memes: &mut [StoredMeme], order: SortOrder) {
    memes.reverse();
    match order {
        SortOrder::Newest => memes.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::FavoritesFirst => memes.sort_by(|a, b| {
            b.is_favorite
                .cmp(&a.is_favorite)
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    // Insertion order, oldest first
    memes: Vec<StoredMeme>,
    encoded: HashMap<MemeId, Vec<u8>>,
}

/// Store that keeps JPEG-encoded memes in memory under a virtual directory
#[derive(Debug)]
pub struct InMemoryMemeStore {
    root: PathBuf,
    inner: RwLock<StoreInner>,
}

impl Default for InMemoryMemeStore {
    fn default() -> Self {
        Self::new("Memes")
    }
}

impl InMemoryMemeStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// The encoded JPEG bytes of a stored meme
    pub fn encoded(&self, id: MemeId) -> Option<Vec<u8>> {
        self.inner.read().encoded.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().memes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemeStore for InMemoryMemeStore {
    fn save(&self, template_name: &str, image: &RenderedImage) -> Result<StoredMeme, StorageError> {
        let id = MemeId::generate();

        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        let mut bytes = Vec::new();
        rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY))?;

        let meme = StoredMeme {
            id,
            template_name: template_name.to_owned(),
            created_at: time::now(),
            is_favorite: false,
            file_path: self.root.join(format!("meme_{id}.jpg")),
        };

        log::debug!(
            "Stored meme {} ({} bytes) at {}ms",
            id,
            bytes.len(),
            time::timestamp_millis(meme.created_at)
        );

        let mut inner = self.inner.write();
        inner.encoded.insert(id, bytes);
        inner.memes.push(meme.clone());
        Ok(meme)
    }

    fn delete(&self, meme: &StoredMeme) -> Result<(), StorageError> {
        let mut inner = self.inner.write();
        let index = inner
            .memes
            .iter()
            .position(|stored| stored.id == meme.id)
            .ok_or(StorageError::NotFound(meme.id))?;

        inner.memes.remove(index);
        inner.encoded.remove(&meme.id);
        Ok(())
    }

    fn list_all(&self, order: SortOrder) -> Result<Vec<StoredMeme>, StorageError> {
        let mut memes = self.inner.read().memes.clone();
        sort_memes(&mut memes, order);
        Ok(memes)
    }

    fn toggle_favorite(&self, meme: &StoredMeme) -> Result<StoredMeme, StorageError> {
        let mut inner = self.inner.write();
        let stored = inner
            .memes
            .iter_mut()
            .find(|stored| stored.id == meme.id)
            .ok_or(StorageError::NotFound(meme.id))?;

        stored.is_favorite = !stored.is_favorite;
        Ok(stored.clone())
    }
}
