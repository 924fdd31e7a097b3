use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{ShareError, StorageError};
use crate::share::ShareDispatcher;
use crate::storage::{MemeId, MemeStore, SortOrder, StoredMeme};

/// The list of saved memes shown outside the editor, with its sort order and
/// multi-selection for bulk delete and share.
pub struct MemeGallery {
    store: Arc<dyn MemeStore>,
    dispatcher: Arc<dyn ShareDispatcher>,
    sort_order: SortOrder,
    memes: Vec<StoredMeme>,
    selected: HashSet<MemeId>,
}

impl std::fmt::Debug for MemeGallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemeGallery")
            .field("sort_order", &self.sort_order)
            .field("memes", &self.memes.len())
            .field("selected", &self.selected.len())
            .finish()
    }
}

impl MemeGallery {
    pub fn new(store: Arc<dyn MemeStore>, dispatcher: Arc<dyn ShareDispatcher>) -> Self {
        Self {
            store,
            dispatcher,
            sort_order: SortOrder::default(),
            memes: Vec::new(),
            selected: HashSet::new(),
        }
    }

    /// Reloads the list from the store in the current order
    pub fn refresh(&mut self) -> Result<(), StorageError> {
        self.memes = self.store.list_all(self.sort_order)?;
        self.selected.retain(|id| self.memes.iter().any(|meme| meme.id == *id));
        Ok(())
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> Result<(), StorageError> {
        self.sort_order = order;
        self.refresh()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn memes(&self) -> &[StoredMeme] {
        &self.memes
    }

    pub fn toggle_favorite(&mut self, id: MemeId) -> Result<(), StorageError> {
        let meme = self.find(id)?;
        self.store.toggle_favorite(&meme)?;
        self.refresh()
    }

    /// Adds or removes a meme from the selection. Selection mode is on while
    /// at least one meme is selected.
    pub fn toggle_selection(&mut self, id: MemeId) {
        if !self.selected.remove(&id) && self.memes.iter().any(|meme| meme.id == id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: MemeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_in_selection_mode(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Deletes every selected meme and leaves selection mode. Memes that fail
    /// to delete stay selected; the list is reloaded either way and the first
    /// failure is returned.
    pub fn delete_selected(&mut self) -> Result<usize, StorageError> {
        let mut deleted = 0;
        let mut first_error = None;
        for meme in self.selected_memes() {
            match self.store.delete(&meme) {
                Ok(()) => {
                    self.selected.remove(&meme.id);
                    deleted += 1;
                }
                Err(error) => {
                    log::warn!("Failed to delete meme {}: {}", meme.id, error);
                    first_error.get_or_insert(error);
                }
            }
        }

        log::info!("Deleted {} memes", deleted);
        self.refresh()?;
        match first_error {
            Some(error) => Err(error),
            None => Ok(deleted),
        }
    }

    /// Shares every selected meme in one request and leaves selection mode
    pub fn share_selected(&mut self) -> Result<(), ShareError> {
        let memes = self.selected_memes();
        if memes.is_empty() {
            return Err(ShareError::NothingToShare);
        }
        self.dispatcher.share(&memes)?;
        self.selected.clear();
        Ok(())
    }

    // Selected memes in display order
    fn selected_memes(&self) -> Vec<StoredMeme> {
        self.memes
            .iter()
            .filter(|meme| self.selected.contains(&meme.id))
            .cloned()
            .collect()
    }

    fn find(&self, id: MemeId) -> Result<StoredMeme, StorageError> {
        self.memes
            .iter()
            .find(|meme| meme.id == id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }
}
