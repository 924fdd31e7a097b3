use std::sync::Arc;

use crate::error::{ExportError, RenderError};
use crate::event::SessionEvent;
use crate::share::ShareDispatcher;
use crate::state::{EditSession, MemeModel};
use crate::storage::{MemeStore, RenderedImage, StoredMeme};

/// Produces the composed template-plus-text bitmap for a snapshot
pub trait Rasterizer {
    fn rasterize(&self, model: &MemeModel) -> Result<RenderedImage, RenderError>;
}

/// Saves or shares the meme of an edit session.
///
/// Each call is a single attempt. On failure the error is logged, announced as
/// [`SessionEvent::ExportFailed`] and returned; the session is left as it was
/// so the user can try again.
pub struct MemeExporter {
    store: Arc<dyn MemeStore>,
    dispatcher: Arc<dyn ShareDispatcher>,
}

impl std::fmt::Debug for MemeExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemeExporter").finish_non_exhaustive()
    }
}

impl MemeExporter {
    pub fn new(store: Arc<dyn MemeStore>, dispatcher: Arc<dyn ShareDispatcher>) -> Self {
        Self { store, dispatcher }
    }

    /// Persists `image` under the session's template name
    pub fn save(
        &self,
        session: &mut EditSession,
        image: &RenderedImage,
    ) -> Result<StoredMeme, ExportError> {
        let result = self.persist(session, image);
        self.finish(session, result, "save")
    }

    /// Persists `image`, then hands the stored meme to the share dispatcher
    pub fn share(
        &self,
        session: &mut EditSession,
        image: &RenderedImage,
    ) -> Result<StoredMeme, ExportError> {
        let result = self.persist(session, image).and_then(|meme| {
            self.dispatcher.share(std::slice::from_ref(&meme))?;
            Ok(meme)
        });
        self.finish(session, result, "share")
    }

    /// Rasterizes the current snapshot, then saves it
    pub fn save_rendered(
        &self,
        session: &mut EditSession,
        rasterizer: &dyn Rasterizer,
    ) -> Result<StoredMeme, ExportError> {
        match rasterizer.rasterize(session.model()) {
            Ok(image) => self.save(session, &image),
            Err(error) => self.finish(session, Err(error.into()), "save"),
        }
    }

    /// Rasterizes the current snapshot, then shares it
    pub fn share_rendered(
        &self,
        session: &mut EditSession,
        rasterizer: &dyn Rasterizer,
    ) -> Result<StoredMeme, ExportError> {
        match rasterizer.rasterize(session.model()) {
            Ok(image) => self.share(session, &image),
            Err(error) => self.finish(session, Err(error.into()), "share"),
        }
    }

    fn persist(&self, session: &EditSession, image: &RenderedImage) -> Result<StoredMeme, ExportError> {
        let template = session.model().template.as_ref().ok_or(ExportError::NoTemplate)?;
        Ok(self.store.save(&template.name, image)?)
    }

    fn finish(
        &self,
        session: &mut EditSession,
        result: Result<StoredMeme, ExportError>,
        operation: &str,
    ) -> Result<StoredMeme, ExportError> {
        match result {
            Ok(meme) => {
                log::info!("Meme {} {} completed ({})", meme.id, operation, meme.file_path.display());
                session.mark_save_completed();
                session.event_bus().emit(SessionEvent::SaveCompleted(meme.clone()));
                Ok(meme)
            }
            Err(error) => {
                log::error!("Meme {} failed: {}", operation, error);
                session.event_bus().emit(SessionEvent::ExportFailed(error.to_string()));
                Err(error)
            }
        }
    }
}
