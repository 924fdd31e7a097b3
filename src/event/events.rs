use std::sync::Arc;

use crate::action::Action;
use crate::state::MemeModel;
use crate::storage::StoredMeme;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new snapshot was published
    StateChanged(Arc<MemeModel>),
    ActionRecorded(Action),
    ActionUndone(Action),
    ActionRedone(Action),
    SaveCompleted(StoredMeme),
    /// A save or share attempt failed; the session is unchanged
    ExportFailed(String),
}
