use std::sync::atomic::{AtomicUsize, Ordering};

use crate::text_box::TextBoxId;

// Single static counter for all text boxes, so ids are never reused within a process
static NEXT_TEXT_BOX_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> TextBoxId {
    TextBoxId::from_raw(NEXT_TEXT_BOX_ID.fetch_add(1, Ordering::SeqCst))
}
