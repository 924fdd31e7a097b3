use crate::action::ActionLog;
use crate::template::Template;
use crate::text_box::{TextBox, TextBoxId};

use super::StyleEditMode;

/// Immutable snapshot of a meme being edited.
///
/// `text_boxes` is in paint order: later entries are drawn on top.
/// `temporary_text_box` is an uncommitted style preview of the selected box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemeModel {
    pub template: Option<Template>,

    pub text_boxes: Vec<TextBox>,
    pub selected_text_box: Option<TextBox>,
    pub temporary_text_box: Option<TextBox>,

    pub style_edit_mode: StyleEditMode,

    pub show_save_options: bool,
    pub show_exit_confirmation: bool,
    pub show_text_edit_dialog: bool,

    pub action_log: ActionLog,
    pub save_completed: bool,
}

impl MemeModel {
    pub fn new(action_log: ActionLog) -> Self {
        Self {
            action_log,
            ..Default::default()
        }
    }

    /// The style edit bar is shown whenever a box is selected
    pub fn show_edit_bar(&self) -> bool {
        self.selected_text_box.is_some()
    }

    /// The box to draw for `id`: the preview when it shadows that id,
    /// otherwise the committed box.
    pub fn displayed_text_box(&self, id: TextBoxId) -> Option<&TextBox> {
        match &self.temporary_text_box {
            Some(preview) if preview.id() == id => Some(preview),
            _ => self.text_box(id),
        }
    }

    /// Committed boxes with any preview substituted in, in paint order
    pub fn displayed_text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.text_boxes
            .iter()
            .filter_map(|text_box| self.displayed_text_box(text_box.id()))
    }

    /// The committed box with `id`, ignoring any preview
    pub fn text_box(&self, id: TextBoxId) -> Option<&TextBox> {
        self.text_boxes.iter().find(|text_box| text_box.id() == id)
    }

    pub fn selected_id(&self) -> Option<TextBoxId> {
        self.selected_text_box.as_ref().map(TextBox::id)
    }

    pub fn can_undo(&self) -> bool {
        self.action_log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.action_log.can_redo()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_text_box = None;
        self.temporary_text_box = None;
        self.style_edit_mode = StyleEditMode::None;
    }
}
