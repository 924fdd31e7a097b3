use std::sync::Arc;

use egui::{Color32, Pos2};

use crate::action::{Action, ActionLog, TextBoxProperties};
use crate::catalog::TemplateCatalog;
use crate::config::EditorConfig;
use crate::error::CatalogError;
use crate::event::{EventBus, SessionEvent};
use crate::template::{Template, TemplateId};
use crate::text_box::{MemeFont, TextBox, TextBoxId};

use super::{MemeModel, StyleEditMode};

/// The lifetime of one meme being actively edited.
///
/// Every operation is a synchronous transition from the current snapshot to
/// the next one. A transition clones the current [`MemeModel`], mutates the
/// clone, then swaps it in with a single assignment and announces it on the
/// event bus as [`SessionEvent::StateChanged`]. Operations that find nothing
/// to do (unknown id, no selection, empty history) publish nothing and
/// return `false`.
#[derive(Debug)]
pub struct EditSession {
    model: Arc<MemeModel>,
    config: EditorConfig,
    event_bus: EventBus,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditSession {
    /// Creates a session with no template chosen yet
    pub fn new(config: EditorConfig) -> Self {
        let action_log = ActionLog::with_limit(config.history_limit);
        Self {
            model: Arc::new(MemeModel::new(action_log)),
            config,
            event_bus: EventBus::new(),
        }
    }

    /// Creates a session for the catalog template with `template_id`
    pub fn start(
        catalog: &dyn TemplateCatalog,
        template_id: TemplateId,
        config: EditorConfig,
    ) -> Result<Self, CatalogError> {
        let template = catalog
            .get(template_id)
            .ok_or(CatalogError::TemplateNotFound(template_id))?;

        log::debug!("Starting edit session on {:?}", template.name);

        let mut session = Self::new(config);
        session.select_template(template);
        Ok(session)
    }

    /// The current published snapshot
    pub fn snapshot(&self) -> Arc<MemeModel> {
        Arc::clone(&self.model)
    }

    pub fn model(&self) -> &MemeModel {
        &self.model
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// A box with a fresh id and the configured default style
    pub fn new_text_box(&self, text: impl Into<String>, position: Pos2) -> TextBox {
        TextBox::new(text, position).with_style(
            self.config.clamp_font_size(self.config.default_font_size),
            self.config.default_font,
            self.config.default_color,
        )
    }

    pub fn select_template(&mut self, template: Template) -> bool {
        let mut next = self.next_model();
        next.template = Some(template);
        self.publish(next);
        true
    }

    /// Appends `text_box` on top of the others. Its font size is brought into
    /// the configured range first.
    pub fn add_text_box(&mut self, mut text_box: TextBox) -> bool {
        if self.model.text_box(text_box.id()).is_some() {
            log::trace!("Text box {} already present, not adding it again", text_box.id());
            return false;
        }

        text_box.font_size = self.config.clamp_font_size(text_box.font_size);

        let mut next = self.next_model();
        next.text_boxes.push(text_box.clone());
        self.publish_recorded(next, Action::AddTextBox(text_box));
        true
    }

    /// Selects the committed box with `id` and drops any stale preview
    pub fn select_text_box(&mut self, id: TextBoxId) -> bool {
        let Some(committed) = self.model.text_box(id).cloned() else {
            log::trace!("Cannot select unknown text box {}", id);
            return false;
        };

        log::debug!("Selected text box {}", id);

        let mut next = self.next_model();
        next.selected_text_box = Some(committed);
        next.temporary_text_box = None;
        self.publish(next);
        true
    }

    /// Cancels the style edit flow without recording anything
    pub fn deselect_and_discard_preview(&mut self) -> bool {
        let model = &self.model;
        if model.selected_text_box.is_none()
            && model.temporary_text_box.is_none()
            && !model.style_edit_mode.is_editing()
        {
            return false;
        }

        let mut next = self.next_model();
        next.clear_selection();
        self.publish(next);
        true
    }

    /// Opens (or closes, with `StyleEditMode::None`) a style sub-editor
    pub fn select_style_edit_mode(&mut self, mode: StyleEditMode) -> bool {
        let current = self.model.style_edit_mode;
        if current == mode {
            return false;
        }
        if !current.can_transition_to(mode, self.model.show_edit_bar()) {
            log::trace!("Ignoring style edit mode {:?} without a selection", mode);
            return false;
        }

        let mut next = self.next_model();
        next.style_edit_mode = mode;
        self.publish(next);
        true
    }

    /// Updates the live preview of the selected box. Only the supplied fields
    /// change, on top of any earlier preview. Nothing is committed or recorded.
    pub fn preview_style(
        &mut self,
        font_size: Option<f32>,
        font: Option<MemeFont>,
        color: Option<Color32>,
    ) -> bool {
        let Some(selected_id) = self.model.selected_id() else {
            return false;
        };
        let Some(committed) = self.model.text_box(selected_id) else {
            log::trace!("Selected text box {} no longer exists", selected_id);
            return false;
        };

        let base = match &self.model.temporary_text_box {
            Some(preview) if preview.id() == selected_id => preview,
            _ => committed,
        };
        let preview = base.with_style(
            font_size.map_or(base.font_size, |size| self.config.clamp_font_size(size)),
            font.unwrap_or(base.font),
            color.unwrap_or(base.color),
        );

        log::debug!("Previewing style for {}: {:?}", selected_id, preview);

        let mut next = self.next_model();
        next.temporary_text_box = Some(preview);
        self.publish(next);
        true
    }

    /// Commits the final style onto the selected box and records it against
    /// the committed (pre-preview) values.
    pub fn confirm_style(&mut self, font_size: f32, font: MemeFont, color: Color32) -> bool {
        let Some(selected_id) = self.model.selected_id() else {
            return false;
        };
        let Some(committed) = self.model.text_box(selected_id).cloned() else {
            log::trace!("Selected text box {} no longer exists", selected_id);
            return false;
        };

        let updated = committed.with_style(self.config.clamp_font_size(font_size), font, color);
        let action = Action::UpdateTextBoxStyle {
            old: TextBoxProperties::of(&committed),
            new: TextBoxProperties::of(&updated),
            text_box: committed,
        };

        let mut next = self.next_model();
        action.execute(&mut next.text_boxes);
        next.clear_selection();
        self.publish_recorded(next, action);
        true
    }

    pub fn move_text_box(&mut self, id: TextBoxId, new_position: Pos2) -> bool {
        let Some(text_box) = self.model.text_box(id).cloned() else {
            log::trace!("Cannot move unknown text box {}", id);
            return false;
        };

        let action = Action::MoveTextBox {
            old_position: text_box.position,
            new_position,
            text_box,
        };

        let mut next = self.next_model();
        action.execute(&mut next.text_boxes);
        self.publish_recorded(next, action);
        true
    }

    /// Removes the first box equal to `text_box`
    pub fn delete_text_box(&mut self, text_box: &TextBox) -> bool {
        let Some(index) = self.model.text_boxes.iter().position(|candidate| candidate == text_box) else {
            log::trace!("Cannot delete text box {}, no matching entry", text_box.id());
            return false;
        };

        let mut next = self.next_model();
        let removed = next.text_boxes.remove(index);
        if next.selected_id() == Some(removed.id()) {
            next.clear_selection();
        }
        self.publish_recorded(next, Action::DeleteTextBox { text_box: removed, index });
        true
    }

    /// Replaces the text of the selected box. Recorded as a style update
    /// whose style fields are unchanged.
    pub fn update_text(&mut self, id: TextBoxId, text: impl Into<String>) -> bool {
        if self.model.selected_id() != Some(id) {
            log::trace!("Text update for {} does not match the selection", id);
            return false;
        }
        let Some(committed) = self.model.text_box(id).cloned() else {
            log::trace!("Selected text box {} no longer exists", id);
            return false;
        };

        let updated = committed.with_text(text);
        let action = Action::UpdateTextBoxStyle {
            old: TextBoxProperties::of(&committed),
            new: TextBoxProperties::of(&updated),
            text_box: committed,
        };

        let mut next = self.next_model();
        action.execute(&mut next.text_boxes);
        next.clear_selection();
        next.show_text_edit_dialog = false;
        self.publish_recorded(next, action);
        true
    }

    pub fn undo(&mut self) -> bool {
        let Some(action) = self.model.action_log.peek_undo().cloned() else {
            return false;
        };

        log::debug!("Undoing {}: {:?}", action.label(), action);

        let mut next = self.next_model();
        action.undo(&mut next.text_boxes);
        next.action_log.step_back();
        drop_stale_selection(&mut next);
        self.publish(next);
        self.event_bus.emit(SessionEvent::ActionUndone(action));
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(action) = self.model.action_log.peek_redo().cloned() else {
            return false;
        };

        log::debug!("Redoing {}: {:?}", action.label(), action);

        let mut next = self.next_model();
        action.execute(&mut next.text_boxes);
        next.action_log.step_forward();
        drop_stale_selection(&mut next);
        self.publish(next);
        self.event_bus.emit(SessionEvent::ActionRedone(action));
        true
    }

    pub fn toggle_save_options(&mut self) {
        let mut next = self.next_model();
        next.show_save_options = !next.show_save_options;
        self.publish(next);
    }

    pub fn toggle_exit_confirmation(&mut self) {
        let mut next = self.next_model();
        next.show_exit_confirmation = !next.show_exit_confirmation;
        self.publish(next);
    }

    /// Shows the text dialog, either for a new box (`None`) or to edit the
    /// committed box with the given id, which becomes the selection.
    pub fn open_text_edit_dialog(&mut self, for_box: Option<TextBoxId>) -> bool {
        let selected = match for_box {
            Some(id) => match self.model.text_box(id) {
                Some(committed) => Some(committed.clone()),
                None => {
                    log::trace!("Cannot edit text of unknown text box {}", id);
                    return false;
                }
            },
            None => None,
        };

        let mut next = self.next_model();
        next.show_text_edit_dialog = true;
        next.selected_text_box = selected;
        next.temporary_text_box = None;
        next.style_edit_mode = StyleEditMode::None;
        self.publish(next);
        true
    }

    pub fn close_text_edit_dialog(&mut self) -> bool {
        if !self.model.show_text_edit_dialog {
            return false;
        }

        let mut next = self.next_model();
        next.show_text_edit_dialog = false;
        self.publish(next);
        true
    }

    /// Signals that the meme was persisted and the editor can be left
    pub(crate) fn mark_save_completed(&mut self) {
        let mut next = self.next_model();
        next.save_completed = true;
        next.show_save_options = false;
        self.publish(next);
    }

    fn next_model(&self) -> MemeModel {
        MemeModel::clone(&self.model)
    }

    fn publish(&mut self, next: MemeModel) {
        self.model = Arc::new(next);
        self.event_bus.emit(SessionEvent::StateChanged(Arc::clone(&self.model)));
    }

    fn publish_recorded(&mut self, mut next: MemeModel, action: Action) {
        log::debug!("Recording {}: {:?}", action.label(), action);
        next.action_log.record(action.clone());
        self.publish(next);
        self.event_bus.emit(SessionEvent::ActionRecorded(action));
    }
}

/// Undo and redo can remove the selected box out from under the edit bar
fn drop_stale_selection(model: &mut MemeModel) {
    if let Some(id) = model.selected_id() {
        if model.text_box(id).is_none() {
            log::trace!("Selected text box {} was removed, clearing selection", id);
            model.clear_selection();
        }
    }
}
