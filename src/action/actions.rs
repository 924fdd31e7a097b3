use egui::{Color32, Pos2};

use crate::text_box::{MemeFont, TextBox, TextBoxId};

/// The editable properties of a text box captured at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxProperties {
    pub text: String,
    pub font_size: f32,
    pub font: MemeFont,
    pub color: Color32,
}

impl TextBoxProperties {
    pub fn of(text_box: &TextBox) -> Self {
        Self {
            text: text_box.text.clone(),
            font_size: text_box.font_size,
            font: text_box.font,
            color: text_box.color,
        }
    }

    /// Copy of `text_box` carrying these properties
    pub fn stamp(&self, text_box: &TextBox) -> TextBox {
        text_box
            .with_text(self.text.clone())
            .with_style(self.font_size, self.font, self.color)
    }
}

/// A recorded, reversible edit.
///
/// Every variant carries the full before/after information so that undo and
/// redo never have to re-derive it from the current document.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTextBox(TextBox),
    DeleteTextBox {
        text_box: TextBox,
        /// Paint-order slot the box occupied before removal
        index: usize,
    },
    MoveTextBox {
        text_box: TextBox,
        old_position: Pos2,
        new_position: Pos2,
    },
    /// Covers both style edits and text-only edits (old and new style equal)
    UpdateTextBoxStyle {
        text_box: TextBox,
        old: TextBoxProperties,
        new: TextBoxProperties,
    },
}

impl Action {
    /// Id of the text box this action touches
    pub fn target(&self) -> TextBoxId {
        match self {
            Action::AddTextBox(text_box)
            | Action::DeleteTextBox { text_box, .. }
            | Action::MoveTextBox { text_box, .. }
            | Action::UpdateTextBoxStyle { text_box, .. } => text_box.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddTextBox(_) => "Add text",
            Action::DeleteTextBox { .. } => "Delete text",
            Action::MoveTextBox { .. } => "Move text",
            Action::UpdateTextBoxStyle { old, new, .. } if old.text != new.text => "Edit text",
            Action::UpdateTextBoxStyle { .. } => "Change style",
        }
    }

    /// Apply the forward effect of this action
    pub fn execute(&self, text_boxes: &mut Vec<TextBox>) {
        match self {
            Action::AddTextBox(text_box) => {
                if position_of(text_boxes, text_box.id()).is_none() {
                    text_boxes.push(text_box.clone());
                }
            }
            Action::DeleteTextBox { text_box, .. } => {
                if let Some(index) = position_of(text_boxes, text_box.id()) {
                    text_boxes.remove(index);
                }
            }
            Action::MoveTextBox { text_box, new_position, .. } => {
                replace(text_boxes, text_box.with_position(*new_position));
            }
            Action::UpdateTextBoxStyle { text_box, new, .. } => {
                replace(text_boxes, new.stamp(text_box));
            }
        }
    }

    /// Apply the inverse effect of this action
    pub fn undo(&self, text_boxes: &mut Vec<TextBox>) {
        match self {
            Action::AddTextBox(text_box) => {
                if let Some(index) = position_of(text_boxes, text_box.id()) {
                    text_boxes.remove(index);
                }
            }
            Action::DeleteTextBox { text_box, index } => {
                if position_of(text_boxes, text_box.id()).is_none() {
                    let index = (*index).min(text_boxes.len());
                    text_boxes.insert(index, text_box.clone());
                }
            }
            Action::MoveTextBox { text_box, old_position, .. } => {
                replace(text_boxes, text_box.with_position(*old_position));
            }
            Action::UpdateTextBoxStyle { text_box, old, .. } => {
                replace(text_boxes, old.stamp(text_box));
            }
        }
    }
}

fn position_of(text_boxes: &[TextBox], id: TextBoxId) -> Option<usize> {
    text_boxes.iter().position(|text_box| text_box.id() == id)
}

fn replace(text_boxes: &mut [TextBox], replacement: TextBox) {
    match text_boxes.iter_mut().find(|text_box| text_box.id() == replacement.id()) {
        Some(slot) => *slot = replacement,
        None => log::trace!("No text box {} to replace", replacement.id()),
    }
}
