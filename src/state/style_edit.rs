/// Which style sub-editor is open for the selected text box.
///
/// ```text
///  None ──(select box)──► Font | Size | Color ──(confirm / cancel)──► None
///                          ▲        │
///                          └────────┘  switch sub-editor
/// ```
///
/// Any number of previews may happen while a sub-editor is open; the flow
/// ends with exactly one confirm or cancel, both of which return to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleEditMode {
    Font,
    Size,
    Color,
    #[default]
    None,
}

impl StyleEditMode {
    /// Validates whether a transition to `next` is allowed, given whether a
    /// text box is currently selected
    pub fn can_transition_to(self, next: StyleEditMode, has_selection: bool) -> bool {
        match next {
            // Closing the editor is always allowed
            StyleEditMode::None => true,
            // Opening or switching sub-editors needs something to edit
            StyleEditMode::Font | StyleEditMode::Size | StyleEditMode::Color => has_selection,
        }
    }

    /// Returns true if a style sub-editor is open
    pub fn is_editing(self) -> bool {
        !matches!(self, StyleEditMode::None)
    }
}
