//! Brief form state: two single-line text inputs and a vibe selector

use brandcraft_core::{BrandBrief, Vibe};

/// Single-line text editor with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `value`, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Split the value at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

/// Focusable elements of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Idea,
    Industry,
    Vibe,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Idea => FormField::Industry,
            FormField::Industry => FormField::Vibe,
            FormField::Vibe => FormField::Submit,
            FormField::Submit => FormField::Idea,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Idea => FormField::Submit,
            FormField::Industry => FormField::Idea,
            FormField::Vibe => FormField::Industry,
            FormField::Submit => FormField::Vibe,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Idea | FormField::Industry)
    }
}

/// The three brief inputs plus focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub idea: TextInput,
    pub industry: TextInput,
    pub vibe: Vibe,
    pub focus: FormField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vibe(vibe: Vibe) -> Self {
        Self {
            vibe,
            ..Self::default()
        }
    }

    /// Form pre-filled from a brief
    pub fn from_brief(brief: &BrandBrief) -> Self {
        Self {
            idea: TextInput::with_value(brief.idea.clone()),
            industry: TextInput::with_value(brief.industry.clone()),
            vibe: brief.vibe,
            focus: FormField::Idea,
        }
    }

    /// Snapshot of the current inputs
    pub fn brief(&self) -> BrandBrief {
        BrandBrief::new(self.idea.value(), self.industry.value(), self.vibe)
    }

    pub fn is_submittable(&self) -> bool {
        !self.idea.is_empty() && !self.industry.is_empty()
    }

    /// The text input under focus, if focus is on a text field
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Idea => Some(&mut self.idea),
            FormField::Industry => Some(&mut self.industry),
            FormField::Vibe | FormField::Submit => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
}
