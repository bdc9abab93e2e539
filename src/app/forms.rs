//! Modal forms for adding categories and keybinds

use tui_input::{Input, InputRequest};

use super::event::{Event, FormEdit, TextEdit};
use crate::store::Category;

/// Single-line text field backed by tui-input
#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: Input,
    placeholder: &'static str,
}

impl TextField {
    pub fn with_placeholder(placeholder: &'static str) -> Self {
        Self {
            input: Input::default(),
            placeholder,
        }
    }

    pub fn apply(&mut self, edit: TextEdit) {
        let request = match edit {
            TextEdit::Insert(c) => InputRequest::InsertChar(c),
            TextEdit::Backspace => InputRequest::DeletePrevChar,
            TextEdit::Delete => InputRequest::DeleteNextChar,
            TextEdit::Left => InputRequest::GoToPrevChar,
            TextEdit::Right => InputRequest::GoToNextChar,
            TextEdit::Home => InputRequest::GoToStart,
            TextEdit::End => InputRequest::GoToEnd,
            TextEdit::Clear => InputRequest::DeleteLine,
        };
        self.input.handle(request);
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Cursor column in terminal cells
    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }
}

#[derive(Debug, Clone)]
pub struct AddCategoryForm {
    pub name: TextField,
}

impl AddCategoryForm {
    pub fn new() -> Self {
        Self {
            name: TextField::with_placeholder("New category"),
        }
    }

    pub fn apply(&mut self, edit: FormEdit) {
        if let FormEdit::Text(edit) = edit {
            self.name.apply(edit);
        }
    }

    /// The submit event, or None while the name is blank
    pub fn submission(&self) -> Option<Event> {
        let name = self.name.value().trim();
        if name.is_empty() {
            return None;
        }
        Some(Event::SubmitAddCategory {
            name: name.to_string(),
        })
    }
}

impl Default for AddCategoryForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindField {
    Keys,
    Description,
    Category,
}

impl KeybindField {
    fn next(self) -> Self {
        match self {
            Self::Keys => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Keys,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Keys => Self::Category,
            Self::Description => Self::Keys,
            Self::Category => Self::Description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddKeybindForm {
    pub keys: TextField,
    pub description: TextField,
    options: Vec<Category>,
    selected: usize,
    focus: KeybindField,
}

impl AddKeybindForm {
    /// Build the form with the given categories, preselecting `preferred` when present
    pub fn new(categories: &[Category], preferred: Option<i64>) -> Self {
        let selected = preferred
            .and_then(|id| categories.iter().position(|c| c.id == id))
            .unwrap_or(0);

        Self {
            keys: TextField::with_placeholder("Ctrl + C"),
            description: TextField::with_placeholder("Copy the text highlighted"),
            options: categories.to_vec(),
            selected,
            focus: KeybindField::Keys,
        }
    }

    pub fn focus(&self) -> KeybindField {
        self.focus
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.options.get(self.selected)
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::NextField => self.focus = self.focus.next(),
            FormEdit::PrevField => self.focus = self.focus.prev(),
            FormEdit::NextOption if !self.options.is_empty() => {
                self.selected = (self.selected + 1) % self.options.len();
            }
            FormEdit::PrevOption if !self.options.is_empty() => {
                self.selected = (self.selected + self.options.len() - 1) % self.options.len();
            }
            FormEdit::NextOption | FormEdit::PrevOption => {}
            FormEdit::Text(edit) => match self.focus {
                KeybindField::Keys => self.keys.apply(edit),
                KeybindField::Description => self.description.apply(edit),
                KeybindField::Category => {}
            },
        }
    }

    /// The submit event, or None while keys are blank or no category exists
    pub fn submission(&self) -> Option<Event> {
        let keys = self.keys.value().trim();
        if keys.is_empty() {
            return None;
        }
        let category = self.selected_category()?;

        Some(Event::SubmitAddKeybind {
            keys: keys.to_string(),
            description: self.description.value().to_string(),
            category_id: category.id,
        })
    }
}
