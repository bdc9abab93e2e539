//! User intents consumed by [`App::dispatch`](super::App::dispatch)

/// Everything the interface can ask the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Move the sidebar cursor up
    MoveUp,
    /// Move the sidebar cursor down
    MoveDown,
    /// Display the category under the sidebar cursor
    SelectHighlighted,

    OpenAddKeybind,
    OpenAddCategory,
    RequestQuit,
    ConfirmQuit,
    CloseModal,

    /// Edit the open form
    Form(FormEdit),
    /// Submit the open modal
    SubmitForm,

    SubmitAddCategory {
        name: String,
    },
    SubmitAddKeybind {
        keys: String,
        description: String,
        category_id: i64,
    },
}

/// Edits applied to the focused form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    Text(TextEdit),
    NextField,
    PrevField,
    NextOption,
    PrevOption,
}

/// Single-line text editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Clear,
}
