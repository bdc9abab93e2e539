//! Interaction state and the single event dispatcher
//!
//! The interface turns key presses into [`Event`]s and hands them to
//! [`App::dispatch`]. Writes go to the [`Store`] first; the [`ViewModel`] is
//! only updated once the store has confirmed them.

pub mod event;
pub mod forms;
pub mod input;

pub use event::{Event, FormEdit, TextEdit};
pub use forms::{AddCategoryForm, AddKeybindForm, KeybindField, TextField};

use ratatui::widgets::ListState;

use crate::store::{Store, StoreError, UNCATEGORIZED};
use crate::view_model::ViewModel;

/// Label shown in the sidebar for the sentinel bucket
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The dialog currently covering the main screen
#[derive(Debug, Clone)]
pub enum Modal {
    AddKeybind(AddKeybindForm),
    AddCategory(AddCategoryForm),
    ConfirmQuit,
}

/// One row of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub category_id: i64,
    pub label: String,
}

#[derive(Debug)]
pub struct App {
    view: ViewModel,
    displayed: Option<i64>,
    sidebar: ListState,
    modal: Option<Modal>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the app showing `initial` (or nothing if None)
    pub fn new(view: ViewModel, initial: Option<i64>) -> Self {
        let mut app = Self {
            view,
            displayed: None,
            sidebar: ListState::default(),
            modal: None,
            status: None,
            should_quit: false,
        };
        let has_entries = !app.sidebar_entries().is_empty();
        app.sidebar.select(has_entries.then_some(0));
        if let Some(id) = initial {
            app.select_category(id);
        }
        app
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn displayed_category(&self) -> Option<i64> {
        self.displayed
    }

    /// Title of the displayed category
    pub fn displayed_label(&self) -> Option<&str> {
        let id = self.displayed?;
        if id == UNCATEGORIZED {
            return Some(UNCATEGORIZED_LABEL);
        }
        self.view.category(id).map(|c| c.name.as_str())
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn sidebar_state_mut(&mut self) -> &mut ListState {
        &mut self.sidebar
    }

    /// Categories in view model order, plus the sentinel bucket when it holds keybinds
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry> {
        let mut entries: Vec<SidebarEntry> = self
            .view
            .categories()
            .iter()
            .map(|c| SidebarEntry {
                category_id: c.id,
                label: c.name.clone(),
            })
            .collect();

        if self.view.has_uncategorized() {
            entries.push(SidebarEntry {
                category_id: UNCATEGORIZED,
                label: UNCATEGORIZED_LABEL.to_string(),
            });
        }
        entries
    }

    /// Handle one event. Rejected writes are recovered here; only a failing
    /// store escapes as an error.
    pub fn dispatch(&mut self, store: &Store, event: Event) -> Result<(), StoreError> {
        tracing::trace!(?event, "Dispatching");

        match event {
            Event::MoveUp => self.move_cursor(false),
            Event::MoveDown => self.move_cursor(true),
            Event::SelectHighlighted => {
                if let Some(id) = self.highlighted_category() {
                    self.select_category(id);
                }
            }
            Event::OpenAddKeybind => {
                let form = AddKeybindForm::new(self.view.categories(), self.displayed);
                self.modal = Some(Modal::AddKeybind(form));
            }
            Event::OpenAddCategory => {
                self.modal = Some(Modal::AddCategory(AddCategoryForm::new()));
            }
            Event::RequestQuit => self.modal = Some(Modal::ConfirmQuit),
            Event::ConfirmQuit => self.should_quit = true,
            Event::CloseModal => self.modal = None,
            Event::Form(edit) => match &mut self.modal {
                Some(Modal::AddKeybind(form)) => form.apply(edit),
                Some(Modal::AddCategory(form)) => form.apply(edit),
                Some(Modal::ConfirmQuit) | None => {}
            },
            Event::SubmitForm => return self.submit_modal(store),
            Event::SubmitAddCategory { name } => match store.create_category(&name) {
                Ok(category) => {
                    self.status = Some(format!("Added category '{}'", category.name));
                    // New rows go before "Uncategorized", so keep the cursor on its entry
                    let highlighted = self.highlighted_category();
                    self.view.on_category_created(category);
                    if let Some(id) = highlighted {
                        self.highlight(id);
                    }
                }
                Err(e) => self.recover(e)?,
            },
            Event::SubmitAddKeybind {
                keys,
                description,
                category_id,
            } => match store.create_keybind(&keys, &description, category_id) {
                Ok(keybind) => {
                    self.status = Some(format!("Added '{}'", keybind.keys));
                    self.view.on_keybind_created(keybind);
                }
                Err(e) => self.recover(e)?,
            },
        }

        Ok(())
    }

    fn submit_modal(&mut self, store: &Store) -> Result<(), StoreError> {
        let submission = match &self.modal {
            Some(Modal::ConfirmQuit) => {
                self.should_quit = true;
                return Ok(());
            }
            Some(Modal::AddKeybind(form)) => form.submission().ok_or("Keys are required"),
            Some(Modal::AddCategory(form)) => form.submission().ok_or("Name is required"),
            None => return Ok(()),
        };

        match submission {
            Ok(event) => {
                self.modal = None;
                self.dispatch(store, event)
            }
            Err(reason) => {
                self.status = Some(reason.to_string());
                Ok(())
            }
        }
    }

    /// Keep the store and view untouched on a rejection, propagate anything else
    fn recover(&mut self, err: StoreError) -> Result<(), StoreError> {
        if !err.is_rejection() {
            return Err(err);
        }
        tracing::warn!("Write rejected: {}", err);
        self.status = Some(capitalize(&err.to_string()));
        Ok(())
    }

    /// Category id under the sidebar cursor
    pub fn highlighted_category(&self) -> Option<i64> {
        let index = self.sidebar.selected()?;
        self.sidebar_entries().get(index).map(|e| e.category_id)
    }

    fn select_category(&mut self, id: i64) {
        if self.highlight(id) {
            self.displayed = Some(id);
        } else {
            tracing::debug!(id, "Ignoring selection of unknown category");
        }
    }

    /// Move the sidebar cursor onto `id`; false if it has no entry
    fn highlight(&mut self, id: i64) -> bool {
        let index = self
            .sidebar_entries()
            .iter()
            .position(|e| e.category_id == id);
        self.sidebar.select(index.or(self.sidebar.selected()));
        index.is_some()
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.sidebar_entries().len();
        if len == 0 {
            return;
        }
        let current = self.sidebar.selected().unwrap_or(0);
        let next = if down {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.sidebar.select(Some(next));
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Store, App) {
        let store = Store::open_in_memory().unwrap();
        store.initialize().unwrap();
        let view = ViewModel::load(&store).unwrap();
        (store, App::new(view, Some(1)))
    }

    fn type_text(app: &mut App, store: &Store, text: &str) {
        for c in text.chars() {
            app.dispatch(store, Event::Form(FormEdit::Text(TextEdit::Insert(c))))
                .unwrap();
        }
    }

    #[test]
    fn test_initial_selection() {
        let (_store, app) = setup();
        assert_eq!(app.displayed_category(), Some(1));
        assert_eq!(app.displayed_label(), Some("General"));
        assert!(app.modal().is_none());
    }

    #[test]
    fn test_add_category_through_form() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::OpenAddCategory).unwrap();
        type_text(&mut app, &store, "Editing");
        app.dispatch(&store, Event::SubmitForm).unwrap();

        assert!(app.modal().is_none());
        let labels: Vec<String> = app.sidebar_entries().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["General", "Editing"]);
        assert_eq!(app.view().categories(), store.list_categories().unwrap().as_slice());
    }

    #[test]
    fn test_duplicate_category_leaves_view_unchanged() {
        let (store, mut app) = setup();
        app.dispatch(
            &store,
            Event::SubmitAddCategory {
                name: "General".to_string(),
            },
        )
        .unwrap();

        assert_eq!(app.view().categories().len(), 1);
        assert_eq!(app.status(), Some("Category 'General' already exists"));
    }

    #[test]
    fn test_add_keybind_shows_in_displayed_category() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::OpenAddKeybind).unwrap();
        type_text(&mut app, &store, "ctrl+s");
        app.dispatch(&store, Event::Form(FormEdit::NextField)).unwrap();
        type_text(&mut app, &store, "save");
        app.dispatch(&store, Event::SubmitForm).unwrap();

        let shown = app.view().keybinds_for(1);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].keys, "ctrl+s");
        assert_eq!(shown[0].description, "save");
        assert_eq!(store.list_keybinds_grouped().unwrap()[&1], shown);
    }

    #[test]
    fn test_rejected_keybind_not_cached() {
        let (store, mut app) = setup();
        let submit = |keys: &str, category_id: i64| Event::SubmitAddKeybind {
            keys: keys.to_string(),
            description: "save".to_string(),
            category_id,
        };

        app.dispatch(&store, submit("ctrl+s", 1)).unwrap();
        app.dispatch(&store, submit("ctrl+s", 1)).unwrap();
        app.dispatch(&store, submit("ctrl+z", 9999)).unwrap();

        assert_eq!(app.view().keybind_count(), 1);
        assert!(app.view().keybinds_for(9999).is_empty());
        assert_eq!(app.status(), Some("Category 9999 does not exist"));
    }

    #[test]
    fn test_blank_form_stays_open() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::OpenAddKeybind).unwrap();
        app.dispatch(&store, Event::SubmitForm).unwrap();

        assert!(matches!(app.modal(), Some(Modal::AddKeybind(_))));
        assert_eq!(app.status(), Some("Keys are required"));
        assert_eq!(app.view().keybind_count(), 0);
    }

    #[test]
    fn test_sidebar_navigation_and_selection() {
        let (store, mut app) = setup();
        let git = store.create_category("Git").unwrap();
        app.dispatch(&store, Event::SubmitAddCategory { name: "Vim".into() })
            .unwrap();
        // Git was written behind the app's back and must not appear
        assert!(app.view().category(git.id).is_none());

        app.dispatch(&store, Event::MoveDown).unwrap();
        app.dispatch(&store, Event::MoveDown).unwrap();
        app.dispatch(&store, Event::SelectHighlighted).unwrap();
        assert_eq!(app.displayed_label(), Some("Vim"));

        app.dispatch(&store, Event::MoveUp).unwrap();
        app.dispatch(&store, Event::MoveUp).unwrap();
        app.dispatch(&store, Event::SelectHighlighted).unwrap();
        assert_eq!(app.displayed_category(), Some(1));
    }

    #[test]
    fn test_unknown_initial_category_is_ignored() {
        let (store, _) = setup();
        let view = ViewModel::load(&store).unwrap();
        let app = App::new(view, Some(42));
        assert_eq!(app.displayed_category(), None);
        assert_eq!(app.highlighted_category(), Some(1));
    }

    #[test]
    fn test_keybind_for_other_category_leaves_display_alone() {
        let (store, mut app) = setup();
        app.dispatch(
            &store,
            Event::SubmitAddKeybind {
                keys: "ctrl+s".to_string(),
                description: "save".to_string(),
                category_id: 1,
            },
        )
        .unwrap();
        app.dispatch(&store, Event::SubmitAddCategory { name: "Git".into() })
            .unwrap();
        let git = app.view().category_named("Git").unwrap().id;
        let shown_before = app.view().keybinds_for(1).to_vec();

        app.dispatch(&store, Event::OpenAddKeybind).unwrap();
        type_text(&mut app, &store, "ctrl+k");
        app.dispatch(&store, Event::Form(FormEdit::NextField)).unwrap();
        type_text(&mut app, &store, "commit");
        app.dispatch(&store, Event::Form(FormEdit::NextField)).unwrap();
        app.dispatch(&store, Event::Form(FormEdit::NextOption)).unwrap();
        app.dispatch(&store, Event::SubmitForm).unwrap();

        assert_eq!(app.displayed_category(), Some(1));
        assert_eq!(app.view().keybinds_for(1), shown_before.as_slice());
        let in_git = app.view().keybinds_for(git);
        assert_eq!(in_git.len(), 1);
        assert_eq!(in_git[0].keys, "ctrl+k");
        assert_eq!(store.list_keybinds_grouped().unwrap()[&git], in_git);
    }

    #[test]
    fn test_quit_flow() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::RequestQuit).unwrap();
        app.dispatch(&store, Event::CloseModal).unwrap();
        assert!(!app.should_quit());

        app.dispatch(&store, Event::RequestQuit).unwrap();
        app.dispatch(&store, Event::SubmitForm).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_uncategorized_entry() {
        let store = Store::open_in_memory().unwrap();
        store.initialize().unwrap();
        let mut groups = store.list_keybinds_grouped().unwrap();
        groups.entry(UNCATEGORIZED).or_default().push(crate::store::Keybind {
            id: 7,
            keys: "ctrl+q".to_string(),
            description: "quit".to_string(),
            category_id: UNCATEGORIZED,
        });
        let view = ViewModel::new(store.list_categories().unwrap(), groups);
        let mut app = App::new(view, None);

        let last = app.sidebar_entries().pop().unwrap();
        assert_eq!(last.label, UNCATEGORIZED_LABEL);

        app.dispatch(&store, Event::MoveDown).unwrap();
        app.dispatch(&store, Event::SelectHighlighted).unwrap();
        assert_eq!(app.displayed_label(), Some(UNCATEGORIZED_LABEL));
    }

    #[test]
    fn test_new_category_keeps_highlight_on_uncategorized() {
        let store = Store::open_in_memory().unwrap();
        store.initialize().unwrap();
        let mut groups = store.list_keybinds_grouped().unwrap();
        groups.entry(UNCATEGORIZED).or_default().push(crate::store::Keybind {
            id: 3,
            keys: "ctrl+q".to_string(),
            description: "quit".to_string(),
            category_id: UNCATEGORIZED,
        });
        let view = ViewModel::new(store.list_categories().unwrap(), groups);
        let mut app = App::new(view, Some(UNCATEGORIZED));
        assert_eq!(app.highlighted_category(), Some(UNCATEGORIZED));

        app.dispatch(&store, Event::SubmitAddCategory { name: "Vim".into() })
            .unwrap();
        assert_eq!(app.highlighted_category(), Some(UNCATEGORIZED));

        app.dispatch(&store, Event::SelectHighlighted).unwrap();
        assert_eq!(app.displayed_label(), Some(UNCATEGORIZED_LABEL));
    }
}
