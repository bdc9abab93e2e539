//! Key press to [`Event`] mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Event, FormEdit, KeybindField, Modal, TextEdit};

/// Translate a key press into an event for the current screen
pub fn map_key(app: &App, key: KeyEvent) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Event::ConfirmQuit);
    }

    match app.modal() {
        None => map_main(key),
        Some(Modal::ConfirmQuit) => match key.code {
            KeyCode::Char('y' | 'Y' | 'q' | 'Q') | KeyCode::Enter => Some(Event::ConfirmQuit),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Event::CloseModal),
            _ => None,
        },
        Some(Modal::AddCategory(_)) => map_form(key, false),
        Some(Modal::AddKeybind(form)) => map_form(key, form.focus() == KeybindField::Category),
    }
}

fn map_main(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('q' | 'Q') => Some(Event::RequestQuit),
        KeyCode::Char('a' | 'A') => Some(Event::OpenAddKeybind),
        KeyCode::Char('x' | 'X') => Some(Event::OpenAddCategory),
        KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Enter => Some(Event::SelectHighlighted),
        _ => None,
    }
}

fn map_form(key: KeyEvent, on_selector: bool) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let edit = match key.code {
        KeyCode::Esc => return Some(Event::CloseModal),
        KeyCode::Enter => return Some(Event::SubmitForm),
        KeyCode::Tab | KeyCode::Down => FormEdit::NextField,
        KeyCode::BackTab | KeyCode::Up => FormEdit::PrevField,
        KeyCode::Right if on_selector => FormEdit::NextOption,
        KeyCode::Left if on_selector => FormEdit::PrevOption,
        KeyCode::Char('u') if ctrl => FormEdit::Text(TextEdit::Clear),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(c) => FormEdit::Text(TextEdit::Insert(c)),
        KeyCode::Backspace => FormEdit::Text(TextEdit::Backspace),
        KeyCode::Delete => FormEdit::Text(TextEdit::Delete),
        KeyCode::Left => FormEdit::Text(TextEdit::Left),
        KeyCode::Right => FormEdit::Text(TextEdit::Right),
        KeyCode::Home => FormEdit::Text(TextEdit::Home),
        KeyCode::End => FormEdit::Text(TextEdit::End),
        _ => return None,
    };

    Some(Event::Form(edit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use crate::view_model::ViewModel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (Store, App) {
        let store = Store::open_in_memory().unwrap();
        store.initialize().unwrap();
        let view = ViewModel::load(&store).unwrap();
        (store, App::new(view, Some(1)))
    }

    #[test]
    fn test_main_screen_keys() {
        let (_store, app) = setup();
        assert_eq!(map_key(&app, key(KeyCode::Char('q'))), Some(Event::RequestQuit));
        assert_eq!(map_key(&app, key(KeyCode::Char('A'))), Some(Event::OpenAddKeybind));
        assert_eq!(map_key(&app, key(KeyCode::Char('x'))), Some(Event::OpenAddCategory));
        assert_eq!(map_key(&app, key(KeyCode::Enter)), Some(Event::SelectHighlighted));
        assert_eq!(map_key(&app, key(KeyCode::Char('z'))), None);
        assert_eq!(
            map_key(
                &app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Event::ConfirmQuit)
        );
    }

    #[test]
    fn test_form_keys_type_text() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::OpenAddCategory).unwrap();

        // 'q' is text inside a form, not quit
        assert_eq!(
            map_key(&app, key(KeyCode::Char('q'))),
            Some(Event::Form(FormEdit::Text(TextEdit::Insert('q'))))
        );
        assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(Event::CloseModal));
        assert_eq!(map_key(&app, key(KeyCode::Enter)), Some(Event::SubmitForm));
    }

    #[test]
    fn test_selector_arrows_cycle_options() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::OpenAddKeybind).unwrap();
        assert_eq!(
            map_key(&app, key(KeyCode::Right)),
            Some(Event::Form(FormEdit::Text(TextEdit::Right)))
        );

        app.dispatch(&store, Event::Form(FormEdit::PrevField)).unwrap();
        assert_eq!(
            map_key(&app, key(KeyCode::Right)),
            Some(Event::Form(FormEdit::NextOption))
        );
        assert_eq!(
            map_key(&app, key(KeyCode::Left)),
            Some(Event::Form(FormEdit::PrevOption))
        );
    }

    #[test]
    fn test_quit_dialog_keys() {
        let (store, mut app) = setup();
        app.dispatch(&store, Event::RequestQuit).unwrap();
        assert_eq!(map_key(&app, key(KeyCode::Char('y'))), Some(Event::ConfirmQuit));
        assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(Event::CloseModal));
        assert_eq!(map_key(&app, key(KeyCode::Char('a'))), None);
    }
}
