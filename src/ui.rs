//! Rendering of the sidebar, keybind table, dialogs and footer.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{AddCategoryForm, AddKeybindForm, App, KeybindField, Modal, TextField};

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;

/// Draw the whole screen
pub fn render(f: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(
        Paragraph::new("HotKeyVault")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );

    let [sidebar, table] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(body);
    render_sidebar(f, sidebar, app);
    render_keybinds(f, table, app);
    render_footer(f, footer, app);

    match app.modal() {
        Some(Modal::AddKeybind(form)) => render_add_keybind(f, form),
        Some(Modal::AddCategory(form)) => render_add_category(f, form),
        Some(Modal::ConfirmQuit) => render_confirm_quit(f),
        None => {}
    }
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &mut App) {
    let displayed = app.displayed_category();
    let items: Vec<ListItem> = app
        .sidebar_entries()
        .into_iter()
        .map(|entry| {
            let style = if Some(entry.category_id) == displayed {
                Style::default().fg(ACCENT)
            } else {
                Style::default()
            };
            ListItem::new(entry.label).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Categories")
                .border_style(Style::default().fg(ACCENT)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, app.sidebar_state_mut());
}

fn render_keybinds(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.displayed_label() {
        Some(label) => format!("Keybindings: {label}"),
        None => "Keybindings".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let keybinds = app
        .displayed_category()
        .map(|id| app.view().keybinds_for(id))
        .unwrap_or(&[]);

    if keybinds.is_empty() {
        let empty = Paragraph::new("No keybinds here yet. Press 'a' to add one.")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(MUTED));
        f.render_widget(empty, area);
        return;
    }

    let rows = keybinds.iter().enumerate().map(|(i, kb)| {
        let row = Row::new(vec![
            Cell::from(kb.keys.as_str()),
            Cell::from(kb.description.as_str()),
        ]);
        // Zebra stripes
        if i % 2 == 1 {
            row.style(Style::default().bg(Color::Black))
        } else {
            row
        }
    });

    let table = Table::new(rows, [Constraint::Percentage(35), Constraint::Percentage(65)])
        .header(
            Row::new(vec!["Keys", "Description"])
                .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        )
        .block(block);

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.modal() {
        None => "q quit  a add keybind  x add category  ↑/↓ move  enter select",
        Some(Modal::ConfirmQuit) => "y quit  n cancel",
        Some(_) => "enter add  esc cancel  tab next field",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(MUTED))];
    if let Some(status) = app.status() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(status, Style::default().fg(Color::Yellow)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_add_category(f: &mut Frame, form: &AddCategoryForm) {
    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add category")
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [field] = Layout::vertical([Constraint::Length(3)]).areas(inner);
    render_text_field(f, field, "Name", &form.name, true);
}

fn render_add_keybind(f: &mut Frame, form: &AddKeybindForm) {
    let area = centered_rect(60, 11, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add keybind")
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [keys, description, category] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(inner);

    let focus = form.focus();
    render_text_field(f, keys, "Keys", &form.keys, focus == KeybindField::Keys);
    render_text_field(
        f,
        description,
        "Description",
        &form.description,
        focus == KeybindField::Description,
    );

    let name = form
        .selected_category()
        .map(|c| c.name.as_str())
        .unwrap_or("(no categories)");
    let selector = Paragraph::new(format!("< {name} >"))
        .alignment(Alignment::Center)
        .block(field_block("Category", focus == KeybindField::Category));
    f.render_widget(selector, category);
}

fn render_confirm_quit(f: &mut Frame) {
    let area = centered_rect(40, 5, f.area());
    f.render_widget(Clear, area);

    let dialog = Paragraph::new("Are you sure you want to quit? (y/n)")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quit")
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(dialog, area);
}

fn render_text_field(f: &mut Frame, area: Rect, title: &str, field: &TextField, focused: bool) {
    let paragraph = if field.value().is_empty() {
        Paragraph::new(Span::styled(field.placeholder(), Style::default().fg(MUTED)))
    } else {
        Paragraph::new(field.value())
    };
    f.render_widget(paragraph.block(field_block(title, focused)), area);

    if focused {
        let x = area.x + 1 + field.visual_cursor() as u16;
        f.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { ACCENT } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(color))
}

/// Rectangle of `percent_x` width and fixed `height`, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);

    center
}
