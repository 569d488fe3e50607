use crate::app::{App, CARD_HEIGHT, InputMode};
use crate::ui::{self, detail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Dispatch a key press.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_search_input(app, key);
        return;
    }

    if key.code == KeyCode::Char('?') {
        app.show_help = true;
        return;
    }

    if app.selection.is_open() {
        handle_detail_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.pop_query_char();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_query();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(c);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Down | KeyCode::Char('j') => app.list_next(),
        KeyCode::Up | KeyCode::Char('k') => app.list_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.list_first(),
        KeyCode::End | KeyCode::Char('G') => app.list_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(),
        KeyCode::Esc => {
            if !app.query.is_empty() {
                app.clear_query();
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => app.on_dismiss(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::PageDown => app.scroll_page_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        KeyCode::Right | KeyCode::Char('n') => app.open_adjacent(true),
        KeyCode::Left | KeyCode::Char('p') => app.open_adjacent(false),
        _ => {}
    }
}

/// Dispatch a mouse event; `area` is the full terminal area.
pub fn handle_mouse(app: &mut App, event: MouseEvent, area: Rect) {
    let position = Position::new(event.column, event.row);

    if app.show_help {
        if let MouseEventKind::Down(_) = event.kind {
            app.show_help = false;
        }
        return;
    }

    if app.selection.is_open() {
        let popup = detail::popup_area(area);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Only the backdrop and the close control dismiss
                if !popup.contains(position)
                    || detail::close_button_area(popup).contains(position)
                {
                    app.on_dismiss();
                }
            }
            MouseEventKind::ScrollDown if popup.contains(position) => app.scroll_down(),
            MouseEventKind::ScrollUp if popup.contains(position) => app.scroll_up(),
            _ => {}
        }
        return;
    }

    let layout = ui::list_layout(area);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.search.contains(position) {
                app.input_mode = InputMode::Editing;
                return;
            }
            app.input_mode = InputMode::Normal;
            if let Some(index) = card_at(app, layout.list, position) {
                app.list_selected = index;
                app.scroll_into_view();
                app.open_selected();
            }
        }
        MouseEventKind::ScrollDown if layout.list.contains(position) => app.list_next(),
        MouseEventKind::ScrollUp if layout.list.contains(position) => app.list_prev(),
        _ => {}
    }
}

/// Index into the filtered list of the card drawn at `position`.
///
/// Only whole cards are drawn, so the rows below the last one that fits
/// belong to no card.
fn card_at(app: &App, list_area: Rect, position: Position) -> Option<usize> {
    let inner = Rect::new(
        list_area.x + 1,
        list_area.y + 1,
        list_area.width.saturating_sub(2),
        list_area.height.saturating_sub(2),
    );
    if !inner.contains(position) {
        return None;
    }
    let slot = (position.y - inner.y) / CARD_HEIGHT;
    let card_bottom = u32::from(inner.y) + (u32::from(slot) + 1) * u32::from(CARD_HEIGHT);
    if usize::from(slot) >= app.cards_per_page || card_bottom > u32::from(inner.bottom()) {
        return None;
    }
    let index = app.list_offset + usize::from(slot);
    (index < app.filtered_indices.len()).then_some(index)
}
