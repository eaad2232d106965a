use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Focus, HitAreas};
use crate::components::breadcrumb;

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.help.is_some() {
        handle_help_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_breadcrumb_focus(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.jump_to_breadcrumb(index);
        }
        _ => match app.focus {
            Focus::Listing => handle_listing_key(app, key),
            Focus::Breadcrumb => handle_breadcrumb_key(app, key),
        },
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.help = None,
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(help) = app.help.as_mut() {
                help.scroll_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(help) = app.help.as_mut() {
                help.scroll_up();
            }
        }
        _ => {}
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.activate_selected(),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.go_up(),
        _ => {}
    }
}

fn handle_breadcrumb_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.breadcrumb_cursor_left(),
        KeyCode::Char('l') | KeyCode::Right => app.breadcrumb_cursor_right(),
        KeyCode::Home => app.breadcrumb_cursor = 0,
        KeyCode::End => app.breadcrumb_cursor = app.navigator.depth(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_breadcrumb_cursor(),
        KeyCode::Esc => app.focus = Focus::Listing,
        _ => {}
    }
}

/// Handle a mouse event using the hit areas recorded by the last render.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.help.is_some() {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let HitAreas {
                breadcrumb: crumbs,
                listing_rows: rows,
            } = app.hit_areas;
            if crumbs.contains(pos) {
                let trail = app.navigator.breadcrumb_trail();
                if let Some(index) = breadcrumb::segment_at(trail, pos.x - crumbs.x) {
                    app.jump_to_breadcrumb(index);
                }
            } else if rows.contains(pos) {
                let index = app.scroll_offset + row_offset(rows, pos);
                app.activate_index(index);
            }
        }
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_previous(),
        _ => {}
    }
}

fn row_offset(rows: Rect, pos: Position) -> usize {
    (pos.y - rows.y) as usize
}
