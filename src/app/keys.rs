// range-picker - A terminal calendar for picking a date range
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::App;
use super::actions::{CursorMove, cancel, confirm, move_cursor, tap_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

fn handle_always_allowed_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'c') || is_ctrl_char_shortcut(key, 'q') {
        cancel(app);
        return true;
    }
    if is_ctrl_char_shortcut(key, 's') {
        confirm(app);
        return true;
    }
    if is_ctrl_char_shortcut(key, 'l') {
        app.force_redraw = true;
        return true;
    }
    false
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if handle_always_allowed_shortcuts(app, key) {
        return;
    }
    if is_ctrl_shortcut(key.modifiers) {
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => cancel(app),
        KeyCode::Char('d') => {
            confirm(app);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            tap_cursor(app);
        }
        KeyCode::Left | KeyCode::Char('h') => move_cursor(app, CursorMove::Days(-1)),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(app, CursorMove::Days(1)),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, CursorMove::Days(-7)),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, CursorMove::Days(7)),
        KeyCode::PageUp => move_cursor(app, CursorMove::Months(-1)),
        KeyCode::PageDown => move_cursor(app, CursorMove::Months(1)),
        KeyCode::Home => move_cursor(app, CursorMove::Minimum),
        KeyCode::End => move_cursor(app, CursorMove::Maximum),
        KeyCode::Char('t') => move_cursor(app, CursorMove::Today),
        _ => {}
    }
}
