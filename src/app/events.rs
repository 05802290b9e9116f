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

use super::{App, PostLayout};
use super::actions::{cancel, confirm, tap_cell};
use super::keys::handle_key;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(..) => app.queue_post_layout(PostLayout::EnsureCursorVisible),
        _ => {}
    }
}

const MOUSE_SCROLL_LINES: isize = 3;

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let position = Position::new(mouse.column, mouse.row);
            if app.rendered_buttons.cancel.contains(position) {
                cancel(app);
            } else if app.rendered_buttons.done.contains(position) {
                confirm(app);
            } else if let Some(coordinate) = app.cell_at_position(mouse.column, mouse.row) {
                let transition = tap_cell(app, coordinate);
                tracing::trace!(?coordinate, ?transition, "mouse tap");
            }
        }
        MouseEventKind::ScrollUp => app.scroll_by(-MOUSE_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.scroll_by(MOUSE_SCROLL_LINES),
        _ => {}
    }
}
