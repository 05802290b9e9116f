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

mod actions;
mod config;
mod events;
mod keys;
mod state;

pub use actions::{
    CONFIRM_REJECTED_HINT, CursorMove, cancel, confirm, move_cursor, tap_cell, tap_cursor,
    tap_date,
};
pub use config::{apply_cli_overrides, load_config};
pub use events::handle_terminal_event;
pub use state::{App, ButtonRegions, PostLayout, RenderedCell};

use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

/// Run until the user confirms or cancels. Events are handled one at a time
/// on the calling task; nothing here runs concurrently with a tap.
pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Mouse capture turns clicks into taps (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);

    let mut events = EventStream::new();
    let result = loop {
        // Phase 1: render once
        if app.force_redraw {
            terminal.clear()?;
            app.force_redraw = false;
        }
        terminal.draw(|f| crate::ui::render(f, app))?;

        // Phase 2: hooks that needed this frame's geometry
        if app.run_post_layout() {
            continue;
        }
        if app.should_quit {
            break Ok(());
        }

        // Phase 3: wait for one event, then drain whatever else is queued
        match events.next().await {
            Some(Ok(event)) => handle_terminal_event(app, event),
            Some(Err(err)) => break Err(anyhow::Error::new(err)),
            None => break Ok(()),
        }
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            handle_terminal_event(app, event);
            if app.should_quit {
                break;
            }
        }
    };

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    ratatui::restore();

    result
}
