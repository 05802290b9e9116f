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
use crate::calendar::GridCoordinate;
use crate::picker::{ConfirmOutcome, Transition};
use chrono::{Days, Months, NaiveDate};

pub const CONFIRM_REJECTED_HINT: &str = "Pick a date first";

/// Tap a day (or a non-day cell, as `None`).
pub fn tap_date(app: &mut App, date: Option<NaiveDate>) -> Transition {
    let transition = app.picker.controller.select_date(date);
    if transition != Transition::Ignored {
        app.status_hint = None;
    }
    transition
}

/// Tap whatever the grid shows at `coordinate`.
pub fn tap_cell(app: &mut App, coordinate: GridCoordinate) -> Transition {
    let date = app.picker.grid.date_for_item(coordinate.section, coordinate.item);
    if let Some(date) = date
        && app.picker.controller.bounds().contains(date)
    {
        app.cursor = date;
    }
    tap_date(app, date)
}

pub fn tap_cursor(app: &mut App) -> Transition {
    tap_date(app, Some(app.cursor))
}

/// "Done". Quits only when the confirm gate lets the selection through.
pub fn confirm(app: &mut App) -> ConfirmOutcome {
    let outcome = app.picker.controller.confirm(&mut app.delegate);
    match outcome {
        ConfirmOutcome::Confirmed => {
            tracing::info!(start = ?app.picker.controller.start(), end = ?app.picker.controller.end(), "range confirmed");
            app.should_quit = true;
        }
        ConfirmOutcome::Rejected => {
            app.status_hint = Some(CONFIRM_REJECTED_HINT.to_owned());
        }
    }
    outcome
}

/// "Cancel".
pub fn cancel(app: &mut App) {
    tracing::info!("picker cancelled");
    app.picker.controller.cancel(&mut app.delegate);
    app.should_quit = true;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Days(i64),
    Months(i32),
    Today,
    Minimum,
    Maximum,
}

/// Move the keyboard cursor, clamped to the selectable bounds.
pub fn move_cursor(app: &mut App, step: CursorMove) {
    let bounds = app.picker.controller.bounds();
    let target = match step {
        CursorMove::Days(n) if n >= 0 => app.cursor.checked_add_days(Days::new(n.unsigned_abs())),
        CursorMove::Days(n) => app.cursor.checked_sub_days(Days::new(n.unsigned_abs())),
        CursorMove::Months(n) if n >= 0 => {
            app.cursor.checked_add_months(Months::new(n.unsigned_abs()))
        }
        CursorMove::Months(n) => app.cursor.checked_sub_months(Months::new(n.unsigned_abs())),
        CursorMove::Today => Some(app.today),
        CursorMove::Minimum => Some(bounds.minimum()),
        CursorMove::Maximum => Some(bounds.maximum()),
    };
    let next = bounds.clamp(target.unwrap_or(app.cursor));
    if next != app.cursor {
        app.cursor = next;
        app.ensure_cursor_visible();
    }
}
