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

use crate::calendar::{CalendarGrid, DAYS_PER_WEEK, GridCoordinate};
use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub header_sep: Rect,
    pub body: Rect,
    pub footer_sep: Rect,
    pub footer: Option<Rect>,
}

pub fn compute(area: Rect) -> AppLayout {
    let zero = Rect::new(area.x, area.y, area.width, 0);

    if area.height < 6 {
        // Ultra-compact: title bar + grid only
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
        AppLayout { header, header_sep: zero, body, footer_sep: zero, footer: None }
    } else {
        let [header, header_sep, body, footer_sep, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout { header, header_sep, body, footer_sep, footer: Some(footer) }
    }
}

// ---------------------------------------------------------------------------
// Grid geometry (one terminal line per grid row)
// ---------------------------------------------------------------------------

/// Month label line above each section.
pub const SECTION_HEADER_ROWS: usize = 1;
/// Empty line after each section.
pub const SECTION_GAP_ROWS: usize = 1;
pub const GRID_PAD: u16 = 2;
pub const MIN_CELL_WIDTH: u16 = 3;
pub const MAX_CELL_WIDTH: u16 = 8;
#[allow(clippy::cast_possible_truncation)]
const GRID_COLUMNS: u16 = DAYS_PER_WEEK as u16;

/// What a single scrolled line of the body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLine {
    MonthLabel(usize),
    Cells { section: usize, row: usize },
    Gap,
}

pub fn section_height(grid: &CalendarGrid, section: usize) -> usize {
    SECTION_HEADER_ROWS + grid.row_count(section) + SECTION_GAP_ROWS
}

/// First line of `section` in scroll coordinates.
pub fn section_top(grid: &CalendarGrid, section: usize) -> usize {
    (0..section).map(|s| section_height(grid, s)).sum()
}

pub fn total_lines(grid: &CalendarGrid) -> usize {
    section_top(grid, grid.section_count())
}

/// Scroll-coordinate line of the row holding `coordinate`.
pub fn line_of(grid: &CalendarGrid, coordinate: GridCoordinate) -> usize {
    section_top(grid, coordinate.section) + SECTION_HEADER_ROWS + coordinate.row()
}

/// Lines `offset..offset + count`, walking sections once.
pub fn visible_lines(grid: &CalendarGrid, offset: usize, count: usize) -> Vec<GridLine> {
    let mut out = Vec::with_capacity(count);
    let mut top = 0;
    for section in 0..grid.section_count() {
        let height = section_height(grid, section);
        if top + height <= offset {
            top += height;
            continue;
        }
        let rows = grid.row_count(section);
        let first = offset.saturating_sub(top);
        for local in first..height {
            if out.len() == count {
                return out;
            }
            let line = if local < SECTION_HEADER_ROWS {
                GridLine::MonthLabel(section)
            } else if local < SECTION_HEADER_ROWS + rows {
                GridLine::Cells { section, row: local - SECTION_HEADER_ROWS }
            } else {
                GridLine::Gap
            };
            out.push(line);
        }
        top += height;
    }
    out
}

/// Width of one day column inside `area_width`.
pub fn cell_width(area_width: u16) -> u16 {
    (area_width.saturating_sub(GRID_PAD * 2) / GRID_COLUMNS).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
}

/// Left edge and total width of the centered seven-column grid.
pub fn grid_span(area: Rect) -> (u16, u16) {
    let width = cell_width(area.width) * GRID_COLUMNS;
    let x = area.x + area.width.saturating_sub(width) / 2;
    (x, width.min(area.width))
}
