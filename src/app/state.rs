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

use crate::calendar::{CalendarGrid, GridCoordinate};
use crate::picker::{PickerConfig, PickerOutcome, RangePicker, RecordingDelegate};
use crate::ui::layout;
use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};

/// Work deferred until the next frame has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLayout {
    /// Bring the selected start (or today) into view. Needs the body height of
    /// a rendered frame.
    ScrollToSelection,
    /// Keep the cursor row on screen after the viewport changed size.
    EnsureCursorVisible,
}

/// Screen rectangle of a rendered day cell, kept for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    pub area: Rect,
    pub coordinate: GridCoordinate,
}

/// Title-bar buttons, as last rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonRegions {
    pub cancel: Rect,
    pub done: Rect,
}

pub struct App {
    pub picker: RangePicker,
    /// Day used for the "today" highlight; fixed for the lifetime of the app.
    pub today: NaiveDate,
    /// Keyboard focus; always inside the picker bounds.
    pub cursor: NaiveDate,
    /// First visible body line.
    pub scroll_offset: usize,
    /// Body height of the last rendered frame.
    pub viewport_rows: usize,
    pub should_quit: bool,
    /// Receives confirm/cancel callbacks.
    pub delegate: RecordingDelegate,
    /// One-line message replacing the footer hints (e.g. rejected confirm).
    pub status_hint: Option<String>,
    /// Drained once after the next successful draw.
    pub post_layout: Vec<PostLayout>,
    /// Last known frame area.
    pub cached_frame_area: Rect,
    /// Day cells of the last frame, for mouse mapping.
    pub rendered_cells: Vec<RenderedCell>,
    pub rendered_buttons: ButtonRegions,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
}

impl App {
    #[must_use]
    pub fn new(picker: RangePicker, today: NaiveDate) -> Self {
        let bounds = picker.controller.bounds();
        let cursor = bounds.clamp(picker.controller.start().unwrap_or(today));
        Self {
            picker,
            today,
            cursor,
            scroll_offset: 0,
            viewport_rows: 0,
            should_quit: false,
            delegate: RecordingDelegate::default(),
            status_hint: None,
            post_layout: vec![PostLayout::ScrollToSelection],
            cached_frame_area: Rect::default(),
            rendered_cells: Vec::new(),
            rendered_buttons: ButtonRegions::default(),
            force_redraw: false,
        }
    }

    /// Q1 2024 picker with "today" on 2024-01-15, for tests.
    #[doc(hidden)]
    #[must_use]
    pub fn test_default() -> Self {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();
        let config = PickerConfig {
            minimum_date: Some(date(1, 1)),
            maximum_date: Some(date(3, 31)),
            ..PickerConfig::default()
        };
        let today = date(1, 15);
        match RangePicker::new(&config, today) {
            Ok(picker) => Self::new(picker, today),
            Err(err) => unreachable!("test picker config is valid: {err}"),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &CalendarGrid {
        &self.picker.grid
    }

    #[must_use]
    pub fn outcome(&self) -> Option<PickerOutcome> {
        self.delegate.outcome
    }

    #[must_use]
    pub fn max_scroll(&self) -> usize {
        layout::total_lines(&self.picker.grid).saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(self.max_scroll());
    }

    /// Center `section` vertically, clamped to the scrollable range.
    pub fn scroll_to_section(&mut self, section: usize) {
        let grid = &self.picker.grid;
        let middle = layout::section_top(grid, section) + layout::section_height(grid, section) / 2;
        self.scroll_offset = middle.saturating_sub(self.viewport_rows / 2).min(self.max_scroll());
    }

    /// Scroll to the section of the selected start, or of today. Returns
    /// whether the offset changed.
    pub fn scroll_to_selection(&mut self) -> bool {
        let Some(section) = self.picker.scroll_target_section(self.today) else {
            tracing::debug!("scroll target outside the grid, keeping offset");
            return false;
        };
        let before = self.scroll_offset;
        self.scroll_to_section(section);
        before != self.scroll_offset
    }

    /// Scroll the minimum distance that makes the cursor row visible. Returns
    /// whether the offset changed.
    pub fn ensure_cursor_visible(&mut self) -> bool {
        let Some(coordinate) = self.picker.grid.coordinate_for_date(self.cursor) else {
            return false;
        };
        let before = self.scroll_offset;
        let line = layout::line_of(&self.picker.grid, coordinate);
        // The first day row also pulls the month label into view.
        let wanted_top = if coordinate.row() <= 1 {
            layout::section_top(&self.picker.grid, coordinate.section)
        } else {
            line
        };
        if wanted_top < self.scroll_offset {
            self.scroll_offset = wanted_top;
        } else if self.viewport_rows > 0 && line >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = line + 1 - self.viewport_rows;
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        before != self.scroll_offset
    }

    /// Day cell under a screen position from the last frame.
    #[must_use]
    pub fn cell_at_position(&self, column: u16, row: u16) -> Option<GridCoordinate> {
        let position = Position::new(column, row);
        self.rendered_cells
            .iter()
            .find(|cell| cell.area.contains(position))
            .map(|cell| cell.coordinate)
    }

    /// Queue `hook` for the next frame unless it is already pending.
    pub fn queue_post_layout(&mut self, hook: PostLayout) {
        if !self.post_layout.contains(&hook) {
            self.post_layout.push(hook);
        }
    }

    /// Run hooks queued for after layout. Returns whether a redraw is needed.
    pub fn run_post_layout(&mut self) -> bool {
        let mut changed = false;
        for hook in std::mem::take(&mut self.post_layout) {
            match hook {
                PostLayout::ScrollToSelection => changed |= self.scroll_to_selection(),
                PostLayout::EnsureCursorVisible => changed |= self.ensure_cursor_visible(),
            }
        }
        changed
    }
}
