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

use crate::app::{App, RenderedCell};
use crate::calendar::format::weekday_label;
use crate::calendar::{DAYS_PER_WEEK, GridCell, GridCoordinate};
use crate::picker::{CellClass, RangeBand};
use crate::ui::layout::{self, GridLine};
use crate::ui::theme;
use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Draw the scrolled month sections into `area` and record every visible day
/// cell for mouse mapping.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    app.viewport_rows = usize::from(area.height);
    app.scroll_offset = app.scroll_offset.min(app.max_scroll());

    let cell_w = layout::cell_width(area.width);
    let (grid_x, grid_w) = layout::grid_span(area);
    let lines = layout::visible_lines(&app.picker.grid, app.scroll_offset, app.viewport_rows);

    let mut rendered = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        let y = area.y + i as u16;
        match line {
            GridLine::MonthLabel(section) => {
                let label = app.picker.month_label(section).unwrap_or_default();
                let row = Rect::new(grid_x, y, grid_w, 1);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(label, theme::month_label_style()))),
                    row,
                );
            }
            GridLine::Cells { section, row } => {
                for column in 0..DAYS_PER_WEEK {
                    let x = grid_x + column as u16 * cell_w;
                    if x + cell_w > area.right() {
                        break;
                    }
                    let cell_area = Rect::new(x, y, cell_w, 1);
                    let coordinate = GridCoordinate::new(section, row * DAYS_PER_WEEK + column);
                    let cell = app.picker.grid.cell_at(coordinate.section, coordinate.item);
                    draw_cell(frame.buffer_mut(), cell_area, cell, app);
                    if matches!(cell, GridCell::Day(_)) {
                        rendered.push(RenderedCell { area: cell_area, coordinate });
                    }
                }
            }
            GridLine::Gap => {}
        }
    }
    app.rendered_cells = rendered;
}

fn draw_cell(buf: &mut Buffer, area: Rect, cell: GridCell, app: &App) {
    match cell {
        GridCell::WeekdayLabel(weekday) => {
            let label = weekday_label(weekday, app.picker.weekday_format);
            draw_centered(buf, area, &label, theme::weekday_label_style());
        }
        GridCell::Day(date) => {
            let class = app.picker.controller.classify(date, app.today);
            draw_band(buf, area, class);
            let mut style = theme::day_label_style(class);
            if date == app.cursor {
                style = style.patch(theme::cursor_style());
            }
            draw_centered(buf, area, &day_label(date), style);
        }
        GridCell::Blank | GridCell::OutOfRange => {}
    }
}

fn day_label(date: NaiveDate) -> String {
    format!("{:>2}", date.day())
}

/// Range background. Endpoints and month-boundary days only fill the half that
/// faces the rest of the range.
fn draw_band(buf: &mut Buffer, area: Rect, class: CellClass) {
    let left_w = area.width / 2;
    let left = Rect { width: left_w, ..area };
    let right = Rect { x: area.x + left_w, width: area.width - left_w, ..area };
    let target = match class {
        CellClass::RangeInterior(RangeBand::Full) => area,
        CellClass::RangeInterior(RangeBand::RightHalf) | CellClass::RangeLeftEdge => right,
        CellClass::RangeInterior(RangeBand::LeftHalf) | CellClass::RangeRightEdge => left,
        _ => return,
    };
    buf.set_style(target, theme::band_style());
}

fn draw_centered(buf: &mut Buffer, area: Rect, text: &str, style: ratatui::style::Style) {
    let width = u16::try_from(text.width()).unwrap_or(area.width).min(area.width);
    let x = area.x + (area.width - width) / 2;
    buf.set_stringn(x, area.y, text, usize::from(width), style);
}
