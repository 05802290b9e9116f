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

use crate::picker::CellClass;
use ratatui::style::{Color, Modifier, Style};

// Accent
pub const RUST_ORANGE: Color = Color::Rgb(244, 118, 0);

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const SEPARATOR_CHAR: &str = "─";
pub const RANGE_ARROW: &str = "→";

// Range band behind interior days and the inner half of endpoints
pub const RANGE_BG: Color = Color::Rgb(40, 44, 52);

pub const STATUS_ERROR: Color = Color::Red;

/// Foreground/modifier style for the day-number label of a cell.
pub fn day_label_style(class: CellClass) -> Style {
    match class {
        CellClass::Disabled => Style::default().fg(DIM),
        CellClass::RangeLeftEdge | CellClass::RangeRightEdge | CellClass::SelectedSingle => {
            Style::default().fg(Color::Black).bg(RUST_ORANGE).add_modifier(Modifier::BOLD)
        }
        CellClass::RangeInterior(_) => Style::default().fg(Color::White),
        CellClass::Today => {
            Style::default().fg(RUST_ORANGE).add_modifier(Modifier::UNDERLINED)
        }
        CellClass::Plain => Style::default(),
    }
}

pub fn band_style() -> Style {
    Style::default().bg(RANGE_BG)
}

pub fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn weekday_label_style() -> Style {
    Style::default().fg(DIM)
}

pub fn month_label_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}
