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

mod calendar;
mod header;
pub(crate) mod layout;
pub mod theme;

use crate::app::App;
use crate::calendar::format::short_date;
use crate::picker::Selection;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    app.cached_frame_area = frame_area;

    let areas = layout::compute(frame_area);

    header::render(frame, areas.header, app);
    render_separator(frame, areas.header_sep);

    calendar::render(frame, areas.body, app);

    render_separator(frame, areas.footer_sep);
    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

const FOOTER_PAD: u16 = 2;
const FOOTER_COLUMN_GAP: u16 = 2;
const FOOTER_HINTS: &str = "space select · d done · esc cancel";

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };

    let summary = selection_summary(app.picker.controller.selection());
    let summary_width = u16::try_from(summary.width()).unwrap_or(padded.width).min(padded.width);
    let left_area = Rect { width: summary_width, ..padded };
    frame.render_widget(
        Paragraph::new(Span::styled(summary, Style::default().fg(Color::White))),
        left_area,
    );

    let used = summary_width + FOOTER_COLUMN_GAP;
    let right_area =
        Rect { x: padded.x + used, width: padded.width.saturating_sub(used), ..padded };
    let (text, style) = match &app.status_hint {
        Some(hint) => (hint.as_str(), Style::default().fg(theme::STATUS_ERROR)),
        None => (FOOTER_HINTS, Style::default().fg(theme::DIM)),
    };
    if text.width() <= usize::from(right_area.width) {
        let line = Line::from(Span::styled(text, style));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), right_area);
    } else if app.status_hint.is_some() {
        // Hints are optional; a status message is shown even if clipped.
        frame.render_widget(Paragraph::new(Span::styled(text, style)), right_area);
    }
}

fn selection_summary(selection: Selection) -> String {
    match selection {
        Selection::Empty => "No dates selected".to_owned(),
        Selection::Anchored(start) => format!("{} {} …", short_date(start), theme::RANGE_ARROW),
        Selection::Range { start, end } if start == end => short_date(start),
        Selection::Range { start, end } => {
            format!("{} {} {}", short_date(start), theme::RANGE_ARROW, short_date(end))
        }
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
