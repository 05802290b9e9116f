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

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const HEADER_PAD: u16 = 2;
const CANCEL_LABEL: &str = "Cancel";
const DONE_LABEL: &str = "Done";

/// Title bar: Cancel on the left, title centered, Done on the right.
/// Records the button regions for mouse hit-testing.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let padded = Rect {
        x: area.x + HEADER_PAD,
        y: area.y,
        width: area.width.saturating_sub(HEADER_PAD * 2),
        height: area.height,
    };

    let title = Line::from(Span::styled(
        app.picker.title.as_str(),
        Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), padded);

    let cancel_width =
        u16::try_from(CANCEL_LABEL.width()).unwrap_or(padded.width).min(padded.width);
    let cancel = Rect { width: cancel_width, ..padded };
    frame.render_widget(
        Paragraph::new(Span::styled(CANCEL_LABEL, Style::default().fg(Color::White))),
        cancel,
    );

    let done_width = u16::try_from(DONE_LABEL.width()).unwrap_or(padded.width).min(padded.width);
    let done = Rect {
        x: padded.x + padded.width.saturating_sub(done_width),
        width: done_width,
        ..padded
    };
    let done_style = if app.picker.controller.can_confirm() {
        Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::DIM)
    };
    frame.render_widget(Paragraph::new(Span::styled(DONE_LABEL, done_style)), done);

    app.rendered_buttons.cancel = cancel;
    app.rendered_buttons.done = done;
}
