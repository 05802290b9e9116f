// =====
// TESTS: 5
// =====
//
// Full-frame rendering with ratatui's TestBackend, plus mouse taps mapped
// through the rendered cell regions.

use pretty_assertions::assert_eq;
use range_picker::app::{App, handle_terminal_event};
use range_picker::picker::{PickerOutcome, Selection};

use crate::helpers::{date, frame_to_string, left_click, q1_config, render_frame, test_app};

fn click_date(app: &mut App, day: chrono::NaiveDate) {
    let cell = app
        .rendered_cells
        .iter()
        .find(|cell| {
            app.picker.grid.date_for_item(cell.coordinate.section, cell.coordinate.item)
                == Some(day)
        })
        .copied()
        .expect("date is on screen");
    handle_terminal_event(app, left_click(cell.area.x, cell.area.y));
}

#[test]
fn frame_shows_title_buttons_month_and_summary() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    let frame = frame_to_string(&render_frame(&mut app, 48, 24));
    assert!(frame.contains("Select Dates"));
    assert!(frame.contains("Cancel"));
    assert!(frame.contains("Done"));
    assert!(frame.contains("January 2024"));
    assert!(frame.contains("No dates selected"));
}

#[test]
fn clicking_two_cells_selects_a_range() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    render_frame(&mut app, 48, 24);
    click_date(&mut app, date(2024, 1, 20));
    click_date(&mut app, date(2024, 1, 9));
    assert_eq!(
        app.picker.controller.selection(),
        Selection::Range { start: date(2024, 1, 9), end: date(2024, 1, 20) }
    );

    let frame = frame_to_string(&render_frame(&mut app, 48, 24));
    assert!(frame.contains("Jan 9, 2024 → Jan 20, 2024"));
}

#[test]
fn clicking_done_and_cancel_buttons() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    render_frame(&mut app, 48, 24);

    let done = app.rendered_buttons.done;
    handle_terminal_event(&mut app, left_click(done.x, done.y));
    assert!(!app.should_quit, "nothing selected, Done is refused");
    let frame = frame_to_string(&render_frame(&mut app, 48, 24));
    assert!(frame.contains("Pick a date first"));

    click_date(&mut app, date(2024, 1, 3));
    let done = app.rendered_buttons.done;
    handle_terminal_event(&mut app, left_click(done.x, done.y));
    assert_eq!(
        app.outcome(),
        Some(PickerOutcome::Confirmed { start: Some(date(2024, 1, 3)), end: None })
    );

    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    render_frame(&mut app, 48, 24);
    let cancel = app.rendered_buttons.cancel;
    handle_terminal_event(&mut app, left_click(cancel.x, cancel.y));
    assert_eq!(app.outcome(), Some(PickerOutcome::Cancelled));
}

#[test]
fn initial_scroll_brings_seeded_start_into_view_after_first_layout() {
    let mut config = q1_config(false);
    config.selected_start_date = Some(date(2024, 3, 20));
    let mut app = test_app(&config, date(2024, 1, 15));

    let first = frame_to_string(&render_frame(&mut app, 48, 12));
    assert!(!first.contains("March 2024"));

    assert!(app.run_post_layout());
    let second = frame_to_string(&render_frame(&mut app, 48, 12));
    assert!(second.contains("March 2024"));
    assert!(app.post_layout.is_empty());
    assert!(!app.run_post_layout());
}

#[test]
fn tiny_terminal_still_renders_without_footer() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    let frame = frame_to_string(&render_frame(&mut app, 20, 4));
    let header = frame.lines().next().unwrap_or_default();
    assert!(header.trim_start().starts_with("Cancel"), "header: {header:?}");
    assert!(header.trim_end().ends_with("Done"), "header: {header:?}");
    assert!(!frame.contains("No dates selected"));
}
