// =====
// TESTS: 6
// =====
//
// Tap sequences through the public app surface.

use pretty_assertions::assert_eq;
use range_picker::app::{CONFIRM_REJECTED_HINT, confirm, tap_date};
use range_picker::picker::{ConfirmOutcome, PickerOutcome, Selection, Transition};

use crate::helpers::{date, q1_config, test_app};

#[test]
fn later_then_earlier_tap_swaps_into_range() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    tap_date(&mut app, Some(date(2024, 2, 10)));
    assert_eq!(app.picker.controller.selection(), Selection::Anchored(date(2024, 2, 10)));

    assert_eq!(tap_date(&mut app, Some(date(2024, 2, 5))), Transition::Swapped);
    assert_eq!(app.picker.controller.start(), Some(date(2024, 2, 5)));
    assert_eq!(app.picker.controller.end(), Some(date(2024, 2, 10)));

    assert_eq!(tap_date(&mut app, Some(date(2024, 1, 1))), Transition::Restarted);
    assert_eq!(app.picker.controller.selection(), Selection::Anchored(date(2024, 1, 1)));
}

#[test]
fn ascending_taps_form_range() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    tap_date(&mut app, Some(date(2024, 1, 3)));
    tap_date(&mut app, Some(date(2024, 3, 3)));
    assert_eq!(
        app.picker.controller.selection(),
        Selection::Range { start: date(2024, 1, 3), end: date(2024, 3, 3) }
    );
}

#[test]
fn clearing_mode_cycles_back_to_empty_and_confirms_nothing() {
    let mut app = test_app(&q1_config(true), date(2024, 1, 15));
    tap_date(&mut app, Some(date(2024, 1, 3)));
    tap_date(&mut app, Some(date(2024, 1, 9)));
    assert_eq!(tap_date(&mut app, Some(date(2024, 2, 1))), Transition::Cleared);
    assert!(app.picker.controller.selection().is_empty());

    assert_eq!(confirm(&mut app), ConfirmOutcome::Confirmed);
    assert_eq!(app.outcome(), Some(PickerOutcome::Confirmed { start: None, end: None }));
}

#[test]
fn out_of_bounds_taps_are_ignored_in_every_phase() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    let taps = [date(2024, 1, 10), date(2024, 1, 20), date(2024, 2, 2)];
    for tap in taps {
        let before = app.picker.controller.selection();
        assert_eq!(tap_date(&mut app, Some(date(2023, 12, 31))), Transition::Ignored);
        assert_eq!(tap_date(&mut app, Some(date(2024, 4, 1))), Transition::Ignored);
        assert_eq!(tap_date(&mut app, None), Transition::Ignored);
        assert_eq!(app.picker.controller.selection(), before);
        tap_date(&mut app, Some(tap));
    }
}

#[test]
fn confirm_without_selection_is_rejected_not_an_error() {
    let mut app = test_app(&q1_config(false), date(2024, 1, 15));
    assert_eq!(confirm(&mut app), ConfirmOutcome::Rejected);
    assert!(!app.should_quit);
    assert_eq!(app.status_hint.as_deref(), Some(CONFIRM_REJECTED_HINT));
    assert_eq!(app.outcome(), None);
}

#[test]
fn seeded_range_confirms_unchanged() {
    let mut config = q1_config(false);
    config.selected_start_date = Some(date(2024, 2, 1));
    config.selected_end_date = Some(date(2024, 2, 14));
    let mut app = test_app(&config, date(2024, 1, 15));
    assert_eq!(app.cursor, date(2024, 2, 1));
    confirm(&mut app);
    assert_eq!(
        app.outcome(),
        Some(PickerOutcome::Confirmed { start: Some(date(2024, 2, 1)), end: Some(date(2024, 2, 14)) })
    );
}
