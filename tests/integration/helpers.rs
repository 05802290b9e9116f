use chrono::NaiveDate;
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use range_picker::app::App;
use range_picker::picker::{PickerConfig, RangePicker};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Build an `App` for integration testing.
/// No terminal, no event stream -- just state.
pub fn test_app(config: &PickerConfig, today: NaiveDate) -> App {
    let picker = RangePicker::new(config, today).expect("valid picker config");
    App::new(picker, today)
}

/// Q1 2024 bounds, optionally with clear-on-third-tap.
pub fn q1_config(enabled_set_no_dates: bool) -> PickerConfig {
    PickerConfig {
        minimum_date: Some(date(2024, 1, 1)),
        maximum_date: Some(date(2024, 3, 31)),
        enabled_set_no_dates,
        ..PickerConfig::default()
    }
}

pub fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn render_frame(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("create test terminal");
    terminal.draw(|f| range_picker::ui::render(f, app)).expect("draw frame");
    terminal
}

pub fn frame_to_string(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
