// End-to-end UI behaviour driven through terminal events

use std::cell::RefCell;
use std::rc::Rc;

use brainrot::config::Config;
use brainrot::error::GenerateError;
use brainrot::form::{FormField, GenerateRequest};
use brainrot::generate::{Generator, JobId};
use brainrot::ui::app::{FocusedPane, PreviewTab};
use brainrot::ui::panes::StatusTone;
use brainrot::ui::theme::ThemeMode;
use brainrot::ui::App;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use uuid::Uuid;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

/// Generator that keeps every request it receives
#[derive(Clone, Default)]
struct Recorder {
    requests: Rc<RefCell<Vec<GenerateRequest>>>,
}

impl Generator for Recorder {
    fn generate(&mut self, request: &GenerateRequest) -> Result<JobId, GenerateError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(Uuid::new_v4())
    }
}

/// Generator whose hand-off always fails
struct Unwritable;

impl Generator for Unwritable {
    fn generate(&mut self, _request: &GenerateRequest) -> Result<JobId, GenerateError> {
        Err(GenerateError::Write {
            path: "/nowhere/request.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

fn setup() -> (App, Terminal<TestBackend>, Recorder) {
    let recorder = Recorder::default();
    let app = App::new(&Config::default(), Box::new(recorder.clone()));
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    (app, terminal, recorder)
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|f| app.render(f)).expect("draw");
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_mouse_drags_resize_both_dividers() {
    let (mut app, mut terminal, _) = setup();
    draw(&mut app, &mut terminal);

    // Default 25/30/45 over 120 columns puts the dividers at 30 and 66.
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10));
    assert!(app.resize.is_resizing());
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 36, 12));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 36, 12));
    assert!(!app.resize.is_resizing());
    assert_eq!(app.layout.left(), 30.0);
    assert_eq!(app.layout.middle(), 30.0);

    draw(&mut app, &mut terminal);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 72, 10));
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 84, 10));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 84, 10));
    assert_eq!(app.layout.middle(), 40.0);
    assert_eq!(app.layout.right(), 30.0);
}

#[test]
fn test_drag_without_press_changes_nothing() {
    let (mut app, mut terminal, _) = setup();
    draw(&mut app, &mut terminal);

    let before = app.layout;
    app.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 90, 10));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 90, 10));
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 90, 10));
    assert_eq!(app.layout, before);
    assert!(!app.resize.is_resizing());
}

#[test]
fn test_clicks_are_suppressed_while_resizing() {
    let (mut app, mut terminal, _) = setup();
    draw(&mut app, &mut terminal);

    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 10));
    // Theme button sits at the right end of the header row.
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 117, 0));
    assert_eq!(app.theme, ThemeMode::Dark);

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 30, 10));
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 117, 0));
    assert_eq!(app.theme, ThemeMode::Light);
}

#[test]
fn test_theme_toggle_twice_restores_mode() {
    let (mut app, _, _) = setup();
    app.handle_event(ctrl('t'));
    assert_eq!(app.theme, ThemeMode::Light);
    app.handle_event(ctrl('t'));
    assert_eq!(app.theme, ThemeMode::Dark);
}

#[test]
fn test_preview_tab_selection_is_idempotent() {
    let (mut app, mut terminal, _) = setup();
    assert!(!app.select_preview_tab(PreviewTab::Video));
    assert_eq!(app.preview_tab, PreviewTab::Video);

    // Click the image tab in the preview header row.
    draw(&mut app, &mut terminal);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 50, 2));
    assert_eq!(app.focused_pane, FocusedPane::Preview);
    assert_eq!(app.preview_tab, PreviewTab::Image);
    draw(&mut app, &mut terminal);
    assert!(screen_text(&terminal).contains('▣'));

    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.preview_tab, PreviewTab::Image);
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.preview_tab, PreviewTab::Video);

    draw(&mut app, &mut terminal);
    assert!(!screen_text(&terminal).contains('▣'));
}

#[test]
fn test_typing_into_form_and_generating() {
    let (mut app, _, recorder) = setup();
    assert_eq!(app.focused_pane, FocusedPane::Config);

    for c in "https://x.y".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
    app.handle_event(key(KeyCode::Down));
    assert_eq!(app.focused_field, FormField::Width);
    for _ in 0..4 {
        app.handle_event(key(KeyCode::Backspace));
    }
    app.handle_event(key(KeyCode::Char('a')));
    assert!(app.status_message.contains("digits only"));
    for c in "720".chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }

    app.handle_event(ctrl('g'));

    let requests = recorder.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source_url, "https://x.y");
    assert_eq!(requests[0].width, 720);
    assert!(app.last_job.is_some());
    assert!(app.status_message.starts_with("Generation queued"));
    assert_eq!(app.status_tone, StatusTone::Success);
}

#[test]
fn test_alt_chords_do_not_type_into_form() {
    let (mut app, _, _) = setup();
    let alt = |c: char| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT));

    app.handle_event(alt('x'));
    app.handle_event(ctrl('x'));
    assert!(app.form.source_url.is_empty());

    app.handle_event(key(KeyCode::Char('x')));
    assert_eq!(app.form.source_url, "x");
}

#[test]
fn test_failed_hand_off_is_reported_as_error() {
    let mut app = App::new(&Config::default(), Box::new(Unwritable));
    app.form.source_url = "https://x.y".into();

    app.handle_event(ctrl('g'));

    assert!(app.last_job.is_none());
    assert!(app.status_message.starts_with("Generate failed"));
    assert_eq!(app.status_tone, StatusTone::Error);
}

#[test]
fn test_invalid_form_is_not_submitted() {
    let (mut app, _, recorder) = setup();
    app.form.max_length.clear();

    app.handle_event(key(KeyCode::F(5)));

    assert!(recorder.requests.borrow().is_empty());
    assert_eq!(app.focused_field, FormField::MaxLength);
    assert!(app.status_message.starts_with("Cannot generate"));
    assert_eq!(app.status_tone, StatusTone::Error);
    assert!(app.last_job.is_none());
}

#[test]
fn test_select_and_toggle_fields_from_keyboard() {
    let (mut app, _, _) = setup();
    app.focused_field = FormField::AudioModel;
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.form.audio_model.as_deref(), Some("OpenAI TTS-1"));

    app.focused_field = FormField::UseImageInIntro;
    app.handle_event(key(KeyCode::Char(' ')));
    assert!(app.form.use_image_in_intro);
}

#[test]
fn test_keyboard_nudges_obey_limits() {
    let (mut app, _, _) = setup();
    let nudge = |c: char| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT));

    app.handle_event(nudge(']'));
    assert_eq!(app.layout.left(), 30.0);
    for _ in 0..10 {
        app.handle_event(nudge(']'));
    }
    assert_eq!(app.layout.left(), 50.0);
    assert_eq!(app.layout.right(), 25.0);
    assert!(!app.resize.is_resizing());

    app.handle_event(nudge('{'));
    assert_eq!(app.layout.middle(), 25.0);
}

#[test]
fn test_audio_selection_scrolls_into_view() {
    let (mut app, mut terminal, _) = setup();
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Tab));
    assert_eq!(app.focused_pane, FocusedPane::Audio);

    app.handle_event(key(KeyCode::End));
    assert_eq!(app.selected_audio, Some(20));
    assert!(app.status_message.contains("brainrot_audio_20.mp3"));

    draw(&mut app, &mut terminal);
    assert!(app.audio_scroll > 0);
    assert!(screen_text(&terminal).contains("brainrot_audio_20.mp3"));
}

#[test]
fn test_wheel_scrolls_past_selected_entry() {
    let (mut app, mut terminal, _) = setup();
    app.focused_pane = FocusedPane::Audio;
    let over_audio = |kind| mouse(kind, 90, 10);

    app.handle_event(key(KeyCode::Home));
    draw(&mut app, &mut terminal);
    assert_eq!(app.audio_scroll, 0);

    for _ in 0..3 {
        app.handle_event(over_audio(MouseEventKind::ScrollDown));
        draw(&mut app, &mut terminal);
    }
    assert_eq!(app.audio_scroll, 3);
    assert_eq!(app.selected_audio, Some(1));

    app.handle_event(key(KeyCode::End));
    draw(&mut app, &mut terminal);
    let bottom = app.audio_scroll;
    app.handle_event(over_audio(MouseEventKind::ScrollUp));
    draw(&mut app, &mut terminal);
    assert_eq!(app.audio_scroll, bottom - 1);
}

#[test]
fn test_escape_quits() {
    let (mut app, _, _) = setup();
    app.handle_event(key(KeyCode::Esc));
    assert!(app.should_quit);
}
