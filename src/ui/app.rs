//! Main TUI application state and logic

use crate::catalog::AudioCatalog;
use crate::config::Config;
use crate::form::{FieldKind, FormField, FormModel};
use crate::generate::{Generator, JobId};
use crate::layout::{Divider, LayoutState, PanelGeometry, ResizeController};
use crate::ui::panes::{self, AudioRenderData, PreviewHits, StatusTone};
use crate::ui::theme::ThemeMode;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Percentage a keyboard nudge moves a divider by
const NUDGE_PERCENT: f32 = 5.0;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Config,
    Preview,
    Audio,
}

impl FocusedPane {
    /// Move focus to the next pane (left to right, wrapping)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Config => FocusedPane::Preview,
            FocusedPane::Preview => FocusedPane::Audio,
            FocusedPane::Audio => FocusedPane::Config,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Config => FocusedPane::Audio,
            FocusedPane::Preview => FocusedPane::Config,
            FocusedPane::Audio => FocusedPane::Preview,
        }
    }
}

/// Placeholder shown in the preview pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewTab {
    Video,
    Image,
}

/// Clickable regions recorded during the last render
#[derive(Debug, Clone, Default)]
struct HitMap {
    geometry: Option<PanelGeometry>,
    theme_button: Rect,
    fields: Vec<(FormField, Rect)>,
    preview: PreviewHits,
    audio_rows: Vec<(u32, Rect)>,
}

/// The main application state
pub struct App {
    pub theme: ThemeMode,

    /// Panel widths and the controller that drags them
    pub layout: LayoutState,
    pub resize: ResizeController,

    pub form: FormModel,
    pub focused_field: FormField,

    pub preview_tab: PreviewTab,
    pub focused_pane: FocusedPane,

    pub catalog: AudioCatalog,
    pub audio_scroll: usize,
    pub selected_audio: Option<u32>,
    /// Bring the selected row into view on the next render
    follow_selection: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_tone: StatusTone,

    /// Job id returned by the last successful generate
    pub last_job: Option<JobId>,

    generator: Box<dyn Generator>,
    hits: HitMap,
}

impl App {
    /// Create a new app from the loaded configuration
    pub fn new(config: &Config, generator: Box<dyn Generator>) -> Self {
        App {
            theme: config.theme,
            layout: config.layout.initial_state(),
            resize: ResizeController::new(config.layout.limits),
            form: config.form.clone(),
            focused_field: FormField::SourceUrl,
            preview_tab: PreviewTab::Video,
            focused_pane: FocusedPane::Config,
            catalog: AudioCatalog::sample(),
            audio_scroll: 0,
            selected_audio: None,
            follow_selection: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_tone: StatusTone::Normal,
            last_job: None,
            generator,
            hits: HitMap::default(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let palette = self.theme.palette();

        // Header, three resizable columns, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let geometry = PanelGeometry::compute(rows[1], &self.layout);

        self.hits.theme_button = panes::render_header(frame, rows[0], self.theme, palette);

        self.hits.fields = panes::render_config_pane(
            frame,
            geometry.left,
            &self.form,
            self.focused_field,
            self.focused_pane == FocusedPane::Config,
            palette,
        );

        panes::render_divider(
            frame,
            geometry.left_divider,
            self.resize.active_divider() == Some(Divider::LeftMiddle),
            palette,
        );

        self.hits.preview = panes::render_preview_pane(
            frame,
            geometry.middle,
            self.preview_tab,
            &self.form,
            self.focused_pane == FocusedPane::Preview,
            palette,
        );

        panes::render_divider(
            frame,
            geometry.right_divider,
            self.resize.active_divider() == Some(Divider::MiddleRight),
            palette,
        );

        self.hits.audio_rows = panes::render_audio_pane(
            frame,
            geometry.right,
            AudioRenderData {
                catalog: &self.catalog,
                selected: self.selected_audio,
                follow_selection: self.follow_selection,
            },
            self.focused_pane == FocusedPane::Audio,
            &mut self.audio_scroll,
            palette,
        );

        self.follow_selection = false;

        panes::render_status_bar(
            frame,
            rows[2],
            &self.status_message,
            self.status_tone,
            &self.layout,
            self.resize.is_resizing(),
            palette,
        );

        self.hits.geometry = Some(geometry);
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = ?self.theme, "theme toggled");
    }

    /// Show `tab`. Returns `false` if it was already showing.
    pub fn select_preview_tab(&mut self, tab: PreviewTab) -> bool {
        if self.preview_tab == tab {
            return false;
        }
        self.preview_tab = tab;
        true
    }

    /// Validate the form and hand it to the generator
    pub fn generate(&mut self) {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "generate rejected");
                self.focused_field = e.field();
                self.set_status(StatusTone::Error, format!("Cannot generate: {}", e));
                return;
            }
        };

        match self.generator.generate(&request) {
            Ok(job_id) => {
                info!(%job_id, "generate accepted");
                self.last_job = Some(job_id);
                self.set_status(StatusTone::Success, format!("Generation queued (job {})", job_id));
            }
            Err(e) => {
                warn!(error = %e, "generate failed");
                self.set_status(StatusTone::Error, format!("Generate failed: {}", e));
            }
        }
    }

    /// Move a divider by `delta` percent as one complete drag gesture
    pub fn nudge_divider(&mut self, divider: Divider, delta: f32) {
        let boundary = match divider {
            Divider::LeftMiddle => self.layout.left(),
            Divider::MiddleRight => self.layout.left() + self.layout.middle(),
        };
        self.resize.begin(divider, &self.layout);
        self.resize.drag_to(&mut self.layout, boundary + delta, 0.0, 100.0);
        self.resize.release();
        self.report_widths();
    }

    fn set_status(&mut self, tone: StatusTone, message: String) {
        self.status_tone = tone;
        self.status_message = message;
    }

    fn report_widths(&mut self) {
        let message = format!(
            "Panels {:.0}% / {:.0}% / {:.0}%",
            self.layout.left(),
            self.layout.middle(),
            self.layout.right()
        );
        self.set_status(StatusTone::Normal, message);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => {
                self.resize.release();
                self.should_quit = true;
            }
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Char('g') if ctrl => self.generate(),
            KeyCode::F(5) => self.generate(),
            KeyCode::Char('[') if alt => self.nudge_divider(Divider::LeftMiddle, -NUDGE_PERCENT),
            KeyCode::Char(']') if alt => self.nudge_divider(Divider::LeftMiddle, NUDGE_PERCENT),
            KeyCode::Char('{') if alt => self.nudge_divider(Divider::MiddleRight, -NUDGE_PERCENT),
            KeyCode::Char('}') if alt => self.nudge_divider(Divider::MiddleRight, NUDGE_PERCENT),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            _ => match self.focused_pane {
                FocusedPane::Config => self.handle_form_key(key),
                FocusedPane::Preview => self.handle_preview_key(key),
                FocusedPane::Audio => self.handle_audio_key(key),
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field = self.focused_field;
        match key.code {
            KeyCode::Up => self.focused_field = field.prev(),
            KeyCode::Down => self.focused_field = field.next(),
            KeyCode::Backspace => {
                self.form.backspace(field);
            }
            KeyCode::Enter => match field.kind() {
                FieldKind::Select => self.form.cycle_audio_model(),
                FieldKind::Toggle => self.form.toggle_intro_image(),
                FieldKind::MultiLine => {
                    self.form.insert_char(field, '\n');
                }
                FieldKind::Text | FieldKind::Numeric => self.focused_field = field.next(),
            },
            KeyCode::Char(' ') if field.kind() == FieldKind::Toggle => {
                self.form.toggle_intro_image()
            }
            KeyCode::Char(' ') if field.kind() == FieldKind::Select => {
                self.form.cycle_audio_model()
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if !self.form.insert_char(field, c) && field.kind() == FieldKind::Numeric {
                    let message = format!("{} accepts digits only", field.label());
                    self.set_status(StatusTone::Error, message);
                }
            }
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('v') => {
                self.select_preview_tab(PreviewTab::Video);
            }
            KeyCode::Right | KeyCode::Char('i') => {
                self.select_preview_tab(PreviewTab::Image);
            }
            KeyCode::Enter => self.generate(),
            _ => {}
        }
    }

    fn handle_audio_key(&mut self, key: KeyEvent) {
        let files = self.catalog.files();
        if files.is_empty() {
            return;
        }
        let current = self
            .selected_audio
            .and_then(|id| files.iter().position(|f| f.id == id));
        let next = match key.code {
            KeyCode::Up => current.map_or(0, |i| i.saturating_sub(1)),
            KeyCode::Down => current.map_or(0, |i| (i + 1).min(files.len() - 1)),
            KeyCode::Home => 0,
            KeyCode::End => files.len() - 1,
            _ => return,
        };
        let id = files[next].id;
        self.select_audio(id);
    }

    fn select_audio(&mut self, id: u32) {
        if let Some(file) = self.catalog.get(id) {
            let message = format!("Selected {} ({})", file.name, file.details());
            self.set_status(StatusTone::Normal, message);
            self.selected_audio = Some(id);
            self.follow_selection = true;
        }
    }

    /// Handle mouse events
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(geometry) = self.hits.geometry else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(divider) = geometry.divider_at(mouse.column, mouse.row) {
                    self.resize.begin(divider, &self.layout);
                    return;
                }
                // Clicks inside panels are suppressed for the rest of a drag.
                if !self.resize.is_resizing() {
                    self.handle_click(mouse.column, mouse.row, &geometry);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let container = geometry.container;
                let moved = self.resize.drag_to(
                    &mut self.layout,
                    f32::from(mouse.column),
                    f32::from(container.x),
                    f32::from(container.width),
                );
                if moved {
                    self.report_widths();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.resize.release();
            }
            MouseEventKind::ScrollDown if geometry.right.contains(pos(&mouse)) => {
                self.audio_scroll = self.audio_scroll.saturating_add(1);
            }
            MouseEventKind::ScrollUp if geometry.right.contains(pos(&mouse)) => {
                self.audio_scroll = self.audio_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, geometry: &PanelGeometry) {
        let at = Position::new(column, row);

        if self.hits.theme_button.contains(at) {
            self.toggle_theme();
            return;
        }

        if geometry.left.contains(at) {
            self.focused_pane = FocusedPane::Config;
            let clicked = self
                .hits
                .fields
                .iter()
                .find(|(_, rect)| rect.contains(at))
                .map(|(field, _)| *field);
            if let Some(field) = clicked {
                self.focused_field = field;
                match field.kind() {
                    FieldKind::Toggle => self.form.toggle_intro_image(),
                    FieldKind::Select => self.form.cycle_audio_model(),
                    _ => {}
                }
            }
        } else if geometry.middle.contains(at) {
            self.focused_pane = FocusedPane::Preview;
            let preview = self.hits.preview;
            if preview.video_tab.contains(at) {
                self.select_preview_tab(PreviewTab::Video);
            } else if preview.image_tab.contains(at) {
                self.select_preview_tab(PreviewTab::Image);
            } else if preview.generate.contains(at) {
                self.generate();
            }
        } else if geometry.right.contains(at) {
            self.focused_pane = FocusedPane::Audio;
            let clicked = self
                .hits
                .audio_rows
                .iter()
                .find(|(_, rect)| rect.contains(at))
                .map(|(id, _)| *id);
            if let Some(id) = clicked {
                self.select_audio(id);
            }
        }
    }
}

fn pos(mouse: &MouseEvent) -> Position {
    Position::new(mouse.column, mouse.row)
}
