//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Questions are answered
//! synchronously on the UI thread; reloads run on a tokio blocking task and
//! report back over an mpsc channel drained once per frame.

use crate::{
    commands::Command,
    event::{self, AppEvent},
    theme::Theme,
    transcript::Transcript,
    widgets::{
        chat_log::{ChatLog, ChatLogState},
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        input_bar::{InputBar, InputBarState},
        popups::{ExamplesPopup, InfoPopup},
        status_bar::StatusBar,
    },
};
use biochat_core::{config::UiConfig, ReloadReport, SearchEngine};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, path::Path, sync::Arc, time::Duration};
use tokio::{runtime::Handle, sync::mpsc};

/// Result of a background reload. `Err` carries a join failure message.
pub type ReloadOutcome = Result<ReloadReport, String>;

// ---------------------------------------------------------------------------
// Focus + popup types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Transcript,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Help,
    Info,
    Examples,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub engine: Arc<SearchEngine>,
    pub sources: Vec<String>,
    pub transcript: Transcript,
    pub chat: ChatLogState,
    pub input: InputBarState,
    pub command_bar: CommandBarState,
    pub focus: Focus,
    /// Focus before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub popup: Option<Popup>,
    pub theme: Theme,
    pub show_confidence: bool,
    pub reloading: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    runtime: Handle,
    reload_tx: mpsc::UnboundedSender<ReloadOutcome>,
    reload_rx: mpsc::UnboundedReceiver<ReloadOutcome>,
}

impl App {
    pub fn new(engine: Arc<SearchEngine>, ui: &UiConfig, runtime: Handle) -> Self {
        let theme = Theme::by_name(&ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %ui.theme, "unknown theme, using default");
            Theme::load_default()
        });
        let (reload_tx, reload_rx) = mpsc::unbounded_channel();

        let state = AppState {
            sources: engine.source_names(),
            engine,
            transcript: Transcript::new(),
            chat: ChatLogState::default(),
            input: InputBarState::default(),
            command_bar: CommandBarState::default(),
            focus: Focus::Input,
            prev_focus: Focus::Input,
            popup: None,
            theme,
            show_confidence: ui.show_confidence,
            reloading: false,
            quit: false,
        };

        App { state, runtime, reload_tx, reload_rx }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.drain_reloads();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if is_insert_mode(self.state.focus) {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    /// Apply finished reloads to the transcript.
    fn drain_reloads(&mut self) {
        while let Ok(outcome) = self.reload_rx.try_recv() {
            self.finish_reload(outcome);
        }
    }

    fn finish_reload(&mut self, outcome: ReloadOutcome) {
        let s = &mut self.state;
        s.reloading = false;
        match outcome {
            Ok(report) => {
                let mut msg = format!("Datos recargados: {} oraciones disponibles", report.sentences);
                if !report.failed_sources.is_empty() {
                    msg.push_str(&format!(
                        " (sin respuesta: {})",
                        report.failed_sources.join(", ")
                    ));
                }
                s.transcript.push_system(msg);
            }
            Err(err) => {
                tracing::error!(error = %err, "reload task failed");
                s.transcript
                    .push_system(format!("La recarga falló: {err}"));
            }
        }
        s.chat.scroll_to_tail();
    }

    fn start_reload(&mut self) {
        let s = &mut self.state;
        if s.reloading {
            s.transcript.push_system("Ya hay una recarga en curso.");
            s.chat.scroll_to_tail();
            return;
        }
        s.reloading = true;
        s.transcript.push_system("Recargando datos desde la web...");
        s.chat.scroll_to_tail();
        tracing::info!("reload started");

        let engine = Arc::clone(&s.engine);
        let tx = self.reload_tx.clone();
        self.runtime.spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || engine.reload())
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(outcome);
        });
    }

    fn handle(&mut self, event: AppEvent) {
        // Popups intercept everything; only close keys pass through.
        if self.state.popup.is_some() {
            match event {
                AppEvent::Escape | AppEvent::Enter | AppEvent::Char('q') | AppEvent::Char('?') => {
                    tracing::debug!(popup = ?self.state.popup, "popup closed");
                    self.state.popup = None;
                }
                AppEvent::Quit => self.state.quit = true,
                _ => {}
            }
            return;
        }

        if self.state.focus == Focus::Command {
            self.handle_command_bar(event);
            return;
        }

        let s = &mut self.state;
        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }
            AppEvent::ShowHelp => s.popup = Some(Popup::Help),
            AppEvent::ShowInfo => s.popup = Some(Popup::Info),
            AppEvent::ShowExamples => s.popup = Some(Popup::Examples),
            AppEvent::Reload => self.start_reload(),

            AppEvent::FocusNext => {
                s.focus = match s.focus {
                    Focus::Input => Focus::Transcript,
                    Focus::Transcript | Focus::Command => Focus::Input,
                };
                tracing::debug!(to = ?s.focus, "focus cycle");
            }
            AppEvent::InputFocus => s.focus = Focus::Input,
            AppEvent::Escape if s.focus == Focus::Input => s.focus = Focus::Transcript,

            AppEvent::ScrollUp | AppEvent::ScrollDown | AppEvent::ScrollToTail => s.chat.handle(&event),

            // `:` opens the command bar from the transcript or an empty input
            AppEvent::Char(':') if s.focus == Focus::Transcript || s.input.is_empty() => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }
            AppEvent::Char('?') if s.focus == Focus::Transcript => s.popup = Some(Popup::Help),

            AppEvent::Enter if s.focus == Focus::Input => self.send(),

            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Input => s.input.handle(&other),
                Focus::Transcript => s.chat.handle(&other),
                Focus::Command => {}
            },
        }
    }

    fn handle_command_bar(&mut self, event: AppEvent) {
        let s = &mut self.state;
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            AppEvent::Quit => s.quit = true,
            AppEvent::Enter => match Command::parse(s.command_bar.input()) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                    self.execute(cmd);
                }
                Err(msg) if msg.is_empty() => {
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                Err(msg) => s.command_bar.error = Some(msg),
            },
            other => s.command_bar.handle(&other),
        }
    }

    /// Ask the engine and append both sides of the exchange.
    fn send(&mut self) {
        let s = &mut self.state;
        let question = s.input.take();
        let question = question.trim();
        if question.is_empty() {
            return;
        }

        let result = s.engine.search(question);
        tracing::debug!(kind = %result.kind, confidence = result.confidence, "answered");
        s.transcript.push_user(question);
        s.transcript.push_answer(result);
        s.chat.scroll_to_tail();
    }

    fn execute(&mut self, cmd: Command) {
        let s = &mut self.state;
        match cmd {
            Command::Quit => s.quit = true,
            Command::Help => s.popup = Some(Popup::Help),
            Command::Info => s.popup = Some(Popup::Info),
            Command::Examples => s.popup = Some(Popup::Examples),
            Command::Clear => {
                s.transcript.clear();
                s.chat.scroll_to_tail();
            }
            Command::Reload => self.start_reload(),
            Command::Theme(name) => match Theme::by_name(&name) {
                Some(theme) => s.theme = theme,
                None => {
                    tracing::debug!(theme = %name, "unknown theme");
                    s.transcript
                        .push_system(format!("Tema desconocido: {name}. Disponibles: default, gruvbox"));
                    s.chat.scroll_to_tail();
                }
            },
            Command::Confidence => s.show_confidence = !s.show_confidence,
            Command::Export(path) => export(s, &path),
        }
    }
}

fn export(s: &mut AppState, path: &Path) {
    let msg = match s.transcript.export(path) {
        Ok(n) => format!("Conversación guardada en {} ({n} mensajes)", path.display()),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "export failed");
            format!("No se pudo guardar la conversación: {err}")
        }
    };
    s.transcript.push_system(msg);
    s.chat.scroll_to_tail();
}

/// Text widgets take letters literally.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Input | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | transcript | 3-line input bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    let kb_len = state.engine.knowledge_base().len();

    frame.render_widget(StatusBar::new(kb_len, state.reloading, &state.theme), vert[0]);
    frame.render_widget(
        ChatLog::new(
            &state.chat,
            &state.transcript,
            state
                .show_confidence
                .then_some(state.engine.config().confidence_threshold),
            state.focus == Focus::Transcript,
            &state.theme,
        ),
        vert[1],
    );
    frame.render_widget(
        InputBar::new(&state.input, state.focus == Focus::Input, &state.theme),
        vert[2],
    );

    match state.popup {
        Some(Popup::Help) => frame.render_widget(HelpPopup::new(&state.theme), area),
        Some(Popup::Info) => {
            frame.render_widget(InfoPopup::new(kb_len, &state.sources, &state.theme), area)
        }
        Some(Popup::Examples) => frame.render_widget(ExamplesPopup::new(&state.theme), area),
        None => {}
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        frame.set_cursor_position((state.command_bar.cursor_col(cmd_area), cmd_area.y));
        return;
    }

    if state.focus == Focus::Input && state.popup.is_none() {
        let bar = InputBar::new(&state.input, true, &state.theme);
        frame.set_cursor_position(bar.cursor_position(vert[2]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
