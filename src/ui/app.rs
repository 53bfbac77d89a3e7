//! Main application state and UI loop
//!
//! The UI loop is the presentation thread: it is the only place the
//! orchestrator (and through it the snapshot) is touched. Background
//! workers reach it exclusively through the dispatch queue drained at the
//! top of every frame.

use crate::dispatcher::{DashboardCommand, DispatchQueue, Dispatcher, RefreshTrigger};
use crate::events::Event as ActivityEvent;
use crate::orchestrator::DashboardOrchestrator;
use crate::session::SessionData;
use crate::shutdown::ShutdownSequencer;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the board status.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The snapshot owner; driven only from this loop.
    orchestrator: DashboardOrchestrator,

    /// Shutdown/restart state machine.
    sequencer: ShutdownSequencer,

    /// Commands marshaled by background workers.
    queue: DispatchQueue,

    /// Handle for user-initiated refresh dispatches.
    dispatcher: Dispatcher,

    /// Receives activity events from the orchestrator and workers.
    event_receiver: mpsc::Receiver<ActivityEvent>,

    /// Broadcasts shutdown signal to worker tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// The current screen being displayed in the application.
    current_screen: Screen,
}

impl App {
    /// Creates a new instance of the application from a prepared session.
    pub fn new(session: SessionData) -> Self {
        Self {
            orchestrator: session.orchestrator,
            sequencer: session.sequencer,
            queue: session.queue,
            dispatcher: session.dispatcher,
            event_receiver: session.event_receiver,
            shutdown_sender: session.shutdown_sender,
            current_screen: Screen::Splash,
        }
    }

    /// Tear down: stop the workers and mark the orchestrator stopped so
    /// any still-queued command becomes a no-op.
    fn quit(&mut self) {
        let _ = self.shutdown_sender.send(());
        self.orchestrator.stop();
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Apply every command the workers marshaled since the last frame.
        // This is the single point where the snapshot changes.
        while let Some(command) = app.queue.try_next() {
            app.orchestrator.handle(command).await;
        }

        // Queue incoming activity events for the log panel
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                if event.should_display() {
                    state.add_to_activity_log(event);
                }
            }
        }

        // Update the presentation state for this frame
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
            state.armed = app.sequencer.armed_kind();
        }

        terminal.draw(|f| render(f, &app.current_screen, &app.orchestrator))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard(Box::new(DashboardState::new()));
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match handle_key(&mut app.current_screen, key.code) {
                    KeyAction::None => {}
                    KeyAction::Quit => {
                        app.quit();
                        return Ok(());
                    }
                    KeyAction::ManualRefresh => {
                        app.dispatcher
                            .dispatch(DashboardCommand::Refresh(RefreshTrigger::Manual))
                            .await;
                    }
                    // The menu result arrives as a variant; a repeated arm
                    // is ignored by the sequencer, not by the UI.
                    KeyAction::Arm(kind) => {
                        app.sequencer.arm(kind);
                    }
                }
            }
        }
    }
}

/// What a key press asks the application to do beyond screen-local state.
enum KeyAction {
    None,
    Quit,
    ManualRefresh,
    Arm(crate::providers::PowerActionKind),
}

/// Apply a key press to the current screen. Screen-local state changes
/// happen here; anything touching the orchestrator, dispatcher, or
/// sequencer is returned as a `KeyAction` for the caller.
fn handle_key(screen: &mut Screen, code: KeyCode) -> KeyAction {
    match screen {
        Screen::Splash => {
            if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
                return KeyAction::Quit;
            }
            // Any other key press skips the splash screen
            *screen = Screen::Dashboard(Box::new(DashboardState::new()));
            KeyAction::None
        }
        Screen::Dashboard(state) if state.menu_is_open() => {
            match code {
                KeyCode::Esc => state.close_shutdown_menu(),
                KeyCode::Up => state.menu_move(-1),
                KeyCode::Down => state.menu_move(1),
                KeyCode::Enter => {
                    let option = state.selected_option();
                    state.close_shutdown_menu();
                    if let Some(kind) = option.and_then(|option| option.action()) {
                        return KeyAction::Arm(kind);
                    }
                }
                _ => {}
            }
            KeyAction::None
        }
        Screen::Dashboard(state) => match code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('r') => KeyAction::ManualRefresh,
            KeyCode::Char('s') => {
                state.open_shutdown_menu();
                KeyAction::None
            }
            _ => KeyAction::None,
        },
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, orchestrator: &DashboardOrchestrator) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state, orchestrator.snapshot()),
    }
}
