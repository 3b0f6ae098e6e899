use std::io;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::input::{ArrowKey, GameInput};

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode, alternate screen, key-release
/// reporting) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    key_release_events: bool,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        // Key-up events need the kitty keyboard protocol; elsewhere a held
        // key is simply never released, which only affects validation.
        let key_release_events = supports_keyboard_enhancement().unwrap_or(false)
            && execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .is_ok();
        debug!(key_release_events, "terminal session entered");

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                key_release_events,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort(key_release_events);
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort(self.key_release_events);
    }
}

/// Restores the terminal; safe to call from a panic hook.
pub fn cleanup_terminal_best_effort(pop_keyboard_flags: bool) -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if pop_keyboard_flags {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Waits up to `timeout` for one terminal event and translates it.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key_event(key)),
        _ => Ok(None),
    }
}

/// Translates a key event into a game input. Arrows, `hjkl`, and `wasd` all
/// steer; only presses quit or restart.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if let Some(arrow) = arrow_for(key.code) {
        return match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(GameInput::Press(arrow)),
            KeyEventKind::Release => Some(GameInput::Release(arrow)),
        };
    }

    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Restart),
        _ => None,
    }
}

fn arrow_for(code: KeyCode) -> Option<ArrowKey> {
    match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Some(ArrowKey::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Some(ArrowKey::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Some(ArrowKey::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Some(ArrowKey::Right),
        _ => None,
    }
}
