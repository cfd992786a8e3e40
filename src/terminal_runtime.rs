use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::GameState;
use crate::renderer;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Full-screen play session: raw keys, no echo, hidden cursor, cleared
/// alternate screen.
///
/// [`TerminalSession::leave`] restores the terminal and reports failures;
/// dropping an un-left session restores it best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Takes over the terminal for one game.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }

    /// Draws one frame of `state`.
    pub fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, state))
            .map(|_| ())
    }

    /// Hands the terminal back to the shell.
    pub fn leave(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.restored {
            return;
        }

        if let Err(error) = restore_terminal() {
            log::warn!("failed to restore terminal: {error}");
        }
    }
}

/// Chains a panic hook that puts the terminal back before the report prints.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}

fn restore_terminal() -> io::Result<()> {
    let raw_mode = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    raw_mode
}
