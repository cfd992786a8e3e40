use std::io;
use std::thread;

use clap::Parser;
use log::info;
use wrap_snake::config::DEFAULT_GRID;
use wrap_snake::game::{GameState, TickResult};
use wrap_snake::input::InputHandler;
use wrap_snake::terminal_runtime::{TerminalSession, install_panic_hook};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the fruit placement for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(DEFAULT_GRID, seed),
        None => GameState::new(DEFAULT_GRID),
    }
    .map_err(io::Error::other)?;

    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    let state = run(&mut session, state)?;
    session.leave()?;

    info!(
        "session ended ({:?}): score {}, level {}, {} fruits",
        state.end_reason(),
        state.score(),
        state.level(),
        state.fruits_eaten()
    );
    Ok(())
}

fn run(session: &mut TerminalSession, mut state: GameState) -> io::Result<GameState> {
    let mut input = InputHandler::new();
    info!("session started on a {}x{} grid", state.bounds().width, state.bounds().height);

    loop {
        session.draw(&state)?;

        if let Some(game_input) = input.poll_input()? {
            state.apply_input(game_input);
        }

        if state.advance() == TickResult::GameOver {
            break;
        }

        thread::sleep(state.tick_interval());
    }

    session.draw(&state)?;
    input.wait_for_key()?;

    Ok(state)
}
