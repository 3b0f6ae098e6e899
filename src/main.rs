use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use slot_snake::config::Config;
use slot_snake::error::{AppError, ConfigError};
use slot_snake::input::GameInput;
use slot_snake::logging;
use slot_snake::renderer;
use slot_snake::session::Session;
use slot_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort, poll_input};
use slot_snake::theme::Palette;
use tracing::info;

/// Frame budget; input polling waits at most this long per frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file (camelCase keys); missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Tick interval in milliseconds.
    #[arg(long)]
    speed: Option<u64>,

    /// Board height in slots.
    #[arg(long)]
    rows: Option<u16>,

    /// Board width in slots.
    #[arg(long)]
    cols: Option<u16>,

    /// Write logs here (filtered by RUST_LOG, default "info").
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = build_config(&cli)?;
    let palette = Palette::resolve(&config.palette)?;
    let session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };

    install_panic_hook();
    run(session, &palette)?;
    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(speed) = cli.speed {
        config.speed = speed;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }

    config.validate()?;
    Ok(config)
}

fn run(mut session: Session, palette: &Palette) -> Result<(), AppError> {
    let mut terminal = TerminalSession::enter()?;
    info!(
        rows = session.config().rows,
        cols = session.config().cols,
        speed_ms = session.config().speed,
        "game started"
    );

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session, palette))?;

        match poll_input(FRAME_INTERVAL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Restart) if session.is_finished() => session.restart(),
            Some(GameInput::Press(key)) => session.press(key),
            Some(GameInput::Release(key)) => session.release(key),
            Some(GameInput::Restart) | None => {}
        }

        session.frame(Instant::now());
    }

    info!(score = session.snapshot().game.score, "quit");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort(true);
        default_hook(panic_info);
    }));
}
