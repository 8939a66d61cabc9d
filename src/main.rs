//! Terminal front end for star-match.

mod cli;

use std::{
    fs::OpenOptions,
    io::stdout,
    path::Path,
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use star_match::ui::{self, Command, GameLayout};
use star_match::{GameRng, Session};

/// Input poll timeout while no countdown is running.
const IDLE_POLL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file);

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let session = Session::new(rng, Instant::now());

    let mut terminal = ratatui::try_init()?;

    // ratatui's hook restores raw mode and the alternate screen, not the mouse
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        disable_mouse_capture();
        hook(info);
    }));

    let res = execute!(stdout(), EnableMouseCapture)
        .map_err(anyhow::Error::from)
        .and_then(|()| run(&mut terminal, session));

    // Restore the terminal even if the game loop failed
    disable_mouse_capture();
    ratatui::restore();

    if let Err(e) = &res {
        tracing::error!(error = %e, "Game loop failed");
    }
    info!("Exiting");
    res
}

fn disable_mouse_capture() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!(error = %e, "Failed to disable mouse capture");
    }
}

fn init_tracing(log_path: &Path) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            info!(path = %log_path.display(), "Logging initialized");
        }
        // Writing to stdout/stderr would corrupt the TUI, so go without logs.
        Err(_) => tracing_subscriber::registry().with(env_filter).init(),
    }
}

/// Redraw, wait for input or the next tick, apply, repeat.
fn run(terminal: &mut DefaultTerminal, mut session: Session) -> Result<()> {
    loop {
        session.round_mut().advance_clock(Instant::now());

        let view = session.round().view();
        let mut layout = GameLayout::default();
        terminal.draw(|frame| {
            layout = ui::draw(frame, &view);
        })?;

        let timeout = session
            .round()
            .countdown()
            .remaining(Instant::now())
            .unwrap_or(IDLE_POLL);
        if !event::poll(timeout)? {
            continue;
        }

        let command = match event::read()? {
            Event::Key(key) => ui::command_for_key(key, view.outcome),
            Event::Mouse(mouse) => ui::command_for_mouse(mouse, &layout, view.outcome),
            _ => None,
        };

        match command {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Select(n)) => {
                // Report the status the player saw, not a recomputed one
                if let Err(e) = session.round_mut().on_number_selected(n, view.status(n)) {
                    warn!(error = %e, n, "Selection rejected");
                }
            }
            Some(Command::PlayAgain) => {
                session.start_new_round(Instant::now());
            }
            None => {}
        }
    }
}
