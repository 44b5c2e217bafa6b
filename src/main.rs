//! Terminal 2048 runner (default binary).
//!
//! Reads `TUI_2048_*` settings from the environment, then plays on the
//! alternate screen with crossterm input and the framebuffer renderer.
//! When the game ends the final board stays up until the next key press;
//! the result (`WIN`, `LOST` or `QUIT`) is printed after the terminal is
//! restored.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{Game, GameConfig};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::BoardState;

const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env().context("invalid TUI_2048_* configuration")?;
    let mut game = Game::new(&config).context("cannot build the board")?;
    log::info!(
        "starting {}x{} game, target {}, seed {}",
        config.width,
        config.height,
        config.target,
        game.board().seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    log::info!(
        "finished after {} moves, max tile {}",
        game.moves(),
        game.board().max_tile()
    );
    println!("{}", outcome.map(|s| s.as_str()).unwrap_or("QUIT"));
    Ok(())
}

/// Log to `TUI_2048_LOG_PATH` when set; stderr would garble the alternate screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG_PATH).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Play until the game ends (`Some(state)`) or the player quits (`None`).
fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<Option<BoardState>> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let over = game.is_over();

        match event::read()? {
            Event::Resize(_, _) => term.invalidate(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if over {
                    return Ok(Some(game.state()));
                }
                if should_quit(key) {
                    return Ok(None);
                }
                if let Some(direction) = handle_key_event(key) {
                    game.apply(direction);
                }
            }
            _ => {}
        }
    }
}
