//! Terminal Cuisenaire rod puzzle (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `cuisenaire::term`.
//! The one-second game clock runs on a tokio runtime; the loop below drains its
//! ticks between input polls.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::{Handle, Runtime};
use tracing::{debug, info};

use cuisenaire::core::{GameSession, Phase, RandomRods};
use cuisenaire::engine::Game;
use cuisenaire::input::{handle_key_event, should_quit};
use cuisenaire::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use cuisenaire::{logging, App, AppConfig};

/// Redraw at least this often even when nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    // Logging first, so config validation warnings are recorded.
    let logging_on = logging::init(AppConfig::log_path_from_env().as_deref())?;
    let config = AppConfig::from_env();
    if logging_on {
        info!(?config, "starting");
    }

    let rt = Runtime::new().context("failed to create tokio runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, rt.handle().clone());

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, handle: Handle) -> Result<()> {
    let source = config
        .seed
        .map(RandomRods::seeded)
        .unwrap_or_else(RandomRods::from_entropy);
    info!(seed = source.seed(), "rod generator ready");

    let mut game = Game::new(GameSession::with_source(source), handle);
    let mut last_phase = Phase::Idle;
    game.subscribe(move |snap| {
        let phase = snap.phase();
        if phase != last_phase {
            info!(
                session_id = snap.session_id,
                from = last_phase.as_str(),
                to = phase.as_str(),
                score = snap.score(),
                "phase changed"
            );
            last_phase = phase;
        }
    });

    let mut app = App::new(game, config.target_width, !config.hide_instructions);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(REFRESH_MS);
    let frame = Duration::from_millis(config.frame_ms);
    let started = Instant::now();

    loop {
        app.pump();

        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, app.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(app.snapshot(), &app.overlays(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input, waiting at most one frame so clock ticks show up promptly.
        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, app.input_mode()) {
                    debug!(action = action.as_str(), "key action");
                    app.apply(action);
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                throttle.invalidate();
            }
            _ => {}
        }
    }
}
