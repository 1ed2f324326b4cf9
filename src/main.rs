//! Terminal Bug Hunt runner (default binary).
//!
//! Reads configuration, sets up the terminal and feeds key events to the
//! app until the player quits. The terminal is restored on every exit path.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use bug_hunt::input::{handle_key_event, should_quit};
use bug_hunt::term::{FrameBuffer, RenderThrottle, TerminalRenderer, Viewport};
use bug_hunt::types::{STATIC_REDRAW_MS, TICK_MS};
use bug_hunt::{parse_args, App, AppConfig, CliCommand, USAGE};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(AppConfig::from_env()?, &args)? {
        CliCommand::PrintUsage => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    let mut app = App::new(&config)?;
    if let Some(path) = &config.log_path {
        eprintln!("[bug-hunt] logging events to {}", path);
    }

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &mut app));

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(err) = app.log().error() {
        eprintln!("[bug-hunt] event log disabled after write error: {}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let started = Instant::now();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fb.fingerprint()) {
            term.present(&fb)?;
        }

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key, app.screen()) {
                    app.apply_action(action)?;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                throttle.reset();
            }
            _ => {}
        }
    }
}
