//! Terminal Blockfall runner.
//!
//! Fixed-timestep loop: drain input, advance held-button repeats, tick the
//! session, advance the score count-up, then render the frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall::core::{entropy_seed, GameSession, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit, HoldRepeater};
use blockfall::term::{FrameBuffer, GameView, ScoreTicker, TerminalRenderer, Viewport};
use blockfall::types::GameAction;
use blockfall::{AppConfig, EventLog};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let mut log = EventLog::open(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config, &mut log));

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(e) = log.write_error() {
        eprintln!("[Game] event log disabled: {}", e);
    }
    if result.is_ok() {
        println!("{}", log.summary());
    }
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App<'a> {
    game: GameSession,
    seed: u64,
    repeater: HoldRepeater,
    ticker: ScoreTicker,
    log: &'a mut EventLog,
}

impl App<'_> {
    fn start(&mut self) {
        self.game.start();
        self.repeater.cancel_all();
        self.ticker.set_target(0);
        self.log.game_started(self.seed);
    }

    fn apply(&mut self, action: GameAction) {
        if action == GameAction::Start {
            self.start();
            return;
        }
        self.game.apply_action(action);
        self.drain_events();
    }

    fn on_key(&mut self, key: KeyEvent) -> Flow {
        match key.kind {
            KeyEventKind::Press => {
                if should_quit(key) {
                    return Flow::Quit;
                }
                if let Some(action) = self.repeater.handle_key_press(key.code) {
                    self.apply(action);
                } else if handle_key_event(key) == Some(GameAction::Start) {
                    self.apply(GameAction::Start);
                }
            }
            // Held buttons repeat on our own clock.
            KeyEventKind::Repeat => self.repeater.handle_key_repeat(key.code),
            KeyEventKind::Release => self.repeater.handle_key_release(key.code),
        }
        Flow::Continue
    }

    /// Forward lock events to the log; stop repeats once the game ends.
    fn drain_events(&mut self) {
        if let Some(ev) = self.game.take_last_event() {
            self.log.lock(&ev);
            if ev.game_over {
                self.repeater.cancel_all();
            }
        }
    }

    fn frame(&mut self, frame_ms: u32) {
        for action in self.repeater.update(frame_ms) {
            self.apply(action);
        }
        self.game.tick(frame_ms);
        self.drain_events();

        self.ticker.set_target(self.game.score());
        self.ticker.update(frame_ms);
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, log: &mut EventLog) -> Result<()> {
    let seed = config.seed.unwrap_or_else(entropy_seed);
    let mut repeater = HoldRepeater::with_repeat_ms(config.repeat_ms);
    if term.keyboard_enhanced() {
        repeater = repeater.without_key_release_timeout();
    }
    let mut app = App {
        game: GameSession::new(seed),
        seed,
        repeater,
        ticker: ScoreTicker::new(),
        log,
    };
    if config.autostart {
        app.start();
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame_ms = config.frame_ms;
    let frame_duration = Duration::from_millis(frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Input until the next frame is due.
        let timeout = frame_duration.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if app.on_key(key) == Flow::Quit {
                            return Ok(());
                        }
                    }
                    Event::FocusLost => app.repeater.cancel_all(),
                    Event::Resize(..) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if last_frame.elapsed() < frame_duration {
            continue;
        }
        last_frame = Instant::now();

        app.frame(frame_ms);

        app.game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into_with_score(&snap, app.ticker.displayed(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
