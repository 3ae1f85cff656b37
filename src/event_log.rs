//! Game event log.
//!
//! Writes `[Game] ...` lines to the file named by `BLOCKFALL_LOG_PATH`. The
//! terminal is in the alternate screen while playing, so nothing goes to
//! stdout until the run ends and [`EventLog::summary`] is printed.
//!
//! A write failure disables the file log for the rest of the run instead of
//! ending the game.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::LockEvent;

/// Totals across every game of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub games: u32,
    pub pieces_locked: u32,
    pub lines: u32,
    pub best_score: u32,
    pub last_score: u32,
}

pub struct EventLog {
    out: Option<Box<dyn Write>>,
    write_error: Option<io::Error>,
    stats: RunStats,
}

impl EventLog {
    /// Open `path` for appending, or log nowhere when `None`.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let out = match path {
            Some(path) => {
                let file: File = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("open event log {}", path.display()))?;
                Some(Box::new(LineWriter::new(file)) as Box<dyn Write>)
            }
            None => None,
        };
        Ok(Self::with_writer(out))
    }

    pub fn disabled() -> Self {
        Self::with_writer(None)
    }

    /// Log into any writer.
    pub fn with_writer(out: Option<Box<dyn Write>>) -> Self {
        Self {
            out,
            write_error: None,
            stats: RunStats::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The error that disabled the log, if any.
    pub fn write_error(&self) -> Option<&io::Error> {
        self.write_error.as_ref()
    }

    pub fn game_started(&mut self, seed: u64) {
        self.stats.games += 1;
        self.stats.last_score = 0;
        let game = self.stats.games;
        self.line(format_args!("start game={} seed={}", game, seed));
    }

    pub fn lock(&mut self, ev: &LockEvent) {
        self.stats.pieces_locked += 1;
        self.stats.lines += ev.lines_cleared;
        self.stats.last_score = ev.score;
        self.stats.best_score = self.stats.best_score.max(ev.score);

        if ev.lines_cleared > 0 {
            self.line(format_args!(
                "clear lines={} +{} score={}",
                ev.lines_cleared, ev.score_delta, ev.score
            ));
        }
        if ev.level_up {
            self.line(format_args!("level up level={}", ev.level));
        }
        if ev.game_over {
            self.line(format_args!("game over score={} level={}", ev.score, ev.level));
        }
    }

    /// One line for stdout once the terminal is restored.
    pub fn summary(&self) -> String {
        let s = &self.stats;
        format!(
            "[Game] games={} pieces={} lines={} last_score={} best_score={}",
            s.games, s.pieces_locked, s.lines, s.last_score, s.best_score
        )
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        if let Err(e) = writeln!(out, "[Game] {}", args) {
            self.out = None;
            self.write_error = Some(e);
        }
    }
}
