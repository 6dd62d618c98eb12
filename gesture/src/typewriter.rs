//! Incremental text reveal with jittered pacing.
//!
//! A [`Typewriter`] owns at most one [`RevealJob`]. [`Typewriter::reveal`]
//! clears the sink, replaces any job in flight, and writes the first
//! character immediately. Each returned [`Step::Continue`] tells the host to
//! call [`Typewriter::advance`] after `delay_ms`; the host keeps a single
//! pending timer and drops it whenever a new reveal starts.
//!
//! Steps carry the [`JobId`] they were scheduled for. A step for a job that
//! has since been replaced reports [`Step::Stale`] and writes nothing, so a
//! timer that slips through cancellation can never interleave characters
//! from two jobs.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::consts::{MIN_STEP_DELAY_MS, SPEED_JITTER_MS};

const LINE_BREAK: char = '\n';

/// One unit of revealed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Char(char),
    LineBreak,
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        if ch == LINE_BREAK { Self::LineBreak } else { Self::Char(ch) }
    }
}

/// Destination for revealed text.
pub trait TextSink {
    /// Remove everything shown so far.
    fn clear(&mut self);
    /// Append one glyph.
    fn push(&mut self, glyph: Glyph);
}

impl TextSink for String {
    fn clear(&mut self) {
        String::clear(self);
    }

    fn push(&mut self, glyph: Glyph) {
        match glyph {
            Glyph::Char(ch) => String::push(self, ch),
            Glyph::LineBreak => String::push(self, LINE_BREAK),
        }
    }
}

/// Identifies one reveal job within a [`Typewriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Revealing,
}

/// What the host should do after a reveal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Call [`Typewriter::advance`] with `job` after `delay_ms`.
    Continue { job: JobId, delay_ms: u32 },
    /// The job wrote its last character.
    Complete,
    /// The step belonged to a job that was replaced or already finished.
    Stale,
}

/// An in-progress reveal.
#[derive(Debug, Clone)]
pub struct RevealJob {
    id: JobId,
    text: Vec<char>,
    cursor: usize,
    base_speed_ms: u32,
}

#[cfg(test)]
impl RevealJob {
    /// Characters written so far.
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total characters in the job.
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Per-sink reveal scheduler.
pub struct Typewriter<R = SmallRng> {
    job: Option<RevealJob>,
    next_id: u64,
    rng: R,
}

impl Typewriter<SmallRng> {
    /// A scheduler whose jitter sequence is determined by `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Typewriter<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { job: None, next_id: 0, rng }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        if self.job.is_some() { RevealState::Revealing } else { RevealState::Idle }
    }

    /// The job in flight, if any.
    #[cfg(test)]
    pub(crate) fn job(&self) -> Option<&RevealJob> {
        self.job.as_ref()
    }

    /// Start revealing `text` into `sink`, replacing any job in flight.
    ///
    /// `base_speed_ms` is the nominal per-character delay; zero is treated as one.
    pub fn reveal<S: TextSink + ?Sized>(&mut self, text: &str, base_speed_ms: u32, sink: &mut S) -> Step {
        sink.clear();
        self.next_id = self.next_id.wrapping_add(1);
        let id = JobId(self.next_id);
        if text.is_empty() {
            self.job = None;
            return Step::Complete;
        }
        self.job = Some(RevealJob { id, text: text.chars().collect(), cursor: 0, base_speed_ms: base_speed_ms.max(1) });
        self.advance(id, sink)
    }

    /// Write the next character of `job` into `sink`.
    pub fn advance<S: TextSink + ?Sized>(&mut self, job: JobId, sink: &mut S) -> Step {
        let Some(current) = self.job.as_mut() else {
            return Step::Stale;
        };
        if current.id != job {
            return Step::Stale;
        }
        let Some(&ch) = current.text.get(current.cursor) else {
            self.job = None;
            return Step::Complete;
        };

        sink.push(Glyph::from(ch));
        current.cursor += 1;

        if current.cursor < current.text.len() {
            let delay_ms = step_delay(&mut self.rng, current.base_speed_ms);
            Step::Continue { job, delay_ms }
        } else {
            self.job = None;
            Step::Complete
        }
    }
}

/// Delay before the next step: `max(MIN_STEP_DELAY_MS, base ± SPEED_JITTER_MS)`.
pub fn step_delay<R: Rng>(rng: &mut R, base_speed_ms: u32) -> u32 {
    let jitter = rng.random_range(-SPEED_JITTER_MS..=SPEED_JITTER_MS);
    let delay = i64::from(base_speed_ms) + i64::from(jitter);
    u32::try_from(delay.max(i64::from(MIN_STEP_DELAY_MS))).unwrap_or(u32::MAX)
}
