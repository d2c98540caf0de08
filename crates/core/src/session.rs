//! Game session module - the rules engine
//!
//! A [`GameSession`] owns the row being built, the offered rod, the trial counter
//! and the elapsed-time counter. Every operation either applies completely or
//! leaves the session untouched.
//!
//! Invariants held after every operation:
//!
//! - `current_sum` equals the sum of the row's rod lengths
//! - `current_sum <= target_width`
//! - `row_complete` is true iff `current_sum == target_width` (once started)
//! - a complete row has no offered rod and is not active

use tracing::{debug, info, trace};

use crate::error::EngineError;
use crate::rng::{RandomRods, RodSource};
use crate::rod::Rod;
use crate::snapshot::{Phase, SessionSnapshot};
use crate::types::{is_valid_target, DEFAULT_TARGET_WIDTH};

/// Outcome of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Rod appended, row still open, a new rod was offered.
    Accepted,
    /// Rod would overshoot the target; counted as a trial and replaced.
    Rejected,
    /// Rod appended and the row now matches the target exactly.
    Completed,
}

/// Outcome of a target change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// Target changed immediately.
    Applied,
    /// Stored and applied by the next reset, since applying now would
    /// contradict the row already on the board.
    Deferred,
    /// Outside the accepted range.
    Ignored,
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomRods> {
    source: S,
    target_width: u32,
    pending_target: Option<u32>,
    row: Vec<Rod>,
    current_sum: u32,
    available: Option<Rod>,
    trials: u32,
    time_elapsed: u32,
    row_complete: bool,
    game_active: bool,
    /// Monotonic session id (increments on start and reset).
    session_id: u32,
}

impl GameSession<RandomRods> {
    /// Create an idle session drawing random rods from the given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_source(RandomRods::seeded(seed))
    }
}

impl<S: RodSource> GameSession<S> {
    /// Create an idle session with the default target.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            target_width: DEFAULT_TARGET_WIDTH,
            pending_target: None,
            row: Vec::new(),
            current_sum: 0,
            available: None,
            trials: 0,
            time_elapsed: 0,
            row_complete: false,
            game_active: false,
            session_id: 0,
        }
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn pending_target(&self) -> Option<u32> {
        self.pending_target
    }

    pub fn row(&self) -> &[Rod] {
        &self.row
    }

    pub fn current_sum(&self) -> u32 {
        self.current_sum
    }

    pub fn available_rod(&self) -> Option<Rod> {
        self.available
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    pub fn is_row_complete(&self) -> bool {
        self.row_complete
    }

    pub fn game_active(&self) -> bool {
        self.game_active
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.game_active, self.row_complete)
    }

    /// The clock should be running.
    pub fn is_running(&self) -> bool {
        self.game_active && !self.row_complete
    }

    /// Begin a fresh session with `target_width`.
    pub fn start(&mut self, target_width: u32) -> Result<(), EngineError> {
        if !is_valid_target(target_width) {
            debug!(target_width, "start rejected: target out of range");
            return Err(EngineError::InvalidConfiguration {
                width: target_width,
            });
        }

        self.target_width = target_width;
        self.pending_target = None;
        self.begin();
        info!(
            session_id = self.session_id,
            target_width, "session started"
        );
        Ok(())
    }

    /// Clear the row and start over with the current target (or a deferred one).
    pub fn reset(&mut self) {
        if let Some(target) = self.pending_target.take() {
            self.target_width = target;
        }
        self.begin();
        info!(
            session_id = self.session_id,
            target_width = self.target_width,
            "session reset"
        );
    }

    /// Place `rod`, which must be the offered rod.
    pub fn place(&mut self, rod: &Rod) -> Result<Placement, EngineError> {
        if !self.is_running() {
            return Err(EngineError::SessionNotActive);
        }
        let offered = self.available.map(|r| r.id());
        if offered != Some(rod.id()) {
            return Err(EngineError::StaleRod {
                offered,
                given: rod.id(),
            });
        }

        let candidate_sum = self.current_sum + rod.length();
        if candidate_sum > self.target_width {
            self.trials += 1;
            self.offer();
            debug!(
                length = rod.length(),
                current_sum = self.current_sum,
                target_width = self.target_width,
                trials = self.trials,
                "placement rejected"
            );
            self.check_invariants();
            return Ok(Placement::Rejected);
        }

        self.row.push(*rod);
        self.current_sum = candidate_sum;

        let placement = if candidate_sum == self.target_width {
            self.row_complete = true;
            self.game_active = false;
            self.available = None;
            info!(
                session_id = self.session_id,
                rods = self.row.len(),
                trials = self.trials,
                time_elapsed = self.time_elapsed,
                "row complete"
            );
            Placement::Completed
        } else {
            self.offer();
            debug!(length = rod.length(), current_sum = self.current_sum, "rod placed");
            Placement::Accepted
        };

        self.check_invariants();
        Ok(placement)
    }

    /// Place whatever rod is currently offered.
    pub fn place_offered(&mut self) -> Result<Placement, EngineError> {
        if !self.is_running() {
            return Err(EngineError::SessionNotActive);
        }
        let rod = self.available.ok_or(EngineError::NoRodAvailable)?;
        self.place(&rod)
    }

    /// Throw the offered rod away and offer another. Returns the new rod.
    pub fn discard(&mut self) -> Result<Rod, EngineError> {
        if !self.is_running() {
            return Err(EngineError::SessionNotActive);
        }
        let old = self.available.ok_or(EngineError::NoRodAvailable)?;

        self.trials += 1;
        let rod = self.offer();
        debug!(
            discarded = old.length(),
            offered = rod.length(),
            trials = self.trials,
            "rod discarded"
        );
        self.check_invariants();
        Ok(rod)
    }

    /// Change the target width.
    ///
    /// Out-of-range widths are ignored. In range, the change applies at once if
    /// the current row stays valid under it, and is deferred to the next reset
    /// otherwise.
    pub fn retarget(&mut self, new_width: u32) -> Retarget {
        if !is_valid_target(new_width) {
            debug!(new_width, "retarget ignored: out of range");
            return Retarget::Ignored;
        }

        let applies_now = match self.phase() {
            Phase::Idle => true,
            Phase::Active => new_width > self.current_sum,
            Phase::Complete => new_width == self.target_width,
        };

        if applies_now {
            self.target_width = new_width;
            self.pending_target = None;
            debug!(new_width, "target changed");
            Retarget::Applied
        } else {
            self.pending_target = Some(new_width);
            debug!(
                new_width,
                current_sum = self.current_sum,
                "target change deferred until reset"
            );
            Retarget::Deferred
        }
    }

    /// Advance the elapsed-time counter by one second, if the clock is running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.time_elapsed += 1;
        trace!(time_elapsed = self.time_elapsed, "tick");
        true
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.session_id = self.session_id;
        out.target_width = self.target_width;
        out.pending_target = self.pending_target;
        out.row.clear();
        out.row.extend_from_slice(&self.row);
        out.current_sum = self.current_sum;
        out.available = self.available;
        out.trials = self.trials;
        out.time_elapsed = self.time_elapsed;
        out.row_complete = self.row_complete;
        out.game_active = self.game_active;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Zero the session, mark it active and offer the first rod.
    fn begin(&mut self) {
        self.session_id = self.session_id.wrapping_add(1);
        self.row.clear();
        self.current_sum = 0;
        self.available = None;
        self.trials = 0;
        self.time_elapsed = 0;
        self.row_complete = false;
        self.game_active = true;
        self.offer();
        self.check_invariants();
    }

    fn offer(&mut self) -> Rod {
        let rod = self.source.draw();
        self.available = Some(rod);
        rod
    }

    fn check_invariants(&self) {
        debug_assert_eq!(
            self.current_sum,
            self.row.iter().map(Rod::length).sum::<u32>()
        );
        debug_assert!(self.current_sum <= self.target_width);
        debug_assert_eq!(self.row_complete, self.current_sum == self.target_width);
        debug_assert!(!(self.row_complete && (self.game_active || self.available.is_some())));
    }
}

impl Default for GameSession<RandomRods> {
    fn default() -> Self {
        Self::with_source(RandomRods::from_entropy())
    }
}
