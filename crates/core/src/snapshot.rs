//! Read-only session snapshots handed to the view and to listeners.

use std::hash::{Hash, Hasher};

use crate::rod::Rod;
use crate::scoring::{completion_score, FitHint};
use crate::types::DEFAULT_TARGET_WIDTH;

/// Session lifecycle phase, derived from the `game_active` / `row_complete` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not started yet.
    Idle,
    /// Accepting placements and discards; the clock runs.
    Active,
    /// Row filled exactly; waiting for start/reset.
    Complete,
}

impl Phase {
    pub fn from_flags(game_active: bool, row_complete: bool) -> Self {
        match (game_active, row_complete) {
            (_, true) => Phase::Complete,
            (true, false) => Phase::Active,
            (false, false) => Phase::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Active => "active",
            Phase::Complete => "complete",
        }
    }
}

/// Read-only copy of the session handed to renderers and listeners.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub session_id: u32,
    pub target_width: u32,
    pub pending_target: Option<u32>,
    pub row: Vec<Rod>,
    pub current_sum: u32,
    pub available: Option<Rod>,
    pub trials: u32,
    pub time_elapsed: u32,
    pub row_complete: bool,
    pub game_active: bool,
}

impl SessionSnapshot {
    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.game_active, self.row_complete)
    }

    /// Place/discard controls are enabled.
    pub fn playable(&self) -> bool {
        self.game_active && !self.row_complete
    }

    /// Units still missing from the row.
    pub fn remaining(&self) -> u32 {
        self.target_width.saturating_sub(self.current_sum)
    }

    /// Completion score, only once the row is complete.
    pub fn score(&self) -> Option<u32> {
        self.row_complete
            .then(|| completion_score(self.target_width, self.time_elapsed, self.trials))
    }

    /// Whether the offered rod fits, while the session is playable.
    pub fn fit_hint(&self) -> Option<FitHint> {
        if !self.playable() {
            return None;
        }
        self.available
            .map(|rod| FitHint::evaluate(self.current_sum, self.target_width, rod.length()))
    }

    /// Stable 64-bit fingerprint (FNV-1a) used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            session_id: 0,
            target_width: DEFAULT_TARGET_WIDTH,
            pending_target: None,
            row: Vec::new(),
            current_sum: 0,
            available: None,
            trials: 0,
            time_elapsed: 0,
            row_complete: false,
            game_active: false,
        }
    }
}

/// FNV-1a; `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
