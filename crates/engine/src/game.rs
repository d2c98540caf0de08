//! Game driver: one session, its clock, and the listeners that re-render on change.
//!
//! Every operation goes through the session first, then the driver re-evaluates
//! whether the clock should run and publishes a new snapshot if anything changed.

use std::time::Duration;

use tokio::runtime::Handle;
use tracing::{debug, trace};

use crate::core::{
    EngineError, GameSession, Placement, RandomRods, Retarget, Rod, RodSource, SessionSnapshot,
};
use crate::ticker::Ticker;
use crate::types::TICK_MS;

/// Handle returned by [`Game::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionSnapshot)>;

pub struct Game<S = RandomRods> {
    session: GameSession<S>,
    ticker: Ticker,
    /// Session id the running clock was started for.
    clock_session: Option<u32>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    published: SessionSnapshot,
    scratch: SessionSnapshot,
}

impl<S: RodSource> Game<S> {
    /// Wrap `session`; the clock is spawned on `handle`.
    pub fn new(session: GameSession<S>, handle: Handle) -> Self {
        Self::with_period(session, handle, Duration::from_millis(TICK_MS))
    }

    pub fn with_period(session: GameSession<S>, handle: Handle, period: Duration) -> Self {
        let published = session.snapshot();
        let mut game = Self {
            session,
            ticker: Ticker::new(handle, period),
            clock_session: None,
            listeners: Vec::new(),
            next_subscription: 0,
            scratch: published.clone(),
            published,
        };
        game.sync_clock();
        game
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Latest published state.
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.published
    }

    pub fn clock_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn start(&mut self, target_width: u32) -> Result<(), EngineError> {
        let result = self.session.start(target_width);
        self.after_operation();
        result
    }

    pub fn place(&mut self, rod: &Rod) -> Result<Placement, EngineError> {
        let result = self.session.place(rod);
        self.after_operation();
        result
    }

    pub fn place_offered(&mut self) -> Result<Placement, EngineError> {
        let result = self.session.place_offered();
        self.after_operation();
        result
    }

    pub fn discard(&mut self) -> Result<Rod, EngineError> {
        let result = self.session.discard();
        self.after_operation();
        result
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.after_operation();
    }

    pub fn retarget(&mut self, new_width: u32) -> Retarget {
        let outcome = self.session.retarget(new_width);
        self.after_operation();
        outcome
    }

    /// Apply the ticks that arrived since the last call. Returns how many
    /// advanced the clock.
    pub fn pump(&mut self) -> u32 {
        let pending = self.ticker.drain();
        let mut applied = 0;
        for _ in 0..pending {
            if self.session.tick() {
                applied += 1;
            }
        }
        if pending > 0 {
            trace!(pending, applied, "ticks pumped");
            self.after_operation();
        }
        applied
    }

    /// Register a listener called with every new snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn after_operation(&mut self) {
        self.sync_clock();
        self.publish();
    }

    /// Run the clock exactly while the session is active with an open row,
    /// restarting it whenever a new session begins.
    fn sync_clock(&mut self) {
        if self.session.is_running() {
            let id = self.session.session_id();
            if self.clock_session != Some(id) || !self.ticker.is_running() {
                self.ticker.start();
                self.clock_session = Some(id);
                debug!(session_id = id, "clock started");
            }
        } else if self.ticker.is_running() {
            self.ticker.stop();
            self.clock_session = None;
            debug!(phase = self.session.phase().as_str(), "clock stopped");
        }
    }

    fn publish(&mut self) {
        self.session.snapshot_into(&mut self.scratch);
        if self.scratch == self.published {
            return;
        }
        std::mem::swap(&mut self.scratch, &mut self.published);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.published);
        }
    }
}
