//! Game engine boundary - the session plus its clock.
//!
//! [`Game`] is what a presentation layer talks to: it forwards intents to the
//! [`GameSession`](cuisenaire_core::GameSession), keeps a cancelable one-second
//! [`Ticker`] running exactly while the session is active, and notifies
//! subscribers with a fresh [`SessionSnapshot`](cuisenaire_core::SessionSnapshot)
//! after every change.
//!
//! The clock runs as a tokio task on a runtime handle supplied by the caller;
//! ticks are delivered over a channel and applied on the caller's thread by
//! [`Game::pump`].

pub mod game;
pub mod ticker;

pub use cuisenaire_core as core;
pub use cuisenaire_types as types;

pub use game::{Game, SubscriptionId};
pub use ticker::{Tick, Ticker};
