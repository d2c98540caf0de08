//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the Cuisenaire rod puzzle: fill a row with
//! randomly drawn rods whose lengths sum exactly to a target width.
//! It has **no dependencies** on terminal I/O or async runtimes, making it:
//!
//! - **Deterministic**: a seeded or scripted [`RodSource`] reproduces a game exactly
//! - **Testable**: every rule is a plain method on [`GameSession`]
//! - **Portable**: the same session can drive a terminal, a GUI or a headless bot
//!
//! # Module Structure
//!
//! - [`rod`]: the immutable rod value and its process-unique id
//! - [`rng`]: rod generation behind the [`RodSource`] trait
//! - [`session`]: the session engine (start, place, discard, reset, retarget, tick)
//! - [`snapshot`]: read-only session copies for renderers and listeners
//! - [`scoring`]: completion score and the "will it fit" hint
//! - [`error`]: validation errors returned by the engine
//!
//! # Game Rules
//!
//! - Rods have lengths 1-10, drawn uniformly, each length with a fixed color
//! - A rod is appended only if the row sum stays at or below the target
//! - A rod that would overshoot is rejected and counts as a trial
//! - Discarding the offered rod also counts as a trial
//! - The row is complete when the sum equals the target; the session then stops
//!
//! # Example
//!
//! ```
//! use cuisenaire_core::{GameSession, Placement, ScriptedRods};
//!
//! let mut session = GameSession::with_source(ScriptedRods::new([4, 6]).unwrap());
//! session.start(10).unwrap();
//!
//! assert_eq!(session.place_offered(), Ok(Placement::Accepted));
//! assert_eq!(session.place_offered(), Ok(Placement::Completed));
//! assert!(session.is_row_complete());
//! ```
//!
//! # Timing
//!
//! The session counts whole seconds. Call
//! [`GameSession::tick`](session::GameSession::tick) once per second; it only
//! advances the clock while the session is active and the row is open.

pub mod error;
pub mod rng;
pub mod rod;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use cuisenaire_types as types;

// Re-export commonly used types for convenience
pub use error::EngineError;
pub use rng::{RandomRods, RodSource, ScriptedRods};
pub use rod::{Rod, RodId};
pub use scoring::{completion_score, FitHint};
pub use session::{GameSession, Placement, Retarget};
pub use snapshot::{Phase, SessionSnapshot};
