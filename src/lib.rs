//! Cuisenaire rod puzzle (workspace facade crate).
//!
//! The engine, clock, input mapping and renderer live in dedicated crates under
//! `crates/`; this package re-exports them as `cuisenaire::{core,engine,input,term,types}`
//! and adds the application layer used by the binary.

pub use cuisenaire_core as core;
pub use cuisenaire_engine as engine;
pub use cuisenaire_input as input;
pub use cuisenaire_term as term;
pub use cuisenaire_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::App;
pub use config::AppConfig;
