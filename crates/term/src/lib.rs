//! Terminal rendering for the rod puzzle.
//!
//! Rendering is split in two: a pure `GameView` that paints a session snapshot
//! into a `FrameBuffer`, and a `TerminalRenderer` that flushes framebuffers to
//! the terminal with crossterm, re-emitting only cells that changed.
//!
//! One rod unit is drawn two columns wide so rods keep their proportions.

pub mod fb;
pub mod format;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use cuisenaire_core as core;
pub use cuisenaire_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use format::format_elapsed;
pub use game_view::{GameView, Overlays, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
