//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (session engine, terminal rendering, input mapping).
//!
//! # Rod Lengths
//!
//! Cuisenaire rods come in ten lengths, `MIN_ROD_LENGTH..=MAX_ROD_LENGTH`, and each
//! length has exactly one standard color:
//!
//! | Length | Color | Hex |
//! |--------|-------|-----|
//! | 1 | White/Beige | `#e8e2c5` |
//! | 2 | Red | `#d63d3d` |
//! | 3 | Light Green | `#8ecca3` |
//! | 4 | Purple | `#a37bc4` |
//! | 5 | Yellow | `#f5d742` |
//! | 6 | Dark Green | `#3b8c55` |
//! | 7 | Black | `#2b2b2b` |
//! | 8 | Brown | `#7a4f36` |
//! | 9 | Blue | `#4a80c9` |
//! | 10 | Orange | `#e08831` |
//!
//! # Target Width
//!
//! The row target is configurable within `MIN_TARGET_WIDTH..=MAX_TARGET_WIDTH`
//! and defaults to `DEFAULT_TARGET_WIDTH`.
//!
//! # Examples
//!
//! ```
//! use cuisenaire_types::{rod_color, GameAction, RodColor, DEFAULT_TARGET_WIDTH};
//!
//! assert_eq!(rod_color(2), Some(RodColor::from_hex(0xd63d3d)));
//! assert_eq!(rod_color(11), None);
//!
//! let action = GameAction::from_str("discard").unwrap();
//! assert_eq!(action, GameAction::Discard);
//!
//! assert_eq!(DEFAULT_TARGET_WIDTH, 10);
//! ```

/// Shortest rod length.
pub const MIN_ROD_LENGTH: u32 = 1;

/// Longest rod length.
pub const MAX_ROD_LENGTH: u32 = 10;

/// Default row target.
pub const DEFAULT_TARGET_WIDTH: u32 = 10;

/// Smallest accepted row target.
pub const MIN_TARGET_WIDTH: u32 = 5;

/// Largest accepted row target.
pub const MAX_TARGET_WIDTH: u32 = 20;

/// Interval of the elapsed-time clock in milliseconds.
pub const TICK_MS: u64 = 1000;

/// 24-bit display color of a rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RodColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RodColor {
    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness is high enough that dark text reads well on top of it.
    pub fn is_light(&self) -> bool {
        // ITU-R BT.601 luma, integer form.
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma >= 128 * 1000
    }
}

/// Standard color per rod length (index 0 = length 1).
pub const ROD_COLORS: [RodColor; 10] = [
    RodColor::from_hex(0xe8e2c5),
    RodColor::from_hex(0xd63d3d),
    RodColor::from_hex(0x8ecca3),
    RodColor::from_hex(0xa37bc4),
    RodColor::from_hex(0xf5d742),
    RodColor::from_hex(0x3b8c55),
    RodColor::from_hex(0x2b2b2b),
    RodColor::from_hex(0x7a4f36),
    RodColor::from_hex(0x4a80c9),
    RodColor::from_hex(0xe08831),
];

/// Human-readable color names, same indexing as [`ROD_COLORS`].
pub const ROD_COLOR_NAMES: [&str; 10] = [
    "white",
    "red",
    "light green",
    "purple",
    "yellow",
    "dark green",
    "black",
    "brown",
    "blue",
    "orange",
];

/// Look up the color of a rod length.
///
/// Returns `None` outside `MIN_ROD_LENGTH..=MAX_ROD_LENGTH`.
pub fn rod_color(length: u32) -> Option<RodColor> {
    if !(MIN_ROD_LENGTH..=MAX_ROD_LENGTH).contains(&length) {
        return None;
    }
    Some(ROD_COLORS[(length - 1) as usize])
}

/// Look up the color name of a rod length.
pub fn rod_color_name(length: u32) -> Option<&'static str> {
    if !(MIN_ROD_LENGTH..=MAX_ROD_LENGTH).contains(&length) {
        return None;
    }
    Some(ROD_COLOR_NAMES[(length - 1) as usize])
}

/// Whether `width` is an accepted row target.
pub fn is_valid_target(width: u32) -> bool {
    (MIN_TARGET_WIDTH..=MAX_TARGET_WIDTH).contains(&width)
}

/// User intents forwarded by the shell.
///
/// Board actions drive the session engine; settings and help actions only
/// change presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a fresh game with the current target
    Start,
    /// Place the offered rod at the end of the row
    Place,
    /// Throw away the offered rod and draw another one
    Discard,
    /// Clear the row, keeping the target
    Reset,
    /// Open the settings modal
    OpenSettings,
    /// Close the settings modal without saving
    CancelSettings,
    /// Save the draft target and close the modal
    SaveSettings,
    /// Move the draft target up by one
    IncreaseTarget,
    /// Move the draft target down by one
    DecreaseTarget,
    /// Show or hide the instructions panel
    ToggleInstructions,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cuisenaire_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("place"), Some(GameAction::Place));
    /// assert_eq!(GameAction::from_str("saveSettings"), Some(GameAction::SaveSettings));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "place" => Some(GameAction::Place),
            "discard" => Some(GameAction::Discard),
            "reset" => Some(GameAction::Reset),
            "opensettings" => Some(GameAction::OpenSettings),
            "cancelsettings" => Some(GameAction::CancelSettings),
            "savesettings" => Some(GameAction::SaveSettings),
            "increasetarget" => Some(GameAction::IncreaseTarget),
            "decreasetarget" => Some(GameAction::DecreaseTarget),
            "toggleinstructions" => Some(GameAction::ToggleInstructions),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Place => "place",
            GameAction::Discard => "discard",
            GameAction::Reset => "reset",
            GameAction::OpenSettings => "openSettings",
            GameAction::CancelSettings => "cancelSettings",
            GameAction::SaveSettings => "saveSettings",
            GameAction::IncreaseTarget => "increaseTarget",
            GameAction::DecreaseTarget => "decreaseTarget",
            GameAction::ToggleInstructions => "toggleInstructions",
        }
    }

    /// Actions that reach the session engine.
    pub fn is_board_action(&self) -> bool {
        matches!(
            self,
            GameAction::Start | GameAction::Place | GameAction::Discard | GameAction::Reset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rod_colors() {
        assert_eq!(rod_color(1).unwrap().to_hex_string(), "#e8e2c5");
        assert_eq!(rod_color(5).unwrap().to_hex_string(), "#f5d742");
        assert_eq!(rod_color(7).unwrap().to_hex_string(), "#2b2b2b");
        assert_eq!(rod_color(10).unwrap().to_hex_string(), "#e08831");
        assert_eq!(rod_color(0), None);
        assert_eq!(rod_color(11), None);
    }

    #[test]
    fn every_length_has_a_distinct_color() {
        for a in MIN_ROD_LENGTH..=MAX_ROD_LENGTH {
            for b in (a + 1)..=MAX_ROD_LENGTH {
                assert_ne!(rod_color(a), rod_color(b), "lengths {a} and {b}");
            }
        }
    }

    #[test]
    fn color_names_line_up() {
        assert_eq!(rod_color_name(1), Some("white"));
        assert_eq!(rod_color_name(10), Some("orange"));
        assert_eq!(rod_color_name(0), None);
    }

    #[test]
    fn light_and_dark_rods() {
        assert!(rod_color(1).unwrap().is_light());
        assert!(rod_color(5).unwrap().is_light());
        assert!(!rod_color(7).unwrap().is_light());
        assert!(!rod_color(8).unwrap().is_light());
    }

    #[test]
    fn target_bounds() {
        assert!(!is_valid_target(4));
        assert!(is_valid_target(5));
        assert!(is_valid_target(DEFAULT_TARGET_WIDTH));
        assert!(is_valid_target(20));
        assert!(!is_valid_target(21));
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::Start,
            GameAction::Place,
            GameAction::Discard,
            GameAction::Reset,
            GameAction::OpenSettings,
            GameAction::CancelSettings,
            GameAction::SaveSettings,
            GameAction::IncreaseTarget,
            GameAction::DecreaseTarget,
            GameAction::ToggleInstructions,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert!(GameAction::Place.is_board_action());
        assert!(!GameAction::OpenSettings.is_board_action());
    }
}
