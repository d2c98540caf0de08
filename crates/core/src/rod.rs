//! Rod value type.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::EngineError;
use crate::types::{rod_color, RodColor, MAX_ROD_LENGTH, MIN_ROD_LENGTH};

static NEXT_ROD_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque rod identity, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RodId(u64);

impl RodId {
    fn next() -> Self {
        Self(NEXT_ROD_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rod-{}", self.0)
    }
}

/// An immutable rod: identity, length and the color fixed by that length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rod {
    id: RodId,
    length: u32,
    color: RodColor,
}

impl Rod {
    /// Create a rod with a fresh id.
    pub fn new(length: u32) -> Result<Self, EngineError> {
        let color = rod_color(length).ok_or(EngineError::InvalidRodLength { length })?;
        Ok(Self {
            id: RodId::next(),
            length,
            color,
        })
    }

    /// Caller guarantees `length` is in range (generator output).
    pub(crate) fn fresh(length: u32) -> Self {
        debug_assert!((MIN_ROD_LENGTH..=MAX_ROD_LENGTH).contains(&length));
        let length = length.clamp(MIN_ROD_LENGTH, MAX_ROD_LENGTH);
        Self {
            id: RodId::next(),
            length,
            color: crate::types::ROD_COLORS[(length - 1) as usize],
        }
    }

    pub fn id(&self) -> RodId {
        self.id
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn color(&self) -> RodColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_length() {
        let rod = Rod::new(4).unwrap();
        assert_eq!(rod.length(), 4);
        assert_eq!(rod.color(), rod_color(4).unwrap());
    }

    #[test]
    fn ids_are_unique() {
        let a = Rod::new(3).unwrap();
        let b = Rod::new(3).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert!(b.id() > a.id());
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert_eq!(
            Rod::new(0),
            Err(EngineError::InvalidRodLength { length: 0 })
        );
        assert_eq!(
            Rod::new(11),
            Err(EngineError::InvalidRodLength { length: 11 })
        );
    }

    #[test]
    fn id_display() {
        let rod = Rod::new(1).unwrap();
        assert_eq!(rod.id().to_string(), format!("rod-{}", rod.id().get()));
    }
}
