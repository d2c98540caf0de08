//! Engine error type.
//!
//! Every variant is a local validation failure: the operation that returned it
//! left the session untouched.

use thiserror::Error;

use crate::rod::RodId;
use crate::types::{MAX_ROD_LENGTH, MAX_TARGET_WIDTH, MIN_ROD_LENGTH, MIN_TARGET_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("target width {width} is outside {}..={}", MIN_TARGET_WIDTH, MAX_TARGET_WIDTH)]
    InvalidConfiguration { width: u32 },

    #[error("the session is not accepting moves")]
    SessionNotActive,

    #[error("rod {given} is not the offered rod (offered: {offered:?})")]
    StaleRod {
        offered: Option<RodId>,
        given: RodId,
    },

    #[error("no rod is currently offered")]
    NoRodAvailable,

    #[error("rod length {length} is outside {}..={}", MIN_ROD_LENGTH, MAX_ROD_LENGTH)]
    InvalidRodLength { length: u32 },

    #[error("a rod script needs at least one length")]
    EmptyRodScript,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bounds() {
        let err = EngineError::InvalidConfiguration { width: 25 };
        assert_eq!(err.to_string(), "target width 25 is outside 5..=20");

        let err = EngineError::InvalidRodLength { length: 0 };
        assert_eq!(err.to_string(), "rod length 0 is outside 1..=10");
    }
}
