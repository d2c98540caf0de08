//! Scoring module - completion score and placement hints
//!
//! The score is derived from a finished session and never stored by the engine:
//!
//! ```text
//! score = floor((target * 10 / max(time, 1)) * (10 / (trials + 1)))
//! ```
//!
//! evaluated in exact integer arithmetic as `100 * target / (max(time, 1) * (trials + 1))`.

/// Completion score for a finished row.
///
/// Non-increasing in both `time_elapsed` and `trials`. A row finished within the
/// first second counts as one second.
pub fn completion_score(target_width: u32, time_elapsed: u32, trials: u32) -> u32 {
    let numerator = 100u64 * target_width as u64;
    let denominator = (time_elapsed.max(1) as u64) * (trials as u64 + 1);
    (numerator / denominator) as u32
}

/// Whether the offered rod would fit into the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitHint {
    Fits,
    Exceeds,
}

impl FitHint {
    pub fn evaluate(current_sum: u32, target_width: u32, rod_length: u32) -> Self {
        if current_sum.saturating_add(rod_length) > target_width {
            FitHint::Exceeds
        } else {
            FitHint::Fits
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FitHint::Fits => "This rod will fit in the current row.",
            FitHint::Exceeds => "Warning: This rod would exceed the target! Consider discarding.",
        }
    }
}
