//! Application state: the game plus the panels drawn around it.
//!
//! `App` turns `GameAction`s into engine calls and owns the presentation-only
//! state (instructions panel, settings draft) that never reaches the engine.

use tracing::{debug, info};

use crate::core::{EngineError, Phase, RandomRods, Retarget, RodSource, SessionSnapshot};
use crate::engine::Game;
use crate::input::InputMode;
use crate::term::Overlays;
use crate::types::{GameAction, MAX_TARGET_WIDTH, MIN_TARGET_WIDTH};

pub struct App<S = RandomRods> {
    game: Game<S>,
    instructions: bool,
    settings_draft: Option<u32>,
    /// Width used by the next start; follows the last saved setting.
    preferred_target: u32,
}

impl<S: RodSource> App<S> {
    /// Wrap `game`, showing `preferred_target` on the idle board right away.
    pub fn new(mut game: Game<S>, preferred_target: u32, show_instructions: bool) -> Self {
        let preferred_target = preferred_target.clamp(MIN_TARGET_WIDTH, MAX_TARGET_WIDTH);
        game.retarget(preferred_target);
        Self {
            game,
            instructions: show_instructions,
            settings_draft: None,
            preferred_target,
        }
    }

    pub fn snapshot(&self) -> &SessionSnapshot {
        self.game.snapshot()
    }

    pub fn preferred_target(&self) -> u32 {
        self.preferred_target
    }

    pub fn overlays(&self) -> Overlays {
        Overlays {
            instructions: self.instructions,
            settings_draft: self.settings_draft,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.settings_draft.is_some() {
            InputMode::Settings
        } else {
            InputMode::Board
        }
    }

    /// Fingerprint of everything drawn on screen.
    pub fn fingerprint(&self) -> u64 {
        let overlay = (self.instructions as u64)
            | (self.settings_draft.map_or(0, |d| u64::from(d) + 1) << 1);
        self.game.snapshot().fingerprint().rotate_left(7) ^ overlay
    }

    /// Advance the clock with any ticks that arrived.
    pub fn pump(&mut self) -> u32 {
        self.game.pump()
    }

    /// Apply one user action.
    ///
    /// Actions that make no sense in the current phase are dropped; the
    /// engine's rejection is logged and otherwise ignored.
    pub fn apply(&mut self, action: GameAction) {
        if self.settings_draft.is_some() && action.is_board_action() {
            debug!(action = action.as_str(), "ignored while settings are open");
            return;
        }

        let phase = self.game.snapshot().phase();
        let result: Result<(), EngineError> = match action {
            GameAction::Start if phase != Phase::Active => self.game.start(self.preferred_target),
            GameAction::Reset if phase != Phase::Idle => {
                self.game.reset();
                Ok(())
            }
            GameAction::Start | GameAction::Reset => Ok(()),
            GameAction::Place => self.game.place_offered().map(|_| ()),
            GameAction::Discard => self.game.discard().map(|_| ()),
            GameAction::OpenSettings => {
                self.settings_draft = Some(self.preferred_target);
                Ok(())
            }
            GameAction::CancelSettings => {
                self.settings_draft = None;
                Ok(())
            }
            GameAction::IncreaseTarget => {
                self.adjust_draft(1);
                Ok(())
            }
            GameAction::DecreaseTarget => {
                self.adjust_draft(-1);
                Ok(())
            }
            GameAction::SaveSettings => {
                self.save_settings();
                Ok(())
            }
            GameAction::ToggleInstructions => {
                self.instructions = !self.instructions;
                Ok(())
            }
        };

        if let Err(err) = result {
            debug!(action = action.as_str(), %err, "action rejected");
        }
    }

    fn adjust_draft(&mut self, delta: i32) {
        if let Some(draft) = self.settings_draft.as_mut() {
            let next = (*draft as i32 + delta).clamp(MIN_TARGET_WIDTH as i32, MAX_TARGET_WIDTH as i32);
            *draft = next as u32;
        }
    }

    fn save_settings(&mut self) {
        let Some(draft) = self.settings_draft.take() else {
            return;
        };
        self.preferred_target = draft;
        let outcome = self.game.retarget(draft);
        info!(target_width = draft, outcome = ?outcome, "settings saved");
        if outcome == Retarget::Ignored {
            debug!(target_width = draft, "saved target was out of range");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, ScriptedRods};
    use tokio::runtime::Handle;

    fn app(lengths: &[u32]) -> App<ScriptedRods> {
        let source = ScriptedRods::new(lengths.iter().copied()).unwrap();
        let game = Game::new(GameSession::with_source(source), Handle::current());
        App::new(game, 10, true)
    }

    #[tokio::test]
    async fn start_uses_preferred_target() {
        let mut a = app(&[3]);
        a.apply(GameAction::OpenSettings);
        a.apply(GameAction::DecreaseTarget);
        a.apply(GameAction::DecreaseTarget);
        a.apply(GameAction::SaveSettings);
        a.apply(GameAction::Start);

        assert_eq!(a.snapshot().target_width, 8);
        assert_eq!(a.snapshot().phase(), Phase::Active);
    }

    #[tokio::test]
    async fn configured_target_shows_before_first_start() {
        let source = ScriptedRods::new([3]).unwrap();
        let game = Game::new(GameSession::with_source(source), Handle::current());
        let mut a = App::new(game, 15, true);

        assert_eq!(a.snapshot().phase(), Phase::Idle);
        assert_eq!(a.snapshot().target_width, 15);
        assert_eq!(a.snapshot().pending_target, None);

        a.apply(GameAction::OpenSettings);
        assert_eq!(a.overlays().settings_draft, Some(15));
        a.apply(GameAction::CancelSettings);

        a.apply(GameAction::Start);
        assert_eq!(a.snapshot().target_width, 15);
    }

    #[tokio::test]
    async fn settings_modal_swallows_board_actions() {
        let mut a = app(&[3]);
        a.apply(GameAction::OpenSettings);
        assert_eq!(a.input_mode(), InputMode::Settings);

        a.apply(GameAction::Start);
        assert_eq!(a.snapshot().phase(), Phase::Idle);

        a.apply(GameAction::CancelSettings);
        assert_eq!(a.input_mode(), InputMode::Board);
        assert_eq!(a.overlays().settings_draft, None);
    }

    #[tokio::test]
    async fn draft_is_clamped_to_range() {
        let mut a = app(&[3]);
        a.apply(GameAction::OpenSettings);
        for _ in 0..30 {
            a.apply(GameAction::IncreaseTarget);
        }
        assert_eq!(a.overlays().settings_draft, Some(MAX_TARGET_WIDTH));
        for _ in 0..30 {
            a.apply(GameAction::DecreaseTarget);
        }
        assert_eq!(a.overlays().settings_draft, Some(MIN_TARGET_WIDTH));
    }

    #[tokio::test]
    async fn cancel_keeps_previous_target() {
        let mut a = app(&[3]);
        a.apply(GameAction::OpenSettings);
        a.apply(GameAction::IncreaseTarget);
        a.apply(GameAction::CancelSettings);
        assert_eq!(a.preferred_target(), 10);
        assert_eq!(a.snapshot().target_width, 10);
    }

    #[tokio::test]
    async fn shrinking_below_sum_defers_until_reset() {
        let mut a = app(&[4, 4]);
        a.apply(GameAction::Start);
        a.apply(GameAction::Place);
        a.apply(GameAction::Place);
        assert_eq!(a.snapshot().current_sum, 8);

        a.apply(GameAction::OpenSettings);
        for _ in 0..5 {
            a.apply(GameAction::DecreaseTarget);
        }
        a.apply(GameAction::SaveSettings);
        assert_eq!(a.snapshot().target_width, 10);
        assert_eq!(a.snapshot().pending_target, Some(5));

        a.apply(GameAction::Reset);
        assert_eq!(a.snapshot().target_width, 5);
        assert_eq!(a.snapshot().current_sum, 0);
    }

    #[tokio::test]
    async fn reset_is_ignored_before_first_start() {
        let mut a = app(&[3]);
        a.apply(GameAction::Reset);
        assert_eq!(a.snapshot().phase(), Phase::Idle);
        assert_eq!(a.snapshot().session_id, 0);
    }

    #[tokio::test]
    async fn fingerprint_tracks_overlays() {
        let mut a = app(&[3]);
        let before = a.fingerprint();
        a.apply(GameAction::ToggleInstructions);
        assert_ne!(a.fingerprint(), before);
        a.apply(GameAction::ToggleInstructions);
        assert_eq!(a.fingerprint(), before);
    }
}
