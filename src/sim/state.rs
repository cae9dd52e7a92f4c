//! Session and round state
//!
//! The session owns at most one round. A round is created fresh on every
//! start / try-again and finalized exactly once when its countdown ends.

use std::time::Instant;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::resolve::{Objective, Resolution, resolve};
use crate::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round yet, waiting for the start button
    Standby,
    /// Countdown running, player may pick a cell
    Playing,
    /// Round over, outcome and markers on screen
    Resolved,
}

/// RNG seed bookkeeping; each round draws from its own stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Fresh generator for the next round
    pub fn next_round_rng(&mut self) -> Pcg32 {
        self.stream += 1;
        Pcg32::new(self.seed, self.stream)
    }
}

/// One round: board, countdown and objective
#[derive(Debug, Clone)]
pub struct RoundSession {
    pub board: Board,
    /// Seconds left on the countdown, never negative
    pub time_left: f32,
    /// Instant of the previous countdown update
    pub last_update: Instant,
    pub objective: Objective,
    /// Set exactly once, when the countdown reaches zero
    pub resolution: Option<Resolution>,
}

impl RoundSession {
    pub fn new(settings: &Settings, objective: Objective, now: Instant) -> Self {
        Self {
            board: Board::new(settings),
            time_left: settings.max_time,
            last_update: now,
            objective,
            resolution: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn won(&self) -> bool {
        self.resolution.is_some_and(|r| r.won)
    }

    /// Drain the countdown up to `now`.
    ///
    /// Returns true on the update that first brings it to zero.
    pub fn advance_timer(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update);
        self.last_update = now;

        if self.time_left <= 0.0 {
            return false;
        }
        self.time_left = (self.time_left - elapsed.as_secs_f32()).max(0.0);
        self.time_left == 0.0
    }

    /// Run the resolution once; later calls return the stored outcome
    pub fn finish(&mut self) -> Resolution {
        if let Some(resolution) = self.resolution {
            return resolution;
        }
        let resolution = resolve(&mut self.board, self.objective);
        self.resolution = Some(resolution);
        resolution
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub rng_state: RngState,
    /// Pointer over the start / try-again button
    pub button_hot: bool,
    /// Rounds that reached resolution
    pub rounds_resolved: u32,
    pub wins: u32,
    round: Option<RoundSession>,
}

impl GameState {
    /// New session in standby
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Standby,
            rng_state: RngState::new(seed),
            button_hot: false,
            rounds_resolved: 0,
            wins: 0,
            round: None,
        }
    }

    pub fn round(&self) -> Option<&RoundSession> {
        self.round.as_ref()
    }

    pub fn round_mut(&mut self) -> Option<&mut RoundSession> {
        self.round.as_mut()
    }

    /// Start (or restart) a round with a freshly drawn objective
    pub fn start_round(&mut self, settings: &Settings, now: Instant) {
        let mut rng = self.rng_state.next_round_rng();
        let objective = Objective::random(&mut rng);
        self.start_round_with(settings, objective, now);
    }

    /// Start a round with a known objective
    pub fn start_round_with(&mut self, settings: &Settings, objective: Objective, now: Instant) {
        log::info!(
            "Round {} started: {} in column group {}",
            self.rng_state.stream,
            objective.symbol.as_str(),
            objective.column_group
        );
        self.round = Some(RoundSession::new(settings, objective, now));
        self.button_hot = false;
        self.phase = GamePhase::Playing;
    }

    /// Resolve the active round and move to `Resolved`
    pub fn end_round(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if round.is_resolved() {
            return;
        }
        let resolution = round.finish();

        self.rounds_resolved += 1;
        if resolution.won {
            self.wins += 1;
        }
        self.phase = GamePhase::Resolved;
        log::info!(
            "Round resolved: {} ({} of {} won)",
            if resolution.won { "win" } else { "loss" },
            self.wins,
            self.rounds_resolved
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::resolve::ObjectiveSymbol;
    use std::time::Duration;

    #[test]
    fn test_new_session_is_standby() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Standby);
        assert!(state.round().is_none());
    }

    #[test]
    fn test_start_round_resets() {
        let settings = Settings::default();
        let now = Instant::now();
        let mut state = GameState::new(1);
        state.start_round(&settings, now);

        let round = state.round().unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(round.time_left, settings.max_time);
        assert_eq!(round.last_update, now);
        assert!(!round.is_resolved());
        assert_eq!(round.board, Board::new(&settings));
    }

    #[test]
    fn test_rounds_reproducible_per_seed() {
        let settings = Settings::default();
        let now = Instant::now();
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..5 {
            a.start_round(&settings, now);
            b.start_round(&settings, now);
            assert_eq!(a.round().unwrap().objective, b.round().unwrap().objective);
        }
        assert_eq!(a.rng_state.stream, 5);
    }

    #[test]
    fn test_timer_clamps_and_fires_once() {
        let settings = Settings::default();
        let start = Instant::now();
        let mut round = RoundSession::new(
            &settings,
            Objective::new(ObjectiveSymbol::Alpha, 0),
            start,
        );

        assert!(!round.advance_timer(start + Duration::from_secs(10)));
        assert_eq!(round.time_left, 5.0);
        assert!(round.advance_timer(start + Duration::from_secs(20)));
        assert_eq!(round.time_left, 0.0);
        assert!(!round.advance_timer(start + Duration::from_secs(30)));
        assert_eq!(round.time_left, 0.0);
    }

    #[test]
    fn test_end_round_runs_once() {
        let settings = Settings::default();
        let mut state = GameState::new(3);
        state.start_round_with(
            &settings,
            Objective::new(ObjectiveSymbol::Beta, 1),
            Instant::now(),
        );
        state.end_round();
        let board_after = state.round().unwrap().board.clone();

        state.end_round();
        assert_eq!(state.rounds_resolved, 1);
        assert_eq!(state.phase, GamePhase::Resolved);
        // A second flip would have moved the symbols back
        assert_eq!(state.round().unwrap().board, board_after);
    }
}
