//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Questions per session
pub const TOTAL_QUESTIONS: u32 = 20;

/// Host loop tick (milliseconds)
pub const TICK_MS: u32 = 16;

/// Countdown granularity (milliseconds per countdown step)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Remaining seconds at or below which the countdown cue turns urgent
pub const LOW_TIME_WARNING_S: u32 = 2;

/// Grace window for prefetch dispatch before the first round goes live
pub const LOADING_GRACE_MS: u32 = 300;

/// Reveal phase durations (milliseconds)
pub const REVEAL_PRIMARY_MS: u32 = 1000;
pub const REVEAL_SECONDARY_MS: u32 = 1000;
pub const REVEAL_SETTLE_MS: u32 = 500;
pub const REVEAL_TOTAL_MS: u32 = REVEAL_PRIMARY_MS + REVEAL_SECONDARY_MS + REVEAL_SETTLE_MS;

/// Base points for any correct answer
pub const BASE_AWARD: u32 = 10;

/// Extra points per streak step held before the answer
pub const STREAK_BONUS: u32 = 2;

/// Accuracy at or above which the end-of-session celebration cue fires
pub const CELEBRATION_ACCURACY: f64 = 0.8;

/// Difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Session lifecycle states (exactly one at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Idle,
    Loading,
    Playing,
    GameOver,
}

impl SessionStatus {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Loading => "loading",
            SessionStatus::Playing => "playing",
            SessionStatus::GameOver => "gameOver",
        }
    }
}

/// Commands the presentation layer can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Begin a session at the given tier
    Start(Difficulty),
    /// Pick the option at this index (0-based presentation order)
    Select(usize),
    /// Replay at the tier of the finished session
    RestartSame,
    ReturnToMenu,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in Difficulty::all() {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("impossible"), None);
    }

    #[test]
    fn test_reveal_total_is_sum_of_phases() {
        assert_eq!(
            REVEAL_TOTAL_MS,
            REVEAL_PRIMARY_MS + REVEAL_SECONDARY_MS + REVEAL_SETTLE_MS
        );
        assert_eq!(REVEAL_TOTAL_MS, 2500);
    }
}
