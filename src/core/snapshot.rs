//! Read-only session views handed to presentation code.

use crate::core::reveal::RevealPhase;
use crate::types::{Difficulty, SessionStatus};

/// One selectable option as presented to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub id: String,
    pub name: String,
    pub local_name: String,
}

/// End-of-session report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub score: u32,
    pub correct_count: u32,
    pub accuracy: f64,
    /// Whether the celebratory cue fired for this session.
    pub celebrated: bool,
}

/// Immutable copy of everything the presentation layer may see.
///
/// The target id stays hidden while a round is live; only its globe
/// coordinate (the question's visual identifier) is exposed. The id
/// appears once the round resolves so feedback can mark the right option.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub difficulty: Difficulty,
    pub score: u32,
    pub streak: u32,
    pub progress: u32,
    pub correct_count: u32,
    pub time_left: u32,
    pub options: Vec<OptionView>,
    /// Globe collaborator input: the live round's (lat, lon).
    pub target_location: Option<(f64, f64)>,
    /// Globe collaborator input: spin freely while nothing is asked.
    pub autorotate: bool,
    /// The pick being revealed (`None` during a live round and on timeout).
    pub selected_id: Option<String>,
    /// True from resolution until the next round starts.
    pub resolved: bool,
    /// Revealed only after resolution.
    pub target_id: Option<String>,
    pub reveal_phase: Option<RevealPhase>,
    pub summary: Option<SessionSummary>,
}
