//! GameView: maps a `SessionSnapshot` onto terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::SessionSnapshot;
use crate::data::profile;
use crate::types::{Difficulty, SessionStatus, TOTAL_QUESTIONS};

/// A lightweight terminal view for the quiz screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the snapshot into one line per terminal row.
    pub fn render(&self, snap: &SessionSnapshot) -> Vec<String> {
        match snap.status {
            SessionStatus::Idle => self.render_menu(),
            SessionStatus::Loading => vec![
                String::new(),
                "  Preparing session...".to_string(),
            ],
            SessionStatus::Playing => self.render_round(snap),
            SessionStatus::GameOver => self.render_report(snap),
        }
    }

    fn render_menu(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "  GEOQUEST".to_string(),
            "  Global geography exploration challenge".to_string(),
            String::new(),
        ];
        for (index, difficulty) in Difficulty::all().iter().enumerate() {
            let prof = profile(*difficulty);
            let budget = match prof.duration_s {
                Some(s) => format!("{}s/question", s),
                None => "untimed".to_string(),
            };
            lines.push(format!(
                "  {}) {:<9} {} | {} options | x{:.1}",
                index + 1,
                prof.label,
                budget,
                prof.option_count,
                prof.multiplier
            ));
        }
        lines.push(String::new());
        lines.push("  [1-3] start   [q] quit".to_string());
        lines
    }

    fn render_round(&self, snap: &SessionSnapshot) -> Vec<String> {
        let prof = profile(snap.difficulty);
        let question_no = (snap.progress + 1).min(TOTAL_QUESTIONS);
        let time = if snap.resolved {
            "--".to_string()
        } else {
            match prof.duration_s {
                Some(_) => format!("{}s", snap.time_left),
                None => "--".to_string(),
            }
        };

        let mut lines = vec![
            String::new(),
            format!("  GEOQUEST | {}", prof.label),
            format!(
                "  Score {:<6} Streak {:<4} Question {}/{}   Time {}",
                snap.score, snap.streak, question_no, TOTAL_QUESTIONS, time
            ),
            String::new(),
        ];

        if let Some((lat, lon)) = snap.target_location {
            lines.push(format!(
                "  Identify the country at {:.1}, {:.1}",
                lat, lon
            ));
            lines.push(String::new());
        }

        for (index, option) in snap.options.iter().enumerate() {
            let marker = if snap.resolved {
                if snap.target_id.as_deref() == Some(option.id.as_str()) {
                    "+"
                } else if snap.selected_id.as_deref() == Some(option.id.as_str()) {
                    "x"
                } else {
                    " "
                }
            } else {
                " "
            };
            lines.push(format!(
                "  {} {}) {}  {}",
                marker,
                index + 1,
                option.name,
                option.local_name
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "  [1-{}] answer   [esc] menu   [q] quit",
            snap.options.len().max(1)
        ));
        lines
    }

    fn render_report(&self, snap: &SessionSnapshot) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "  Challenge complete".to_string(),
            String::new(),
        ];
        if let Some(summary) = snap.summary {
            lines.push(format!("  Final score   {}", summary.score));
            lines.push(format!(
                "  Accuracy      {:.0}% ({}/{})",
                summary.accuracy * 100.0,
                summary.correct_count,
                TOTAL_QUESTIONS
            ));
            if summary.celebrated {
                lines.push("  Outstanding run!".to_string());
            }
        }
        lines.push(String::new());
        lines.push("  [r] play again   [m] menu   [q] quit".to_string());
        lines
    }
}
