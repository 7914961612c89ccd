//! GeoQuest: timed geography trivia for the terminal.
//!
//! The `core` module owns the session state machine, question generation,
//! timing, and scoring. Audio and rendering are replaceable collaborators
//! behind the `audio` and `term` modules; `data` supplies the immutable
//! country pool and difficulty table.

pub mod audio;
pub mod core;
pub mod data;
pub mod error;
pub mod input;
pub mod term;
pub mod types;
