//! Core module - pure game logic with no device I/O
//!
//! Everything that decides game correctness lives here: the session state
//! machine, question generation, the countdown clock, scoring, and the
//! reveal sequencer. Audio and rendering stay behind collaborator
//! interfaces.

pub mod clock;
pub mod question;
pub mod reveal;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use clock::{ClockSignal, CountdownClock};
pub use question::{next_question, Question, ResolutionSlot};
pub use reveal::{RevealEvent, RevealPhase, RevealSequencer};
pub use rng::{SimpleRng, TargetDeck};
pub use scoring::{accuracy, answer_score, earns_celebration, AnswerOutcome};
pub use session::Session;
pub use snapshot::{OptionView, SessionSnapshot, SessionSummary};
