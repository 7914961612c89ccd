//! Session state machine - owns game correctness, timing, and scoring.
//!
//! Ties together the target deck, question generator, countdown clock,
//! scorer, and reveal sequencer. The host loop feeds it elapsed time and
//! player commands; audio cue requests flow out through the injected sink
//! and the presentation layer reads an immutable snapshot every frame.

use tracing::{debug, info};

use crate::audio::{AudioSink, NameField};
use crate::core::clock::{ClockSignal, CountdownClock};
use crate::core::question::{next_question, Question, ResolutionSlot};
use crate::core::reveal::{RevealEvent, RevealPhase, RevealSequencer};
use crate::core::rng::{SimpleRng, TargetDeck};
use crate::core::scoring::{accuracy, answer_score, earns_celebration, AnswerOutcome};
use crate::core::snapshot::{OptionView, SessionSnapshot, SessionSummary};
use crate::data::{profile, validate_pool, CountryEntry};
use crate::error::{GameError, Result};
use crate::types::{Difficulty, SessionStatus, LOADING_GRACE_MS, TOTAL_QUESTIONS};

/// Complete session state.
///
/// `start_session` fully replaces the mutable portion, so no state leaks
/// from one run into the next.
pub struct Session {
    pool: Vec<CountryEntry>,
    rng: SimpleRng,
    deck: TargetDeck,
    audio: Box<dyn AudioSink>,

    status: SessionStatus,
    difficulty: Difficulty,
    score: u32,
    streak: u32,
    progress: u32,
    correct_count: u32,
    time_left: u32,

    question: Option<Question>,
    slot: ResolutionSlot,
    clock: CountdownClock,
    reveal: RevealSequencer,
    loading_ms: u32,
    summary: Option<SessionSummary>,
}

impl Session {
    /// Create a session over a validated pool with the given RNG seed.
    pub fn new(pool: Vec<CountryEntry>, audio: Box<dyn AudioSink>, seed: u32) -> Result<Self> {
        validate_pool(&pool)?;
        let mut rng = SimpleRng::new(seed);
        let deck = TargetDeck::new(pool.len(), &mut rng);

        Ok(Self {
            pool,
            rng,
            deck,
            audio,
            status: SessionStatus::Idle,
            difficulty: Difficulty::Easy,
            score: 0,
            streak: 0,
            progress: 0,
            correct_count: 0,
            time_left: 0,
            question: None,
            slot: ResolutionSlot::default(),
            clock: CountdownClock::new(),
            reveal: RevealSequencer::new(),
            loading_ms: 0,
            summary: None,
        })
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        self.summary
    }

    /// Begin a fresh session at the given tier.
    ///
    /// Fails fast if the pool cannot fill a question at the tier's option
    /// count. Any timers from a previous session are cancelled first.
    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<()> {
        let prof = profile(difficulty);
        if self.pool.len() < prof.option_count {
            return Err(GameError::PoolTooSmall {
                need: prof.option_count,
                have: self.pool.len(),
            });
        }

        self.clock.disarm();
        self.reveal.cancel();
        if self.status == SessionStatus::Playing {
            self.audio.ambient_stop();
        }
        self.audio.game_over_stop();

        self.status = SessionStatus::Loading;
        self.loading_ms = LOADING_GRACE_MS;
        self.difficulty = difficulty;
        self.score = 0;
        self.streak = 0;
        self.progress = 0;
        self.correct_count = 0;
        self.time_left = 0;
        self.summary = None;

        // First question exists before play begins so its pronunciation
        // prefetch can ride the loading window.
        self.prepare_question();

        info!(difficulty = prof.label, "session started");
        Ok(())
    }

    /// Resolve the current round with the player's pick.
    ///
    /// A no-op unless the session is playing and the round's resolution
    /// slot is still unclaimed; late clicks and double submissions land
    /// here and are dropped.
    pub fn submit_selection(&mut self, selected: Option<&str>) {
        if self.status != SessionStatus::Playing {
            debug!(status = self.status.as_str(), "selection ignored: not playing");
            return;
        }
        if !self.slot.claim() {
            debug!("selection ignored: round already resolved");
            return;
        }
        self.resolve_round(selected);
    }

    /// Abandon the session from any state.
    ///
    /// Cancels the clock and any reveal in flight, so no stale timer can
    /// touch a later session.
    pub fn return_to_menu(&mut self) {
        self.clock.disarm();
        self.reveal.cancel();
        if self.status == SessionStatus::Playing {
            self.audio.ambient_stop();
        }
        self.audio.game_over_stop();

        self.status = SessionStatus::Idle;
        self.question = None;
        self.summary = None;
        self.time_left = 0;
        info!("returned to menu");
    }

    /// Advance all session timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.status {
            SessionStatus::Idle | SessionStatus::GameOver => {}
            SessionStatus::Loading => {
                self.loading_ms = self.loading_ms.saturating_sub(elapsed_ms);
                if self.loading_ms == 0 {
                    self.enter_playing();
                }
            }
            SessionStatus::Playing => {
                if self.reveal.active() {
                    for event in self.reveal.tick(elapsed_ms) {
                        self.handle_reveal_event(event);
                    }
                } else if let Some(signal) = self.clock.tick(elapsed_ms) {
                    match signal {
                        ClockSignal::Tick { remaining_s, urgent } => {
                            self.time_left = remaining_s;
                            self.audio.tick(urgent);
                        }
                        ClockSignal::Expired => {
                            self.time_left = 0;
                            // Expiry resolves exactly like an empty
                            // selection, and loses to one that already
                            // claimed the slot this round.
                            if self.slot.claim() {
                                self.resolve_round(None);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Immutable view for the presentation layer.
    pub fn snapshot(&self) -> SessionSnapshot {
        let options = self
            .question
            .as_ref()
            .map(|q| {
                q.options()
                    .iter()
                    .map(|o| OptionView {
                        id: o.id.clone(),
                        name: o.name.clone(),
                        local_name: o.local_name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let target_location = self
            .question
            .as_ref()
            .map(|q| (q.target().lat, q.target().lon));

        let resolved = self.slot.is_claimed() && self.question.is_some();
        let target_id = if resolved {
            self.question.as_ref().map(|q| q.target().id.clone())
        } else {
            None
        };
        let selected_id = self
            .reveal
            .outcome()
            .and_then(|o| o.selected_id.clone());

        SessionSnapshot {
            status: self.status,
            difficulty: self.difficulty,
            score: self.score,
            streak: self.streak,
            progress: self.progress,
            correct_count: self.correct_count,
            time_left: self.time_left,
            options,
            target_location,
            autorotate: self.status == SessionStatus::Idle,
            selected_id,
            resolved,
            target_id,
            reveal_phase: self.reveal.phase(),
            summary: self.summary,
        }
    }

    /// Draw the next target and build its question; the round's resolution
    /// slot is re-issued here.
    fn prepare_question(&mut self) {
        let prof = profile(self.difficulty);
        let target_index = self.deck.draw(&mut self.rng);
        let question = next_question(&self.pool, target_index, prof.option_count, &mut self.rng);
        self.audio.prefetch_pronunciation(question.target());
        self.question = Some(question);
        self.slot = ResolutionSlot::default();
    }

    fn enter_playing(&mut self) {
        self.status = SessionStatus::Playing;
        self.audio.ambient_start();
        self.arm_round_clock();
    }

    fn arm_round_clock(&mut self) {
        let prof = profile(self.difficulty);
        self.clock.arm(prof.duration_s);
        // Untimed profiles hold the display at zero.
        self.time_left = prof.duration_s.unwrap_or(0);
    }

    /// The single resolution path for both selections and expiries.
    ///
    /// Callers have already claimed the round's slot.
    fn resolve_round(&mut self, selected: Option<&str>) {
        let is_correct = match (&self.question, selected) {
            (Some(question), Some(id)) => question.is_correct(id),
            _ => false,
        };
        let prof = profile(self.difficulty);
        let score_delta = if is_correct {
            answer_score(self.streak, prof.multiplier)
        } else {
            0
        };

        self.clock.disarm();
        self.time_left = 0;
        self.progress += 1;
        if is_correct {
            self.score += score_delta;
            self.streak += 1;
            self.correct_count += 1;
            self.audio.correct();
        } else {
            self.streak = 0;
            self.audio.wrong();
        }

        debug!(
            progress = self.progress,
            is_correct, score_delta, "round resolved"
        );

        let outcome = AnswerOutcome {
            selected_id: selected.map(str::to_owned),
            is_correct,
            score_delta,
        };
        let first = self.reveal.begin(outcome);
        self.handle_reveal_event(first);
    }

    fn handle_reveal_event(&mut self, event: RevealEvent) {
        match event {
            RevealEvent::PhaseStarted(RevealPhase::PrimaryName) => {
                self.audio.play_pronunciation(NameField::Primary);
            }
            RevealEvent::PhaseStarted(RevealPhase::SecondaryName) => {
                self.audio.play_pronunciation(NameField::Secondary);
            }
            RevealEvent::PhaseStarted(RevealPhase::Settle) => {}
            RevealEvent::Finished => self.advance(),
        }
    }

    /// After a completed reveal: next round, or the end of the session.
    fn advance(&mut self) {
        if self.progress >= TOTAL_QUESTIONS {
            self.end_session();
        } else {
            self.prepare_question();
            self.arm_round_clock();
        }
    }

    fn end_session(&mut self) {
        self.status = SessionStatus::GameOver;
        self.question = None;
        self.clock.disarm();
        self.audio.ambient_stop();
        self.audio.game_over_start();

        let acc = accuracy(self.correct_count);
        let celebrated = earns_celebration(acc);
        if celebrated {
            self.audio.celebration();
        }
        self.summary = Some(SessionSummary {
            score: self.score,
            correct_count: self.correct_count,
            accuracy: acc,
            celebrated,
        });

        info!(
            score = self.score,
            correct = self.correct_count,
            "session finished"
        );
    }
}
