//! Audio collaborator interface.
//!
//! The core never touches an audio device. It emits fire-and-forget cue
//! requests to an injected sink; a sink that fails must swallow its own
//! errors, so every trait method defaults to a no-op and returns nothing.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::data::CountryEntry;

/// Which of a country's two display names a pronunciation cue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Primary,
    Secondary,
}

/// Cue surface the session emits into.
///
/// All methods are fire-and-forget; the session never observes a result.
pub trait AudioSink {
    /// Correct-answer chime.
    fn correct(&mut self) {}

    /// Wrong-answer buzz.
    fn wrong(&mut self) {}

    /// Countdown tick; `urgent` marks the low-time warning.
    fn tick(&mut self, _urgent: bool) {}

    /// High-accuracy fanfare at session end.
    fn celebration(&mut self) {}

    /// Background loop for active play.
    fn ambient_start(&mut self) {}
    fn ambient_stop(&mut self) {}

    /// End-of-session report music.
    fn game_over_start(&mut self) {}
    fn game_over_stop(&mut self) {}

    /// Request pronunciation buffers for `entry` ahead of its reveal.
    fn prefetch_pronunciation(&mut self, _entry: &CountryEntry) {}

    /// Play a previously prefetched pronunciation buffer, if one exists.
    fn play_pronunciation(&mut self, _field: NameField) {}
}

/// Sink that drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {}

/// Sink that traces every cue request.
///
/// Stands in for a real synthesizer while the front end is driven headless
/// or over a terminal with no audio path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DebugAudioSink;

impl AudioSink for DebugAudioSink {
    fn correct(&mut self) {
        debug!("cue: correct");
    }

    fn wrong(&mut self) {
        debug!("cue: wrong");
    }

    fn tick(&mut self, urgent: bool) {
        debug!(urgent, "cue: tick");
    }

    fn celebration(&mut self) {
        debug!("cue: celebration");
    }

    fn ambient_start(&mut self) {
        debug!("cue: ambient start");
    }

    fn ambient_stop(&mut self) {
        debug!("cue: ambient stop");
    }

    fn game_over_start(&mut self) {
        debug!("cue: game-over music start");
    }

    fn game_over_stop(&mut self) {
        debug!("cue: game-over music stop");
    }

    fn prefetch_pronunciation(&mut self, entry: &CountryEntry) {
        debug!(id = %entry.id, "cue: prefetch pronunciation");
    }

    fn play_pronunciation(&mut self, field: NameField) {
        debug!(?field, "cue: play pronunciation");
    }
}

/// One recorded cue request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueEvent {
    Correct,
    Wrong,
    Tick { urgent: bool },
    Celebration,
    AmbientStart,
    AmbientStop,
    GameOverStart,
    GameOverStop,
    Prefetch(String),
    Pronounce(NameField),
}

/// Sink that records cue requests in order.
///
/// The test double for sequencing assertions: clone it, box one clone into
/// the session, and read `events()` from the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudioSink {
    events: Rc<RefCell<Vec<CueEvent>>>,
}

impl RecordingAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<CueEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recording.
    pub fn take(&self) -> Vec<CueEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    fn push(&mut self, event: CueEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl AudioSink for RecordingAudioSink {
    fn correct(&mut self) {
        self.push(CueEvent::Correct);
    }

    fn wrong(&mut self) {
        self.push(CueEvent::Wrong);
    }

    fn tick(&mut self, urgent: bool) {
        self.push(CueEvent::Tick { urgent });
    }

    fn celebration(&mut self) {
        self.push(CueEvent::Celebration);
    }

    fn ambient_start(&mut self) {
        self.push(CueEvent::AmbientStart);
    }

    fn ambient_stop(&mut self) {
        self.push(CueEvent::AmbientStop);
    }

    fn game_over_start(&mut self) {
        self.push(CueEvent::GameOverStart);
    }

    fn game_over_stop(&mut self) {
        self.push(CueEvent::GameOverStop);
    }

    fn prefetch_pronunciation(&mut self, entry: &CountryEntry) {
        self.push(CueEvent::Prefetch(entry.id.clone()));
    }

    fn play_pronunciation(&mut self, field: NameField) {
        self.push(CueEvent::Pronounce(field));
    }
}
