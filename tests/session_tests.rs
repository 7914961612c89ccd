//! End-to-end session scenarios driven through the public API

use geoquest::audio::{CueEvent, RecordingAudioSink};
use geoquest::core::{RevealSequencer, Session};
use geoquest::data::builtin_countries;
use geoquest::types::{Difficulty, SessionStatus, LOADING_GRACE_MS, TOTAL_QUESTIONS};

fn new_session(seed: u32) -> (Session, RecordingAudioSink) {
    let recorder = RecordingAudioSink::new();
    let session = Session::new(builtin_countries(), Box::new(recorder.clone()), seed)
        .expect("builtin pool is valid");
    (session, recorder)
}

fn start_playing(session: &mut Session, difficulty: Difficulty) {
    session.start_session(difficulty).unwrap();
    session.tick(LOADING_GRACE_MS);
    assert_eq!(session.status(), SessionStatus::Playing);
}

fn answer(session: &mut Session, correct: bool) {
    let question = session.question().expect("live round");
    let target = question.target().id.clone();
    let pick = if correct {
        Some(target)
    } else {
        question
            .options()
            .iter()
            .find(|o| o.id != target)
            .map(|o| o.id.clone())
    };
    session.submit_selection(pick.as_deref());
}

fn finish_reveal(session: &mut Session) {
    session.tick(RevealSequencer::total_duration_ms());
}

#[test]
fn test_full_session_mixed_answers() {
    let (mut session, _) = new_session(101);
    start_playing(&mut session, Difficulty::Medium);

    let mut last_progress = 0;
    let mut last_score = 0;
    for round in 0..TOTAL_QUESTIONS {
        let correct = round % 4 != 3;
        answer(&mut session, correct);

        // progress is monotone; score only grows, and only on hits.
        assert_eq!(session.progress(), last_progress + 1);
        if correct {
            assert!(session.score() > last_score);
        } else {
            assert_eq!(session.score(), last_score);
        }
        last_progress = session.progress();
        last_score = session.score();
        finish_reveal(&mut session);
    }

    assert_eq!(session.status(), SessionStatus::GameOver);
    let summary = session.summary().unwrap();
    assert_eq!(summary.correct_count, 15);
    assert_eq!(summary.accuracy, 0.75);
    assert_eq!(summary.score, session.score());
}

#[test]
fn test_hard_profile_streak_scoring_scenario() {
    let (mut session, _) = new_session(103);
    start_playing(&mut session, Difficulty::Hard);

    // Streaks 0..=3 entering the rounds: 25, 30, 35, then
    // (10 + 3*2) * 2.5 = 40 for the fourth.
    for expected_total in [25, 55, 90, 130] {
        answer(&mut session, true);
        assert_eq!(session.score(), expected_total);
        finish_reveal(&mut session);
    }
}

#[test]
fn test_easy_profile_base_award_scenario() {
    let (mut session, _) = new_session(107);
    start_playing(&mut session, Difficulty::Easy);

    answer(&mut session, true);
    // Streak 0 entering the round: the bare base award at multiplier 1.0.
    assert_eq!(session.score(), 10);
}

#[test]
fn test_timeout_equivalent_to_null_submission() {
    let (mut timed_out, cues_a) = new_session(4242);
    let (mut submitted, cues_b) = new_session(4242);
    start_playing(&mut timed_out, Difficulty::Hard);
    start_playing(&mut submitted, Difficulty::Hard);

    // Same seed, same first question.
    assert_eq!(timed_out.question(), submitted.question());

    timed_out.tick(60_000);
    submitted.submit_selection(None);

    assert_eq!(timed_out.progress(), submitted.progress());
    assert_eq!(timed_out.streak(), submitted.streak());
    assert_eq!(timed_out.score(), submitted.score());
    assert_eq!(timed_out.correct_count(), submitted.correct_count());

    let snap_a = timed_out.snapshot();
    let snap_b = submitted.snapshot();
    assert!(snap_a.resolved && snap_b.resolved);
    assert_eq!(snap_a.selected_id, None);
    assert_eq!(snap_b.selected_id, None);

    assert!(cues_a.events().contains(&CueEvent::Wrong));
    assert!(cues_b.events().contains(&CueEvent::Wrong));
}

#[test]
fn test_click_racing_expiry_resolves_once() {
    let (mut session, recorder) = new_session(55);
    start_playing(&mut session, Difficulty::Hard);

    // Click lands first; a full countdown budget then elapses in the same
    // frame's tick. Only the click may count.
    answer(&mut session, true);
    session.tick(60_000);

    assert_eq!(session.progress(), 1);
    assert_eq!(session.correct_count(), 1);
    let wrongs = recorder
        .events()
        .iter()
        .filter(|e| **e == CueEvent::Wrong)
        .count();
    assert_eq!(wrongs, 0);
}

#[test]
fn test_celebration_fires_at_threshold_only() {
    // 16/20 correct: exactly the 0.8 threshold.
    let (mut celebrated, cues) = new_session(201);
    start_playing(&mut celebrated, Difficulty::Easy);
    for round in 0..TOTAL_QUESTIONS {
        answer(&mut celebrated, round < 16);
        finish_reveal(&mut celebrated);
    }
    assert!(celebrated.summary().unwrap().celebrated);
    assert!(cues.events().contains(&CueEvent::Celebration));

    // 15/20 correct: just below.
    let (mut quiet, cues) = new_session(202);
    start_playing(&mut quiet, Difficulty::Easy);
    for round in 0..TOTAL_QUESTIONS {
        answer(&mut quiet, round < 15);
        finish_reveal(&mut quiet);
    }
    assert!(!quiet.summary().unwrap().celebrated);
    assert!(!cues.events().contains(&CueEvent::Celebration));
}

#[test]
fn test_ambient_lifecycle_bound_to_playing() {
    let (mut session, recorder) = new_session(301);

    session.start_session(Difficulty::Easy).unwrap();
    assert!(!recorder.events().contains(&CueEvent::AmbientStart));

    session.tick(LOADING_GRACE_MS);
    assert!(recorder.events().contains(&CueEvent::AmbientStart));

    session.return_to_menu();
    assert!(recorder.events().contains(&CueEvent::AmbientStop));
}

#[test]
fn test_menu_return_mid_reveal_then_clean_restart() {
    let (mut session, recorder) = new_session(404);
    start_playing(&mut session, Difficulty::Easy);
    answer(&mut session, true);

    session.tick(300); // partway into the reveal
    session.return_to_menu();

    let quiet_point = recorder.events().len();
    session.tick(30_000);
    assert_eq!(recorder.events().len(), quiet_point);

    start_playing(&mut session, Difficulty::Hard);
    assert_eq!(session.score(), 0);
    assert_eq!(session.streak(), 0);
    assert_eq!(session.progress(), 0);
    assert_eq!(session.snapshot().options.len(), 4);
}

#[test]
fn test_snapshot_tracks_reveal_lifecycle() {
    let (mut session, _) = new_session(505);
    start_playing(&mut session, Difficulty::Easy);

    assert!(session.snapshot().reveal_phase.is_none());
    answer(&mut session, false);
    assert!(session.snapshot().reveal_phase.is_some());

    finish_reveal(&mut session);
    let next_round = session.snapshot();
    assert!(next_round.reveal_phase.is_none());
    assert!(!next_round.resolved);
    assert!(next_round.target_id.is_none());
}

#[test]
fn test_sessions_identical_for_identical_seeds() {
    let (mut a, _) = new_session(987);
    let (mut b, _) = new_session(987);
    start_playing(&mut a, Difficulty::Medium);
    start_playing(&mut b, Difficulty::Medium);

    for round in 0..TOTAL_QUESTIONS {
        assert_eq!(a.question(), b.question());
        answer(&mut a, round % 2 == 0);
        answer(&mut b, round % 2 == 0);
        finish_reveal(&mut a);
        finish_reveal(&mut b);
    }
    assert_eq!(a.score(), b.score());
    assert_eq!(a.summary(), b.summary());
}
