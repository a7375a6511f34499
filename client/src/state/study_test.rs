use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn word(id: &str, term: &str, definition: &str) -> Word {
    Word { id: id.into(), term: term.into(), definition: definition.into(), language: None }
}

fn session(last_position: u32) -> StudySession {
    StudySession {
        glossary_name: "Statistics".into(),
        words: vec![word("1", "mean", "average"), word("2", "median", "middle value"), word("3", "mode", "most frequent")],
        known_word_ids: vec!["2".into()],
        last_position,
    }
}

#[test]
fn resumes_at_stored_position() {
    let mut state = StudyState::default();
    state.load_session(session(2));
    assert_eq!(state.current().unwrap().term, "mode");
    assert!(state.is_known("2"));
}

#[test]
fn out_of_range_position_starts_over() {
    let mut state = StudyState::default();
    state.load_session(session(9));
    assert_eq!(state.index, 0);
}

#[test]
fn marking_updates_known_set_and_progress() {
    let mut state = StudyState::default();
    state.load_session(session(0));
    assert_eq!(state.progress_percent(), 33);

    let update = state.mark(true).unwrap();
    assert_eq!(update, ProgressUpdate { word_id: "1".into(), glossary_name: "Statistics".into(), known: true });
    assert_eq!(state.progress_percent(), 66);

    state.next();
    let update = state.mark(false).unwrap();
    assert!(!update.known);
    assert_eq!(state.known_count(), 1);
}

#[test]
fn navigation_resets_flip_and_reports_position() {
    let mut state = StudyState::default();
    state.load_session(session(0));
    state.flip();
    assert!(state.flipped);

    assert_eq!(state.next(), Some(SessionPosition { last_position: 1 }));
    assert!(!state.flipped);
    assert_eq!(state.prev(), Some(SessionPosition { last_position: 0 }));
    assert_eq!(state.prev(), None);
}

#[test]
fn next_stops_at_last_card() {
    let mut state = StudyState::default();
    state.load_session(session(2));
    assert_eq!(state.next(), None);
    assert_eq!(state.index, 2);
}

#[test]
fn quiz_mode_builds_one_question_per_word() {
    let mut state = StudyState::default();
    state.load_session(session(0));
    let mut rng = SmallRng::seed_from_u64(7);
    state.start_quiz(&["unrelated".to_owned()], &mut rng);

    assert_eq!(state.mode, StudyMode::Quiz);
    let quiz = state.quiz.as_ref().unwrap();
    assert_eq!(quiz.questions.len(), 3);
    assert!(quiz.questions.iter().all(|q| q.options.len() == 4));

    state.back_to_cards();
    assert!(state.quiz.is_none());
}
