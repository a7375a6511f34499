use super::*;

fn path(glossaries: &[&str]) -> LearningPath {
    LearningPath {
        id: "p1".into(),
        path_name: "Stats basics".into(),
        language_name: "isiZulu".into(),
        selected_glossaries: glossaries.iter().map(|g| (*g).to_owned()).collect(),
    }
}

fn counts() -> WordCounts {
    [("Statistics".to_owned(), 120), ("Agriculture".to_owned(), 80)].into_iter().collect()
}

#[test]
fn new_path_requires_name_language_and_glossary() {
    assert_eq!(new_path(" ", "isiZulu", &["Statistics".into()]), Err("Enter a path name and language."));
    assert_eq!(new_path("Mine", "isiZulu", &[]), Err("Pick at least one glossary."));
    let created = new_path(" Mine ", " isiZulu ", &["Statistics".into()]).unwrap();
    assert_eq!(created.path_name, "Mine");
    assert_eq!(created.language_name, "isiZulu");
}

#[test]
fn word_total_sums_selected_glossaries() {
    assert_eq!(path_word_total(&path(&["Statistics", "Agriculture", "Unknown"]), &counts()), 200);
}

#[test]
fn progress_fills_missing_glossaries_with_zero() {
    let known = vec![GlossaryProgress {
        glossary_name: "Agriculture".into(),
        known_words: 10,
        total_words: 80,
        last_position: Some(3),
    }];
    let rows = path_progress(&path(&["Statistics", "Agriculture"]), &known, &counts());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].known_words, 0);
    assert_eq!(rows[0].total_words, 120);
    assert_eq!(rows[1].last_position, Some(3));
}
