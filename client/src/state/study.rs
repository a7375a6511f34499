//! Study-session state for flashcards and quizzes.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is one glossary's word list plus the server's remembered
//! position and known-word set. Flashcard marks produce `ProgressUpdate`s for
//! the page to send; moving between cards produces `SessionPosition`s.

#[cfg(test)]
#[path = "study_test.rs"]
mod study_test;

use std::collections::HashSet;

use rand::Rng;
use records::{ProgressUpdate, SessionPosition, StudySession, Word};

use crate::util::quiz::{DEFAULT_DISTRACTORS, Quiz};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudyMode {
    #[default]
    Flashcards,
    Quiz,
}

#[derive(Clone, Debug, Default)]
pub struct StudyState {
    pub glossary: Option<String>,
    pub words: Vec<Word>,
    pub index: usize,
    pub flipped: bool,
    pub known_word_ids: HashSet<String>,
    pub mode: StudyMode,
    pub quiz: Option<Quiz>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StudyState {
    /// Start a session, resuming at the stored position when it is in range.
    pub fn load_session(&mut self, session: StudySession) {
        let resume = usize::try_from(session.last_position).unwrap_or(0);
        self.index = if resume < session.words.len() { resume } else { 0 };
        self.glossary = Some(session.glossary_name);
        self.known_word_ids = session.known_word_ids.into_iter().collect();
        self.words = session.words;
        self.flipped = false;
        self.mode = StudyMode::Flashcards;
        self.quiz = None;
        self.loading = false;
        self.error = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Mark the current card known or unknown.
    pub fn mark(&mut self, known: bool) -> Option<ProgressUpdate> {
        let word_id = self.current()?.id.clone();
        if known {
            self.known_word_ids.insert(word_id.clone());
        } else {
            self.known_word_ids.remove(&word_id);
        }
        Some(ProgressUpdate { word_id, glossary_name: self.glossary.clone()?, known })
    }

    #[must_use]
    pub fn is_known(&self, word_id: &str) -> bool {
        self.known_word_ids.contains(word_id)
    }

    /// Next card; `None` at the end of the deck.
    pub fn next(&mut self) -> Option<SessionPosition> {
        if self.index + 1 >= self.words.len() {
            return None;
        }
        self.index += 1;
        self.flipped = false;
        Some(self.position())
    }

    pub fn prev(&mut self) -> Option<SessionPosition> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.flipped = false;
        Some(self.position())
    }

    #[must_use]
    pub fn position(&self) -> SessionPosition {
        SessionPosition { last_position: u32::try_from(self.index).unwrap_or(u32::MAX) }
    }

    /// Words of this deck marked known.
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.words.iter().filter(|w| self.known_word_ids.contains(&w.id)).count()
    }

    #[must_use]
    pub fn progress_percent(&self) -> usize {
        if self.words.is_empty() { 0 } else { self.known_count() * 100 / self.words.len() }
    }

    /// Switch to quiz mode; `pool` adds outside definitions as distractors.
    pub fn start_quiz<R: Rng + ?Sized>(&mut self, pool: &[String], rng: &mut R) {
        self.quiz = Some(Quiz::new(&self.words, pool, DEFAULT_DISTRACTORS, rng));
        self.mode = StudyMode::Quiz;
    }

    pub fn back_to_cards(&mut self) {
        self.mode = StudyMode::Flashcards;
        self.quiz = None;
    }
}
