//! Flashcard quiz construction and scoring.
//!
//! Each question shows a term with its correct definition and up to N
//! distractor definitions sampled without replacement from a pool. Scoring is
//! a plain correct/answered counter.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use records::Word;

/// Distractors offered per question unless the caller asks otherwise.
pub const DEFAULT_DISTRACTORS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub word_id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Build one question for `word`.
///
/// Distractors exclude the correct definition and each other, so fewer than
/// `distractors` options appear when the pool is small.
pub fn build_question<R: Rng + ?Sized>(word: &Word, pool: &[String], distractors: usize, rng: &mut R) -> QuizQuestion {
    let mut candidates: Vec<&String> = Vec::new();
    for def in pool {
        if *def != word.definition && !candidates.contains(&def) {
            candidates.push(def);
        }
    }
    let mut options: Vec<String> = candidates
        .choose_multiple(rng, distractors)
        .map(|s| (*s).clone())
        .collect();
    options.push(word.definition.clone());
    options.shuffle(rng);
    let correct_index = options
        .iter()
        .position(|o| *o == word.definition)
        .unwrap_or(0);
    QuizQuestion { word_id: word.id.clone(), prompt: word.term.clone(), options, correct_index }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 { 0 } else { self.correct * 100 / self.total }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// A run through a fixed list of questions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    pub index: usize,
    /// Selected option for the current question, once answered.
    pub selected: Option<usize>,
    pub score: Score,
}

impl Quiz {
    /// Questions for every word, in session order. `pool` supplies
    /// distractors; definitions of the session words are added to it.
    pub fn new<R: Rng + ?Sized>(words: &[Word], pool: &[String], distractors: usize, rng: &mut R) -> Self {
        let mut all: Vec<String> = pool.to_vec();
        all.extend(words.iter().map(|w| w.definition.clone()));
        let questions = words
            .iter()
            .map(|w| build_question(w, &all, distractors, rng))
            .collect();
        Self { questions, ..Self::default() }
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Record the answer to the current question.
    ///
    /// Returns whether it was correct, or `None` when there is no current
    /// question or it was already answered.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        if self.selected.is_some() {
            return None;
        }
        let question = self.current()?;
        let correct = choice == question.correct_index;
        self.selected = Some(choice);
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        Some(correct)
    }

    /// Move to the next question.
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.index += 1;
            self.selected = None;
        }
    }
}

/// Fresh RNG for a study session. Browser builds seed from `Math.random`.
#[must_use]
pub fn session_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        SmallRng::seed_from_u64(seed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_sign_loss)]
        let seed = super::clock::now_ms() as u64;
        SmallRng::seed_from_u64(seed)
    }
}
