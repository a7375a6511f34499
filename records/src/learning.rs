//! Learning-path and study-session records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::wire::{string_or_number, u32_from_number};

/// A user-owned study plan over one language's glossaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub path_name: String,
    pub language_name: String,
    #[serde(default)]
    pub selected_glossaries: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathCreate {
    pub path_name: String,
    pub language_name: String,
    pub selected_glossaries: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_glossaries: Option<Vec<String>>,
}

/// Per-glossary progress for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryProgress {
    pub glossary_name: String,
    #[serde(default, deserialize_with = "u32_from_number")]
    pub known_words: u32,
    #[serde(default, deserialize_with = "u32_from_number")]
    pub total_words: u32,
    #[serde(default)]
    pub last_position: Option<u32>,
}

impl GlossaryProgress {
    /// Whole-number completion percentage, `0` for an empty glossary.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total_words == 0 {
            return 0;
        }
        let known = u64::from(self.known_words.min(self.total_words));
        #[allow(clippy::cast_possible_truncation)]
        let pct = (known * 100 / u64::from(self.total_words)) as u32;
        pct
    }
}

/// One term in a study session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Words for one glossary plus where the user left off.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub glossary_name: String,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub known_word_ids: Vec<String>,
    #[serde(default)]
    pub last_position: u32,
}

/// Body of `POST /api/v1/learning/progress`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub word_id: String,
    pub glossary_name: String,
    pub known: bool,
}

/// Body of `PUT /api/v1/learning/glossaries/{name}/position`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPosition {
    pub last_position: u32,
}

/// Distractor source for quizzes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomTerm {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub term: String,
    pub definition: String,
}

/// Glossary name to word count.
pub type WordCounts = BTreeMap<String, u32>;

/// Summary from `GET /api/v1/learning/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningDashboard {
    #[serde(default)]
    pub learning_paths: Vec<LearningPath>,
    #[serde(default)]
    pub total_known_words: u32,
    #[serde(default)]
    pub total_words: u32,
    #[serde(default)]
    pub glossary_progress: Vec<GlossaryProgress>,
}
