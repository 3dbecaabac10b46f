use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of languages the vocabulary is kept for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Hungarian,
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hungarian, Language::French];

    pub fn id(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hungarian => "hungarian",
            Language::French => "french",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hungarian => "Hungarian",
            Language::French => "French",
        }
    }

    /// French words are stored with their article rather than a synonym.
    pub fn definition_label(self) -> &'static str {
        match self {
            Language::French => "Article",
            Language::English | Language::Hungarian => "Synonym",
        }
    }

    /// Key of the persisted vocabulary, e.g. `englishVocab`.
    pub fn storage_key(self) -> String {
        format!("{}Vocab", self.id())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "word", alias = "term")]
    pub term: String,
    #[serde(rename = "synonym", alias = "definition")]
    pub definition: String,
}

impl WordPair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Word pairs of one language, kept sorted by term on the add path.
pub type VocabularySet = Vec<WordPair>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Vocabulary,
    AddWord,
    Quiz,
    ImportPrompt,
}
