//! Per-language vocabulary, persisted through a [`KeyValueStore`].
//!
//! Every mutation writes the full set of the affected language before the
//! in-memory copy changes, so a failed write leaves memory matching the last
//! successfully persisted state.

use std::collections::BTreeMap;

use crate::collation::locale_cmp;
use crate::db::KeyValueStore;
use crate::error::{StorageResult, StoreError, ValidationError};
use crate::logger;
use crate::models::{Language, VocabularySet, WordPair};
use crate::serializer::Snapshot;

pub struct VocabularyStore<K: KeyValueStore> {
    kv: K,
    sets: BTreeMap<Language, VocabularySet>,
}

impl<K: KeyValueStore> VocabularyStore<K> {
    /// Loads all languages from `kv`. Missing or unreadable entries start empty.
    pub fn open(kv: K) -> Self {
        let mut store = Self {
            kv,
            sets: BTreeMap::new(),
        };
        for language in Language::ALL {
            let set = store.load(language);
            store.sets.insert(language, set);
        }
        store
    }

    /// Reads the persisted set for `language`.
    ///
    /// A missing key, a failed read, or a value that is not a list of word
    /// pairs all yield an empty set.
    pub fn load(&self, language: Language) -> VocabularySet {
        let key = language.storage_key();
        match self.kv.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<VocabularySet>(&raw) {
                Ok(set) => set,
                Err(e) => {
                    logger::log(&format!("Ignoring unreadable {}: {}", key, e));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                logger::log(&format!("Failed to read {}: {}", key, e));
                Vec::new()
            }
        }
    }

    /// Adds a word pair, keeping the set sorted by term.
    pub fn add(
        &mut self,
        language: Language,
        term: &str,
        definition: &str,
    ) -> Result<(), StoreError> {
        let term = term.trim();
        let definition = definition.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm.into());
        }
        if definition.is_empty() {
            return Err(ValidationError::EmptyDefinition.into());
        }

        let mut updated = self.list(language).to_vec();
        updated.push(WordPair::new(term, definition));
        updated.sort_by(|a, b| locale_cmp(&a.term, &b.term));

        self.persist(language, &updated)?;
        self.sets.insert(language, updated);
        logger::log(&format!("Added \"{}\" to {}", term, language));
        Ok(())
    }

    pub fn list(&self, language: Language) -> &[WordPair] {
        self.sets.get(&language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Overwrites a language's set in the given order, without re-sorting.
    pub fn replace_all(
        &mut self,
        language: Language,
        pairs: VocabularySet,
    ) -> Result<(), StoreError> {
        self.persist(language, &pairs)?;
        self.sets.insert(language, pairs);
        Ok(())
    }

    /// Replaces every language with the contents of an imported snapshot.
    ///
    /// All languages are written before memory changes. If a write fails, the
    /// languages already written are restored to their previous value and
    /// memory is left as it was.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> Result<(), StoreError> {
        let incoming = snapshot.into_sets();
        let mut written = Vec::with_capacity(incoming.len());

        for (language, pairs) in &incoming {
            if let Err(e) = self.persist(*language, pairs) {
                self.restore(&written);
                return Err(e.into());
            }
            written.push(*language);
        }

        for (language, pairs) in incoming {
            self.sets.insert(language, pairs);
        }
        logger::log("Imported vocabulary for all languages");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_sets(|language| self.list(language).to_vec())
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    fn persist(&mut self, language: Language, pairs: &[WordPair]) -> StorageResult<()> {
        let key = language.storage_key();
        let value = serde_json::to_string(pairs)?;
        self.kv.set(&key, &value).inspect_err(|e| {
            logger::log(&format!("Failed to persist {}: {}", key, e));
        })
    }

    /// Writes the in-memory sets of `languages` back to storage.
    fn restore(&mut self, languages: &[Language]) {
        for &language in languages {
            let previous = self.list(language).to_vec();
            // persist logs its own failure; nothing more can be done here.
            let _ = self.persist(language, &previous);
        }
    }
}
