use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::KeyValueStore;
use crate::error::ImportError;
use crate::models::{Language, VocabularySet};
use crate::store::VocabularyStore;

/// Full vocabulary of every language, in export order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub english: VocabularySet,
    pub hungarian: VocabularySet,
    pub french: VocabularySet,
}

impl Snapshot {
    pub fn from_sets(mut set_for: impl FnMut(Language) -> VocabularySet) -> Self {
        Self {
            english: set_for(Language::English),
            hungarian: set_for(Language::Hungarian),
            french: set_for(Language::French),
        }
    }

    pub fn get(&self, language: Language) -> &VocabularySet {
        match language {
            Language::English => &self.english,
            Language::Hungarian => &self.hungarian,
            Language::French => &self.french,
        }
    }

    pub fn into_sets(self) -> [(Language, VocabularySet); 3] {
        [
            (Language::English, self.english),
            (Language::Hungarian, self.hungarian),
            (Language::French, self.french),
        ]
    }

    pub fn word_count(&self) -> usize {
        self.english.len() + self.hungarian.len() + self.french.len()
    }
}

/// Encodes the snapshot as pretty-printed JSON.
pub fn export_snapshot(snapshot: &Snapshot) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(snapshot)
}

pub fn export_all<K: KeyValueStore>(store: &VocabularyStore<K>) -> serde_json::Result<Vec<u8>> {
    export_snapshot(&store.snapshot())
}

/// Parses an exported file. Every language key must be present; other
/// top-level keys are ignored.
pub fn import_all(bytes: &[u8]) -> Result<Snapshot, ImportError> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Some(object) = value.as_object() else {
        return Err(ImportError::Malformed(<serde_json::Error as serde::de::Error>::custom(
            "expected an object keyed by language",
        )));
    };
    if let Some(missing) = Language::ALL
        .into_iter()
        .find(|language| !object.contains_key(language.id()))
    {
        return Err(ImportError::MissingLanguage(missing.id()));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryKv;
    use crate::models::WordPair;

    fn sample_store() -> VocabularyStore<MemoryKv> {
        let mut store = VocabularyStore::open(MemoryKv::new());
        store.add(Language::English, "dog", "hound").unwrap();
        store.add(Language::English, "cat", "feline").unwrap();
        store.add(Language::Hungarian, "kutya", "eb").unwrap();
        store.add(Language::French, "chat", "le").unwrap();
        store.add(Language::French, "école", "l'").unwrap();
        store
    }

    #[test]
    fn test_export_import_preserves_everything() {
        let store = sample_store();
        let bytes = export_all(&store).unwrap();
        let imported = import_all(&bytes).unwrap();

        assert_eq!(imported, store.snapshot());
        for language in Language::ALL {
            assert_eq!(imported.get(language).as_slice(), store.list(language));
        }
    }

    #[test]
    fn test_import_preserves_unsorted_order() {
        let snapshot = Snapshot {
            english: vec![WordPair::new("zebra", "z"), WordPair::new("apple", "a")],
            ..Default::default()
        };
        let bytes = export_snapshot(&snapshot).unwrap();
        assert_eq!(import_all(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_export_is_pretty_and_ordered() {
        let bytes = export_all(&sample_store()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let english = text.find("\"english\"").unwrap();
        let hungarian = text.find("\"hungarian\"").unwrap();
        let french = text.find("\"french\"").unwrap();
        assert!(english < hungarian && hungarian < french);
        assert!(text.contains("\n  \"english\": ["));
        assert!(text.contains("\"word\": \"cat\""));
        assert!(text.contains("\"synonym\": \"feline\""));
    }

    #[test]
    fn test_export_is_deterministic() {
        let store = sample_store();
        assert_eq!(export_all(&store).unwrap(), export_all(&store).unwrap());
    }

    #[test]
    fn test_import_browser_export() {
        let bytes = br#"{
  "english": [{"word": "cat", "synonym": "feline"}],
  "hungarian": [],
  "french": [{"word": "chat", "synonym": "le"}]
}"#;
        let snapshot = import_all(bytes).unwrap();
        assert_eq!(snapshot.english, vec![WordPair::new("cat", "feline")]);
        assert!(snapshot.hungarian.is_empty());
        assert_eq!(snapshot.word_count(), 2);
    }

    #[test]
    fn test_import_missing_language() {
        let bytes = br#"{"english": [{"word": "cat", "synonym": "feline"}]}"#;
        let err = import_all(bytes).unwrap_err();
        assert!(matches!(err, ImportError::MissingLanguage("hungarian")));
    }

    #[test]
    fn test_import_malformed_bytes() {
        assert!(matches!(
            import_all(b"not json at all"),
            Err(ImportError::Malformed(_))
        ));
        assert!(matches!(
            import_all(b"[1, 2, 3]"),
            Err(ImportError::Malformed(_))
        ));
        assert!(matches!(
            import_all(br#"{"english": 1, "hungarian": [], "french": []}"#),
            Err(ImportError::Malformed(_))
        ));
    }

    #[test]
    fn test_import_ignores_extra_keys() {
        let bytes = br#"{"english": [], "hungarian": [], "french": [], "german": []}"#;
        assert_eq!(import_all(bytes).unwrap(), Snapshot::default());
    }
}
