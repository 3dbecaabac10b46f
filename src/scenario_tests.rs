//! End-to-end runs through store, quiz, and export/import together.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collation::locale_cmp;
use crate::db::{KeyValueStore, MemoryKv, SqliteKv};
use crate::error::{ImportError, StoreError, ValidationError};
use crate::models::{Language, WordPair};
use crate::quiz::{QuizSession, QuizState, SelectOutcome, SlotKind};
use crate::serializer::{export_all, import_all};
use crate::store::VocabularyStore;

fn click_pair(session: &mut QuizSession, term: &str, definition: &str) -> SelectOutcome {
    let t = session.position_of(SlotKind::Term, term).unwrap();
    let d = session.position_of(SlotKind::Definition, definition).unwrap();
    assert_eq!(session.select_item(t), SelectOutcome::Selected);
    session.select_item(d)
}

#[test]
fn test_cat_dog_scenario() {
    let mut store = VocabularyStore::open(MemoryKv::new());
    store.add(Language::English, "cat", "macska").unwrap();
    store.add(Language::English, "dog", "kutya").unwrap();

    let mut session = QuizSession::start_with_rng(
        Language::English,
        store.list(Language::English),
        &mut StdRng::seed_from_u64(42),
    );
    let mut completions = 0;

    let outcome = click_pair(&mut session, "cat", "macska");
    assert_eq!(outcome, SelectOutcome::Matched);
    assert_eq!(session.state(), QuizState::Active);

    let outcome = click_pair(&mut session, "dog", "kutya");
    if outcome == SelectOutcome::Completed {
        completions += 1;
    }
    assert_eq!(session.state(), QuizState::Complete);

    for id in 0..session.items().len() {
        if session.select_item(id) == SelectOutcome::Completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    // The quiz never writes back to the store.
    assert_eq!(store.list(Language::English).len(), 2);
    assert_eq!(store.kv().write_count(), 2);
}

#[test]
fn test_empty_term_scenario() {
    let mut store = VocabularyStore::open(MemoryKv::new());
    store.add(Language::Hungarian, "alma", "apple").unwrap();
    let before = store.snapshot();

    let err = store.add(Language::English, "", "x").unwrap_err();
    assert!(matches!(err, StoreError::Validation(ValidationError::EmptyTerm)));
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.kv().write_count(), 1);
    assert_eq!(store.kv().get("englishVocab").unwrap(), None);
}

#[test]
fn test_partial_import_scenario() {
    let mut store = VocabularyStore::open(MemoryKv::new());
    store.add(Language::French, "chat", "le").unwrap();
    let before = store.snapshot();

    let bytes = br#"{"english": [{"word": "cat", "synonym": "feline"}]}"#;
    let err = import_all(bytes).unwrap_err();
    assert!(matches!(err, ImportError::MissingLanguage("hungarian")));

    assert_eq!(store.snapshot(), before);
    assert!(store.list(Language::English).is_empty());
}

#[test]
fn test_sort_invariant_across_languages() {
    let mut store = VocabularyStore::open(MemoryKv::new());
    let words = [
        (Language::Hungarian, "őz", "deer"),
        (Language::Hungarian, "alma", "apple"),
        (Language::Hungarian, "Ágy", "bed"),
        (Language::Hungarian, "zene", "music"),
        (Language::French, "école", "l'"),
        (Language::French, "Zoo", "le"),
        (Language::French, "arbre", "l'"),
        (Language::English, "banana", "fruit"),
        (Language::English, "Apple", "fruit"),
    ];
    for (language, term, definition) in words {
        store.add(language, term, definition).unwrap();
        for language in Language::ALL {
            let list = store.list(language);
            assert!(list.windows(2).all(|w| locale_cmp(&w[0].term, &w[1].term).is_le()));
        }
    }
}

#[test]
fn test_round_trip_into_fresh_database() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut source = VocabularyStore::open(SqliteKv::open(&temp_dir.path().join("a.db")).unwrap());
    source.add(Language::English, "cat", "feline").unwrap();
    source.add(Language::Hungarian, "kutya", "eb").unwrap();
    source
        .replace_all(
            Language::French,
            vec![WordPair::new("zoo", "le"), WordPair::new("arbre", "l'")],
        )
        .unwrap();

    let bytes = export_all(&source).unwrap();

    let target_path = temp_dir.path().join("b.db");
    {
        let mut target = VocabularyStore::open(SqliteKv::open(&target_path).unwrap());
        target.apply_snapshot(import_all(&bytes).unwrap()).unwrap();
    }

    let reopened = VocabularyStore::open(SqliteKv::open(&target_path).unwrap());
    assert_eq!(reopened.snapshot(), source.snapshot());
    assert_eq!(
        reopened.list(Language::French),
        &[WordPair::new("zoo", "le"), WordPair::new("arbre", "l'")]
    );
}

#[test]
fn test_large_pool_quiz_plays_to_completion() {
    let mut store = VocabularyStore::open(MemoryKv::new());
    for i in 0..30 {
        store
            .add(Language::French, &format!("mot{:02}", i), &format!("sens{:02}", i))
            .unwrap();
    }

    let mut session = QuizSession::start_with_rng(
        Language::French,
        store.list(Language::French),
        &mut StdRng::seed_from_u64(7),
    );
    assert_eq!(session.pair_count(), 10);

    let sampled = session.sampled().to_vec();
    for (i, pair) in sampled.iter().enumerate() {
        let outcome = click_pair(&mut session, &pair.term, &pair.definition);
        if i + 1 < sampled.len() {
            assert_eq!(outcome, SelectOutcome::Matched);
        } else {
            assert_eq!(outcome, SelectOutcome::Completed);
        }
    }
    assert!(session.is_complete());
}
