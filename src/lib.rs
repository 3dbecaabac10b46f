pub mod app;
pub mod collation;
pub mod db;
pub mod error;
pub mod file_io;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod serializer;
pub mod store;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod scenario_tests;

// Re-exports for convenience
pub use app::App;
pub use db::{KeyValueStore, MemoryKv, SqliteKv};
pub use error::{ImportError, StorageError, StoreError, ValidationError};
pub use file_io::{EXPORT_FILE_NAME, export_to_file, read_import_file};
pub use input::handle_key;
pub use models::{AppState, Language, VocabularySet, WordPair};
pub use quiz::{QUIZ_SIZE, QuizSession, QuizState, SelectOutcome, Selection, SlotKind};
pub use serializer::{Snapshot, export_all, import_all};
pub use store::VocabularyStore;
