use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::db::KeyValueStore;
use crate::error::ImportError;
use crate::logger;
use crate::serializer::{Snapshot, export_snapshot, import_all};
use crate::store::VocabularyStore;

pub const EXPORT_FILE_NAME: &str = "vocabulary_data.json";

pub fn default_export_path() -> PathBuf {
    PathBuf::from(EXPORT_FILE_NAME)
}

/// Writes the whole vocabulary to `path` and returns the number of words written.
pub fn export_to_file<K: KeyValueStore>(
    store: &VocabularyStore<K>,
    path: &Path,
) -> io::Result<usize> {
    let snapshot = store.snapshot();
    fs::write(path, export_snapshot(&snapshot)?)?;

    let count = snapshot.word_count();
    logger::log(&format!("Exported {} words to {}", count, path.display()));
    Ok(count)
}

/// Reads and validates an exported file without touching any store.
pub fn read_import_file(path: &Path) -> Result<Snapshot, ImportError> {
    let bytes = fs::read(path)?;
    import_all(&bytes).inspect_err(|e| {
        logger::log(&format!("Rejected import from {}: {}", path.display(), e));
    })
}
