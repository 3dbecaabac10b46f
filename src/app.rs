use std::path::{Path, PathBuf};

use unicode_width::UnicodeWidthChar;

use crate::db::KeyValueStore;
use crate::file_io::{EXPORT_FILE_NAME, default_export_path, export_to_file, read_import_file};
use crate::logger;
use crate::models::{AppState, Language};
use crate::quiz::{ItemId, QuizSession, SelectOutcome};
use crate::store::VocabularyStore;

pub const COMPLETION_MESSAGE: &str = "Congratulations! You matched all words correctly!";

/// Single-line text input with a character-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub buffer: String,
    pub cursor_position: usize,
}

impl InputField {
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor_position: text.chars().count(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_position);
        self.buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            let idx = self.byte_index(self.cursor_position - 1);
            self.buffer.remove(idx);
            self.cursor_position -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.buffer.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    /// Terminal columns taken by the text left of the cursor.
    pub fn cursor_width(&self) -> usize {
        self.buffer
            .chars()
            .take(self.cursor_position)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Term,
    Definition,
}

#[derive(Debug, Clone, Default)]
pub struct AddWordForm {
    pub term: InputField,
    pub definition: InputField,
    pub focused: Option<FormField>,
}

impl AddWordForm {
    pub fn focused_field(&self) -> FormField {
        self.focused.unwrap_or(FormField::Term)
    }

    pub fn focused_input(&mut self) -> &mut InputField {
        match self.focused_field() {
            FormField::Term => &mut self.term,
            FormField::Definition => &mut self.definition,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused = Some(match self.focused_field() {
            FormField::Term => FormField::Definition,
            FormField::Definition => FormField::Term,
        });
    }

    pub fn clear(&mut self) {
        self.term.clear();
        self.definition.clear();
        self.focused = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Everything the terminal front-end shows, and the actions it can take.
pub struct App<K: KeyValueStore> {
    pub store: VocabularyStore<K>,
    pub state: AppState,
    pub selected_language_index: usize,
    pub language: Option<Language>,
    pub word_list_scroll: usize,
    pub form: AddWordForm,
    pub quiz: Option<QuizSession>,
    pub quiz_cursor: ItemId,
    pub import_path: InputField,
    pub import_return_state: AppState,
    pub status: Option<StatusMessage>,
    pub export_path: PathBuf,
    pub should_quit: bool,
}

impl<K: KeyValueStore> App<K> {
    pub fn new(store: VocabularyStore<K>) -> Self {
        Self {
            store,
            state: AppState::Menu,
            selected_language_index: 0,
            language: None,
            word_list_scroll: 0,
            form: AddWordForm::default(),
            quiz: None,
            quiz_cursor: 0,
            import_path: InputField::with_text(EXPORT_FILE_NAME),
            import_return_state: AppState::Menu,
            status: None,
            export_path: default_export_path(),
            should_quit: false,
        }
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.import_path = InputField::with_text(&path.to_string_lossy());
        self.export_path = path;
        self
    }

    pub fn selected_language(&self) -> Language {
        Language::ALL[self.selected_language_index.min(Language::ALL.len() - 1)]
    }

    /// Opens a language's section. Any running quiz is discarded.
    pub fn show_language(&mut self, language: Language) {
        self.language = Some(language);
        self.selected_language_index = Language::ALL
            .iter()
            .position(|l| *l == language)
            .unwrap_or(0);
        self.quiz = None;
        self.quiz_cursor = 0;
        self.word_list_scroll = 0;
        self.form.clear();
        self.status = None;
        self.state = AppState::Vocabulary;
    }

    pub fn back_to_menu(&mut self) {
        self.quiz = None;
        self.language = None;
        self.state = AppState::Menu;
    }

    pub fn show_add_word_form(&mut self) {
        if self.language.is_some() {
            self.form.clear();
            self.status = None;
            self.state = AppState::AddWord;
        }
    }

    pub fn cancel_add_word(&mut self) {
        self.form.clear();
        self.state = AppState::Vocabulary;
    }

    /// Submits the add-word form. The form keeps its contents on failure.
    pub fn submit_word(&mut self) {
        let Some(language) = self.language else {
            return;
        };
        match self
            .store
            .add(language, &self.form.term.buffer, &self.form.definition.buffer)
        {
            Ok(()) => {
                self.form.clear();
                self.status = Some(StatusMessage::new(StatusKind::Success, "Word saved"));
                self.state = AppState::Vocabulary;
            }
            Err(e) => {
                self.status = Some(StatusMessage::new(StatusKind::Error, e.to_string()));
            }
        }
    }

    /// Starts a fresh quiz for the current language, replacing any earlier one.
    pub fn start_quiz(&mut self) {
        let Some(language) = self.language else {
            return;
        };
        let session = QuizSession::start(language, self.store.list(language));
        self.status = if session.items().is_empty() {
            Some(StatusMessage::new(
                StatusKind::Info,
                "No words to practise yet. Add some first.",
            ))
        } else {
            None
        };
        self.quiz = Some(session);
        self.quiz_cursor = 0;
        self.state = AppState::Quiz;
    }

    pub fn leave_quiz(&mut self) {
        self.quiz = None;
        self.state = AppState::Vocabulary;
    }

    pub fn click_quiz_item(&mut self, id: ItemId) -> SelectOutcome {
        let Some(session) = self.quiz.as_mut() else {
            return SelectOutcome::Ignored;
        };
        let outcome = session.select_item(id);
        match outcome {
            SelectOutcome::Completed => {
                self.status = Some(StatusMessage::new(StatusKind::Success, COMPLETION_MESSAGE));
            }
            SelectOutcome::Mismatched => {
                self.status = Some(StatusMessage::new(StatusKind::Error, "Not a pair, try again"));
            }
            SelectOutcome::Ignored => {}
            _ => self.status = None,
        }
        outcome
    }

    /// Moves the board cursor. Terms sit in the left column (even ids) and
    /// definitions in the right column (odd ids).
    pub fn move_quiz_cursor(&mut self, rows: isize, toggle_column: bool) {
        let Some(session) = &self.quiz else {
            return;
        };
        let len = session.items().len();
        if len == 0 {
            return;
        }
        let mut cursor = self.quiz_cursor;
        if toggle_column {
            cursor ^= 1;
        }
        let target = cursor as isize + rows * 2;
        if (0..len as isize).contains(&target) {
            cursor = target as usize;
        }
        self.quiz_cursor = cursor.min(len - 1);
    }

    pub fn export(&mut self) {
        let path = self.export_path.clone();
        self.status = Some(match export_to_file(&self.store, &path) {
            Ok(count) => StatusMessage::new(
                StatusKind::Success,
                format!("Exported {} words to {}", count, path.display()),
            ),
            Err(e) => {
                logger::log(&format!("Export failed: {}", e));
                StatusMessage::new(StatusKind::Error, format!("Export failed: {}", e))
            }
        });
    }

    pub fn show_import_prompt(&mut self) {
        if self.state != AppState::ImportPrompt {
            self.import_return_state = self.state;
        }
        self.status = None;
        self.state = AppState::ImportPrompt;
    }

    pub fn cancel_import(&mut self) {
        self.state = self.import_return_state;
    }

    /// Imports from `path`, replacing every language. A bad file leaves the
    /// store as it was.
    pub fn import_from(&mut self, path: &Path) {
        let result = read_import_file(path)
            .map_err(|e| e.to_string())
            .and_then(|snapshot| self.store.apply_snapshot(snapshot).map_err(|e| e.to_string()));

        self.status = Some(match result {
            Ok(()) => {
                // The old quiz was drawn from vocabulary that no longer exists.
                self.quiz = None;
                self.word_list_scroll = 0;
                StatusMessage::new(StatusKind::Success, "Data imported successfully!")
            }
            Err(e) => StatusMessage::new(
                StatusKind::Error,
                format!("Error importing data. Please check the file format. ({})", e),
            ),
        });
        self.state = match self.import_return_state {
            AppState::Quiz | AppState::AddWord | AppState::ImportPrompt => {
                if self.language.is_some() {
                    AppState::Vocabulary
                } else {
                    AppState::Menu
                }
            }
            other => other,
        };
    }

    pub fn submit_import(&mut self) {
        let path = PathBuf::from(self.import_path.buffer.trim());
        self.import_from(&path);
    }
}
