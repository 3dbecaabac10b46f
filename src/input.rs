use crate::app::App;
use crate::db::KeyValueStore;
use crate::models::{AppState, Language};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Menu => handle_menu_input(app, key),
        AppState::Vocabulary => handle_vocabulary_input(app, key),
        AppState::AddWord => handle_add_word_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::ImportPrompt => handle_import_input(app, key),
    }
}

fn handle_menu_input<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    match key.code {
        KeyCode::Up => {
            app.selected_language_index = app.selected_language_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected_language_index < Language::ALL.len() - 1 {
                app.selected_language_index += 1;
            }
        }
        KeyCode::Enter => {
            let language = app.selected_language();
            app.show_language(language);
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.show_language(Language::ALL[index]);
        }
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('i') => app.show_import_prompt(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_vocabulary_input<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_menu(),
        KeyCode::Char('a') => app.show_add_word_form(),
        KeyCode::Char('t') => app.start_quiz(),
        KeyCode::Char('e') => app.export(),
        KeyCode::Char('i') => app.show_import_prompt(),
        KeyCode::Up => {
            app.word_list_scroll = app.word_list_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = app
                .language
                .map(|language| app.store.list(language).len())
                .unwrap_or(0);
            if app.word_list_scroll < len.saturating_sub(1) {
                app.word_list_scroll += 1;
            }
        }
        _ => {}
    }
}

fn handle_add_word_input<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_add_word(),
        KeyCode::Enter => app.submit_word(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.form.toggle_focus(),
        KeyCode::Left => app.form.focused_input().move_left(),
        KeyCode::Right => app.form.focused_input().move_right(),
        KeyCode::Backspace => app.form.focused_input().backspace(),
        KeyCode::Char(c) => app.form.focused_input().insert(c),
        _ => {}
    }
}

fn handle_quiz_input<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_quiz(),
        KeyCode::Up => app.move_quiz_cursor(-1, false),
        KeyCode::Down => app.move_quiz_cursor(1, false),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.move_quiz_cursor(0, true),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.click_quiz_item(app.quiz_cursor);
        }
        KeyCode::Char('r') => app.start_quiz(),
        _ => {}
    }
}

fn handle_import_input<K: KeyValueStore>(app: &mut App<K>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_import(),
        KeyCode::Enter => app.submit_import(),
        KeyCode::Left => app.import_path.move_left(),
        KeyCode::Right => app.import_path.move_right(),
        KeyCode::Backspace => app.import_path.backspace(),
        KeyCode::Char(c) => app.import_path.insert(c),
        _ => {}
    }
}
