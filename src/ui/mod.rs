mod import;
pub mod layout;
mod menu;
mod quiz;
mod vocabulary;

use crate::app::{App, StatusKind, StatusMessage};
use crate::db::KeyValueStore;
use crate::models::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub use import::draw_import_prompt;
pub use layout::{calculate_quiz_board, calculate_screen_chunks, centered_rect};
pub use menu::draw_menu;
pub use quiz::draw_quiz;
pub use vocabulary::{draw_add_word_form, draw_vocabulary};

/// Draws whichever screen the app is on.
pub fn draw<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Vocabulary => draw_vocabulary(f, app),
        AppState::AddWord => {
            draw_vocabulary(f, app);
            draw_add_word_form(f, app);
        }
        AppState::Quiz => draw_quiz(f, app),
        AppState::ImportPrompt => {
            let from_language = matches!(
                app.import_return_state,
                AppState::Vocabulary | AppState::AddWord | AppState::Quiz
            );
            if from_language && app.language.is_some() {
                draw_vocabulary(f, app)
            } else {
                draw_menu(f, app)
            }
            draw_import_prompt(f, app);
        }
    }
}

fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_status(f: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let (text, color) = match status {
        Some(message) => (
            message.text.as_str(),
            match message.kind {
                StatusKind::Info => Color::White,
                StatusKind::Success => Color::Green,
                StatusKind::Error => Color::Red,
            },
        ),
        None => ("", Color::White),
    };

    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn help_line(hints: &[(&str, &str)]) -> Line<'static> {
    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    key.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::from(format!(" {}  ", action)),
            ]
        })
        .collect();
    Line::from(spans)
}

fn draw_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let help = Paragraph::new(vec![help_line(hints)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputField;
    use crate::db::MemoryKv;
    use crate::models::Language;
    use crate::store::VocabularyStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn render<K: KeyValueStore>(app: &App<K>) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cursor_after_render<K: KeyValueStore>(app: &App<K>) -> Position {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.get_cursor_position().unwrap()
    }

    fn app() -> App<MemoryKv> {
        let mut store = VocabularyStore::open(MemoryKv::new());
        store.add(Language::English, "cat", "macska").unwrap();
        store.add(Language::English, "dog", "kutya").unwrap();
        App::new(store)
    }

    #[test]
    fn test_help_line_spans() {
        let line = help_line(&[("Esc", "Back"), ("a", "Add")]);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, "Esc");
        assert_eq!(line.spans[1].content, " Back  ");
    }

    #[test]
    fn test_menu_lists_languages() {
        let screen = render(&app());
        assert!(screen.contains("English (2 words)"));
        assert!(screen.contains("Hungarian (0 words)"));
        assert!(screen.contains("French (0 words)"));
    }

    #[test]
    fn test_vocabulary_lists_words() {
        let mut app = app();
        app.show_language(Language::English);
        let screen = render(&app);
        assert!(screen.contains("cat - macska"));
        assert!(screen.contains("dog - kutya"));
    }

    #[test]
    fn test_add_word_form_uses_language_label() {
        let mut app = app();
        app.show_language(Language::French);
        app.show_add_word_form();
        let screen = render(&app);
        assert!(screen.contains("Article"));
    }

    #[test]
    fn test_quiz_board_shows_both_columns() {
        let mut app = app();
        app.show_language(Language::English);
        app.start_quiz();
        let screen = render(&app);
        for word in ["cat", "dog", "macska", "kutya"] {
            assert!(screen.contains(word), "missing {}", word);
        }
        assert!(screen.contains("Matched 0 / 2"));
    }

    #[test]
    fn test_import_prompt_over_menu() {
        let mut app = app();
        app.show_import_prompt();
        let screen = render(&app);
        assert!(screen.contains("Import vocabulary"));
        assert!(screen.contains("vocabulary_data.json"));
    }

    #[test]
    fn test_import_cursor_follows_display_width() {
        let mut narrow = app();
        narrow.show_import_prompt();
        narrow.import_path = InputField::with_text("ab");

        let mut wide = app();
        wide.show_import_prompt();
        wide.import_path = InputField::with_text("日本");

        let narrow_pos = cursor_after_render(&narrow);
        let wide_pos = cursor_after_render(&wide);
        assert_eq!(wide_pos.y, narrow_pos.y);
        assert_eq!(wide_pos.x, narrow_pos.x + 2);
    }
}
