use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use super::{calculate_screen_chunks, draw_help, draw_status, draw_title};
use crate::app::App;
use crate::db::KeyValueStore;
use crate::models::Language;

pub fn draw_menu<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    let layout = calculate_screen_chunks(f.area());

    draw_title(f, layout.header_area, "Vocabulary Quiz v0.1.0");

    let items: Vec<ListItem> = Language::ALL
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let count = app.store.list(*language).len();
            let text = format!(
                "[{}] {} ({} words)",
                i + 1,
                language.display_name(),
                count
            );
            let style = if i == app.selected_language_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Language"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, layout.body_area);

    draw_status(f, layout.status_area, app.status.as_ref());
    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("e", "Export"),
            ("i", "Import"),
            ("q", "Quit"),
        ],
    );
}
