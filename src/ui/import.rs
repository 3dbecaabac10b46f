use ratatui::{
    Frame,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;
use crate::app::App;
use crate::db::KeyValueStore;

pub fn draw_import_prompt<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    let area = centered_rect(f.area(), 70, 6);
    f.render_widget(Clear, area);

    let text = vec![
        Line::from("File to import (replaces all languages):"),
        Line::from(app.import_path.buffer.clone()),
        Line::from(""),
        Line::from("Enter Import  Esc Cancel"),
    ];
    let prompt = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Import vocabulary")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(prompt, area);

    let cursor_x = area.x + 1 + app.import_path.cursor_width() as u16;
    f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 2));
}
