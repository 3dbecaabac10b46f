use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::{calculate_screen_chunks, centered_rect, draw_help, draw_status, draw_title};
use crate::app::{App, FormField, InputField};
use crate::db::KeyValueStore;
use crate::utils::truncate_string;

pub fn draw_vocabulary<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    let Some(language) = app.language else {
        return;
    };
    let layout = calculate_screen_chunks(f.area());
    let words = app.store.list(language);

    draw_title(
        f,
        layout.header_area,
        &format!("{} Vocabulary - {} words", language.display_name(), words.len()),
    );

    let max_width = layout.body_area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = if words.is_empty() {
        vec![ListItem::new("No words yet. Press 'a' to add one.").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        words
            .iter()
            .skip(app.word_list_scroll)
            .map(|pair| {
                ListItem::new(truncate_string(
                    &format!("{} - {}", pair.term, pair.definition),
                    max_width,
                ))
            })
            .collect()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Words"));
    f.render_widget(list, layout.body_area);

    draw_status(f, layout.status_area, app.status.as_ref());
    draw_help(
        f,
        layout.help_area,
        &[
            ("a", "Add Word"),
            ("t", "Start Test"),
            ("e", "Export"),
            ("i", "Import"),
            ("Esc", "Menu"),
        ],
    );
}

fn input_line(label: &str, field: &InputField, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::from(field.buffer.clone()),
    ])
}

pub fn draw_add_word_form<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    let Some(language) = app.language else {
        return;
    };
    let area = centered_rect(f.area(), 60, 7);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Add {} Word", language.display_name()))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let focused = app.form.focused_field();
    let term_label = "Word";
    let definition_label = language.definition_label();

    f.render_widget(
        Paragraph::new(input_line(term_label, &app.form.term, focused == FormField::Term)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(input_line(
            definition_label,
            &app.form.definition,
            focused == FormField::Definition,
        )),
        rows[1],
    );
    f.render_widget(
        Paragraph::new("Tab Switch field  Enter Save  Esc Cancel")
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );

    let (row, label, field) = match focused {
        FormField::Term => (rows[0], term_label, &app.form.term),
        FormField::Definition => (rows[1], definition_label, &app.form.definition),
    };
    let prefix_width = label.chars().count() + 2;
    let cursor_x = row.x + (prefix_width + field.cursor_width()) as u16;
    f.set_cursor_position((cursor_x.min(row.right().saturating_sub(1)), row.y));
}
