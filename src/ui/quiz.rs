use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::{calculate_quiz_board, calculate_screen_chunks, draw_help, draw_status, draw_title};
use crate::app::App;
use crate::db::KeyValueStore;
use crate::quiz::{QuizItem, QuizSession, SlotKind};
use crate::utils::{pad_to_width, truncate_string};

fn item_style(item: &QuizItem, under_cursor: bool) -> Style {
    let style = if item.is_matched() {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    } else if item.is_selected() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if under_cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn column_items(
    session: &QuizSession,
    kind: SlotKind,
    cursor: usize,
    width: usize,
) -> Vec<ListItem<'static>> {
    session
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind() == kind)
        .map(|(id, item)| {
            let marker = if item.is_matched() { "✓ " } else { "  " };
            let text = truncate_string(item.text(), width.saturating_sub(2));
            ListItem::new(format!("{}{}", marker, pad_to_width(&text, width.saturating_sub(2))))
                .style(item_style(item, id == cursor))
        })
        .collect()
}

pub fn draw_quiz<K: KeyValueStore>(f: &mut Frame, app: &App<K>) {
    let Some(session) = &app.quiz else {
        return;
    };
    let layout = calculate_screen_chunks(f.area());

    let progress = format!(
        "{} Test - Matched {} / {}",
        session.language().display_name(),
        session.matched_pairs(),
        session.pair_count()
    );
    draw_title(f, layout.header_area, &progress);

    if session.items().is_empty() {
        let empty = Paragraph::new("This language has no words yet.")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, layout.body_area);
    } else {
        let board = calculate_quiz_board(layout.body_area);
        let column_width = board.term_column.width.saturating_sub(2) as usize;

        let terms = List::new(column_items(session, SlotKind::Term, app.quiz_cursor, column_width))
            .block(Block::default().borders(Borders::ALL).title("Words"));
        f.render_widget(terms, board.term_column);

        let definitions = List::new(column_items(
            session,
            SlotKind::Definition,
            app.quiz_cursor,
            column_width,
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(session.language().definition_label()),
        );
        f.render_widget(definitions, board.definition_column);
    }

    draw_status(f, layout.status_area, app.status.as_ref());
    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓/←/→", "Move"),
            ("Enter", "Select"),
            ("r", "New Test"),
            ("Esc", "Back"),
        ],
    );
}
