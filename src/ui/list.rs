use super::list_layout;
use crate::app::{App, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const SEARCH_PLACEHOLDER: &str = "Найти пароним (например: эффектный, адресат)...";
pub const EMPTY_STATE: &str = "Паронимы не найдены. Попробуйте другой запрос.";

pub fn render(app: &App, frame: &mut Frame) {
    let layout = list_layout(frame.area());

    // ── Header ──
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            " 📚 Словарь паронимов",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Научитесь различать похожие слова с разными значениями.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, layout.header);

    // ── Search bar ──
    let editing = app.input_mode == InputMode::Editing;
    let search_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let search_label = " 🔍 ";
    let search_line = if app.query.is_empty() && !editing {
        Line::from(vec![
            Span::raw(search_label),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(search_label),
            Span::styled(app.query.as_str(), Style::default().fg(Color::White)),
        ])
    };
    let search_title = if editing {
        " Search (Enter/Esc to finish) "
    } else {
        " Search (/) "
    };
    let search_bar = Paragraph::new(search_line).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(search_title),
    );
    frame.render_widget(search_bar, layout.search);

    if editing {
        let cursor_x = search_cursor_x(layout.search, search_label.width() + app.query.width());
        frame.set_cursor_position((cursor_x, layout.search.y + 1));
    }

    // ── Match count / hint ──
    let info = match app.match_count() {
        Some(count) => Line::from(vec![
            Span::styled("Найдено пар: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                count.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "Нажмите Enter или кликните по карточке, чтобы увидеть примеры",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(info).alignment(Alignment::Center),
        layout.info,
    );

    // ── Cards ──
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Паронимы ");

    if app.shows_empty_state() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_STATE, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(empty, layout.list);
    } else {
        let items: Vec<ListItem> = app.visible_pairs().map(card).collect();
        let list_widget = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default()
            .with_offset(app.list_offset)
            .with_selected(Some(app.list_selected));
        frame.render_stateful_widget(list_widget, layout.list, &mut list_state);
    }

    // ── Footer ──
    let footer = Line::from(vec![
        Span::styled("Всего в словаре: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.catalog.len().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" пар паронимов", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        layout.footer,
    );

    // ── Status bar ──
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" ↑↓", key_style),
        Span::raw(" Navigate  "),
        Span::styled("/", key_style),
        Span::raw(" Search  "),
        Span::styled("Enter", key_style),
        Span::raw(" Examples  "),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
        Span::styled(app.status_msg.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(status_line), layout.status);
}

/// Column of the editing cursor, `text_width` cells into the search box.
/// Stays on the last cell inside the border once the text is wider.
fn search_cursor_x(search: Rect, text_width: usize) -> u16 {
    let last = search.right().saturating_sub(2).max(search.x);
    search
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(text_width).unwrap_or(u16::MAX))
        .min(last)
}

/// One catalog card: id and both words, then each word's definition.
fn card(pair: &crate::catalog::WordPair) -> ListItem<'_> {
    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(format!("#{:<3}", pair.id), Style::default().fg(Color::DarkGray)),
            Span::styled(
                pair.word1.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                pair.word2.as_str(),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("    {}: ", pair.word1), Style::default().fg(Color::Cyan)),
            Span::raw(pair.definition1.as_str()),
        ]),
        Line::from(vec![
            Span::styled(format!("    {}: ", pair.word2), Style::default().fg(Color::Magenta)),
            Span::raw(pair.definition2.as_str()),
        ]),
        Line::from(""),
    ]);
    ListItem::new(text)
}
