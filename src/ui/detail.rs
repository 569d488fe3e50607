use super::centered_rect;
use crate::app::App;
use crate::catalog::WordPair;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const CLOSE_LABEL: &str = "[×]";

/// Area of the detail popup; everything else on screen is backdrop.
pub fn popup_area(area: Rect) -> Rect {
    centered_rect(80, 80, area)
}

/// The close control in the popup's top border.
pub fn close_button_area(popup: Rect) -> Rect {
    let width = CLOSE_LABEL.chars().count() as u16;
    Rect::new(
        popup.right().saturating_sub(width + 2),
        popup.y,
        width.min(popup.width),
        1,
    )
}

/// Furthest the detail text can scroll on a terminal of size `area`
/// before the popup would show blank rows at the bottom.
pub fn max_scroll(pair: &WordPair, area: Rect) -> u16 {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(popup_area(area));
    let lines = Paragraph::new(detail_lines(pair))
        .wrap(Wrap { trim: false })
        .line_count(inner.width);
    u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}

pub fn render(app: &App, pair: &WordPair, frame: &mut Frame) {
    let area = popup_area(frame.area());

    // Clear the list behind the popup
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" #{} ", pair.id))
        .title_bottom(
            Line::from(" Esc/клик вне окна — закрыть   ←/→ — соседняя пара ")
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
        );

    let content = Paragraph::new(detail_lines(pair))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(block);
    frame.render_widget(content, area);

    let close = Paragraph::new(CLOSE_LABEL).style(
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(close, close_button_area(area));
}

fn detail_lines(pair: &WordPair) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", pair.word1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                pair.word2.as_str(),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            " Примеры использования",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    push_word_section(
        &mut lines,
        &pair.word1,
        &pair.definition1,
        &pair.examples_word1,
        Color::Cyan,
    );
    lines.push(Line::from(Span::styled(
        " ────────────",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    push_word_section(
        &mut lines,
        &pair.word2,
        &pair.definition2,
        &pair.examples_word2,
        Color::Magenta,
    );
    lines
}

fn push_word_section<'a>(
    lines: &mut Vec<Line<'a>>,
    word: &'a str,
    definition: &'a str,
    examples: &'a [String],
    color: Color,
) {
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {word} "),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(definition, Style::default().fg(Color::Gray)),
    ]));
    for example in examples {
        lines.push(Line::from(vec![
            Span::styled("   ✓ ", Style::default().fg(color)),
            Span::raw(example.as_str()),
        ]));
    }
    lines.push(Line::from(""));
}
