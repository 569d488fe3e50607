use super::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {keys:<12}"), Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());

    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("Global"),
        binding("?", "Toggle this help"),
        binding("q", "Quit application"),
        binding("Ctrl+C", "Quit from anywhere"),
        Line::from(""),
        section("List"),
        binding("↑/k ↓/j", "Move between pairs"),
        binding("g/G", "Jump to first/last pair"),
        binding("Enter/Space", "Show definitions and examples"),
        binding("/", "Edit the search query"),
        binding("Esc", "Clear the search query"),
        binding("Click", "Open a card / focus the search bar"),
        Line::from(""),
        section("Search"),
        binding("Type", "Filter by either word, case-insensitive"),
        binding("Backspace", "Delete last character"),
        binding("Ctrl+U", "Clear the query"),
        binding("Enter/Esc", "Stop editing, keep the query"),
        Line::from(""),
        section("Examples"),
        binding("Esc/q/x", "Close"),
        binding("Click", "Outside the window or on [×] to close"),
        binding("←/→ p/n", "Previous/next pair"),
        binding("↑/↓ PgUp/PgDn", "Scroll"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help — Keybindings ")
                .title_bottom(
                    Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray)),
                ),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
