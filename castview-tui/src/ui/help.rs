use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::theme;

const KEYS: &[(&str, &str)] = &[
    ("j / Down", "Select next row"),
    ("k / Up", "Select previous row"),
    ("Tab / l", "Next feed tab"),
    ("BackTab / h", "Previous feed tab"),
    ("1 / 2", "Casts / Likes"),
    ("Enter", "Activate selected row"),
    ("f", "Follow / unfollow profile"),
    ("o", "Open first embed in browser"),
    ("r", "Refresh the current feed"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

/// Centered help overlay listing the keybindings.
pub fn render_help_modal(frame: &mut Frame) {
    let colors = theme();
    let area = centered_rect(50, 60, frame.area());

    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (key, description) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*description, Style::default().fg(colors.text)),
        ]));
    }

    let help = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.background)),
    );
    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
