use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::theme;
use crate::app::App;

/// Render the profile header card: identity line, follow state, counts, bio.
pub fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let colors = theme();

    let Some(profile) = &app.profile else {
        let empty = Paragraph::new("No profile data")
            .style(Style::default().fg(colors.text_dim))
            .block(Block::default().borders(Borders::ALL).title("Profile"));
        frame.render_widget(empty, area);
        return;
    };

    let mut identity = vec![
        Span::styled(
            profile.display_name.clone(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("@{}", profile.username),
            Style::default().fg(colors.accent),
        ),
    ];

    // Follow state only makes sense for someone else's profile
    if profile.fid != app.viewer_fid {
        let follow_label = match profile.viewer_following {
            Some(true) => "[following - f to unfollow]",
            _ => "[f to follow]",
        };
        identity.push(Span::raw("  "));
        identity.push(Span::styled(
            follow_label,
            Style::default().fg(colors.text_dim),
        ));
    }

    let mut lines = vec![Line::from(identity)];

    lines.push(Line::from(vec![
        Span::styled(
            profile.following_count.to_string(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Following   ", Style::default().fg(colors.text_dim)),
        Span::styled(
            profile.follower_count.to_string(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Followers", Style::default().fg(colors.text_dim)),
    ]));

    lines.push(Line::from(""));
    if let Some(bio) = &profile.bio {
        lines.push(Line::from(Span::styled(
            bio.clone(),
            Style::default().fg(colors.text),
        )));
    }

    let title = format!(" fid {} ", profile.fid);
    let header = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(header, area);
}
