use castview_types::{Cast, FeedMode};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use super::formatting::{relative_time, truncate_to_width};
use super::theme::theme;
use crate::app::App;

/// Render the feed area: mode tab bar plus the selectable row list.
pub fn render_feed(app: &mut App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_mode_tabs(app, frame, chunks[0]);
    render_rows(app, frame, chunks[1]);
}

fn render_mode_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let colors = theme();

    let titles: Vec<Line> = FeedMode::ALL
        .iter()
        .map(|mode| Line::from(mode.label()))
        .collect();
    let selected = FeedMode::ALL
        .iter()
        .position(|mode| *mode == app.feed.mode)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors.text_dim))
        .highlight_style(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );
    frame.render_widget(tabs, area);
}

fn render_rows(app: &mut App, frame: &mut Frame, area: Rect) {
    let colors = theme();

    let title = if app.feed.loading {
        format!(" {} (refreshing...) ", app.feed.mode.label())
    } else {
        format!(" {} ", app.feed.mode.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colors.border));

    if app.feed.casts.is_empty() {
        let message = if app.feed.loading {
            "Loading feed..."
        } else {
            "Nothing here yet"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(colors.text_dim))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let now = Utc::now();
    let items: Vec<ListItem> = app
        .feed
        .casts
        .iter()
        .map(|cast| cast_row(cast, text_width, now))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors.highlight_bg));
    frame.render_stateful_widget(list, area, app.feed.selection.list_state_mut());
}

fn cast_row<'a>(cast: &'a Cast, text_width: usize, now: chrono::DateTime<Utc>) -> ListItem<'a> {
    let colors = theme();

    let mut byline = vec![
        Span::styled(
            truncate_to_width(&cast.author.display_name, 24),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("@{}", cast.author.username),
            Style::default().fg(colors.accent),
        ),
    ];
    if let Some(channel) = &cast.channel {
        byline.push(Span::styled(
            format!("  /{}", channel.id),
            Style::default().fg(colors.primary),
        ));
    }
    byline.push(Span::styled(
        format!("  {}", relative_time(cast.timestamp, now)),
        Style::default().fg(colors.text_dim),
    ));

    let mut lines = vec![Line::from(byline)];

    for wrapped in textwrap::wrap(&cast.text, text_width.max(16)) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(colors.text),
        )));
    }

    let mut counters = format!(
        "{} likes  {} recasts  {} replies",
        cast.reactions.likes_count, cast.reactions.recasts_count, cast.replies.count
    );
    if !cast.embeds.is_empty() {
        counters.push_str(&format!("  [{} embeds - o to open]", cast.embeds.len()));
    }
    lines.push(Line::from(Span::styled(
        counters,
        Style::default().fg(colors.text_dim),
    )));
    lines.push(Line::from(""));

    ListItem::new(lines)
}
