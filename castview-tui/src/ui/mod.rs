// UI module - split into cohesive submodules
pub mod theme;

mod feed;
mod formatting;
mod help;
mod profile;

pub use self::render_main::render;

// Main render logic
mod render_main {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Clear, Paragraph},
        Frame,
    };

    use super::theme::theme;
    use super::{feed, help, profile};
    use crate::app::{App, Screen};

    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 16;

    /// Render the UI
    pub fn render(app: &mut App, frame: &mut Frame) {
        let area = frame.area();
        let colors = theme();

        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(colors.background));
        frame.render_widget(background, area);

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let warning = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Terminal Too Small",
                    Style::default()
                        .fg(colors.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("Minimum size: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(colors.text),
                )),
                Line::from(Span::styled(
                    format!("Current size: {}x{}", area.width, area.height),
                    Style::default().fg(colors.warning),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(warning, area);
            return;
        }

        match app.screen {
            Screen::Loading => render_loading(app, frame),
            Screen::Error => render_error(app, frame),
            Screen::Profile => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(8), // Profile header
                        Constraint::Min(0),    // Tabs + feed
                        Constraint::Length(1), // Status / hint line
                    ])
                    .split(area);

                profile::render_header(app, frame, chunks[0]);
                feed::render_feed(app, frame, chunks[1]);
                render_status_line(app, frame, chunks[2]);
            }
        }

        if app.show_help {
            help::render_help_modal(frame);
        }
    }

    fn render_loading(app: &App, frame: &mut Frame) {
        let colors = theme();
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Loading {} ...", app.slug.display()),
                Style::default()
                    .fg(colors.warning)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Profile")
                .border_style(Style::default().fg(colors.border)),
        );
        frame.render_widget(loading, frame.area());
    }

    fn render_error(app: &App, frame: &mut Frame) {
        let colors = theme();
        let message = app
            .page_error
            .as_deref()
            .unwrap_or("Failed to load profile");
        let error = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load this profile",
                Style::default()
                    .fg(colors.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(colors.text))),
            Line::from(""),
            Line::from(Span::styled(
                "Press q to quit",
                Style::default().fg(colors.text_dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Profile")
                .border_style(Style::default().fg(colors.error)),
        );
        frame.render_widget(error, frame.area());
    }

    fn render_status_line(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
        let colors = theme();
        let line = if let Some((message, _)) = &app.status {
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(colors.warning),
            ))
        } else {
            Line::from(Span::styled(
                " j/k navigate  Tab switch feed  f follow  o open  r refresh  ? help  q quit",
                Style::default().fg(colors.text_dim),
            ))
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
