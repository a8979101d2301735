use castview_types::FeedMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::state::{App, Screen};
use crate::log_key_event;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    log_key_event!(
        app.log_config,
        "key={:?}, screen={:?}, help={}",
        key.code,
        app.screen,
        app.show_help
    );

    // Help modal swallows everything except its own dismissal
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Char('?') => {
            app.toggle_help();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.running = false;
        }
        _ => {
            if app.screen == Screen::Profile {
                handle_profile_keys(app, key);
            }
        }
    }
}

fn handle_profile_keys(app: &mut App, key: KeyEvent) {
    let len = app.feed.casts.len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            app.feed.selection.next(len);
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            app.feed.selection.previous(len);
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            app.next_feed_mode();
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.previous_feed_mode();
        }
        KeyCode::Char('1') => {
            app.set_feed_mode(FeedMode::Casts);
        }
        KeyCode::Char('2') => {
            app.set_feed_mode(FeedMode::Likes);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(index) = app.feed.selection.index() {
                app.activate_row(index);
            }
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.toggle_follow();
        }
        KeyCode::Char('o') | KeyCode::Char('O') => {
            app.open_selected_embed();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh_feed();
        }
        _ => {}
    }
}
