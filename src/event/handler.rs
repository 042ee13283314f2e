use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_textarea::Input;

use crate::app::{App, DialogState, Focus};
use crate::ui;

/// Poll bound when the autosave timer is idle. Keeps the loop waking up
/// now and then even without a pending deadline.
const IDLE_POLL: Duration = Duration::from_secs(60);

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Bound the input wait by the autosave deadline so ticks fire on
        // time; any input event wakes the loop early
        let timeout = app.autosave.remaining().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
                _ => {}
            }
        }

        // The tick runs on this same loop, so it can never race a
        // user-triggered save
        if app.autosave.is_due() {
            app.autosave_tick();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.dialog {
        DialogState::DeleteConfirm => return handle_delete_confirm_dialog(app, key),
        DialogState::Help => return handle_help_dialog(app, key),
        DialogState::None => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => return app.save_note(),
            KeyCode::Char('n') => {
                app.new_note();
                app.focus = Focus::Title;
                return;
            }
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            _ => {}
        }
    }

    if app.search_active && app.focus == Focus::Sidebar {
        return handle_search_input(app, key);
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Title => handle_title_key(app, key),
        Focus::Content => handle_content_key(app, key),
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        // Close the input; the filtered listing stays applied
        KeyCode::Enter => app.search_active = false,
        KeyCode::Backspace => {
            app.search_query.pop();
            app.apply_search();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_query.push(c);
            app.apply_search();
        }
        _ => {}
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_note(),
        KeyCode::Char('k') | KeyCode::Up => app.previous_note(),
        KeyCode::Enter => app.select_note(),
        KeyCode::Char('/') => app.search_active = true,
        KeyCode::Char('n') => {
            app.new_note();
            app.focus = Focus::Title;
        }
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('r') => app.refresh_list(),
        KeyCode::Char('a') => app.toggle_autosave(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increase_interval(),
        KeyCode::Char('-') => app.decrease_interval(),
        KeyCode::Char('?') => app.dialog = DialogState::Help,
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Tab => app.focus = Focus::Title,
        _ => {}
    }
}

fn handle_title_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Tab => app.focus = Focus::Content,
        KeyCode::BackTab | KeyCode::Esc => app.focus = Focus::Sidebar,
        KeyCode::Backspace => {
            app.title_input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.title_input.push(c);
        }
        _ => {}
    }
}

fn handle_content_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Sidebar,
        KeyCode::BackTab => app.focus = Focus::Title,
        _ => {
            let input = Input::from(key);
            app.content.input(input);
        }
    }
}

fn handle_delete_confirm_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

fn handle_help_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_dialog()
        }
        _ => {}
    }
}
