mod dialogs;
mod editor;
mod sidebar;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, DialogState};

pub use dialogs::{render_delete_confirm_dialog, render_help_dialog};
pub use editor::render_editor;
pub use sidebar::render_sidebar;
pub use status_bar::render_status_bar;

pub fn render(f: &mut Frame, app: &mut App) {
    // Main area above a one-line status bar
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Sidebar (notes list + search)
            Constraint::Percentage(70), // Editor (title + content)
        ])
        .split(vertical_chunks[0]);

    render_sidebar(f, app, chunks[0]);
    render_editor(f, app, chunks[1]);
    render_status_bar(f, app, vertical_chunks[1]);

    // Render dialogs on top
    match app.dialog {
        DialogState::DeleteConfirm => render_delete_confirm_dialog(f, app),
        DialogState::Help => render_help_dialog(f, app),
        DialogState::None => {}
    }
}
