use log::warn;
use tui_textarea::TextArea;

use crate::autosave::{AutosaveTimer, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::config::Config;
use crate::store::{NoteStore, StoreError};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Sidebar,
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogState {
    None,
    DeleteConfirm,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// The whole interactive session: the open note (title field + content
/// buffer), the sidebar listing, search and autosave settings, and the
/// transient ui state. Owned by the event loop; every operation runs to
/// completion before the next event is handled.
pub struct App<'a> {
    pub store: NoteStore,
    pub theme: Theme,

    pub titles: Vec<String>,
    pub selected: Option<usize>,

    pub title_input: String,
    pub content: TextArea<'a>,

    pub focus: Focus,
    pub dialog: DialogState,
    pub status: Option<StatusMessage>,

    pub search_active: bool,
    pub search_query: String,

    pub autosave_enabled: bool,
    pub autosave_interval_secs: u64,
    pub autosave: AutosaveTimer,

    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(config: Config) -> Self {
        let store = NoteStore::new(config.notes_path());

        let mut status = None;
        if let Err(err) = store.ensure_dir() {
            status = Some(StatusMessage {
                level: MessageLevel::Error,
                text: format!("Cannot create {}: {}", store.dir().display(), err),
            });
        }

        let titles = store.list_titles();
        let autosave_interval_secs = config
            .autosave
            .interval_secs
            .clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);

        Self {
            store,
            theme: Theme::default(),
            titles,
            selected: None,
            title_input: String::new(),
            content: Self::buffer_from(""),
            focus: Focus::Sidebar,
            dialog: DialogState::None,
            status,
            search_active: false,
            search_query: String::new(),
            autosave_enabled: config.autosave.enabled,
            autosave_interval_secs,
            // The timer runs for the whole session; ticks are no-ops
            // while autosave is off
            autosave: AutosaveTimer::armed(autosave_interval_secs),
            should_quit: false,
        }
    }

    fn buffer_from(content: &str) -> TextArea<'a> {
        let mut textarea = TextArea::new(content.lines().map(String::from).collect());
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea
    }

    pub fn buffer_content(&self) -> String {
        self.content.lines().join("\n")
    }

    pub fn set_status(&mut self, level: MessageLevel, text: String) {
        self.status = Some(StatusMessage { level, text });
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.titles.get(i))
            .map(String::as_str)
    }

    /// Reloads the displayed listing from disk, keeping the current search
    /// filter applied and clamping the selection.
    pub fn refresh_list(&mut self) {
        if let Err(err) = self.store.ensure_dir() {
            warn!("could not create notes directory: {}", err);
        }

        self.titles = if !self.search_query.trim().is_empty() {
            self.store.search(&self.search_query)
        } else {
            self.store.list_titles()
        };

        self.selected = match self.selected {
            Some(i) if !self.titles.is_empty() => Some(i.min(self.titles.len() - 1)),
            _ => None,
        };
    }

    /// Replaces the displayed listing with the notes matching the current
    /// query. The editor buffer is untouched.
    pub fn apply_search(&mut self) {
        self.titles = self.store.search(&self.search_query);
        self.selected = if self.titles.is_empty() { None } else { Some(0) };
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.refresh_list();
    }

    pub fn next_note(&mut self) {
        if self.titles.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.titles.len() - 1),
            None => 0,
        });
    }

    pub fn previous_note(&mut self) {
        if self.titles.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Loads the selected note into the editor, replacing any unsaved
    /// buffer without warning.
    pub fn select_note(&mut self) {
        let Some(title) = self.selected_title().map(String::from) else {
            return;
        };
        match self.store.read(&title) {
            Ok(content) => {
                self.title_input = title;
                self.content = Self::buffer_from(&content);
            }
            // A vanished file is ignored here, the next refresh drops it
            Err(StoreError::NotFound(_)) => {}
            Err(err) => self.set_status(MessageLevel::Error, format!("Open failed: {}", err)),
        }
    }

    pub fn new_note(&mut self) {
        self.title_input.clear();
        self.content = Self::buffer_from("");
        self.selected = None;
    }

    pub fn save_note(&mut self) {
        let title = self.title_input.trim().to_string();
        if title.is_empty() {
            self.set_status(
                MessageLevel::Warning,
                "Enter a title for the note".to_string(),
            );
            return;
        }

        match self.store.write(&title, &self.buffer_content()) {
            Ok(()) => {
                self.refresh_list();
                self.set_status(MessageLevel::Info, format!("Saved '{}'", title));
            }
            Err(StoreError::InvalidTitle) => self.set_status(
                MessageLevel::Error,
                "Title contains only invalid characters".to_string(),
            ),
            Err(err) => self.set_status(MessageLevel::Error, format!("Save failed: {}", err)),
        }
    }

    pub fn request_delete(&mut self) {
        if self.selected_title().is_none() {
            self.set_status(MessageLevel::Warning, "Select a note to delete".to_string());
            return;
        }
        self.dialog = DialogState::DeleteConfirm;
    }

    pub fn confirm_delete(&mut self) {
        self.dialog = DialogState::None;
        let Some(title) = self.selected_title().map(String::from) else {
            return;
        };
        match self.store.delete(&title) {
            Ok(()) => {
                self.new_note();
                self.refresh_list();
                self.set_status(MessageLevel::Info, format!("Deleted '{}'", title));
            }
            Err(StoreError::NotFound(_)) => {
                self.refresh_list();
                self.set_status(MessageLevel::Error, "File not found".to_string());
            }
            Err(err) => self.set_status(MessageLevel::Error, format!("Delete failed: {}", err)),
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::None;
    }

    pub fn toggle_autosave(&mut self) {
        self.autosave_enabled = !self.autosave_enabled;
        let text = if self.autosave_enabled {
            format!("Autosave on, every {}s", self.autosave_interval_secs)
        } else {
            "Autosave off".to_string()
        };
        self.set_status(MessageLevel::Info, text);
    }

    pub fn increase_interval(&mut self) {
        self.set_interval(self.autosave_interval_secs.saturating_add(5));
    }

    pub fn decrease_interval(&mut self) {
        self.set_interval(self.autosave_interval_secs.saturating_sub(5));
    }

    /// The new interval is picked up at the next re-arm, not immediately.
    fn set_interval(&mut self, secs: u64) {
        self.autosave_interval_secs = secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
        self.set_status(
            MessageLevel::Info,
            format!("Autosave interval: {}s", self.autosave_interval_secs),
        );
    }

    /// One timer tick: persist the open note when autosave is on, then
    /// re-arm. Failures are logged and never surfaced; the re-arm is
    /// unconditional so a failed write cannot stall the loop.
    pub fn autosave_tick(&mut self) {
        if self.autosave_enabled {
            self.autosave_write();
        }
        self.autosave.rearm(self.autosave_interval_secs);
    }

    fn autosave_write(&self) {
        let title = self.title_input.trim();
        // Nothing worth persisting without a usable title
        if title.is_empty() || self.store.path_for(title).is_none() {
            return;
        }
        if let Err(err) = self.store.write(title, &self.buffer_content()) {
            warn!("autosave failed for '{}': {}", title, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AutosaveConfig;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_app(dir: &Path) -> App<'static> {
        App::new(Config {
            notes_dir: dir.join("notes").to_string_lossy().to_string(),
            autosave: AutosaveConfig::default(),
        })
    }

    fn set_buffer(app: &mut App<'static>, text: &str) {
        app.content = App::buffer_from(text);
    }

    #[test]
    fn test_save_requires_a_title() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        set_buffer(&mut app, "orphaned text");

        app.save_note();

        assert_eq!(app.status.as_ref().unwrap().level, MessageLevel::Warning);
        assert!(app.store.list_titles().is_empty());
    }

    #[test]
    fn test_save_writes_and_refreshes_list() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.title_input = "Groceries".to_string();
        set_buffer(&mut app, "milk\neggs");

        app.save_note();

        assert_eq!(app.titles, vec!["Groceries".to_string()]);
        assert_eq!(app.store.read("Groceries").unwrap(), "milk\neggs");
        assert_eq!(app.status.as_ref().unwrap().level, MessageLevel::Info);
    }

    #[test]
    fn test_save_surfaces_invalid_title() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.title_input = "???".to_string();

        app.save_note();

        assert_eq!(app.status.as_ref().unwrap().level, MessageLevel::Error);
        assert!(app.store.list_titles().is_empty());
    }

    #[test]
    fn test_select_loads_note_replacing_buffer() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.store.write("Kept", "saved body").unwrap();
        app.refresh_list();
        app.title_input = "Unsaved".to_string();
        set_buffer(&mut app, "about to be discarded");

        app.selected = Some(0);
        app.select_note();

        assert_eq!(app.title_input, "Kept");
        assert_eq!(app.buffer_content(), "saved body");
    }

    #[test]
    fn test_new_note_clears_session() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.title_input = "Old".to_string();
        set_buffer(&mut app, "old body");
        app.selected = Some(0);

        app.new_note();

        assert!(app.title_input.is_empty());
        assert!(app.buffer_content().is_empty());
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());

        app.request_delete();

        assert_eq!(app.dialog, DialogState::None);
        assert_eq!(app.status.as_ref().unwrap().level, MessageLevel::Warning);
    }

    #[test]
    fn test_delete_confirms_then_resets_session() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.store.write("Doomed", "body").unwrap();
        app.refresh_list();
        app.selected = Some(0);
        app.select_note();

        app.request_delete();
        assert_eq!(app.dialog, DialogState::DeleteConfirm);
        app.confirm_delete();

        assert!(matches!(
            app.store.read("Doomed"),
            Err(StoreError::NotFound(_))
        ));
        assert!(app.title_input.is_empty());
        assert!(app.titles.is_empty());
        assert_eq!(app.status.as_ref().unwrap().level, MessageLevel::Info);
    }

    #[test]
    fn test_search_replaces_listing_only() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.store.write("Category", "taxonomy").unwrap();
        app.store.write("Misc", "a stray cat").unwrap();
        app.store.write("Dog", "bark").unwrap();
        app.refresh_list();
        app.title_input = "Untouched".to_string();
        set_buffer(&mut app, "buffer stays");

        app.search_active = true;
        app.search_query = "cat".to_string();
        app.apply_search();

        assert_eq!(app.titles, vec!["Category".to_string(), "Misc".to_string()]);
        assert_eq!(app.title_input, "Untouched");
        assert_eq!(app.buffer_content(), "buffer stays");
    }

    #[test]
    fn test_clear_search_restores_full_listing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.store.write("Category", "").unwrap();
        app.store.write("Dog", "bark").unwrap();
        app.search_active = true;
        app.search_query = "cat".to_string();
        app.apply_search();
        assert_eq!(app.titles.len(), 1);

        app.clear_search();

        assert!(!app.search_active);
        assert!(app.search_query.is_empty());
        assert_eq!(app.titles.len(), 2);
    }

    #[test]
    fn test_autosave_tick_disabled_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.autosave_enabled = false;
        app.title_input = "Pending".to_string();
        set_buffer(&mut app, "never persisted");

        app.autosave_tick();

        assert!(app.store.list_titles().is_empty());
    }

    #[test]
    fn test_autosave_tick_empty_title_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.autosave_enabled = true;
        set_buffer(&mut app, "text without a home");

        app.autosave_tick();

        assert!(app.store.list_titles().is_empty());
    }

    #[test]
    fn test_autosave_tick_invalid_title_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.autosave_enabled = true;
        app.title_input = "***".to_string();
        set_buffer(&mut app, "body");

        app.autosave_tick();

        assert!(app.store.list_titles().is_empty());
        // silent skip, nothing surfaced
        assert!(app.status.is_none());
    }

    #[test]
    fn test_autosave_tick_persists_open_note() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.autosave_enabled = true;
        app.title_input = "Journal".to_string();
        set_buffer(&mut app, "dear diary");

        app.autosave_tick();

        assert_eq!(app.store.read("Journal").unwrap(), "dear diary");
    }

    #[test]
    fn test_autosave_tick_always_rearms() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.autosave_enabled = false;

        app.autosave_tick();

        assert!(!app.autosave.is_due());
        assert!(app.autosave.remaining().is_some());
    }

    #[test]
    fn test_interval_adjust_clamps_to_range() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());

        app.autosave_interval_secs = MIN_INTERVAL_SECS;
        app.decrease_interval();
        assert_eq!(app.autosave_interval_secs, MIN_INTERVAL_SECS);

        app.autosave_interval_secs = MAX_INTERVAL_SECS;
        app.increase_interval();
        assert_eq!(app.autosave_interval_secs, MAX_INTERVAL_SECS);

        app.autosave_interval_secs = 30;
        app.increase_interval();
        assert_eq!(app.autosave_interval_secs, 35);
    }

    #[test]
    fn test_refresh_list_clamps_selection() {
        let tmp = TempDir::new().unwrap();
        let mut app = test_app(tmp.path());
        app.store.write("Only", "").unwrap();
        app.selected = Some(5);

        app.refresh_list();

        assert_eq!(app.selected, Some(0));
        app.store.delete("Only").unwrap();
        app.refresh_list();
        assert!(app.selected.is_none());
    }
}
