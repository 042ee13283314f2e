use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let dialog_width = width.min(area.width.saturating_sub(4));
    let dialog_height = height.min(area.height.saturating_sub(4));

    Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    }
}

pub fn render_delete_confirm_dialog(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 50, 9);

    // Clear the area behind the dialog
    f.render_widget(Clear, dialog_area);

    let title = app.selected_title().unwrap_or("");
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete '{}'?", title),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(theme.red),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.yellow)),
            Span::styled(": delete   ", Style::default().fg(theme.white)),
            Span::styled("n", Style::default().fg(theme.yellow)),
            Span::styled("/", Style::default().fg(theme.white)),
            Span::styled("Esc", Style::default().fg(theme.yellow)),
            Span::styled(": cancel", Style::default().fg(theme.white)),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Delete ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.red))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog, dialog_area);
}

pub fn render_help_dialog(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let dialog_area = centered_rect(f.area(), 56, 22);

    f.render_widget(Clear, dialog_area);

    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("{:<12}", k), Style::default().fg(theme.yellow)),
            Span::styled(desc.to_string(), Style::default().fg(theme.white)),
        ])
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Notes list",
            Style::default()
                .fg(theme.bright_blue)
                .add_modifier(Modifier::BOLD),
        )),
        key("j/k, ↓/↑", "Move selection"),
        key("Enter", "Open the selected note"),
        key("n", "New note"),
        key("d", "Delete the selected note"),
        key("r", "Refresh the list"),
        key("/", "Search title and content"),
        key("Esc", "Clear the search"),
        Line::from(""),
        Line::from(Span::styled(
            "Editor",
            Style::default()
                .fg(theme.bright_blue)
                .add_modifier(Modifier::BOLD),
        )),
        key("Tab", "Title field → content"),
        key("Esc", "Back to the notes list"),
        key("Ctrl+S", "Save the open note"),
        key("Ctrl+N", "New note"),
        Line::from(""),
        Line::from(Span::styled(
            "Autosave",
            Style::default()
                .fg(theme.bright_blue)
                .add_modifier(Modifier::BOLD),
        )),
        key("a", "Toggle autosave"),
        key("+/-", "Adjust the interval (5-300s)"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(theme.white).add_modifier(Modifier::ITALIC),
        )),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.bright_blue))
                .style(Style::default().bg(theme.background)),
        )
        .alignment(Alignment::Left);

    f.render_widget(dialog, dialog_area);
}
