use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus, MessageLevel};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let focus_indicator = match app.focus {
        Focus::Sidebar => "NOTES",
        Focus::Title => "TITLE",
        Focus::Content => "CONTENT",
    };

    let logo = Span::styled(
        " ◆ Jotter ",
        Style::default()
            .fg(theme.black)
            .bg(theme.bright_blue)
            .add_modifier(Modifier::BOLD),
    );

    let mode = Span::styled(
        format!(" {} ", focus_indicator),
        Style::default().fg(theme.black).bg(theme.yellow),
    );

    let autosave = if app.autosave_enabled {
        Span::styled(
            format!(" autosave {}s ", app.autosave_interval_secs),
            Style::default().fg(theme.black).bg(theme.green),
        )
    } else {
        Span::styled(
            " autosave off ",
            Style::default().fg(theme.white).bg(theme.bright_black),
        )
    };

    let message = match &app.status {
        Some(msg) => {
            let color = match msg.level {
                MessageLevel::Info => theme.green,
                MessageLevel::Warning => theme.yellow,
                MessageLevel::Error => theme.red,
            };
            Span::styled(format!(" {}", msg.text), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let count = Span::styled(
        format!("{} notes", app.titles.len()),
        Style::default().fg(theme.foreground),
    );

    let separator = Span::styled(" │ ", Style::default().fg(theme.bright_black));

    let help_key = Span::styled(
        " ? for help ",
        Style::default().fg(theme.white).bg(theme.bright_black),
    );

    // Calculate spacing for justify-between layout
    let left_content = vec![logo, Span::raw(" "), mode, Span::raw(" "), autosave, message];
    let right_content = vec![count, separator, help_key];

    let left_width: usize = left_content.iter().map(|s| s.content.len()).sum();
    let right_width: usize = right_content.iter().map(|s| s.content.len()).sum();
    let available_width = area.width as usize;
    let padding = available_width.saturating_sub(left_width + right_width);

    let mut spans = left_content;
    spans.push(Span::styled(
        " ".repeat(padding),
        Style::default().bg(theme.bright_black),
    ));
    spans.extend(right_content);

    let status_bar =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bright_black));

    f.render_widget(status_bar, area);
}
