use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

pub fn render_editor(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_title_field(f, app, chunks[0]);
    render_content_field(f, app, chunks[1]);
}

fn render_title_field(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Title;

    let border_style = if focused {
        Style::default().fg(theme.bright_blue)
    } else {
        Style::default().fg(theme.bright_black)
    };

    let mut spans = vec![Span::styled(
        &app.title_input,
        Style::default().fg(theme.foreground),
    )];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.yellow)));
    }

    let title_field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Title ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    f.render_widget(title_field, area);
}

fn render_content_field(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Content;

    let border_style = if focused {
        Style::default().fg(theme.bright_blue)
    } else {
        Style::default().fg(theme.bright_black)
    };
    let title = if focused {
        " Content | Ctrl+S: Save, Esc: Back "
    } else {
        " Content "
    };

    app.content.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    f.render_widget(&app.content, area);
}
