use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

pub fn render_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;

    // Split area for the search input when search is active
    let (search_area, list_area) = if app.search_active {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(search_area) = search_area {
        let has_query = !app.search_query.is_empty();
        let has_results = !app.titles.is_empty();
        let border_color = if has_query && !has_results {
            theme.red
        } else if has_query && has_results {
            theme.green
        } else {
            theme.yellow
        };

        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search ");

        let search_text = Paragraph::new(Line::from(vec![
            Span::styled("/", Style::default().fg(theme.white)),
            Span::styled(&app.search_query, Style::default().fg(theme.foreground)),
            Span::styled("_", Style::default().fg(border_color)),
        ]))
        .block(search_block);

        f.render_widget(search_text, search_area);
    }

    let items: Vec<ListItem> = app
        .titles
        .iter()
        .map(|title| {
            ListItem::new(Line::from(Span::styled(
                title.clone(),
                Style::default().fg(theme.foreground),
            )))
        })
        .collect();

    let border_style = if app.focus == Focus::Sidebar {
        Style::default().fg(theme.bright_blue)
    } else {
        Style::default().fg(theme.bright_black)
    };

    let title = if app.search_query.is_empty() {
        format!(" Notes ({}) ", app.titles.len())
    } else {
        format!(" Found {} ", app.titles.len())
    };

    let sidebar = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(theme.bright_black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(app.selected);

    f.render_stateful_widget(sidebar, list_area, &mut list_state);
}
