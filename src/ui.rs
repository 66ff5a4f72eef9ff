//! The UI renders the application state into something visible and checkable.
//!
//! The frame is split into the section navigation on the left, the active section's tree on the
//! right and a help bar along the bottom.

use crate::app_state::{AppState, Content};
use crate::config::Config;
use crate::tree::Row;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const HELP: &str =
    "↑/↓: Move | Space: Check | Enter/←/→: Collapse/Expand | Tab/[ ]: Section | q: Quit";

/// Renders the navigation, content area and help bar.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Min(0)])
        .split(rows[0]);

    draw_nav(f, app, columns[0]);
    draw_content(f, app, cfg, columns[1]);

    let help = Paragraph::new(HELP).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, rows[1]);
}

fn draw_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .nav
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let progress = app.section_progress(i);
            let progress_style = if progress.is_complete() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let line = Line::from(vec![
                Span::raw(format!("{} ", entry.title)),
                Span::styled(format!("({progress})"), progress_style),
            ]);
            let style = if app.nav.is_active(i) {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Sections"));
    f.render_widget(list, area);
}

fn draw_content(f: &mut Frame, app: &AppState, cfg: &Config, area: Rect) {
    match &app.content {
        Content::Empty => {
            f.render_widget(Block::default().borders(Borders::ALL), area);
        }
        Content::Error(message) => {
            let error = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(error, area);
        }
        Content::Section(view) => {
            let items: Vec<ListItem> = app
                .visible_rows()
                .iter()
                .map(|row| ListItem::new(row_line(row, cfg.indent_width)))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(view.title.as_str()),
                )
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            let mut state = ListState::default().with_selected(Some(app.cursor));
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

/// Indentation, toggle glyph, checkbox and label for one tree row.
fn row_line(row: &Row<'_>, indent_width: usize) -> Line<'static> {
    let node = row.node;
    let toggle = match (node.has_toggle(), node.expanded) {
        (false, _) => "  ",
        (true, true) => "▼ ",
        (true, false) => "▶ ",
    };
    let checkbox = if node.checked { "[x] " } else { "[ ] " };
    let label_style = if node.checked {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(" ".repeat(row.depth * indent_width)),
        Span::styled(toggle, Style::default().fg(Color::Yellow)),
        Span::raw(checkbox),
        Span::styled(node.title.clone(), label_style),
    ])
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
