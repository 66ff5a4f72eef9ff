use super::draw;
use crate::app_state::{AppState, Command};
use crate::config::Config;
use crate::store::MemoryStore;
use crate::syllabus::{NodeId, Syllabus};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn screen(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal
        .draw(|f| draw(f, app, &Config::default()))
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn document() -> Syllabus {
    Syllabus::from_json(
        r#"{"sections":[
            {"title":"Aptitude","children":[
                {"title":"Algebra","children":[{"title":"Groups"}]},
                {"title":"Calculus"}
            ]},
            {"title":"Networks","children":[]}
        ]}"#,
    )
    .unwrap()
}

#[test]
fn test_draws_navigation_and_tree() {
    let mut app = AppState::new(document(), Box::new(MemoryStore::new()));
    app.dispatch(Command::SetChecked(NodeId::root(0).child(1), true));

    let text = screen(&app);

    assert!(text.contains("Aptitude (1/3)"), "{text}");
    assert!(text.contains("Networks (0/0)"), "{text}");
    assert!(text.contains("▼ [ ] Algebra"), "{text}");
    assert!(text.contains("    [ ] Groups"), "{text}");
    assert!(text.contains("  [x] Calculus"), "{text}");
}

#[test]
fn test_collapsed_node_hides_children() {
    let mut app = AppState::new(document(), Box::new(MemoryStore::new()));
    app.dispatch(Command::ToggleNode(NodeId::root(0).child(0)));

    let text = screen(&app);

    assert!(text.contains("▶ [ ] Algebra"), "{text}");
    assert!(!text.contains("Groups"), "{text}");
}

#[test]
fn test_draws_load_failure_message() {
    let app = AppState::failed();

    let text = screen(&app);

    assert!(text.contains("Error loading syllabus data."), "{text}");
}
