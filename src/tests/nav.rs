use super::Navigation;
use crate::syllabus::Syllabus;

fn three_sections() -> Syllabus {
    Syllabus::from_json(r#"{"sections":[{"title":"One"},{"title":"Two"},{"title":"Three"}]}"#)
        .unwrap()
}

#[test]
fn test_entries_follow_document_order() {
    let nav = Navigation::new(&three_sections());

    let titles: Vec<&str> = nav.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["One", "Two", "Three"]);
    assert_eq!(nav.active(), None);
}

#[test]
fn test_single_active_entry() {
    let mut nav = Navigation::new(&three_sections());

    assert!(nav.activate(1));
    assert!(nav.activate(2));

    let active: Vec<usize> = (0..3).filter(|&i| nav.is_active(i)).collect();
    assert_eq!(active, [2]);
}

#[test]
fn test_out_of_range_activation_ignored() {
    let mut nav = Navigation::new(&three_sections());
    nav.activate(0);

    assert!(!nav.activate(3));
    assert_eq!(nav.active(), Some(0));
}

#[test]
fn test_next_and_prev_wrap() {
    let mut nav = Navigation::new(&three_sections());
    nav.activate(2);
    assert_eq!(nav.next(), Some(0));
    assert_eq!(nav.prev(), Some(1));

    nav.activate(0);
    assert_eq!(nav.prev(), Some(2));
}

#[test]
fn test_empty_navigation() {
    let mut nav = Navigation::new(&Syllabus::default());

    assert!(nav.entries().is_empty());
    assert!(!nav.activate(0));
    assert_eq!(nav.next(), None);
    assert_eq!(nav.prev(), None);
}
