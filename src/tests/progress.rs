use super::Progress;
use crate::store::{CheckStore, MemoryStore};
use crate::syllabus::{NodeId, Syllabus};
use crate::tree::render;

#[test]
fn test_progress_counts_all_depths() {
    let syllabus = Syllabus::from_json(
        r#"{"sections":[{"title":"S","children":[
            {"title":"A","children":[{"title":"A1"},{"title":"A2"}]},
            {"title":"B"}
        ]}]}"#,
    )
    .unwrap();
    let mut store = MemoryStore::new();
    store.set("check-0-0-1", "true");
    store.set("check-0-1", "true");

    let from_store = Progress::of_section(&syllabus.sections[0], 0, &store);
    assert_eq!(
        from_store,
        Progress {
            checked: 2,
            total: 4
        }
    );
    assert_eq!(from_store.to_string(), "2/4");
    assert!(!from_store.is_complete());

    let tree = render(&syllabus.sections[0].children, &NodeId::root(0), &store);
    assert_eq!(Progress::of_tree(&tree), from_store);
}

#[test]
fn test_empty_section_is_never_complete() {
    let progress = Progress::default();
    assert!(!progress.is_complete());

    let full = Progress {
        checked: 3,
        total: 3,
    };
    assert!(full.is_complete());
}
