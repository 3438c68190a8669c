//! Integration tests for builder crate

use pagewright_builder::catalog::default_section;
use pagewright_builder::transfer::{parse_import, to_json_pretty};
use pagewright_builder::{BuilderStore, ReorderCoordinator, SectionType, SectionUpdate};

fn types(store: &BuilderStore) -> Vec<(SectionType, u32)> {
    store
        .sections()
        .iter()
        .map(|s| (s.section_type(), s.order))
        .collect()
}

#[test]
fn test_add_header_then_hero() {
    let mut store = BuilderStore::new();

    store.add_section(default_section(SectionType::Header));
    let hero_id = store.add_section(default_section(SectionType::Hero));

    assert_eq!(
        types(&store),
        vec![(SectionType::Header, 0), (SectionType::Hero, 1)]
    );
    assert_eq!(store.selected_section_id(), Some(hero_id.as_str()));
}

#[test]
fn test_reorder_two_sections() {
    let mut store = BuilderStore::new();
    store.add_section(default_section(SectionType::Header));
    store.add_section(default_section(SectionType::Hero));

    store.reorder_sections(0, 1).unwrap();

    assert_eq!(
        types(&store),
        vec![(SectionType::Hero, 0), (SectionType::Header, 1)]
    );
}

#[test]
fn test_clear_website() {
    let mut store = BuilderStore::new();
    store.add_section(default_section(SectionType::About));
    store.add_section(default_section(SectionType::Footer));

    store.clear_website();

    assert!(store.sections().is_empty());
    assert_eq!(store.selected_section_id(), None);
}

#[test]
fn test_delete_selected_clears_selection() {
    let mut store = BuilderStore::new();
    let header = store.add_section(default_section(SectionType::Header));
    let hero = store.add_section(default_section(SectionType::Hero));

    assert!(store.delete_section(&hero));
    assert_eq!(store.sections().len(), 1);
    assert_eq!(store.sections()[0].id, header);
    assert_eq!(store.selected_section_id(), None);
}

#[test]
fn test_delete_unselected_keeps_selection() {
    let mut store = BuilderStore::new();
    let header = store.add_section(default_section(SectionType::Header));
    let hero = store.add_section(default_section(SectionType::Hero));

    assert!(store.delete_section(&header));
    assert_eq!(store.selected_section_id(), Some(hero.as_str()));
    assert_eq!(store.sections()[0].order, 0);
}

#[test]
fn test_toggle_preview_always_clears_selection() {
    let mut store = BuilderStore::new();
    let id = store.add_section(default_section(SectionType::Hero));

    assert!(store.toggle_preview_mode());
    assert_eq!(store.selected_section_id(), None);

    store.select_section(Some(&id));
    assert!(!store.toggle_preview_mode());
    assert_eq!(store.selected_section_id(), None);
}

#[test]
fn test_import_rejects_non_array_sections() {
    let mut store = BuilderStore::new();
    store.add_section(default_section(SectionType::Header));
    let before = store.sections().to_vec();
    let version = store.version();

    let result = store.import_json(
        r#"{"version":"1.0.0","name":"x","description":"","sections":"not-an-array","createdAt":"","updatedAt":""}"#,
    );

    assert!(result.is_err());
    assert_eq!(store.sections(), before.as_slice());
    assert_eq!(store.version(), version);
}

#[test]
fn test_export_import_round_trip() {
    let mut source = BuilderStore::new();
    for section_type in SectionType::ALL {
        source.add_section(default_section(section_type));
    }
    let hidden = source.sections()[2].id.clone();
    source.toggle_section_visibility(&hidden);
    source.reorder_sections(4, 1).unwrap();

    let text = to_json_pretty(&source.export_website("Site", "desc")).unwrap();

    let mut target = BuilderStore::new();
    target.add_section(default_section(SectionType::Footer));
    target.import_website(parse_import(&text).unwrap());

    assert_eq!(target.sections(), source.sections());
    assert_eq!(target.selected_section_id(), None);
}

#[test]
fn test_update_keeps_id_order_and_type() {
    let mut store = BuilderStore::new();
    store.add_section(default_section(SectionType::Header));
    let hero = store.add_section(default_section(SectionType::Hero));

    let patch = serde_json::json!({ "title": "Launch", "id": "hijack", "order": 9 });
    let found = store
        .update_section(&hero, SectionUpdate::patch(patch.as_object().unwrap().clone()))
        .unwrap();

    assert!(found);
    let section = store.get_section_by_id(&hero).unwrap();
    assert_eq!(section.id, hero);
    assert_eq!(section.order, 1);
    assert_eq!(section.section_type(), SectionType::Hero);
    assert!(store.get_section_by_id("hijack").is_none());
}

#[test]
fn test_update_unknown_id_is_noop() {
    let mut store = BuilderStore::new();
    store.add_section(default_section(SectionType::About));
    let before = store.sections().to_vec();

    let found = store
        .update_section("missing", SectionUpdate::visibility(false))
        .unwrap();

    assert!(!found);
    assert_eq!(store.sections(), before.as_slice());
}

#[test]
fn test_drag_end_moves_section() {
    let mut store = BuilderStore::new();
    let header = store.add_section(default_section(SectionType::Header));
    store.add_section(default_section(SectionType::Hero));
    let footer = store.add_section(default_section(SectionType::Footer));

    ReorderCoordinator::drag_end(&mut store, &header, Some(&footer)).unwrap();

    assert_eq!(
        types(&store),
        vec![
            (SectionType::Hero, 0),
            (SectionType::Footer, 1),
            (SectionType::Header, 2)
        ]
    );
}
