use textile_toolbar::prelude::*;

fn catalog() -> AffixCatalog {
    AffixCatalog::builtin()
}

#[test]
fn test_bold_world_scenario() {
    let state = SelectionState::new("Hello world", 6, 11);
    let result = inject(&state, catalog().get("bold").unwrap());
    assert_eq!(result.new_text, "Hello *world*");
    assert_eq!((result.new_selection_start, result.new_selection_end), (13, 13));
}

#[test]
fn test_link_at_end_scenario() {
    let state = SelectionState::caret("Hello", 5);
    let result = inject(&state, catalog().get("link").unwrap());
    assert_eq!(result.new_text, "Hello\"\":http://");
    assert_eq!(result.new_selection_start, result.new_selection_end);
    assert_eq!(result.new_selection_start, 6);
}

#[test]
fn test_three_line_list_scenario() {
    let text = "intro\na\nb\nc";
    let state = SelectionState::new(text, 6, 11);
    let affix = catalog().get("list-ul").unwrap().clone();
    let result = inject(&state, &affix);
    assert!(result.new_text.contains("* a\n* b\n* c"));
    assert_eq!(result.new_selection_start, 11 + 2 * affix.prefix_len());
    assert!(result.is_collapsed());
}

#[test]
fn test_bogus_construct_scenario() {
    assert_eq!(
        catalog().get("bogus").unwrap_err(),
        CatalogError::UnknownConstruct("bogus".to_string())
    );
}

#[test]
fn test_every_construct_stub_selects_its_placeholder() {
    let catalog = catalog();
    for construct in Construct::ALL {
        let affix = catalog.affix(construct).unwrap();
        let state = SelectionState::caret("before  after", 7);
        let result = inject(&state, affix);
        let selected: String = result
            .new_text
            .chars()
            .skip(result.new_selection_start)
            .take(result.new_selection_end - result.new_selection_start)
            .collect();
        assert_eq!(selected, affix.placeholder, "{construct}");
    }
}

#[test]
fn test_toolbar_round_trip_through_field() {
    let toolbar = Toolbar::default();
    let mut field = TextField::from_text("Quote me\nand me");
    field.set_selection(0, 15);
    let mut model = toolbar.attach(field);
    let events = toolbar
        .dispatch(&mut model, &Message::Button("quote".to_string()))
        .unwrap();
    assert_eq!(model.field.text(), "bq. Quote me\nbq. and me");
    assert_eq!(events, vec![ToolbarEvent::ContentChanged]);
}
