//! Integration tests for arrow-menu-core
//!
//! These tests verify that menu loading, key decoding and the selection state
//! machine work together by running complete workflows end-to-end.

use arrow_menu_core::{
    config::MenuSource,
    error::Error,
    file_handling::{get_menu_definition, load_menu},
    key_decoder::{decode, split_keystrokes},
    menu_definitions::{MenuColor, OptionValue, SelectOption},
    selection::{SelectionConfig, SelectionResult, SelectionState, Transition},
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_menu(yaml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    temp_file
}

/// Test loading a complete menu file and driving both menus with raw input
#[test]
fn test_complete_menu_workflow() {
    let yaml_content = r#"
question: "Who are you?"
message: "Pick a category"
colors:
  selected: magenta
  description: not-a-color
categories:
  - title: "Fruit"
    description: "Sweet things"
    value: "fruit"
    message: "Which fruit?"
    options:
      - title: "Apple"
        description: "Crunchy"
        value: 10
      - title: "Banana"
        value: 11
  - title: "Vegetables"
    value: 2
    options:
      - title: "Leek"
        description: "Mild onion"
        value: "leek"
"#;

    let temp_file = write_menu(yaml_content);
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let menu = load_menu(&MenuSource::Explicit(temp_path)).unwrap();
    assert_eq!(menu.question, "Who are you?");
    assert!(menu.default_answer.is_none());
    assert_eq!(menu.categories.len(), 2);
    assert_eq!(menu.categories[1].value, OptionValue::Integer(2));
    assert_eq!(menu.categories[0].options[1].description, "");

    let colors = menu.colors.to_scheme();
    assert_eq!(colors.selected, MenuColor::Magenta);
    assert_eq!(colors.unselected, MenuColor::White);
    // Unknown names fall back to the default
    assert_eq!(colors.description, MenuColor::Gray);

    // First menu: Down, Down wraps back to Fruit, then Enter
    let categories = SelectionConfig::new(menu.message.clone(), menu.category_options())
        .with_colors(colors);
    let mut state = SelectionState::for_config(&categories).unwrap();
    let mut outcome = Transition::Ignored;
    for piece in split_keystrokes(b"\x1b[B\x1b[Bx\r") {
        outcome = state.apply(decode(piece));
        if outcome.is_terminal() {
            break;
        }
    }
    let Transition::Resolved(category_index) = outcome else {
        panic!("Expected the first menu to resolve");
    };
    assert_eq!(category_index, 0);

    // Second menu: Up wraps to Banana
    let category = &menu.categories[category_index];
    let options = SelectionConfig::new(category.options_message(), category.options.clone());
    let mut state = SelectionState::for_config(&options).unwrap();
    assert_eq!(state.apply(decode(b"\x1b[A")), Transition::Moved);
    let Transition::Resolved(option_index) = state.apply(decode(b"\r")) else {
        panic!("Expected the second menu to resolve");
    };

    let result = SelectionResult::from_index(&options, option_index);
    assert_eq!(result.selected_index, 1);
    assert_eq!(result.selected_option.title, "Banana");
    assert_eq!(result.selected_option.value, OptionValue::Integer(11));
}

#[test]
fn test_menu_without_categories_is_rejected() {
    let temp_file = write_menu(
        r#"
question: "Who are you?"
message: "Pick"
categories: []
"#,
    );

    let result = get_menu_definition(temp_file.path().to_str().unwrap());
    assert!(matches!(result, Err(Error::EmptyMenuDefinition { .. })));
}

#[test]
fn test_category_without_options_is_rejected() {
    let temp_file = write_menu(
        r#"
question: "Who are you?"
message: "Pick"
categories:
  - title: "Empty"
    value: 1
    options: []
"#,
    );

    let result = get_menu_definition(temp_file.path().to_str().unwrap());
    match result {
        Err(Error::EmptyCategory(title)) => assert_eq!(title, "Empty"),
        other => panic!("Expected EmptyCategory, got {other:?}"),
    }
}

#[test]
fn test_invalid_yaml_reports_path() {
    let temp_file = write_menu("question: [unterminated");
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let error = get_menu_definition(&temp_path).unwrap_err();
    assert!(matches!(error, Error::Yaml { .. }));
    assert!(error.to_string().contains(&temp_path));
}

#[test]
fn test_escape_cancels_from_any_index() {
    let config = SelectionConfig::new(
        "Pick",
        vec![
            SelectOption::new("A", "", "a"),
            SelectOption::new("B", "", "b"),
        ],
    );

    for start in 0..config.options.len() {
        let mut state = SelectionState::new(config.options.len(), start).unwrap();
        assert_eq!(state.apply(decode(&[0x1B])), Transition::Cancelled);
    }
}
