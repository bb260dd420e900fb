use blockkit::elements::{
    BlockElement, ButtonElement, ButtonStyle, DatePickerElement, ImageElement,
    OverflowMenuElement, PlainTextInputElement, StaticMultiSelectElement, StaticSelectElement,
    UserSelectElement,
};
use blockkit::JsonObject;
use blockkit_test_utils::{
    button, confirm, image_element, init_tracing, numbered_options, option_groups, options,
    string_of_len,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn button_json() {
    init_tracing();
    let button = button("act")
        .with_style(ButtonStyle::Primary)
        .with_confirm(confirm());
    let map = button.to_dict().unwrap();
    assert_eq!(map["type"], "button");
    assert_eq!(map["text"], json!({"type": "plain_text", "text": "Click me", "emoji": true}));
    assert_eq!(map["style"], "primary");
    assert_eq!(map["confirm"]["title"]["text"], "Are you sure?");
}

#[test]
fn link_button_identity() {
    let button = ButtonElement::link("Docs", "http://example.com");
    assert_eq!(button.action_id.len(), 16);
    assert!(button.action_id.chars().all(|c| c.is_ascii_uppercase()));
    let map = button.to_dict().unwrap();
    assert_eq!(map["value"], "");
    assert_eq!(map["url"], "http://example.com");
}

#[test]
fn static_select_requires_exactly_one_source() {
    assert!(StaticSelectElement::new("pick", "s").to_dict().is_err());
    assert!(StaticSelectElement::new("pick", "s")
        .with_options(options())
        .with_option_groups(option_groups())
        .to_dict()
        .is_err());

    let map = StaticSelectElement::new("pick", "s")
        .with_option_groups(option_groups())
        .to_dict()
        .unwrap();
    assert_eq!(map["type"], "static_select");
    assert_eq!(map["option_groups"][0]["label"]["text"], "first");
}

#[test]
fn multi_select_max_selected() {
    let select = StaticMultiSelectElement::new("pick", "m").with_options(options());
    assert!(select.clone().with_max_selected_items(1).to_dict().is_ok());
    assert_eq!(
        select.with_max_selected_items(0).to_dict().unwrap_err().message(),
        "max_selected_items must be at least 1"
    );
}

#[test]
fn overflow_bounds() {
    assert!(OverflowMenuElement::new("o", numbered_options(1)).to_dict().is_err());
    assert!(OverflowMenuElement::new("o", numbered_options(2)).to_dict().is_ok());
    assert!(OverflowMenuElement::new("o", numbered_options(5)).to_dict().is_ok());
    assert_eq!(
        OverflowMenuElement::new("o", numbered_options(6))
            .to_dict()
            .unwrap_err()
            .message(),
        "options attribute must have between 2 and 5 items"
    );
}

#[test]
fn datepicker_dates() {
    assert!(DatePickerElement::new("d").with_initial_date("2020-02-29").to_dict().is_ok());
    for bad in ["2020-13-01", "20-01-01", "2020/01/01", "2020-01-32"] {
        assert!(
            DatePickerElement::new("d").with_initial_date(bad).to_dict().is_err(),
            "{bad}"
        );
    }
}

#[test]
fn input_length_ordering() {
    let mut input = PlainTextInputElement::new("t");
    input.min_length = Some(10);
    input.max_length = Some(5);
    assert_eq!(
        input.to_dict().unwrap_err().message(),
        "min_length cannot be greater than max_length"
    );
}

#[test]
fn element_classification() {
    let image: BlockElement = image_element().into();
    let input: BlockElement = PlainTextInputElement::new("t").into();
    let users: BlockElement = UserSelectElement::new("who", "u").with_initial_user("U1").into();
    let button: BlockElement = button("b").into();

    assert!(!image.is_interactive() && !image.is_input());
    assert!(!input.is_interactive() && input.is_input());
    assert!(users.is_interactive() && users.is_input());
    assert!(button.is_interactive() && !button.is_input());
    assert_eq!(users.action_id(), Some("u"));
    assert_eq!(
        Value::Object(users.to_dict().unwrap()),
        json!({
            "type": "users_select",
            "placeholder": {"type": "plain_text", "text": "who", "emoji": true},
            "action_id": "u",
            "initial_user": "U1",
        })
    );
}

proptest! {
    #[test]
    fn prop_button_text_boundary(len in 250..350usize) {
        let button = ButtonElement::new(string_of_len(len), "b");
        prop_assert_eq!(button.to_dict().is_ok(), len <= ButtonElement::TEXT_MAX_LENGTH);
    }

    #[test]
    fn prop_image_alt_text_boundary(len in 2990..3010usize) {
        let image = ImageElement::new("http://example.com/a.png", string_of_len(len));
        prop_assert_eq!(image.to_dict().is_ok(), len <= ImageElement::ALT_TEXT_MAX_LENGTH);
    }

    #[test]
    fn prop_action_id_boundary(len in 240..270usize) {
        let button = ButtonElement::new("ok", string_of_len(len));
        prop_assert_eq!(button.to_dict().is_ok(), len <= 255);
    }
}
