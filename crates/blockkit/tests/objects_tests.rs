use blockkit::objects::{
    ChannelLink, ConfirmObject, DateLink, EveryoneLink, HereLink, Link, ObjectLink, OptionGroup,
    OptionObject, PlainText,
};
use blockkit::{Format, JsonObject};
use blockkit_test_utils::{
    init_tracing, numbered_options, option_groups, options, string_301_chars, string_of_len,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn option_single_value_both_forms() {
    init_tracing();
    let option = OptionObject::from_single_value("one");

    assert_eq!(
        Value::Object(option.to_dict_as(Format::Text).unwrap()),
        json!({"text": "one", "value": "one"})
    );
    assert_eq!(
        Value::Object(option.to_dict_as(Format::Block).unwrap()),
        json!({"text": {"type": "plain_text", "text": "one", "emoji": true}, "value": "one"})
    );
}

#[test]
fn option_group_forms() {
    let group = OptionGroup::new("group", options());

    let text = group.to_dict_as(Format::Text).unwrap();
    assert_eq!(text["text"], "group");
    assert_eq!(text["options"][0], json!({"text": "one", "value": "one"}));

    let block = group.to_dict().unwrap();
    assert_eq!(block["label"]["type"], "plain_text");
    assert_eq!(block["options"][2]["text"]["text"], "three");
}

#[test]
fn option_group_label_limit() {
    assert!(OptionGroup::new(string_301_chars(), options()).to_dict().is_err());
    assert!(OptionGroup::new(string_of_len(300), options()).to_dict().is_ok());
}

#[test]
fn option_group_cardinality() {
    assert!(OptionGroup::new("empty", Vec::new()).to_dict().is_err());
    assert!(OptionGroup::new("full", numbered_options(100)).to_dict().is_ok());
    assert_eq!(
        OptionGroup::new("over", numbered_options(101))
            .to_dict()
            .unwrap_err()
            .message(),
        "options attribute must have between 1 and 100 items"
    );
    assert_eq!(option_groups().len(), 2);
}

#[test]
fn confirm_defaults() {
    let map = ConfirmObject::new("title", "text").to_dict().unwrap();
    assert_eq!(map["confirm"]["text"], "Yes");
    assert_eq!(map["deny"]["text"], "No");
}

#[test]
fn link_rendering() {
    assert_eq!(Link::new("http://x.com", "").to_string(), "<http://x.com>");
    assert_eq!(Link::new("http://x.com", "y").to_string(), "<http://x.com|y>");
    assert_eq!(
        DateLink::new(1_392_734_382, "{date_pretty}", "Feb 18, 2014").to_string(),
        "<1392734382^{date_pretty}|Feb 18, 2014>"
    );
    assert_eq!(ObjectLink::new("C123").to_string(), "<#C123>");
    assert_eq!(ObjectLink::new("S123").to_string(), "<!subteam^S123>");
    assert_eq!(ObjectLink::new("U123").with_text("me").to_string(), "<@U123|me>");
    assert_eq!(ChannelLink.to_string(), "<!channel|channel>");
    assert_eq!(HereLink.to_string(), "<!here|here>");
    assert_eq!(EveryoneLink.to_string(), "<!everyone|everyone>");
}

#[test]
fn display_form() {
    assert_eq!(
        PlainText::new("hi").display().to_string(),
        r#"<slack.PlainTextObject: {"type":"plain_text","text":"hi","emoji":true}>"#
    );
}

proptest! {
    #[test]
    fn prop_option_text_boundary(len in 1..150usize) {
        let option = OptionObject::new(string_of_len(len), "v");
        prop_assert_eq!(option.to_dict().is_ok(), len <= OptionObject::TEXT_MAX_LENGTH);
    }

    #[test]
    fn prop_option_forms_share_value(value in "[a-z]{1,40}") {
        let option = OptionObject::from_single_value(value.clone());
        let text = option.to_dict_as(Format::Text).unwrap();
        let block = option.to_dict_as(Format::Block).unwrap();
        prop_assert_eq!(&text["value"], &block["value"]);
        prop_assert_eq!(&text["value"], &Value::String(value));
    }
}
