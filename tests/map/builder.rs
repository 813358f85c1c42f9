use error_map::map::{Action, Condition};
use error_map::{ErrorKind, ErrorMap, ErrorMapBuilder, ErrorMapConfig, ErrorValue};
use regex::Regex;
use serde_json::json;

fn fallback() -> ErrorValue {
    ErrorValue::internal("INTERNAL_ERROR")
}

#[test]
fn new_builder_defaults_to_message_property() {
    let map = ErrorMapBuilder::new(fallback()).build();

    assert_eq!(map.global_property(), "message");
    assert!(map.rules().is_empty());
    assert_eq!(map.rollback_error().code(), "INTERNAL_ERROR");
}

#[test]
fn rules_keep_insertion_order() {
    let map = ErrorMapBuilder::new(fallback())
        .includes(["timeout"])
        .throw_string("FIRST")
        .equals("x")
        .throw_error_instance(ErrorValue::conflict("SECOND"))
        .matches(Regex::new("^y$").unwrap())
        .throw_custom_error(|_, _| "THIRD")
        .one_of(["E1"])
        .pass()
        .kind_of(ErrorKind::NotFound)
        .throw_string("FIFTH")
        .instance_of::<std::io::Error>()
        .throw_string("SIXTH")
        .build();

    let inputs: Vec<_> = map.rules().iter().map(|rule| rule.input.label()).collect();
    let outputs: Vec<_> = map.rules().iter().map(|rule| rule.output.label()).collect();

    assert_eq!(inputs, ["includes", "equals", "matches", "one_of", "instance_of", "instance_of"]);
    assert_eq!(outputs[0], "throw_string");
    assert_eq!(outputs[1], "throw_error_instance");
    assert_eq!(outputs[2], "throw_custom_error");
    assert_eq!(outputs[3], "pass");
    assert_eq!(map.rules().len(), 6);
}

#[test]
fn builder_exposes_rules_before_build() {
    let builder = ErrorMapBuilder::new(fallback()).equals("a").throw_string("A");

    assert_eq!(builder.rules().len(), 1);
}

#[test]
fn global_property_can_be_changed() {
    let map = ErrorMapBuilder::new(fallback()).global_property("code").build();

    assert_eq!(map.global_property(), "code");
}

#[test]
fn on_property_scopes_the_rule() {
    let map = ErrorMapBuilder::new(fallback()).equals("E_LOCKED").on_property("code").pass().build();

    match &map.rules()[0].input {
        Condition::Equals { message, property } => {
            assert_eq!(message, "E_LOCKED");
            assert_eq!(property.as_deref(), Some("code"));
        },
        other => panic!("unexpected condition {:?}", other),
    }
}

#[test]
fn throw_error_instance_stores_the_template() {
    let map = ErrorMapBuilder::new(fallback())
        .equals("x")
        .throw_error_instance(ErrorValue::not_found("NOPE"))
        .build();

    match &map.rules()[0].output {
        Action::ThrowErrorInstance(template) => assert_eq!(template.code(), "NOPE"),
        other => panic!("unexpected action {:?}", other),
    }
}

#[test]
fn from_config_reads_plain_json() {
    let config: ErrorMapConfig = serde_json::from_value(json!({
        "globalProperty": "code",
        "rollbackError": fallback().to_json(),
    }))
    .unwrap();

    let map = ErrorMapBuilder::from_config(config).equals("E1").throw_string("ONE").build();

    assert_eq!(map.global_property(), "code");
    assert_eq!(map.rollback_error().code(), "INTERNAL_ERROR");
    assert_eq!(map.rules().len(), 1);
}

#[test]
fn from_config_without_property_uses_message() {
    let config: ErrorMapConfig = serde_json::from_value(json!({ "rollbackError": fallback().to_json() })).unwrap();

    let map = ErrorMapBuilder::from_config(config).build();

    assert_eq!(map.global_property(), "message");
}

#[test]
fn builder_converts_into_map() {
    let map: ErrorMap = ErrorMapBuilder::new(fallback()).equals("a").throw_string("A").into();

    assert_eq!(map.rules().len(), 1);
}

#[test]
fn built_maps_share_rules() {
    let map = ErrorMapBuilder::new(fallback()).equals("a").throw_string("A").build();
    let copy = map.clone();

    assert!(std::ptr::eq(map.rules(), copy.rules()));
}
