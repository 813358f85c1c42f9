use std::collections::{BTreeMap, HashMap};

use error_map::{context, ErrorContext, IntoErrorContext};
use serde_json::{json, Value};

#[test]
fn unit_is_an_empty_patch() {
    assert!(().into_error_context().is_empty());
}

#[test]
fn borrowed_context_is_cloned() {
    let ctx = context! { "a" => 1 };

    let patch = (&ctx).into_error_context();

    assert_eq!(patch, ctx);
}

#[test]
fn json_objects_become_contexts() {
    let patch = json!({ "userId": 7, "tags": ["a"] }).into_error_context();

    assert_eq!(patch.get("userId"), Some(&json!(7)));
    assert_eq!(patch.get("tags"), Some(&json!(["a"])));
}

#[test]
fn non_object_json_is_empty() {
    assert!(json!("text").into_error_context().is_empty());
    assert!(Value::Null.into_error_context().is_empty());
}

#[test]
fn maps_and_pairs_become_contexts() {
    let mut hash = HashMap::new();
    hash.insert("a", 1);
    let mut tree = BTreeMap::new();
    tree.insert("b".to_owned(), "two");

    assert_eq!(hash.into_error_context().get("a"), Some(&json!(1)));
    assert_eq!(tree.into_error_context().get_str("b"), Some("two"));
    assert_eq!(vec![("c", true)].into_error_context().get("c"), Some(&json!(true)));
    assert_eq!([("d", 4), ("e", 5)].into_error_context().len(), 2);
}

#[test]
fn context_merge_and_display() {
    let mut base: ErrorContext = [("a", 1), ("b", 2)].into_iter().collect();

    base.merge(context! { "b" => 20, "c" => "x" });

    assert_eq!(base.to_string(), "a=1, b=20, c=x");
    assert_eq!(base["missing"], Value::Null);
}

#[test]
fn context_into_json() {
    let value = context! { "k" => "v" }.into_json();

    assert_eq!(value, json!({ "k": "v" }));
}
