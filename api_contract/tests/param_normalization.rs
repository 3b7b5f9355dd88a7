use api_contract::{normalize_param, param_from_url, ParamValue};
use serde::Deserialize;
use url::Url;

fn url(query: &str) -> Url {
    Url::parse(&format!("https://example.com/items{}", query)).unwrap()
}

#[test]
fn missing_param_is_absent() {
    let value = param_from_url(&url("?page=2"), "id");
    assert_eq!(value, ParamValue::Absent);
    assert_eq!(normalize_param(&value), "");
}

#[test]
fn no_query_is_absent() {
    assert_eq!(param_from_url(&url(""), "id"), ParamValue::Absent);
}

#[test]
fn single_param() {
    let value = param_from_url(&url("?id=abc&page=2"), "id");
    assert_eq!(value, ParamValue::Single("abc".to_string()));
    assert_eq!(normalize_param(&value), "abc");
}

#[test]
fn empty_param_matches_absent() {
    let value = param_from_url(&url("?id="), "id");
    assert_eq!(value, ParamValue::Single(String::new()));
    assert_eq!(
        normalize_param(&value),
        normalize_param(&param_from_url(&url(""), "id"))
    );
}

#[test]
fn repeated_param_takes_first() {
    let value = param_from_url(&url("?id=1&page=3&id=2"), "id");
    assert_eq!(
        value,
        ParamValue::Multiple(vec!["1".to_string(), "2".to_string()])
    );
    assert_eq!(normalize_param(&value), "1");
}

#[test]
fn param_values_are_percent_decoded() {
    let value = param_from_url(&url("?q=hello%20world"), "q");
    assert_eq!(normalize_param(&value), "hello world");
}

#[derive(Deserialize)]
struct Params {
    #[serde(default)]
    id: ParamValue,
}

#[test]
fn param_value_from_json() {
    let parse = |json: &str| serde_json::from_str::<Params>(json).unwrap().id;

    assert_eq!(parse("{}"), ParamValue::Absent);
    assert_eq!(parse(r#"{"id": null}"#), ParamValue::Absent);
    assert_eq!(parse(r#"{"id": "abc"}"#), ParamValue::Single("abc".to_string()));
    assert_eq!(parse(r#"{"id": []}"#), ParamValue::Multiple(vec![]));
    assert_eq!(normalize_param(&parse(r#"{"id": ["first", "second"]}"#)), "first");
}

#[test]
fn param_value_rejects_non_strings() {
    assert!(serde_json::from_str::<Params>(r#"{"id": 5}"#).is_err());
    assert!(serde_json::from_str::<Params>(r#"{"id": [1, 2]}"#).is_err());
}

#[test]
fn param_value_serializes_to_wire_form() {
    assert_eq!(serde_json::to_string(&ParamValue::Absent).unwrap(), "null");
    assert_eq!(serde_json::to_string(&ParamValue::from("a")).unwrap(), r#""a""#);
    assert_eq!(
        serde_json::to_string(&ParamValue::from(vec!["a".to_string()])).unwrap(),
        r#"["a"]"#
    );
}
