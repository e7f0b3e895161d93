use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use unnest::{DuplicateKeys, Unnest, UnnestError, UnnestOptions, into_owned};

fn owned(input: &Value) -> Value {
	let flat = input.unnest().expect("unnest");
	Value::Object(into_owned(flat).into_iter().collect())
}

#[test]
fn empty() {
	assert_eq!(owned(&json!({})), json!({}));
}

#[test]
fn single_key() {
	assert_eq!(owned(&json!({ "a": 1 })), json!({ "a": 1 }));
}

#[test]
fn one_level() {
	assert_eq!(owned(&json!({ "a": { "b": 1 }, "c": 2 })), json!({ "a.b": 1, "c": 2 }));
}

#[test]
fn several_levels() {
	assert_eq!(
		owned(&json!({ "a": { "b": 1 }, "c": { "d": { "e": 2 } } })),
		json!({ "a.b": 1, "c.d.e": 2 })
	);
}

#[test]
fn keys_come_back_sorted() {
	let input = json!({ "b": { "c": 1, "a": 2 }, "a": 3 });
	let flat = input.unnest().unwrap();
	assert_eq!(flat.keys().collect::<Vec<_>>(), ["a", "b.a", "b.c"]);
}

#[test]
fn owned_result_outlives_input() {
	let flat = {
		let input = json!({ "x": { "y": "z" } });
		into_owned(input.unnest().unwrap())
	};
	assert_eq!(flat.get("x.y"), Some(&json!("z")));
}

#[test]
fn strict_mode_rejects_collisions() {
	let input = json!({ "a": { "b": true }, "a.b": false });
	let err = input
		.unnest_with(UnnestOptions::new().duplicates(DuplicateKeys::Reject))
		.unwrap_err();
	assert_eq!(err.to_string(), "duplicate path key `a.b`");
}

#[test]
fn scalar_root_fails() {
	let err = json!([1, 2]).unnest().unwrap_err();
	assert!(matches!(err, UnnestError::NotAMapping { found: "array" }));
}
