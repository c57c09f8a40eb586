#![cfg(target_arch = "wasm32")]

use relation_form_dom::{registry::Registry, widgets::extract_form, Markup};
use serde_json::json;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

use web_fixture_::{document, group_markup, init_log, Fixture};

#[wasm_bindgen_test]
fn form_data() {
	init_log();
	let fixture = Fixture::new(
		r#"<input name="title" value="Hello">
		<input type="checkbox" name="published" checked>
		<input type="checkbox" name="pinned">
		<textarea name="body">Text</textarea>
		<select name="kind"><option value="a">A</option><option value="b" selected>B</option></select>"#,
	);

	let data = serde_json::Value::Object(extract_form(&fixture.0));
	assert_eq!(
		data,
		json!({
			"title": "Hello",
			"published": true,
			"pinned": false,
			"body": "Text",
			"kind": "b",
		})
	);
}

#[wasm_bindgen_test]
fn row_state_is_submitted() {
	init_log();
	let fixture = Fixture::new(&group_markup("parts", "U,D"));

	let _registry = Registry::discover(document(), Markup::default()).unwrap();

	let data = extract_form(&fixture.0);
	assert_eq!(data["parts.state"], json!("U,D"));
	assert_eq!(data["parts.0.name"], json!("row 0"));
	assert_eq!(data["parts.1.name"], json!("row 1"));
	assert!(!data.contains_key("parts.${index}.name"), "{:?}", data);
	assert_eq!(data.len(), 3);
}
