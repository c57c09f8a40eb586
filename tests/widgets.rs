use relation_form_dom::widgets::{clear_targets, compose_datetime, offset_string, ChoiceList, Relation, CLEAR_VALUE_LABEL};
use serde_json::json;

#[test]
fn choice_options() {
	let list: ChoiceList = serde_json::from_value(json!({
		"data": [
			{ "label": "Alice", "key": "1", "data": { "id": 1, "team_id": 7 } },
			{ "label": "Bob", "key": "2" },
		]
	}))
	.unwrap();

	let options = list.clone().into_options(false);
	assert_eq!(options.len(), 2);
	assert_eq!(options[0].label, "Alice");
	assert_eq!(options[0].value, "1");
	assert_eq!(options[0].custom_properties.as_ref().unwrap().data["team_id"], json!(7));
	assert!(options[1].custom_properties.as_ref().unwrap().data.is_empty());

	let nullable = list.into_options(true);
	assert_eq!(nullable.len(), 3);
	assert_eq!(nullable[0].label, CLEAR_VALUE_LABEL);
	assert_eq!(nullable[0].value, "");
	assert_eq!(nullable[0].custom_properties, None);
	assert_eq!(nullable[1].label, "Alice");
}

#[test]
fn choice_option_json() {
	let list: ChoiceList = serde_json::from_value(json!({ "data": [{ "label": "A", "key": "a", "data": { "x": 1 } }] })).unwrap();
	let options = serde_json::to_value(list.into_options(true)).unwrap();
	assert_eq!(
		options,
		json!([
			{ "label": CLEAR_VALUE_LABEL, "value": "" },
			{ "label": "A", "value": "a", "customProperties": { "data": { "x": 1 } } },
		])
	);
}

#[test]
fn offsets() {
	assert_eq!(offset_string(0), "+00:00");
	assert_eq!(offset_string(32_400), "+09:00");
	assert_eq!(offset_string(-16_200), "-04:30");
	assert_eq!(offset_string(3_659), "+01:00");
	assert_eq!(offset_string(-59), "-00:00");
}

#[test]
fn datetimes() {
	assert_eq!(compose_datetime("2023-06-29T10:15", "30.5", None), "2023-06-29T10:15:30.5");
	assert_eq!(compose_datetime("2023-06-29T10:15", "00", Some(32_400)), "2023-06-29T10:15:00+09:00");
}

#[test]
fn clear_input_targets() {
	assert_eq!(clear_targets("a-id,,b-id,").collect::<Vec<_>>(), ["a-id", "b-id"]);
	assert_eq!(clear_targets("").count(), 0);
}

#[test]
fn relations() {
	let attributes = |name: &str| match name {
		"data-0-to" => Some("id".to_owned()),
		"data-0-from" => Some("author".to_owned()),
		"data-1-to" => Some("team_id".to_owned()),
		"data-2-to" => Some("name".to_owned()),
		"data-2-from" => Some("author_name".to_owned()),
		_ => None,
	};
	let relations = Relation::from_attributes(attributes);
	assert_eq!(
		relations,
		[
			Relation {
				to: "id".to_owned(),
				from: "author".to_owned()
			},
			Relation {
				to: "name".to_owned(),
				from: "author_name".to_owned()
			},
		]
	);
	assert_eq!(relations[0].target_id(), "author-id");

	let data = json!({ "id": 5, "name": "Ada", "nothing": null });
	let data = data.as_object();
	assert_eq!(relations[0].value(data), "5");
	assert_eq!(relations[1].value(data), "Ada");
	assert_eq!(relations[1].value(None), "");
	assert_eq!(
		Relation {
			to: "nothing".to_owned(),
			from: "x".to_owned()
		}
		.value(data),
		""
	);
}
