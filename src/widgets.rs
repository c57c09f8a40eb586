//! Data shapes exchanged with the other form widgets on admin pages.
//!
//! The auto-complete picker, datetime compositor, clear-input button and AJAX submit flow live outside this crate.
//! This module only pins down what they send and expect, so that rows materialized here stay compatible with them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Label of the extra first choice offered by nullable pickers.
pub const CLEAR_VALUE_LABEL: &str = "&lt; clear value &gt;";

/// Response body of the remote choice-list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChoiceList {
	pub data: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Choice {
	pub label: String,
	pub key: String,
	#[serde(default)]
	pub data: Map<String, Value>,
}

/// One entry as handed to the picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
	pub label: String,
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub custom_properties: Option<CustomProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomProperties {
	pub data: Map<String, Value>,
}

impl ChoiceList {
	/// Converts the response into picker options, in order.
	///
	/// Nullable pickers get a leading [`CLEAR_VALUE_LABEL`] option with an empty value and no custom data.
	#[must_use]
	pub fn into_options(self, nullable: bool) -> Vec<ChoiceOption> {
		let clear = nullable.then(|| ChoiceOption {
			label: CLEAR_VALUE_LABEL.to_owned(),
			value: String::new(),
			custom_properties: None,
		});
		clear
			.into_iter()
			.chain(self.data.into_iter().map(|choice| ChoiceOption {
				label: choice.label,
				value: choice.key,
				custom_properties: Some(CustomProperties { data: choice.data }),
			}))
			.collect()
	}
}

/// A picker's link to a sibling field: selecting a choice copies `data[to]` into the input `#{from}-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
	pub to: String,
	pub from: String,
}

/// How many `data-{i}-to`/`data-{i}-from` pairs a picker may carry.
pub const MAX_RELATIONS: usize = 3;

impl Relation {
	/// Reads the `data-{i}-to`/`data-{i}-from` pairs through `attribute`. Incomplete pairs are skipped.
	pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Vec<Self> {
		(0..MAX_RELATIONS)
			.filter_map(|i| {
				Some(Self {
					to: attribute(&format!("data-{}-to", i))?,
					from: attribute(&format!("data-{}-from", i))?,
				})
			})
			.collect()
	}

	#[must_use]
	pub fn target_id(&self) -> String {
		format!("{}-id", self.from)
	}

	/// The value the target input receives. Clearing the picker (`data` is [`None`]) or a missing key empties it.
	#[must_use]
	pub fn value(&self, data: Option<&Map<String, Value>>) -> String {
		match data.and_then(|data| data.get(&self.to)) {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(string)) => string.clone(),
			Some(other) => other.to_string(),
		}
	}
}

/// Formats a UTC offset in seconds as `±hh:mm`, truncating leftover seconds.
#[must_use]
pub fn offset_string(seconds: i64) -> String {
	let sign = if seconds < 0 { '-' } else { '+' };
	let seconds = seconds.unsigned_abs();
	format!("{}{:02}:{:02}", sign, seconds / 3600, seconds % 3600 / 60)
}

/// The value the datetime compositor submits: `{datetime}:{seconds}`, followed by the offset if the field has a time zone.
#[must_use]
pub fn compose_datetime(datetime: &str, seconds: &str, offset_seconds: Option<i64>) -> String {
	match offset_seconds {
		Some(offset) => format!("{}:{}{}", datetime, seconds, offset_string(offset)),
		None => format!("{}:{}", datetime, seconds),
	}
}

/// Ids listed in a clear-input button's comma-separated target attribute.
pub fn clear_targets(target: &str) -> impl '_ + Iterator<Item = &str> {
	target.split(',').filter(|id| !id.is_empty())
}

/// Collects every `input`, `textarea` and `select` below `form` into the JSON object the submit flow sends.
///
/// Checkboxes become booleans, everything else is sent as string.
/// Later fields with the same name win.
#[must_use]
pub fn extract_form(form: &web_sys::Element) -> Map<String, Value> {
	let mut data = Map::new();

	let inputs = form.get_elements_by_tag_name("input");
	for input in (0..inputs.length()).filter_map(|i| inputs.item(i)).filter_map(|e| e.dyn_into::<HtmlInputElement>().ok()) {
		let value = if input.type_() == "checkbox" {
			Value::Bool(input.checked())
		} else {
			Value::String(input.value())
		};
		data.insert(input.name(), value);
	}

	let textareas = form.get_elements_by_tag_name("textarea");
	for textarea in (0..textareas.length()).filter_map(|i| textareas.item(i)).filter_map(|e| e.dyn_into::<HtmlTextAreaElement>().ok()) {
		data.insert(textarea.name(), Value::String(textarea.value()));
	}

	let selects = form.get_elements_by_tag_name("select");
	for select in (0..selects.length()).filter_map(|i| selects.item(i)).filter_map(|e| e.dyn_into::<HtmlSelectElement>().ok()) {
		data.insert(select.name(), Value::String(select.value()));
	}

	data
}
