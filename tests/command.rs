use relation_form_dom::{
	binder::{is_loading, Action, Command},
	Error, Markup,
};

#[test]
fn add() {
	assert_eq!(
		Command::add(Some("items".to_owned())).unwrap(),
		Command {
			group: "items".to_owned(),
			action: Action::Add
		}
	);
	assert!(matches!(Command::add(None), Err(Error::MalformedControl(_))));
}

#[test]
fn toggle() {
	assert_eq!(
		Command::toggle(Some("items".to_owned()), Some(" 12".to_owned())).unwrap(),
		Command {
			group: "items".to_owned(),
			action: Action::Toggle(12)
		}
	);
	assert!(matches!(Command::toggle(None, Some("0".to_owned())), Err(Error::MalformedControl(_))));
	assert!(matches!(Command::toggle(Some("items".to_owned()), None), Err(Error::MalformedControl(_))));
	assert!(matches!(Command::toggle(Some("items".to_owned()), Some("${index}".to_owned())), Err(Error::MalformedControl(_))));
	assert!(matches!(Command::toggle(Some("items".to_owned()), Some("-1".to_owned())), Err(Error::MalformedControl(_))));
}

#[test]
fn markup_ids() {
	let markup = Markup::default();
	assert_eq!(markup.container_id("items"), "items-container");
	assert_eq!(markup.template_id("items"), "items-template");
	assert_eq!(markup.state_field_id("items"), "items.state-id");
	assert_eq!(markup.row_id("items", 3), "items.3");
	assert_eq!(markup.add_selector(), ".sub-form-add-button");
	assert_eq!(markup.delete_selector(), ".sub-form-delete-button");
	assert_eq!(markup.control_label(true), "restore");
	assert_eq!(markup.control_label(false), "delete");

	let markup = markup.with_control_classes("add", "del").with_labels("remove", "undo");
	assert_eq!(markup.delete_selector(), ".del");
	assert_eq!(markup.control_label(true), "undo");

	let markup = markup.with_template_class("template").with_placeholder("__i__").with_danger_classes(["table-danger"]);
	assert_eq!(markup.template_class, "template");
	assert_eq!(markup.placeholder, "__i__");
	assert_eq!(markup.danger_classes, ["table-danger"]);
}

#[test]
fn installation_waits_only_while_loading() {
	assert!(is_loading("loading"));
	assert!(!is_loading("interactive"));
	assert!(!is_loading("complete"));
}
