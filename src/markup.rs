//! The markup contract between server-rendered relation forms and this crate.
//!
//! Every group `g` needs:
//!
//! - a container `#g-container` that new rows are appended to,
//! - a hidden template `#g-template` carrying [`Markup::template_class`],
//! - a hidden row state input `#g.state-id`,
//! - one pre-rendered row `#g.{index}` per allocated row state slot, each with a delete control,
//! - and an add control.
//!
//! Add and delete controls name their group in [`Markup::group_attribute`], delete controls also carry their row index in [`Markup::index_attribute`].

/// Names used to find and decorate relation form elements.
///
/// [`Markup::default`] matches the stock admin templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
	pub add_class: String,
	pub delete_class: String,
	pub group_attribute: String,
	pub index_attribute: String,
	pub container_suffix: String,
	pub template_suffix: String,
	pub state_field_suffix: String,
	/// Hides the template and keeps it out of the layout. Removed from materialized rows.
	pub template_class: String,
	pub placeholder: String,
	pub danger_classes: Vec<String>,
	pub delete_label: String,
	pub restore_label: String,
}

impl Default for Markup {
	fn default() -> Self {
		Self {
			add_class: "sub-form-add-button".to_owned(),
			delete_class: "sub-form-delete-button".to_owned(),
			group_attribute: "data-target".to_owned(),
			index_attribute: "data-index".to_owned(),
			container_suffix: "-container".to_owned(),
			template_suffix: "-template".to_owned(),
			state_field_suffix: ".state-id".to_owned(),
			template_class: "d-none".to_owned(),
			placeholder: "${index}".to_owned(),
			danger_classes: vec!["border".to_owned(), "border-2".to_owned(), "border-danger".to_owned()],
			delete_label: "delete".to_owned(),
			restore_label: "restore".to_owned(),
		}
	}
}

impl Markup {
	#[must_use]
	pub fn with_control_classes(mut self, add: impl Into<String>, delete: impl Into<String>) -> Self {
		self.add_class = add.into();
		self.delete_class = delete.into();
		self
	}

	#[must_use]
	pub fn with_template_class(mut self, template_class: impl Into<String>) -> Self {
		self.template_class = template_class.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_danger_classes<I: IntoIterator<Item = S>, S: Into<String>>(mut self, classes: I) -> Self {
		self.danger_classes = classes.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_labels(mut self, delete: impl Into<String>, restore: impl Into<String>) -> Self {
		self.delete_label = delete.into();
		self.restore_label = restore.into();
		self
	}

	#[must_use]
	pub fn container_id(&self, group: &str) -> String {
		format!("{}{}", group, self.container_suffix)
	}

	#[must_use]
	pub fn template_id(&self, group: &str) -> String {
		format!("{}{}", group, self.template_suffix)
	}

	#[must_use]
	pub fn state_field_id(&self, group: &str) -> String {
		format!("{}{}", group, self.state_field_suffix)
	}

	#[must_use]
	pub fn row_id(&self, group: &str, index: usize) -> String {
		format!("{}.{}", group, index)
	}

	/// CSS selector matching add controls.
	#[must_use]
	pub fn add_selector(&self) -> String {
		format!(".{}", self.add_class)
	}

	/// CSS selector matching delete controls.
	#[must_use]
	pub fn delete_selector(&self) -> String {
		format!(".{}", self.delete_class)
	}

	/// The label a delete control shows while its row is or isn't marked for deletion.
	#[must_use]
	pub fn control_label(&self, deleted: bool) -> &str {
		if deleted {
			&self.restore_label
		} else {
			&self.delete_label
		}
	}
}
