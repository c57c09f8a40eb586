//! Every relation form group on a page, resolved once from the markup.

use crate::{
	error::{Error, Result},
	load::load_element,
	markup::Markup,
	row_state::{RowState, Transition},
	template::Template,
};
use hashbrown::{HashMap, HashSet};
use tracing::{debug, instrument, trace};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// One repeated sub-form region.
#[derive(Debug)]
pub struct Group {
	name: String,
	container: web_sys::Element,
	template: Template,
	template_element: web_sys::Element,
	state_field: HtmlInputElement,
	state: RowState,
	rows: Vec<web_sys::Element>,
}

impl Group {
	/// Looks up the container, template, row state input and pre-rendered rows of `name`.
	///
	/// # Errors
	///
	/// If any of these is missing, or if the row state input doesn't parse.
	#[instrument(skip(document, markup))]
	pub fn resolve(document: &Document, markup: &Markup, name: &str) -> Result<Self> {
		let container_id = markup.container_id(name);
		let container = document.get_element_by_id(&container_id).ok_or_else(|| Error::MissingContainer {
			group: name.to_owned(),
			id: container_id,
		})?;

		let template_id = markup.template_id(name);
		let template_element = document.get_element_by_id(&template_id).ok_or_else(|| Error::MissingTemplate {
			group: name.to_owned(),
			id: template_id,
		})?;
		let template = Template::new(load_element(&template_element), markup.template_class.as_str(), markup.placeholder.as_str());

		let state_field_id = markup.state_field_id(name);
		let state_field = document
			.get_element_by_id(&state_field_id)
			.and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
			.ok_or_else(|| Error::MissingStateField {
				group: name.to_owned(),
				id: state_field_id,
			})?;

		let state = read(&state_field)?;
		let rows = (0..state.len())
			.map(|index| {
				let row_id = markup.row_id(name, index);
				document.get_element_by_id(&row_id).ok_or(Error::MissingRow {
					group: name.to_owned(),
					id: row_id,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		debug!(rows = rows.len(), state = %state, "Resolved relation form group.");
		Ok(Self {
			name: name.to_owned(),
			container,
			template,
			template_element,
			state_field,
			state,
			rows,
		})
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn container(&self) -> &web_sys::Element {
		&self.container
	}

	#[must_use]
	pub fn template(&self) -> &Template {
		&self.template
	}

	#[must_use]
	pub fn state(&self) -> &RowState {
		&self.state
	}

	/// Parses the row state input as it currently is on the page.
	///
	/// # Errors
	///
	/// Iff the input holds an invalid tag.
	pub fn read(&self) -> Result<RowState> {
		read(&self.state_field)
	}

	/// The index the next [`Group::allocate`] call will return.
	#[must_use]
	pub fn next_index(&self) -> usize {
		self.state.len()
	}

	/// Allocates a [`Created`](`crate::row_state::RowTag::Created`) slot for `row` and records the row under it.
	pub fn allocate(&mut self, row: web_sys::Element) -> usize {
		let index = self.state.allocate();
		self.rows.push(row);
		debug_assert_eq!(self.rows.len(), self.state.len());
		self.write();
		index
	}

	/// Applies the delete control's transition to row `index`.
	///
	/// # Errors
	///
	/// Iff `index` was never allocated.
	pub fn transition(&mut self, index: usize) -> Result<Transition> {
		let transition = self.state.transition(index).ok_or_else(|| self.out_of_range(index))?;
		self.write();
		Ok(transition)
	}

	/// # Errors
	///
	/// Iff `index` was never allocated.
	pub fn row(&self, index: usize) -> Result<&web_sys::Element> {
		self.rows.get(index).ok_or_else(|| self.out_of_range(index))
	}

	/// Takes the template markup off the page so its placeholder fields aren't submitted with the form.
	///
	/// Rows are materialized from the snapshot taken in [`Group::resolve`], so nothing reads the live template afterwards.
	fn detach_template(&self) {
		trace!(group = %self.name, "Detaching template.");
		self.template_element.remove();
	}

	fn write(&self) {
		let value = self.state.to_string();
		trace!(group = %self.name, %value, "Writing row state.");
		self.state_field.set_value(&value);
	}

	fn out_of_range(&self, index: usize) -> Error {
		Error::IndexOutOfRange {
			group: self.name.clone(),
			index,
			len: self.state.len(),
		}
	}
}

fn read(state_field: &HtmlInputElement) -> Result<RowState> {
	state_field.value().parse()
}

#[derive(Debug)]
pub struct Registry {
	document: Document,
	markup: Markup,
	groups: HashMap<String, Group>,
}

impl Registry {
	/// Resolves every group named by an add control, a delete control or a row state input in `document`.
	///
	/// Once all groups resolved, their templates are removed from the page.
	///
	/// # Errors
	///
	/// If a control lacks its group attribute or any named group is incomplete.
	#[instrument(skip(document))]
	pub fn discover(document: Document, markup: Markup) -> Result<Self> {
		let mut names = HashSet::new();
		for selector in [markup.add_selector(), markup.delete_selector()] {
			for control in query_all(&document, &selector)? {
				let name = control
					.get_attribute(&markup.group_attribute)
					.ok_or_else(|| Error::MalformedControl(format!("{} without {}", selector, markup.group_attribute)))?;
				names.insert(name);
			}
		}
		for field in query_all(&document, &format!("[id$=\"{}\"]", markup.state_field_suffix))? {
			if let Some(name) = field.id().strip_suffix(markup.state_field_suffix.as_str()) {
				names.insert(name.to_owned());
			}
		}

		let groups = names
			.into_iter()
			.map(|name| Group::resolve(&document, &markup, &name).map(|group| (name, group)))
			.collect::<Result<HashMap<_, _>>>()?;
		for group in groups.values() {
			group.detach_template();
		}
		debug!(groups = groups.len(), "Discovered relation form groups.");

		Ok(Self { document, markup, groups })
	}

	#[must_use]
	pub fn document(&self) -> &Document {
		&self.document
	}

	#[must_use]
	pub fn markup(&self) -> &Markup {
		&self.markup
	}

	/// # Errors
	///
	/// Iff no group called `name` was registered.
	pub fn group(&self, name: &str) -> Result<&Group> {
		self.groups.get(name).ok_or_else(|| Error::UnknownGroup(name.to_owned()))
	}

	/// # Errors
	///
	/// Iff no group called `name` was registered.
	pub fn group_mut(&mut self, name: &str) -> Result<&mut Group> {
		self.groups.get_mut(name).ok_or_else(|| Error::UnknownGroup(name.to_owned()))
	}

	/// # Errors
	///
	/// Iff no group called `name` was registered.
	pub fn markup_and_group_mut(&mut self, name: &str) -> Result<(&Markup, &mut Group)> {
		let group = self.groups.get_mut(name).ok_or_else(|| Error::UnknownGroup(name.to_owned()))?;
		Ok((&self.markup, group))
	}

	pub fn groups(&self) -> impl '_ + Iterator<Item = &Group> {
		self.groups.values()
	}
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<web_sys::Element>> {
	let nodes = document.query_selector_all(selector)?;
	Ok((0..nodes.length()).filter_map(|i| nodes.item(i)).filter_map(|node| node.dyn_into::<web_sys::Element>().ok()).collect())
}
