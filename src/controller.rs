//! Add, delete and restore for relation form rows.

use crate::{
	error::Result,
	markup::Markup,
	registry::Registry,
	render::create_element,
	row_state::{Effect, Transition},
};
use tracing::{debug, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Text};

#[derive(Debug)]
pub struct RowController {
	registry: Registry,
}

impl RowController {
	#[must_use]
	pub fn new(registry: Registry) -> Self {
		Self { registry }
	}

	#[must_use]
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Appends a fresh row to `group` and returns its index.
	///
	/// The new row's delete control needs no binding of its own, as the [`Binding`](`crate::binder::Binding`) listens on the whole document.
	///
	/// # Errors
	///
	/// If `group` is unknown or the row couldn't be created.
	#[instrument(skip(self))]
	pub fn add(&mut self, group: &str) -> Result<usize> {
		let document = self.registry.document().clone();
		let group = self.registry.group_mut(group)?;

		let index = group.next_index();
		let row = create_element(&document, &group.template().materialize(group.name(), index))?;
		group.container().append_child(&row)?;

		let allocated = group.allocate(row);
		debug_assert_eq!(allocated, index);
		debug!(index, state = %group.state(), "Added row.");
		Ok(index)
	}

	/// Deletes, restores or cancels row `index` of `group`, depending on its current tag.
	///
	/// # Errors
	///
	/// If `group` is unknown or `index` was never allocated.
	#[instrument(skip(self))]
	pub fn toggle(&mut self, group: &str, index: usize) -> Result<Transition> {
		let (markup, group) = self.registry.markup_and_group_mut(group)?;

		let transition = group.transition(index)?;
		debug!(from = %transition.from, to = %transition.to, state = %group.state(), "Toggled row.");
		apply(markup, group.row(index)?, transition.effect)?;
		Ok(transition)
	}
}

fn apply(markup: &Markup, row: &web_sys::Element, effect: Effect) -> Result<()> {
	match effect {
		Effect::MarkDeleted => {
			for class in &markup.danger_classes {
				row.class_list().add_1(class)?;
			}
			relabel(markup, row, true)
		}
		Effect::Unmark => {
			for class in &markup.danger_classes {
				row.class_list().remove_1(class)?;
			}
			relabel(markup, row, false)
		}
		Effect::Hide => match row.dyn_ref::<HtmlElement>() {
			Some(row) => Ok(row.style().set_property("display", "none")?),
			None => {
				warn!("Row to hide is not an HTML element. Hiding via attribute instead.");
				Ok(row.set_attribute("hidden", "")?)
			}
		},
	}
}

/// Replaces the delete control's label text, keeping icons and other child elements.
fn relabel(markup: &Markup, row: &web_sys::Element, deleted: bool) -> Result<()> {
	let control = match row.query_selector(&markup.delete_selector())? {
		Some(control) => control,
		None => {
			warn!("Row has no delete control to relabel.");
			return Ok(());
		}
	};
	let label = markup.control_label(deleted);

	let children = control.child_nodes();
	let text = (0..children.length())
		.filter_map(|i| children.item(i))
		.filter_map(|node| node.dyn_into::<Text>().ok())
		.find(|text| !text.data().trim().is_empty());
	match text {
		Some(text) => {
			let data = text.data();
			let start = data.len() - data.trim_start().len();
			let end = data.trim_end().len();
			text.set_data(&format!("{}{}{}", &data[..start], label, &data[end..]));
		}
		None => control.append_with_str_1(label)?,
	}
	Ok(())
}
