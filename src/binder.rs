//! Routes clicks on add and delete controls to the [`RowController`].
//!
//! A single delegated `click` listener on the document serves every control, including those inside rows added later.

use crate::{
	controller::RowController,
	error::{Error, Result},
	markup::Markup,
	registry::Registry,
};
use core::{cell::RefCell, mem};
use std::rc::Rc;
use tracing::{debug, error, instrument, trace, trace_span, warn};
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, throw_str, JsCast, UnwrapThrowExt};
use web_sys::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	Add,
	/// Delete, restore or cancel the row with this index.
	Toggle(usize),
}

/// A click on a relation form control, decoded from its data attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
	pub group: String,
	pub action: Action,
}

impl Command {
	/// Decodes an add control's group attribute.
	///
	/// # Errors
	///
	/// Iff `group` is missing.
	pub fn add(group: Option<String>) -> Result<Self> {
		Ok(Self {
			group: group.ok_or_else(|| Error::MalformedControl("add control without group".to_owned()))?,
			action: Action::Add,
		})
	}

	/// Decodes a delete control's group and index attributes.
	///
	/// # Errors
	///
	/// If either is missing or the index isn't a decimal integer.
	pub fn toggle(group: Option<String>, index: Option<String>) -> Result<Self> {
		let group = group.ok_or_else(|| Error::MalformedControl("delete control without group".to_owned()))?;
		let index = index.ok_or_else(|| Error::MalformedControl(format!("delete control of {:?} without index", group)))?;
		let index = index
			.trim()
			.parse()
			.map_err(|_| Error::MalformedControl(format!("delete control of {:?} with non-numeric index {:?}", group, index)))?;
		Ok(Self { group, action: Action::Toggle(index) })
	}

	/// Finds the control `target` belongs to, if any, and decodes it.
	///
	/// # Errors
	///
	/// Iff the control's attributes are malformed.
	pub fn from_target(markup: &Markup, target: &web_sys::Element) -> Result<Option<Self>> {
		if let Some(control) = target.closest(&markup.add_selector())? {
			return Self::add(control.get_attribute(&markup.group_attribute)).map(Some);
		}
		if let Some(control) = target.closest(&markup.delete_selector())? {
			return Self::toggle(control.get_attribute(&markup.group_attribute), control.get_attribute(&markup.index_attribute)).map(Some);
		}
		Ok(None)
	}

	/// # Errors
	///
	/// Whatever the [`RowController`] reports.
	pub fn dispatch(&self, controller: &mut RowController) -> Result<()> {
		match self.action {
			Action::Add => controller.add(&self.group).map(drop),
			Action::Toggle(index) => controller.toggle(&self.group, index).map(drop),
		}
	}
}

/// Keeps the delegated listener attached. Dropping this detaches it again.
pub struct Binding {
	document: Document,
	controller: Rc<RefCell<RowController>>,
	listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl Binding {
	/// Discovers all relation form groups in `document` and starts handling their controls.
	///
	/// # Errors
	///
	/// If the markup is incomplete or the listener can't be attached.
	#[instrument(skip(document))]
	pub fn install(document: Document, markup: Markup) -> Result<Self> {
		let registry = Registry::discover(document.clone(), markup)?;
		Self::attach(RowController::new(registry))
	}

	/// Starts handling clicks for an existing controller.
	///
	/// # Errors
	///
	/// Iff the listener can't be attached.
	pub fn attach(controller: RowController) -> Result<Self> {
		let document = controller.registry().document().clone();
		let controller = Rc::new(RefCell::new(controller));
		let listener = Closure::wrap(Box::new({
			let controller = Rc::clone(&controller);
			move |event: web_sys::Event| on_click(&controller, &event)
		}) as Box<dyn FnMut(web_sys::Event)>);

		document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
		debug!("Attached delegated click listener.");
		Ok(Self { document, controller, listener })
	}

	#[must_use]
	pub fn controller(&self) -> &Rc<RefCell<RowController>> {
		&self.controller
	}

	/// Leaks the listener so it stays attached for the rest of the page's life.
	pub fn forget(self) {
		mem::forget(self);
	}
}

impl Drop for Binding {
	fn drop(&mut self) {
		if let Err(error) = self.document.remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref()) {
			error!("Failed to detach delegated click listener: {:?}", error);
		} else {
			trace!("Detached delegated click listener.");
		}
	}
}

fn on_click(controller: &RefCell<RowController>, event: &web_sys::Event) {
	let span = trace_span!("on_click", event = ?event.type_());
	let _enter = span.enter();

	let target = match event.target().and_then(|target| target.dyn_into::<web_sys::Element>().ok()) {
		Some(target) => target,
		None => return,
	};

	let mut controller = match controller.try_borrow_mut() {
		Ok(controller) => controller,
		Err(_) => return warn!("Ignoring re-entrant click while a relation form command is still running."),
	};

	let decoded = Command::from_target(controller.registry().markup(), &target);
	let command = match decoded {
		Ok(Some(command)) => command,
		Ok(None) => return,
		Err(error) => {
			drop(controller);
			fail(&error)
		}
	};
	event.prevent_default();

	debug!(?command, "Dispatching.");
	let result = command.dispatch(&mut controller);
	drop(controller);
	if let Err(error) = result {
		fail(&error)
	}
}

fn fail(error: &Error) -> ! {
	error!("{}", error);
	throw_str(&error.to_string())
}

/// Whether a document in `ready_state` is still being parsed, i.e. its relation form markup may be incomplete.
#[must_use]
pub fn is_loading(ready_state: &str) -> bool {
	ready_state == "loading"
}

/// Installs relation form handling for the current page with the default [`Markup`] for the rest of its life.
///
/// While the document is still loading, installation waits for `DOMContentLoaded`,
/// so a `<script>` placed before the forms still sees all of them.
///
/// # Panics
///
/// Throws into JavaScript if there is no document or its markup is incomplete.
#[wasm_bindgen(js_name = installRelationForms)]
pub fn install_relation_forms() {
	let document = web_sys::window().and_then(|window| window.document()).expect_throw("relation-form-dom: No document found.");
	if is_loading(&document.ready_state()) {
		debug!("Document is still loading. Deferring installation until DOMContentLoaded.");
		let deferred = Closure::once_into_js({
			let document = document.clone();
			move || install_into(document)
		});
		if let Err(error) = document.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref()) {
			fail(&error.into())
		}
	} else {
		install_into(document)
	}
}

fn install_into(document: Document) {
	match Binding::install(document, Markup::default()) {
		Ok(binding) => binding.forget(),
		Err(error) => fail(&error),
	}
}
