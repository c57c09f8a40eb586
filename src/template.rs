//! Owned snapshots of row templates and the pure transform that turns them into rows.

use tracing::{instrument, trace};

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub value: String,
	/// [`None`] for ordinary attributes, e.g. `Some("http://www.w3.org/1999/xlink")` for `xlink:href`.
	pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
	Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub name: String,
	/// [`None`] means HTML.
	pub namespace: Option<String>,
	pub attributes: Vec<Attribute>,
	pub content: Vec<Node>,
}

impl Element {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			namespace: None,
			attributes: Vec::new(),
			content: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attribute(name, value);
		self
	}

	#[must_use]
	pub fn with_child(mut self, child: impl Into<Node>) -> Self {
		self.content.push(child.into());
		self
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|a| a.name == name).map(|a| a.value.as_str())
	}

	/// Replaces the value of `name` in place, or appends it.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attributes.iter_mut().find(|a| a.name == name) {
			Some(attribute) => attribute.value = value,
			None => self.attributes.push(Attribute { name, value, namespace: None }),
		}
	}

	pub fn remove_class(&mut self, class: &str) {
		if let Some(attribute) = self.attributes.iter_mut().find(|a| a.name == "class") {
			attribute.value = attribute.value.split_ascii_whitespace().filter(|c| *c != class).collect::<Vec<_>>().join(" ");
		}
	}

	#[must_use]
	pub fn has_class(&self, class: &str) -> bool {
		self.attribute("class").map_or(false, |classes| classes.split_ascii_whitespace().any(|c| c == class))
	}

	/// Pre-order walk over this element and all descendant elements.
	pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
		f(self);
		for child in &mut self.content {
			if let Node::Element(element) = child {
				element.visit_mut(f);
			}
		}
	}

	/// Pre-order walk over this element and all descendant elements.
	pub fn visit(&self, f: &mut impl FnMut(&Element)) {
		f(self);
		for child in &self.content {
			if let Node::Element(element) = child {
				element.visit(f);
			}
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

/// A group's row template, detached from the page.
///
/// Materializing never touches the snapshot, so each row starts from the same markup regardless of what happened to earlier rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	root: Element,
	template_class: String,
	placeholder: String,
}

impl Template {
	#[must_use]
	pub fn new(root: Element, template_class: impl Into<String>, placeholder: impl Into<String>) -> Self {
		Self {
			root,
			template_class: template_class.into(),
			placeholder: placeholder.into(),
		}
	}

	#[must_use]
	pub fn root(&self) -> &Element {
		&self.root
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	/// Produces row `index` of `group`:
	///
	/// 1. deep copy of the template root,
	/// 2. the template class is removed so the row displays and submits,
	/// 3. its `id` becomes `{group}.{index}`,
	/// 4. every occurrence of the placeholder in every attribute of every element (root first, then pre-order) is replaced with `index` in decimal.
	#[must_use]
	#[instrument(skip(self), fields(template_class = %self.template_class, placeholder = %self.placeholder))]
	pub fn materialize(&self, group: &str, index: usize) -> Element {
		let mut row = self.root.clone();
		row.remove_class(&self.template_class);
		row.set_attribute("id", format!("{}.{}", group, index));

		if self.placeholder.is_empty() {
			return row;
		}

		let index = index.to_string();
		let mut replaced = 0_usize;
		row.visit_mut(&mut |element| {
			for attribute in &mut element.attributes {
				if attribute.value.contains(self.placeholder.as_str()) {
					#[cfg(feature = "dangerous-logging")]
					trace!(element = %element.name, attribute = %attribute.name, value = %attribute.value, "Substituting index placeholder.");
					attribute.value = attribute.value.replace(self.placeholder.as_str(), &index);
					replaced += 1;
				}
			}
		});
		trace!("Rewrote {} attribute(s).", replaced);
		row
	}
}
