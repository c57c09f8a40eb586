//! Builds detached DOM subtrees from owned [`template`](`crate::template`) trees.

use crate::{
	error::Result,
	template::{Element, Node},
};
use tracing::{instrument, trace_span};

/// Creates `element` and its content in `document` without inserting it anywhere.
///
/// Elements and attributes keep their namespaces, so SVG and MathML content survives.
///
/// # Errors
///
/// Iff the document rejects a tag or attribute name.
#[instrument(skip(document, element), fields(tag = %element.name, namespace = ?element.namespace))]
pub fn create_element(document: &web_sys::Document, element: &Element) -> Result<web_sys::Element> {
	let dom_element = match element.namespace.as_deref() {
		Some(namespace) => document.create_element_ns(Some(namespace), &element.name)?,
		None => document.create_element(&element.name)?,
	};
	for attribute in &element.attributes {
		match attribute.namespace.as_deref() {
			Some(namespace) => dom_element.set_attribute_ns(Some(namespace), &attribute.name, &attribute.value)?,
			None => dom_element.set_attribute(&attribute.name, &attribute.value)?,
		}
	}
	append_content(document, &dom_element, &element.content)?;
	Ok(dom_element)
}

fn append_content(document: &web_sys::Document, parent: &web_sys::Element, content: &[Node]) -> Result<()> {
	for node in content {
		match node {
			Node::Element(element) => {
				let child = create_element(document, element)?;
				parent.append_child(&child)?;
			}
			Node::Text(text) => {
				let _span = trace_span!("Creating text node").entered();
				parent.append_child(&document.create_text_node(text))?;
			}
			Node::Comment(comment) => {
				let _span = trace_span!("Creating comment").entered();
				parent.append_child(&document.create_comment(comment))?;
			}
		}
	}
	Ok(())
}
