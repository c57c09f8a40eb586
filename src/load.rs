//! Snapshots live DOM subtrees into owned [`template`](`crate::template`) trees.

use crate::template::{Attribute, Element, Node, HTML_NAMESPACE};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Attr, Comment, NamedNodeMap, NodeList, Text};

#[must_use]
pub fn load_child_nodes(child_nodes: &NodeList) -> Vec<Node> {
	(0..child_nodes.length())
		.filter_map(|i| {
			let child = child_nodes.item(i)?;
			if let Some(element) = child.dyn_ref::<web_sys::Element>() {
				Some(Node::Element(load_element(element)))
			} else if let Some(text) = child.dyn_ref::<Text>() {
				Some(Node::Text(text.data()))
			} else if let Some(comment) = child.dyn_ref::<Comment>() {
				Some(Node::Comment(comment.data()))
			} else {
				warn!("Skipping unrecognised template child node of type {}.", child.node_type());
				None
			}
		})
		.collect()
}

#[must_use]
pub fn load_element(element: &web_sys::Element) -> Element {
	let node: &web_sys::Node = element.as_ref();
	Element {
		name: element.local_name(),
		namespace: element.namespace_uri().filter(|namespace| namespace != HTML_NAMESPACE),
		attributes: load_attributes(&element.attributes()),
		content: load_child_nodes(&node.child_nodes()),
	}
}

#[must_use]
pub fn load_attributes(attributes: &NamedNodeMap) -> Vec<Attribute> {
	(0..attributes.length()).filter_map(|i| attributes.item(i)).map(|attribute| load_attribute(&attribute)).collect()
}

#[must_use]
pub fn load_attribute(attribute: &Attr) -> Attribute {
	Attribute {
		name: attribute.name(),
		value: attribute.value(),
		namespace: attribute.namespace_uri(),
	}
}
