#![doc(html_root_url = "https://docs.rs/relation-form-dom/0.0.1")]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod binder;
pub mod controller;
pub mod error;
pub mod load;
pub mod markup;
pub mod registry;
pub mod render;
pub mod row_state;
pub mod template;
pub mod widgets;

pub use binder::{install_relation_forms, Binding};
pub use error::{Error, Result};
pub use markup::Markup;
pub use row_state::{RowState, RowTag};
