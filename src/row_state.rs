//! The per-group row lifecycle sequence and its single-character wire form.
//!
//! A [`RowState`] holds one [`RowTag`] per row slot ever allocated for a group, in creation order.
//! Slots are never removed, so every row keeps the index its field names were rendered with.
//!
//! On the wire, the sequence is the comma-joined list of tag characters, for example `"U,D,C,I"`.
//! The backend zips it with the submitted rows and replays it as [`RowAction`]s.

use crate::error::{Error, Result};
use core::{
	fmt::{self, Display, Formatter, Write as _},
	str::FromStr,
};

/// Lifecycle of a single row slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTag {
	/// `U`: persisted and kept.
	Unchanged,
	/// `D`: persisted and marked for deletion. Can be restored.
	Deleted,
	/// `C`: added during this session and not yet touched since.
	Created,
	/// `I`: added during this session and then cancelled. Terminal.
	Inserted,
}

impl RowTag {
	#[must_use]
	pub const fn as_char(self) -> char {
		match self {
			RowTag::Unchanged => 'U',
			RowTag::Deleted => 'D',
			RowTag::Created => 'C',
			RowTag::Inserted => 'I',
		}
	}

	#[must_use]
	pub fn from_wire(tag: &str) -> Option<Self> {
		Some(match tag {
			"U" => RowTag::Unchanged,
			"D" => RowTag::Deleted,
			"C" => RowTag::Created,
			"I" => RowTag::Inserted,
			_ => return None,
		})
	}

	/// Whether the row was never persisted.
	///
	/// [`RowTag::Created`] and [`RowTag::Inserted`] are indistinguishable to the delete control.
	#[must_use]
	pub const fn is_fresh(self) -> bool {
		matches!(self, RowTag::Created | RowTag::Inserted)
	}

	/// What the backend is expected to do with a row carrying this tag.
	#[must_use]
	pub const fn action(self) -> RowAction {
		match self {
			RowTag::Unchanged => RowAction::Update,
			RowTag::Deleted => RowAction::Delete,
			RowTag::Created => RowAction::Insert,
			RowTag::Inserted => RowAction::Skip,
		}
	}

	/// The delete control's state machine: `U ⇄ D`, and any fresh row collapses into `I`.
	#[must_use]
	pub const fn toggled(self) -> (RowTag, Effect) {
		match self {
			RowTag::Unchanged => (RowTag::Deleted, Effect::MarkDeleted),
			RowTag::Deleted => (RowTag::Unchanged, Effect::Unmark),
			RowTag::Created | RowTag::Inserted => (RowTag::Inserted, Effect::Hide),
		}
	}
}

impl Display for RowTag {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_char(self.as_char())
	}
}

/// Per-index operation replayed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
	Insert,
	Update,
	Delete,
	Skip,
}

/// Visual consequence of a [`Transition`], applied by the [`RowController`](`crate::controller::RowController`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
	/// Add the danger marker and relabel the control to "restore".
	MarkDeleted,
	/// Remove the danger marker and relabel the control to "delete".
	Unmark,
	/// Stop displaying the row entirely.
	Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub index: usize,
	pub from: RowTag,
	pub to: RowTag,
	pub effect: Effect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState(Vec<RowTag>);

impl RowState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<RowTag> {
		self.0.get(index).copied()
	}

	#[must_use]
	pub fn tags(&self) -> &[RowTag] {
		&self.0
	}

	/// Appends a [`RowTag::Created`] slot and returns its index.
	pub fn allocate(&mut self) -> usize {
		self.0.push(RowTag::Created);
		self.0.len() - 1
	}

	/// Applies the delete control's transition to the slot at `index`.
	///
	/// Returns [`None`] iff `index` was never allocated.
	pub fn transition(&mut self, index: usize) -> Option<Transition> {
		let tag = self.0.get_mut(index)?;
		let from = *tag;
		let (to, effect) = from.toggled();
		*tag = to;
		Some(Transition { index, from, to, effect })
	}

	/// Zips each slot index with the action the backend should replay for it.
	pub fn actions(&self) -> impl '_ + Iterator<Item = (usize, RowAction)> {
		self.0.iter().map(|tag| tag.action()).enumerate()
	}
}

impl From<Vec<RowTag>> for RowState {
	fn from(tags: Vec<RowTag>) -> Self {
		Self(tags)
	}
}

impl FromStr for RowState {
	type Err = Error;

	/// Parses the comma-joined wire form. Whitespace around tags is ignored and an empty string is an empty sequence.
	fn from_str(s: &str) -> Result<Self> {
		if s.trim().is_empty() {
			return Ok(Self::new());
		}
		s.split(',')
			.enumerate()
			.map(|(position, tag)| {
				let tag = tag.trim();
				RowTag::from_wire(tag).ok_or_else(|| Error::InvalidTag { position, tag: tag.to_owned() })
			})
			.collect::<Result<_>>()
			.map(Self)
	}
}

impl Display for RowState {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (i, tag) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_char(',')?;
			}
			Display::fmt(tag, f)?;
		}
		Ok(())
	}
}
