use relation_form_dom::{
	row_state::{Effect, RowAction, Transition},
	Error, RowState, RowTag,
};

fn state(wire: &str) -> RowState {
	wire.parse().unwrap()
}

#[test]
fn empty() {
	let state = state("");
	assert!(state.is_empty());
	assert_eq!(state.to_string(), "");
}

#[test]
fn parse_and_display() {
	let state = state("U, D,C ,I");
	assert_eq!(state.tags(), [RowTag::Unchanged, RowTag::Deleted, RowTag::Created, RowTag::Inserted]);
	assert_eq!(state.to_string(), "U,D,C,I");
}

#[test]
fn invalid_tags() {
	assert_eq!(
		"U,X".parse::<RowState>(),
		Err(Error::InvalidTag {
			position: 1,
			tag: "X".to_owned()
		})
	);
	assert_eq!(
		"U,,U".parse::<RowState>(),
		Err(Error::InvalidTag {
			position: 1,
			tag: String::new()
		})
	);
	assert!("u".parse::<RowState>().is_err());
}

#[test]
fn allocate_appends_created() {
	let mut state = state("U,U");
	assert_eq!(state.allocate(), 2);
	assert_eq!(state.allocate(), 3);
	assert_eq!(state.to_string(), "U,U,C,C");
}

#[test]
fn unchanged_deleted_cycle() {
	let mut state = state("U");
	for _ in 0..5 {
		assert_eq!(
			state.transition(0),
			Some(Transition {
				index: 0,
				from: RowTag::Unchanged,
				to: RowTag::Deleted,
				effect: Effect::MarkDeleted,
			})
		);
		assert_eq!(
			state.transition(0),
			Some(Transition {
				index: 0,
				from: RowTag::Deleted,
				to: RowTag::Unchanged,
				effect: Effect::Unmark,
			})
		);
	}
	assert_eq!(state.to_string(), "U");
}

#[test]
fn cancelled_rows_stay_cancelled() {
	let mut state = RowState::new();
	let index = state.allocate();

	let first = state.transition(index).unwrap();
	assert_eq!((first.from, first.to, first.effect), (RowTag::Created, RowTag::Inserted, Effect::Hide));

	for _ in 0..3 {
		let again = state.transition(index).unwrap();
		assert_eq!((again.from, again.to, again.effect), (RowTag::Inserted, RowTag::Inserted, Effect::Hide));
	}
	assert_eq!(state.to_string(), "I");
}

#[test]
fn out_of_range() {
	let mut state = state("U,D");
	assert_eq!(state.transition(2), None);
	assert_eq!(state.to_string(), "U,D");
}

#[test]
fn length_counts_allocations() {
	let mut state = RowState::new();
	let mut adds = 0;
	for step in 0..50_usize {
		if step % 3 == 0 {
			state.allocate();
			adds += 1;
		} else {
			let index = step % state.len();
			state.transition(index);
		}
		assert_eq!(state.len(), adds);
	}
}

#[test]
fn scenario() {
	let mut state = state("U,U");

	assert_eq!(state.allocate(), 2);
	assert_eq!(state.to_string(), "U,U,C");

	state.transition(0);
	assert_eq!(state.to_string(), "D,U,C");

	state.transition(2);
	assert_eq!(state.to_string(), "D,U,I");

	state.transition(0);
	assert_eq!(state.to_string(), "U,U,I");
}

#[test]
fn actions() {
	let state = state("U,D,C,I");
	assert_eq!(
		state.actions().collect::<Vec<_>>(),
		[(0, RowAction::Update), (1, RowAction::Delete), (2, RowAction::Insert), (3, RowAction::Skip)]
	);
}

#[test]
fn fresh_tags() {
	assert!(RowTag::Created.is_fresh());
	assert!(RowTag::Inserted.is_fresh());
	assert!(!RowTag::Unchanged.is_fresh());
	assert!(!RowTag::Deleted.is_fresh());
	assert_eq!(RowTag::Created.toggled(), RowTag::Inserted.toggled());
}
