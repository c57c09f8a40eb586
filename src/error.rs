use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while managing relation form rows.
///
/// Apart from [`Error::Dom`], all of these point at malformed page markup rather than at anything the user did.
/// They are not recoverable: the JavaScript-facing entry points log them and then throw.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("relation form group {group:?} has no container element #{id}")]
	MissingContainer { group: String, id: String },

	#[error("relation form group {group:?} has no template element #{id}")]
	MissingTemplate { group: String, id: String },

	#[error("relation form group {group:?} has no row state input #{id}")]
	MissingStateField { group: String, id: String },

	#[error("relation form group {group:?} has no rendered row #{id} for an allocated row state slot")]
	MissingRow { group: String, id: String },

	#[error("unknown relation form group {0:?}")]
	UnknownGroup(String),

	#[error("row index {index} is out of range for relation form group {group:?} ({len} row(s) allocated)")]
	IndexOutOfRange { group: String, index: usize, len: usize },

	#[error("invalid row state tag {tag:?} at position {position}")]
	InvalidTag { position: usize, tag: String },

	#[error("malformed relation form control: {0}")]
	MalformedControl(String),

	#[error("DOM operation failed: {0}")]
	Dom(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}
