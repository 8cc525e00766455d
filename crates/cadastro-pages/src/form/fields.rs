//! Field snapshots and the fixed identifiers of the registration form.
//!
//! The live form is external to this crate; these constants are its DOM
//! contract. [`FieldState`] is the explicit snapshot the validator works on,
//! so the rules run identically on wasm (values read from the document) and
//! natively (values built in tests).

/// Id of the registration form.
pub const FORM_ID: &str = "form-cadastro";

/// Id of the aggregate feedback region inside the form.
pub const FEEDBACK_ID: &str = "form-feedback";

/// Id of the CPF field (tax id, 11 digits after stripping punctuation).
pub const CPF_FIELD: &str = "cpf";

/// Id of the CEP field (postal code, exactly 8 characters).
pub const CEP_FIELD: &str = "cep";

/// Id of the phone field (at least 10 characters).
pub const PHONE_FIELD: &str = "telefone";

/// Fields whose input is restricted to digits.
pub const NUMERIC_FIELDS: [&str; 3] = [CPF_FIELD, CEP_FIELD, PHONE_FIELD];

/// Class of the inline per-field error span.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";

/// Class marking a field as erroneous.
pub const ERROR_FIELD_CLASS: &str = "error-field";

/// What kind of control a field is, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// A plain text input.
	Text,
	/// An input declared as `type="email"`.
	Email,
	/// A select element.
	Select,
}

/// Snapshot of one live field at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
	/// The field's DOM id.
	pub id: String,
	/// Control kind, driving the email rule.
	pub kind: FieldKind,
	/// Whether the field carries the `required` attribute.
	pub required: bool,
	/// The raw value at snapshot time.
	pub value: String,
}

impl FieldState {
	/// Creates a required, empty field snapshot.
	pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			id: id.into(),
			kind,
			required: true,
			value: String::new(),
		}
	}

	/// Sets whether the field is required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets the raw value.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}
}

/// Strips every non-digit character.
///
/// Shared by the numeric input restriction (applied on each input event)
/// and the CPF rule (which counts digits after stripping).
pub fn digits_only(value: &str) -> String {
	value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("12a3b", "123")]
	#[case("123.456.789-09", "12345678909")]
	#[case("(11) 98765-4321", "11987654321")]
	#[case("abc", "")]
	#[case("", "")]
	#[case("01310-100", "01310100")]
	fn test_digits_only(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(digits_only(raw), expected);
	}

	#[test]
	fn test_field_state_builder() {
		let field = FieldState::new("email", FieldKind::Email)
			.required(true)
			.value("ana@exemplo.com");
		assert_eq!(field.id, "email");
		assert_eq!(field.kind, FieldKind::Email);
		assert!(field.required);
		assert_eq!(field.value, "ana@exemplo.com");
	}

	#[test]
	fn test_field_state_defaults() {
		let field = FieldState::new("nome", FieldKind::Text);
		assert!(field.required);
		assert!(field.value.is_empty());
	}
}
