//! Field validation rules.
//!
//! Rules form an else-chain and exactly one applies per field: a field that
//! is both empty and shape-violating reports only `Required`. This
//! single-error-per-field policy is deliberate and preserved as-is.
//! Validation is pure - results are data, recomputed fresh on every submit
//! attempt and never cached.

use std::sync::OnceLock;

use regex::Regex;

use super::fields::{CEP_FIELD, CPF_FIELD, FieldKind, FieldState, PHONE_FIELD, digits_only};

/// Which rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
	/// Required field with an empty (or whitespace-only) value.
	Required,
	/// Email field whose value is not `local@domain` with a dotted domain.
	InvalidEmail,
	/// CPF without exactly 11 digits after stripping punctuation.
	InvalidCpf,
	/// Phone shorter than 10 characters.
	InvalidPhone,
	/// CEP whose length is not exactly 8 characters.
	InvalidCep,
}

impl FieldErrorKind {
	/// The inline message rendered under the failing field.
	pub fn message(self) -> &'static str {
		match self {
			Self::Required => "Este campo é obrigatório.",
			Self::InvalidEmail => "Por favor, insira um e-mail válido.",
			Self::InvalidCpf => "CPF inválido (deve conter 11 dígitos).",
			Self::InvalidPhone => "O telefone deve ter no mínimo 10 dígitos.",
			Self::InvalidCep => "O CEP deve ter 8 dígitos.",
		}
	}
}

/// One failed field in a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	/// DOM id of the failing field.
	pub field_id: String,
	/// The rule it failed.
	pub kind: FieldErrorKind,
}

fn email_regex() -> &'static Regex {
	static EMAIL: OnceLock<Regex> = OnceLock::new();
	EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// `local@domain` shape: no whitespace, a single `@` boundary, and at least
/// one dot segment in the domain.
pub fn is_valid_email(value: &str) -> bool {
	email_regex().is_match(value)
}

/// Exactly 11 digits after stripping every non-digit character.
pub fn is_valid_cpf(value: &str) -> bool {
	digits_only(value).len() == 11
}

/// Returns the first failing rule for one field, or `None`.
pub fn validate_field(field: &FieldState) -> Option<FieldErrorKind> {
	if field.value.trim().is_empty() {
		Some(FieldErrorKind::Required)
	} else if field.kind == FieldKind::Email && !is_valid_email(&field.value) {
		Some(FieldErrorKind::InvalidEmail)
	} else if field.id == CPF_FIELD && !is_valid_cpf(&field.value) {
		Some(FieldErrorKind::InvalidCpf)
	} else if field.id == PHONE_FIELD && field.value.chars().count() < 10 {
		Some(FieldErrorKind::InvalidPhone)
	} else if field.id == CEP_FIELD && field.value.chars().count() != 8 {
		Some(FieldErrorKind::InvalidCep)
	} else {
		None
	}
}

/// Validates every required field in document order.
///
/// Non-required fields are skipped entirely. An empty result means the form
/// passes.
pub fn validate_all(fields: &[FieldState]) -> Vec<FieldError> {
	fields
		.iter()
		.filter(|field| field.required)
		.filter_map(|field| {
			validate_field(field).map(|kind| FieldError {
				field_id: field.id.clone(),
				kind,
			})
		})
		.collect()
}
