//! Form binding: input restriction, submit handling, error rendering.
//!
//! [`bind_form`] runs on boot and again after every content swap. Each
//! rebind targets the freshly inserted form node - the previous node's
//! listeners were discarded with it, so nothing double-fires and no explicit
//! listener removal is needed.
//!
//! The submit path itself is [`process_submission`], which works on
//! [`FieldState`] snapshots and a [`FeedbackState`] rather than the
//! document, so the whole decision sequence runs natively in tests.

use super::feedback::{
	FeedbackKind, FeedbackState, SUBMIT_ERROR_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};
use super::fields::FieldState;
use super::validation::{FieldError, validate_all};
use crate::sequence::Ticket;

/// What one submit attempt decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
	/// Per-field failures to render inline, in document order.
	pub errors: Vec<FieldError>,
	/// Whether the form's fields should be reset to empty.
	pub reset_form: bool,
	/// Ticket for the auto-hide timer of the message just shown.
	pub hide_ticket: Ticket,
}

impl SubmissionOutcome {
	/// True when every field passed.
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}
}

/// Runs one submit attempt against field snapshots.
///
/// Hides any stale feedback, validates every required field, then shows the
/// success or aggregate-error message. The caller renders the per-field
/// errors and resets the form when asked to.
pub fn process_submission(
	fields: &[FieldState],
	feedback: &mut FeedbackState,
) -> SubmissionOutcome {
	feedback.clear();
	let errors = validate_all(fields);
	let (kind, text, reset_form) = if errors.is_empty() {
		(FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE, true)
	} else {
		(FeedbackKind::Error, SUBMIT_ERROR_MESSAGE, false)
	};
	let hide_ticket = feedback.show(kind, text);
	SubmissionOutcome {
		errors,
		reset_form,
		hide_ticket,
	}
}

#[cfg(target_arch = "wasm32")]
pub use wasm::bind_form;

#[cfg(target_arch = "wasm32")]
mod wasm {
	use std::cell::RefCell;
	use std::rc::Rc;

	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::Closure;

	use super::super::feedback::{self, FeedbackState};
	use super::super::fields::{
		ERROR_FIELD_CLASS, ERROR_MESSAGE_CLASS, FEEDBACK_ID, FORM_ID, FieldKind, FieldState,
		NUMERIC_FIELDS, digits_only,
	};
	use super::super::validation::FieldError;
	use super::process_submission;

	/// Attaches all form behavior to the current content's form, if any.
	///
	/// A page without the registration form is valid; nothing is bound.
	/// Browser-native validation is disabled so every rule here is the one
	/// that runs.
	pub fn bind_form() {
		let Some(form) = crate::dom::by_id::<web_sys::HtmlFormElement>(FORM_ID) else {
			crate::info_log!("no registration form in current content");
			return;
		};
		form.set_attribute("novalidate", "")
			.expect("failed to set novalidate");
		bind_numeric_fields();
		bind_submit(&form);
	}

	/// Keeps the numeric fields digit-only on every input event.
	fn bind_numeric_fields() {
		for id in NUMERIC_FIELDS {
			let Some(input) = crate::dom::by_id::<web_sys::HtmlInputElement>(id) else {
				continue;
			};
			let input_in_handler = input.clone();
			let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
				let stripped = digits_only(&input_in_handler.value());
				input_in_handler.set_value(&stripped);
			}) as Box<dyn FnMut(_)>);
			input
				.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
				.expect("failed to add input listener");
			closure.forget(); // listener dies with the node
		}
	}

	fn bind_submit(form: &web_sys::HtmlFormElement) {
		let feedback = Rc::new(RefCell::new(FeedbackState::new()));
		let form_in_handler = form.clone();
		let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
			event.prevent_default();
			handle_submit(&form_in_handler, &feedback);
		}) as Box<dyn FnMut(_)>);
		form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
			.expect("failed to add submit listener");
		closure.forget();
	}

	/// One submit attempt: snapshot, validate, render.
	fn handle_submit(form: &web_sys::HtmlFormElement, feedback: &Rc<RefCell<FeedbackState>>) {
		let Some(region) = crate::dom::by_id::<web_sys::HtmlElement>(FEEDBACK_ID) else {
			return;
		};
		// Stale feedback text goes away even before the new message shows.
		region.set_text_content(Some(""));
		clear_field_errors(form);

		let fields = collect_fields(form);
		let outcome = {
			let mut state = feedback.borrow_mut();
			process_submission(&fields, &mut state)
		};

		for error in &outcome.errors {
			render_field_error(form, error);
		}
		if outcome.reset_form {
			form.reset();
			clear_field_errors(form);
		}

		feedback::render_feedback(&region, &feedback.borrow());
		feedback::schedule_hide(&region, feedback, outcome.hide_ticket);
	}

	/// Snapshots every required input and select, in document order.
	fn collect_fields(form: &web_sys::HtmlFormElement) -> Vec<FieldState> {
		let mut fields = Vec::new();
		let Ok(nodes) = form.query_selector_all("input[required], select[required]") else {
			return fields;
		};
		for index in 0..nodes.length() {
			let Some(node) = nodes.item(index) else {
				continue;
			};
			let Ok(element) = node.dyn_into::<web_sys::Element>() else {
				continue;
			};
			let id = element.id();
			if let Ok(input) = element.clone().dyn_into::<web_sys::HtmlInputElement>() {
				let kind = if input.type_() == "email" {
					FieldKind::Email
				} else {
					FieldKind::Text
				};
				fields.push(FieldState::new(id, kind).value(input.value()));
			} else if let Ok(select) = element.dyn_into::<web_sys::HtmlSelectElement>() {
				fields.push(FieldState::new(id, FieldKind::Select).value(select.value()));
			}
		}
		fields
	}

	/// Appends the inline message below the field and marks it erroneous.
	fn render_field_error(form: &web_sys::HtmlFormElement, error: &FieldError) {
		let selector = format!("#{}", error.field_id);
		let Ok(Some(field)) = form.query_selector(&selector) else {
			return;
		};
		let span = crate::dom::document()
			.create_element("span")
			.expect("failed to create error span");
		span.set_class_name(ERROR_MESSAGE_CLASS);
		span.set_text_content(Some(error.kind.message()));
		if let Some(parent) = field.parent_element() {
			parent
				.append_child(&span)
				.expect("failed to append error span");
		}
		field
			.class_list()
			.add_1(ERROR_FIELD_CLASS)
			.expect("failed to mark field as erroneous");
	}

	/// Removes every inline error span and error-styling class in the form.
	///
	/// Runs before each validation pass and after a successful submit, so
	/// markers never accumulate across passes.
	pub fn clear_field_errors(form: &web_sys::HtmlFormElement) {
		if let Ok(spans) = form.query_selector_all(&format!(".{ERROR_MESSAGE_CLASS}")) {
			for index in 0..spans.length() {
				if let Some(node) = spans.item(index) {
					if let Ok(span) = node.dyn_into::<web_sys::Element>() {
						span.remove();
					}
				}
			}
		}
		if let Ok(marked) = form.query_selector_all(&format!(".{ERROR_FIELD_CLASS}")) {
			for index in 0..marked.length() {
				if let Some(node) = marked.item(index) {
					if let Ok(field) = node.dyn_into::<web_sys::Element>() {
						let _ = field.class_list().remove_1(ERROR_FIELD_CLASS);
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::feedback::{FeedbackKind, SUBMIT_ERROR_MESSAGE, SUBMIT_SUCCESS_MESSAGE};
	use super::super::fields::{CEP_FIELD, CPF_FIELD, FieldKind, PHONE_FIELD};
	use super::super::validation::FieldErrorKind;
	use super::*;

	fn valid_registration() -> Vec<FieldState> {
		vec![
			FieldState::new("nome", FieldKind::Text).value("Ana Souza"),
			FieldState::new("email", FieldKind::Email).value("ana@exemplo.com"),
			FieldState::new(CPF_FIELD, FieldKind::Text).value("123.456.789-09"),
			FieldState::new(PHONE_FIELD, FieldKind::Text).value("11987654321"),
			FieldState::new(CEP_FIELD, FieldKind::Text).value("01310100"),
			FieldState::new("estado", FieldKind::Select).value("SP"),
		]
	}

	#[test]
	fn test_valid_submission_resets_and_shows_success() {
		let mut feedback = FeedbackState::new();
		let outcome = process_submission(&valid_registration(), &mut feedback);

		assert!(outcome.is_valid());
		assert!(outcome.reset_form);
		assert!(outcome.errors.is_empty());
		assert_eq!(
			feedback.visible(),
			Some((FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE))
		);
	}

	#[test]
	fn test_one_invalid_field_blocks_reset() {
		let mut fields = valid_registration();
		fields[4] = FieldState::new(CEP_FIELD, FieldKind::Text).value("1234");

		let mut feedback = FeedbackState::new();
		let outcome = process_submission(&fields, &mut feedback);

		assert!(!outcome.is_valid());
		assert!(!outcome.reset_form);
		assert_eq!(outcome.errors.len(), 1);
		assert_eq!(outcome.errors[0].field_id, CEP_FIELD);
		assert_eq!(outcome.errors[0].kind, FieldErrorKind::InvalidCep);
		assert_eq!(
			feedback.visible(),
			Some((FeedbackKind::Error, SUBMIT_ERROR_MESSAGE))
		);
	}

	#[test]
	fn test_resubmitting_unchanged_form_reports_same_errors() {
		let fields = vec![
			FieldState::new(CPF_FIELD, FieldKind::Text).value("123"),
			FieldState::new("email", FieldKind::Email),
		];
		let mut feedback = FeedbackState::new();
		let first = process_submission(&fields, &mut feedback);
		let second = process_submission(&fields, &mut feedback);
		assert_eq!(first.errors, second.errors);
	}

	#[test]
	fn test_submission_replaces_previous_feedback() {
		let mut feedback = FeedbackState::new();
		process_submission(
			&[FieldState::new("nome", FieldKind::Text)],
			&mut feedback,
		);
		assert_eq!(
			feedback.visible(),
			Some((FeedbackKind::Error, SUBMIT_ERROR_MESSAGE))
		);

		process_submission(&valid_registration(), &mut feedback);
		assert_eq!(
			feedback.visible(),
			Some((FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE))
		);
	}

	#[test]
	fn test_stale_hide_ticket_from_previous_submission_is_ignored() {
		let mut feedback = FeedbackState::new();
		let first = process_submission(
			&[FieldState::new("nome", FieldKind::Text)],
			&mut feedback,
		);
		let second = process_submission(&valid_registration(), &mut feedback);

		feedback.expire(first.hide_ticket);
		assert!(feedback.is_visible());

		feedback.expire(second.hide_ticket);
		assert!(!feedback.is_visible());
	}
}
