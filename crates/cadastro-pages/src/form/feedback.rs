//! The aggregate feedback region.
//!
//! A single visible/hidden message with a type tag (`success` | `error`).
//! Showing a message replaces whatever was visible and schedules an
//! auto-hide; pending timers from earlier messages are never cancelled, but
//! only the timer holding the newest [`Ticket`] may hide the region, so an
//! older timer firing late cannot blank a newer message.

use crate::sequence::{OpSequence, Ticket};

/// Auto-hide delay for a shown message.
pub const HIDE_DELAY_MS: u32 = 4000;

/// Aggregate message after a valid submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Cadastro enviado com sucesso!";

/// Aggregate message when any field failed.
pub const SUBMIT_ERROR_MESSAGE: &str = "Por favor, corrija os campos destacados.";

/// Type tag of the feedback message, also its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
	/// The submission was accepted.
	Success,
	/// At least one field failed validation.
	Error,
}

impl FeedbackKind {
	/// Class applied to the feedback region while this message shows.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// State of the feedback region: at most one message visible at a time.
#[derive(Debug, Clone, Default)]
pub struct FeedbackState {
	message: Option<(FeedbackKind, String)>,
	timers: OpSequence,
}

impl FeedbackState {
	/// Creates a hidden, empty feedback region.
	pub fn new() -> Self {
		Self::default()
	}

	/// Shows a message, replacing any visible one.
	///
	/// Returns the ticket the auto-hide timer for this message must present
	/// to [`expire`](Self::expire).
	pub fn show(&mut self, kind: FeedbackKind, text: impl Into<String>) -> Ticket {
		self.message = Some((kind, text.into()));
		self.timers.issue()
	}

	/// Timer callback: hides the region only if `ticket` still belongs to
	/// the newest shown message.
	pub fn expire(&mut self, ticket: Ticket) {
		if self.timers.is_current(ticket) {
			self.message = None;
		}
	}

	/// Hides the region immediately, regardless of pending timers.
	pub fn clear(&mut self) {
		self.message = None;
	}

	/// The visible message, if any.
	pub fn visible(&self) -> Option<(FeedbackKind, &str)> {
		self.message
			.as_ref()
			.map(|(kind, text)| (*kind, text.as_str()))
	}

	/// Whether a message is currently visible.
	pub fn is_visible(&self) -> bool {
		self.message.is_some()
	}
}

/// Writes the state to the feedback element: text, type class, visibility.
#[cfg(target_arch = "wasm32")]
pub fn render_feedback(region: &web_sys::HtmlElement, state: &FeedbackState) {
	match state.visible() {
		Some((kind, text)) => {
			region.set_text_content(Some(text));
			region.set_class_name(kind.css_class());
			let _ = region.style().set_property("display", "block");
		}
		None => {
			let _ = region.style().set_property("display", "none");
		}
	}
}

/// Schedules the auto-hide for the message behind `ticket`.
///
/// The timeout is fire-and-forget; `expire` decides whether it may hide.
#[cfg(target_arch = "wasm32")]
pub fn schedule_hide(
	region: &web_sys::HtmlElement,
	state: &std::rc::Rc<std::cell::RefCell<FeedbackState>>,
	ticket: Ticket,
) {
	let region = region.clone();
	let state = std::rc::Rc::clone(state);
	gloo_timers::callback::Timeout::new(HIDE_DELAY_MS, move || {
		let mut state = state.borrow_mut();
		state.expire(ticket);
		render_feedback(&region, &state);
	})
	.forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_show_makes_message_visible() {
		let mut state = FeedbackState::new();
		assert!(!state.is_visible());
		state.show(FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE);
		assert_eq!(
			state.visible(),
			Some((FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE))
		);
	}

	#[test]
	fn test_show_replaces_previous_message() {
		let mut state = FeedbackState::new();
		state.show(FeedbackKind::Error, SUBMIT_ERROR_MESSAGE);
		state.show(FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE);
		assert_eq!(
			state.visible(),
			Some((FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE))
		);
	}

	#[test]
	fn test_current_timer_hides() {
		let mut state = FeedbackState::new();
		let ticket = state.show(FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE);
		state.expire(ticket);
		assert!(!state.is_visible());
	}

	#[test]
	fn test_stale_timer_cannot_hide_newer_message() {
		let mut state = FeedbackState::new();
		let first = state.show(FeedbackKind::Error, SUBMIT_ERROR_MESSAGE);
		let second = state.show(FeedbackKind::Success, SUBMIT_SUCCESS_MESSAGE);

		// The older timer fires late; the newer message stays visible.
		state.expire(first);
		assert!(state.is_visible());

		state.expire(second);
		assert!(!state.is_visible());
	}

	#[test]
	fn test_clear_hides_immediately() {
		let mut state = FeedbackState::new();
		state.show(FeedbackKind::Error, SUBMIT_ERROR_MESSAGE);
		state.clear();
		assert!(!state.is_visible());
	}

	#[test]
	fn test_kind_css_class() {
		assert_eq!(FeedbackKind::Success.css_class(), "success");
		assert_eq!(FeedbackKind::Error.css_class(), "error");
	}
}
