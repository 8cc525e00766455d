//! Application entry point.
//!
//! The wasm module starts itself once loaded: if the document is still
//! parsing it waits for `DOMContentLoaded`, otherwise it boots right away.
//! Boot is idempotent only in the sense that it runs once per page load;
//! later rebinds happen through the navigator's content swaps.

#[cfg(target_arch = "wasm32")]
pub use wasm::{boot, start};

#[cfg(target_arch = "wasm32")]
mod wasm {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::{Closure, wasm_bindgen};

	use crate::navigator::Navigator;

	/// Wires the navigator and the form binder to the current document.
	pub fn boot() {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let navigator = Navigator::new();
		navigator.bind_links();
		navigator.bind_popstate();
		crate::form::binding::bind_form();
		crate::info_log!("cadastro-pages booted");
	}

	/// Module start: boots now, or after `DOMContentLoaded` if the document
	/// is still parsing.
	#[wasm_bindgen(start)]
	pub fn start() {
		let document = crate::dom::document();
		if document.ready_state() == "loading" {
			let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
				boot();
			}) as Box<dyn FnMut(_)>);
			document
				.add_event_listener_with_callback(
					"DOMContentLoaded",
					closure.as_ref().unchecked_ref(),
				)
				.expect("failed to add DOMContentLoaded listener");
			closure.forget();
		} else {
			boot();
		}
	}
}
