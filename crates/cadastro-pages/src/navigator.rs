//! Partial-page navigation.
//!
//! Clicks on header navigation links are intercepted so the browser never
//! performs a full reload: the target page is fetched, its `main` region
//! extracted and swapped into the live container, and the address bar
//! updated through the History API. After every successful swap the form
//! binder runs again so a registration form inside the new content becomes
//! interactive.
//!
//! Loads are independent and never cancelled. Rapid successive clicks can
//! leave several fetches in flight; each load carries a [`Ticket`] and only
//! the newest one applies its swap (or its error rendering) when it
//! resolves - stale completions are discarded.

pub mod history;
pub mod markup;

use thiserror::Error;

use crate::sequence::OpSequence;

pub use history::HistoryState;
pub use markup::extract_main_content;

/// Links that participate in partial navigation.
pub const NAV_LINKS_SELECTOR: &str = "header nav a";

/// The region whose inner markup is swapped on navigation.
pub const MAIN_CONTENT_SELECTOR: &str = "main";

/// Replacement markup shown when a content load fails.
pub const LOAD_ERROR_MARKUP: &str = "<h2>Erro ao carregar o conteúdo.</h2>";

/// Why a content load failed.
///
/// Every variant collapses into the same user-visible path: the container
/// is replaced with [`LOAD_ERROR_MARKUP`] and the failure is logged. Nothing
/// here propagates past the navigator boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	/// The server answered with a non-success status.
	#[error("página não encontrada: {0}")]
	PageNotFound(String),
	/// The request never produced a response.
	#[error("request for {url} failed: {reason}")]
	RequestFailed {
		/// Requested URL.
		url: String,
		/// Transport-level failure description.
		reason: String,
	},
	/// The fetched page has no `main` region to swap in.
	#[error("no main content region in {0}")]
	MissingMainContent(String),
}

/// Intercepts in-site navigation and swaps the `main` region in place.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
	/// Sequencing for in-flight loads; newest wins.
	loads: OpSequence,
}

impl Navigator {
	/// Creates a navigator with no loads issued.
	pub fn new() -> Self {
		Self::default()
	}

	/// The load sequence, shared with every handler this navigator binds.
	pub fn loads(&self) -> &OpSequence {
		&self.loads
	}
}

#[cfg(target_arch = "wasm32")]
impl Navigator {
	/// Installs click handlers on all header navigation links.
	///
	/// Each handler prevents the default navigation, pushes a history entry
	/// for the link's `href` and kicks off an asynchronous content load.
	/// The handler returns before the load resolves.
	pub fn bind_links(&self) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::prelude::Closure;

		let document = crate::dom::document();
		let links = match document.query_selector_all(NAV_LINKS_SELECTOR) {
			Ok(links) => links,
			Err(_) => return,
		};
		for index in 0..links.length() {
			let Some(node) = links.item(index) else {
				continue;
			};
			let Ok(link) = node.dyn_into::<web_sys::HtmlAnchorElement>() else {
				continue;
			};
			let navigator = self.clone();
			let link_in_handler = link.clone();
			let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
				event.prevent_default();
				let Some(href) = link_in_handler.get_attribute("href") else {
					return;
				};
				if let Err(err) = history::push_state(&HistoryState::new(&href)) {
					crate::warn_log!("history push failed: {}", err);
				}
				let navigator = navigator.clone();
				wasm_bindgen_futures::spawn_local(async move {
					navigator.load_content(&href).await;
				});
			}) as Box<dyn FnMut(_)>);
			link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
				.expect("failed to add click listener");
			closure.forget(); // listener dies with the node
		}
	}

	/// Reloads content when the user walks the browser history.
	///
	/// Back/forward restore the address bar on their own, so this path
	/// fetches and swaps without pushing a new entry.
	pub fn bind_popstate(&self) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::prelude::Closure;

		let navigator = self.clone();
		let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			let path = history::current_path().unwrap_or_else(|_| "/".to_string());
			let navigator = navigator.clone();
			wasm_bindgen_futures::spawn_local(async move {
				navigator.load_content(&path).await;
			});
		}) as Box<dyn FnMut(_)>);
		crate::dom::window()
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.expect("failed to add popstate listener");
		closure.forget();
	}

	/// Fetches `url` and swaps its `main` region into the live container.
	///
	/// Any failure - network, bad status, missing region - is caught here,
	/// logged, and rendered as a replacement message; the page is never left
	/// partially swapped or blank. A load that is no longer the newest when
	/// its response resolves discards its effect entirely.
	pub async fn load_content(&self, url: &str) {
		let ticket = self.loads.issue();
		match fetch_main_content(url).await {
			Ok(inner) => {
				if !self.loads.is_current(ticket) {
					crate::warn_log!("discarding stale load for {}", url);
					return;
				}
				let Some(container) = crate::dom::query_main() else {
					return;
				};
				container.set_inner_html(&inner);
				crate::form::binding::bind_form();
			}
			Err(err) => {
				crate::error_log!("content load failed: {}", err);
				if !self.loads.is_current(ticket) {
					return;
				}
				if let Some(container) = crate::dom::query_main() {
					container.set_inner_html(LOAD_ERROR_MARKUP);
				}
			}
		}
	}
}

/// GETs `url` and extracts the `main` region of the response body.
#[cfg(target_arch = "wasm32")]
async fn fetch_main_content(url: &str) -> Result<String, LoadError> {
	let response = gloo_net::http::Request::get(url)
		.send()
		.await
		.map_err(|e| LoadError::RequestFailed {
			url: url.to_string(),
			reason: e.to_string(),
		})?;
	if !response.ok() {
		return Err(LoadError::PageNotFound(url.to_string()));
	}
	let body = response.text().await.map_err(|e| LoadError::RequestFailed {
		url: url.to_string(),
		reason: e.to_string(),
	})?;
	markup::extract_main_content(&body).ok_or_else(|| LoadError::MissingMainContent(url.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_load_error_display() {
		assert_eq!(
			LoadError::PageNotFound("/x".to_string()).to_string(),
			"página não encontrada: /x"
		);
		assert_eq!(
			LoadError::MissingMainContent("/y".to_string()).to_string(),
			"no main content region in /y"
		);
		let err = LoadError::RequestFailed {
			url: "/z".to_string(),
			reason: "timeout".to_string(),
		};
		assert!(err.to_string().contains("/z"));
		assert!(err.to_string().contains("timeout"));
	}

	#[test]
	fn test_navigator_tracks_newest_load() {
		let navigator = Navigator::new();
		let first = navigator.loads().issue();
		let second = navigator.loads().issue();
		assert!(!navigator.loads().is_current(first));
		assert!(navigator.loads().is_current(second));
	}
}
