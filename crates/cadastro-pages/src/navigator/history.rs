//! History API integration.
//!
//! Each intercepted navigation pushes a new entry so the address bar tracks
//! the swapped content. The state object carries the path, which the
//! `popstate` handler reads back when the user walks the history.
//!
//! On non-wasm targets pushes are recorded in a thread-local log instead,
//! which is what the native tests assert against.

use serde::{Deserialize, Serialize};

/// The state object stored with every pushed history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// The in-site path this entry points at.
	pub path: String,
}

impl HistoryState {
	/// Creates a state object for `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

/// Pushes a new history entry for the state's path, without reloading.
#[cfg(target_arch = "wasm32")]
pub fn push_state(state: &HistoryState) -> Result<(), String> {
	let window = web_sys::window().ok_or("no global window")?;
	let history = window
		.history()
		.map_err(|_| "history API unavailable".to_string())?;
	let json = serde_json::to_string(state).map_err(|e| e.to_string())?;
	let js_state =
		js_sys::JSON::parse(&json).map_err(|_| "state object not serializable".to_string())?;
	history
		.push_state_with_url(&js_state, "", Some(&state.path))
		.map_err(|_| format!("pushState rejected for {}", state.path))
}

/// Returns the path currently shown in the address bar.
#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Result<String, String> {
	web_sys::window()
		.ok_or("no global window")?
		.location()
		.pathname()
		.map_err(|_| "pathname unavailable".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
	static PUSHED_PATHS: std::cell::RefCell<Vec<String>> =
		const { std::cell::RefCell::new(Vec::new()) };
}

/// Records the push in the thread-local log (non-wasm).
#[cfg(not(target_arch = "wasm32"))]
pub fn push_state(state: &HistoryState) -> Result<(), String> {
	PUSHED_PATHS.with(|paths| paths.borrow_mut().push(state.path.clone()));
	Ok(())
}

/// Returns the most recently pushed path, or `/` before any push (non-wasm).
#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Result<String, String> {
	Ok(PUSHED_PATHS
		.with(|paths| paths.borrow().last().cloned())
		.unwrap_or_else(|| "/".to_string()))
}

/// Returns every path pushed so far on this thread (non-wasm).
#[cfg(not(target_arch = "wasm32"))]
pub fn pushed_paths() -> Vec<String> {
	PUSHED_PATHS.with(|paths| paths.borrow().clone())
}

/// Clears the thread-local push log (non-wasm).
#[cfg(not(target_arch = "wasm32"))]
pub fn reset_history_log() {
	PUSHED_PATHS.with(|paths| paths.borrow_mut().clear());
}
