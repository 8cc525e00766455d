//! Thin access layer over the live document (wasm only).

use wasm_bindgen::JsCast;

use crate::navigator::MAIN_CONTENT_SELECTOR;

/// The global window. Panics only outside a browser, where nothing works.
pub fn window() -> web_sys::Window {
	web_sys::window().expect("no global window")
}

/// The live document.
pub fn document() -> web_sys::Document {
	window().document().expect("no document on window")
}

/// Looks up an element by id and downcasts it to the requested type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
	document().get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// The swap container, if the page has one.
pub fn query_main() -> Option<web_sys::Element> {
	document().query_selector(MAIN_CONTENT_SELECTOR).ok().flatten()
}
