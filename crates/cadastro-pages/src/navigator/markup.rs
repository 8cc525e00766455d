//! Extraction of the `main` region from fetched page markup.
//!
//! A fetched page is never inserted wholesale; only the inner markup of its
//! single `main` element replaces the live container. The scan is
//! case-insensitive and tolerant of attributes on the opening tag. A page
//! without a `main` region is reported as `None` and treated upstream
//! exactly like a network failure.

/// Returns the inner markup of the first `main` element, if any.
pub fn extract_main_content(html: &str) -> Option<String> {
	// ASCII lowercasing keeps byte offsets stable, so indices found in
	// `lower` are valid in `html`.
	let lower = html.to_ascii_lowercase();
	let mut search = 0;
	let open = loop {
		let found = lower[search..].find("<main")? + search;
		match lower.as_bytes().get(found + 5) {
			Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {
				break found;
			}
			// e.g. <maintenance-banner>
			_ => search = found + 5,
		}
	};
	let tag_end = lower[open..].find('>')? + open;
	if lower.as_bytes()[tag_end - 1] == b'/' {
		// Self-closing form has no content to swap in.
		return Some(String::new());
	}
	let inner_start = tag_end + 1;
	let close = lower[inner_start..].find("</main")? + inner_start;
	Some(html[inner_start..close].to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extracts_inner_markup() {
		let html = "<html><body><main><h1>Sobre</h1><p>texto</p></main></body></html>";
		assert_eq!(
			extract_main_content(html).unwrap(),
			"<h1>Sobre</h1><p>texto</p>"
		);
	}

	#[test]
	fn test_opening_tag_with_attributes() {
		let html = r#"<main id="conteudo" class="wrap"><section>x</section></main>"#;
		assert_eq!(extract_main_content(html).unwrap(), "<section>x</section>");
	}

	#[test]
	fn test_case_insensitive() {
		let html = "<MAIN><p>ok</p></MAIN>";
		assert_eq!(extract_main_content(html).unwrap(), "<p>ok</p>");
	}

	#[test]
	fn test_missing_main_is_none() {
		assert!(extract_main_content("<html><body><div>sem main</div></body></html>").is_none());
	}

	#[test]
	fn test_unclosed_main_is_none() {
		assert!(extract_main_content("<main><p>sem fechamento").is_none());
	}

	#[test]
	fn test_ignores_longer_tag_names() {
		let html = "<mainframe>nope</mainframe><main><p>sim</p></main>";
		assert_eq!(extract_main_content(html).unwrap(), "<p>sim</p>");
	}

	#[test]
	fn test_nested_content_with_form() {
		let html = concat!(
			"<main>",
			r#"<form id="form-cadastro"><input id="cpf" required></form>"#,
			"</main>"
		);
		let inner = extract_main_content(html).unwrap();
		assert!(inner.contains("form-cadastro"));
	}

	#[test]
	fn test_preserves_original_casing() {
		let html = "<main><P>Texto</P></main>";
		assert_eq!(extract_main_content(html).unwrap(), "<P>Texto</P>");
	}
}
