/// Computes the visual indentation of `line` in columns.
///
/// Spaces advance by one column; a tab advances to the next multiple of
/// `tab_size`. Returns `None` for lines made only of whitespace (including the
/// empty line), which have no meaningful indentation of their own.
pub fn indent_level(line: &str, tab_size: usize) -> Option<usize> {
	let tab_size = tab_size.max(1);
	let mut indent = 0usize;
	for ch in line.chars() {
		match ch {
			' ' => indent += 1,
			'\t' => indent = indent - indent % tab_size + tab_size,
			'\r' | '\n' => return None,
			_ => return Some(indent),
		}
	}
	None
}
