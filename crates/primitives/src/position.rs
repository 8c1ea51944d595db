/// A position in a text document.
///
/// Lines and columns are both 1-based, matching the coordinate space the host
/// editor reports. Column `n` sits before the `n`th character of the line, so a
/// line with `len` characters has valid columns `1..=len + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	/// 1-based line number.
	pub line: usize,
	/// 1-based column number.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}

	/// Clamps the position into a document with `line_count` lines.
	///
	/// `line_len` returns the length in characters of a (valid) line. An empty
	/// document is treated as a single empty line.
	pub fn clamp(self, line_count: usize, line_len: impl FnOnce(usize) -> usize) -> Self {
		let line = self.line.clamp(1, line_count.max(1));
		let max_column = line_len(line) + 1;
		Self {
			line,
			column: self.column.clamp(1, max_column),
		}
	}
}
