//! Anchor selection for the affordance overlay.
//!
//! The overlay is drawn at a fixed column near the start of a line. On a line
//! with enough indentation it fits inside the leading whitespace. Otherwise it
//! moves to a nearby visible line so it does not cover the text, and when no
//! such line exists and the cursor sits close to the left edge it is not shown
//! at all.

use glint_primitives::{Position, indent_level};

use crate::config::EditorOptions;
use crate::host::EditorHost;

/// Minimum horizontal room, in pixels, the overlay needs left of the text.
pub const MIN_INLINE_SPACE_PX: f32 = 22.0;

/// Column the overlay is anchored at on its chosen line.
pub const ANCHOR_COLUMN: usize = 2;

/// Picks the rendered anchor for `position`, which must already be clamped.
///
/// Returns `None` when every candidate would collide with the text.
pub fn compute_anchor(host: &dyn EditorHost, position: Position, options: &EditorOptions) -> Option<Position> {
	let space_width = options.font.space_width;
	let line = position.line;
	let content = host.line_content(line).unwrap_or_default();
	let indent = indent_level(&content, options.code_actions.tab_size).unwrap_or(0);
	let indent_px = space_width * indent as f32;

	if indent_px > MIN_INLINE_SPACE_PX {
		tracing::trace!(line, indent_px, "affordance fits in indentation");
		return Some(Position::new(line, ANCHOR_COLUMN));
	}

	let is_folded = |n: usize| n > 2 && host.top_for_line(n) == host.top_for_line(n - 1);

	let anchor_line = if line > 2 && !is_folded(line - 1) {
		line - 2
	} else if line < host.line_count() && !is_folded(line + 1) {
		line + 1
	} else if (position.column as f32) * space_width < MIN_INLINE_SPACE_PX {
		tracing::trace!(line, column = position.column, "no room for affordance");
		return None;
	} else {
		line
	};

	tracing::trace!(line, anchor_line, "affordance anchored");
	Some(Position::new(anchor_line, ANCHOR_COLUMN))
}
