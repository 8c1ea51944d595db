/// A point in page pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	/// Translates this point by `other`.
	pub fn offset(self, other: Point) -> Self {
		Self {
			x: self.x + other.x,
			y: self.y + other.y,
		}
	}
}

/// An axis-aligned rectangle in page pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	pub fn top(&self) -> f32 {
		self.y
	}

	/// Bottom edge (exclusive).
	pub fn bottom(&self) -> f32 {
		self.y + self.height
	}

	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.x && point.x < self.x + self.width && point.y >= self.y && point.y < self.bottom()
	}
}

/// Rendered location of a text position relative to the editor viewport,
/// after scrolling is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisiblePosition {
	pub left: f32,
	pub top: f32,
	/// Height of the line the position sits on.
	pub height: f32,
}

impl VisiblePosition {
	/// Point just below the position, relative to the viewport.
	pub fn below(&self) -> Point {
		Point::new(self.left, self.top + self.height)
	}
}
