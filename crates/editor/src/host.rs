//! Collaborator interfaces consumed from the host editor.
//!
//! The affordance and the coordinator never touch rendering, keybinding
//! resolution or command execution directly. Hosts implement these traits
//! over their own editor, menu and command services and forward change
//! notifications as [`EditorEvent`]s.

use std::fmt;
use std::sync::Arc;

use glint_actions::{ActionItem, MenuEntry};
use glint_primitives::{Point, Position, Rect, VisiblePosition};
use serde_json::Value;

use crate::affordance::{AffordanceButton, WidgetButton};
use crate::config::EditorOptions;

/// Text model, layout queries and overlay registration of one editor.
pub trait EditorHost: Send + Sync {
	/// Returns false while no document is loaded.
	fn has_model(&self) -> bool;
	fn line_count(&self) -> usize;
	/// Content of a 1-based line without its line terminator.
	fn line_content(&self, line: usize) -> Option<String>;

	/// Clamps a position into the current document.
	fn validate_position(&self, position: Position) -> Position {
		position.clamp(self.line_count(), |line| self.line_content(line).map_or(0, |content| content.chars().count()))
	}

	/// Pixel offset of the top of a line. Lines hidden inside a fold report
	/// the same top as the line they are folded into.
	fn top_for_line(&self, line: usize) -> f32;
	/// Viewport-relative location of a position after scrolling, if rendered.
	fn scrolled_visible_position(&self, position: Position) -> Option<VisiblePosition>;
	/// Page coordinates of the editor viewport's top-left corner.
	fn viewport_origin(&self) -> Point;
	/// Scrolls immediately so `position` is visible.
	fn reveal_position(&self, position: Position);
	/// Forces a synchronous layout pass.
	fn force_render(&self);
	fn options(&self) -> EditorOptions;

	/// Registers an overlay. Called while the coordinator is still creating
	/// the widget, so it must not call back into the coordinator.
	fn add_content_widget(&self, id: &'static str);
	/// Repositions an overlay; `None` removes it from the layout.
	///
	/// Called with no coordinator lock held; the host may forward events from
	/// here.
	fn layout_content_widget(&self, id: &'static str, placement: Option<WidgetPlacement>);
	/// Replaces the overlay's rendered contents. Same re-entry rules as
	/// [`layout_content_widget`](Self::layout_content_widget).
	fn render_content_widget(&self, id: &'static str, buttons: &[WidgetButton]);
	fn remove_content_widget(&self, id: &'static str);

	/// Returns keyboard focus to the text area.
	fn focus(&self);
	/// Shows a transient message anchored at a position.
	fn show_message(&self, position: Position, message: &str);
}

/// Where an overlay should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetPlacement {
	/// Exact anchor; the overlay is drawn at this line and column.
	pub position: Position,
}

/// Change notifications the host forwards from its own event sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
	ContentChanged,
	ConfigurationChanged,
	LayoutChanged,
	KeybindingsChanged,
}

/// Resolves human-readable shortcut labels.
pub trait KeybindingLookup: Send + Sync {
	fn lookup_label(&self, command: &str) -> Option<String>;
}

/// Executes commands by identifier.
pub trait CommandDispatch: Send + Sync {
	fn execute(&self, command: &str, arguments: Vec<Value>) -> anyhow::Result<()>;
}

/// Fire-and-forget channel for failures no caller can recover from.
pub trait ErrorSink: Send + Sync {
	fn on_unexpected_error(&self, error: &crate::CodeActionError);
}

/// Applies a chosen action.
pub trait ActionDelegate: Send + Sync {
	/// `retrigger` requests a fresh evaluation afterwards; `preview` asks for
	/// the edit to be shown instead of applied.
	fn apply(&self, action: &ActionItem, retrigger: bool, preview: bool);
}

/// Generic menu widget service.
pub trait ActionMenu: Send + Sync {
	fn show(&self, request: MenuRequest);
	fn hide(&self);
}

/// Callbacks the menu widget invokes.
pub trait MenuDelegate: Send + Sync {
	fn on_select(&self, action: &ActionItem, preview: bool);
	fn on_hide(&self);
}

/// A menu to show at a page position.
pub struct MenuRequest {
	pub entries: Vec<MenuEntry>,
	pub anchor: Point,
	pub delegate: Arc<dyn MenuDelegate>,
	/// Secondary actions rendered in the menu's footer bar.
	pub bar_actions: Vec<BarAction>,
}

impl fmt::Debug for MenuRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MenuRequest")
			.field("entries", &self.entries)
			.field("anchor", &self.anchor)
			.field("bar_actions", &self.bar_actions)
			.finish_non_exhaustive()
	}
}

/// Footer entry of the action menu.
#[derive(Clone)]
pub struct BarAction {
	pub id: String,
	pub label: String,
	pub tooltip: Option<String>,
	pub enabled: bool,
	pub run: Arc<dyn Fn() + Send + Sync>,
}

impl fmt::Debug for BarAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BarAction")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("tooltip", &self.tooltip)
			.field("enabled", &self.enabled)
			.finish_non_exhaustive()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Secondary,
	Middle,
}

/// Pointer release over the affordance overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
	pub button: PointerButton,
	pub point: Point,
	/// Page bounds of the overlay node.
	pub widget_bounds: Rect,
	/// Button under the pointer, if any.
	pub target: Option<AffordanceButton>,
}
