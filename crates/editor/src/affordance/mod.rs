//! Inline affordance overlay.
//!
//! A small two-button overlay drawn near the cursor whenever valid code
//! actions exist for it. The widget owns an [`AffordanceState`]; every state
//! change goes through a single setter that re-renders the buttons and lays
//! the overlay out again, so the host never observes a half-updated widget.
//!
//! Mutating methods do not draw anything themselves. They return a
//! [`WidgetPlan`] that the caller applies once it has released whatever lock
//! guards the widget, which leaves the host free to call back in from its
//! overlay methods.

mod placement;

use std::sync::Arc;

use glint_actions::{ActionSet, Trigger};
use glint_primitives::{Point, Position};

pub use placement::{ANCHOR_COLUMN, MIN_INLINE_SPACE_PX, compute_anchor};

use crate::host::{EditorEvent, EditorHost, KeybindingLookup, PointerButton, PointerEvent, WidgetPlacement};

/// Content-widget identifier registered with the host.
pub const WIDGET_ID: &str = "glint.codeActionAffordance";

/// The two buttons of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffordanceButton {
	EditWithAi,
	QuickFix,
}

impl AffordanceButton {
	/// Buttons in render order.
	pub const ALL: [AffordanceButton; 2] = [AffordanceButton::EditWithAi, AffordanceButton::QuickFix];

	pub fn label(self) -> &'static str {
		match self {
			AffordanceButton::EditWithAi => "Edit with AI",
			AffordanceButton::QuickFix => "Quick Fix",
		}
	}

	/// Command whose keybinding is shown next to the label.
	pub fn command(self) -> &'static str {
		match self {
			AffordanceButton::EditWithAi => "ai.inlineEdit",
			AffordanceButton::QuickFix => "editor.action.quickFix",
		}
	}

	fn index(self) -> usize {
		match self {
			AffordanceButton::EditWithAi => 0,
			AffordanceButton::QuickFix => 1,
		}
	}
}

/// One rendered overlay button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetButton {
	pub kind: AffordanceButton,
	pub label: &'static str,
	pub keybinding: Option<String>,
}

impl WidgetButton {
	/// Display text, e.g. `Quick Fix (Ctrl+.)`.
	pub fn text(&self) -> String {
		match &self.keybinding {
			Some(keybinding) => format!("{} ({keybinding})", self.label),
			None => self.label.to_string(),
		}
	}
}

/// Overlay contents while visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Showing {
	pub actions: Arc<ActionSet>,
	pub trigger: Trigger,
	/// Clamped position the actions apply to.
	pub editor_position: Position,
	/// Where the overlay is actually drawn.
	pub widget_position: Position,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AffordanceState {
	#[default]
	Hidden,
	Showing(Showing),
}

impl AffordanceState {
	pub fn is_showing(&self) -> bool {
		matches!(self, AffordanceState::Showing(_))
	}

	pub fn showing(&self) -> Option<&Showing> {
		match self {
			AffordanceState::Hidden => None,
			AffordanceState::Showing(showing) => Some(showing),
		}
	}
}

/// Activation of the overlay: where to open the menu and what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct AffordanceClick {
	/// Page point just below the overlay.
	pub point: Point,
	pub actions: Arc<ActionSet>,
	pub trigger: Trigger,
	pub editor_position: Position,
	pub button: Option<AffordanceButton>,
}

/// Overlay calls requested by a widget change.
#[must_use = "the host only sees the change once the plan is applied"]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetPlan {
	/// Replacement buttons.
	pub render: Option<Vec<WidgetButton>>,
	/// Replacement placement; `Some(None)` takes the overlay out of the layout.
	pub layout: Option<Option<WidgetPlacement>>,
}

impl WidgetPlan {
	pub fn is_empty(&self) -> bool {
		self.render.is_none() && self.layout.is_none()
	}

	/// Issues the planned calls, render first.
	pub fn apply(self, host: &dyn EditorHost) {
		if let Some(buttons) = self.render {
			host.render_content_widget(WIDGET_ID, &buttons);
		}
		if let Some(placement) = self.layout {
			host.layout_content_widget(WIDGET_ID, placement);
		}
	}
}

/// Keeps the overlay registered with the host for as long as it is alive.
struct ContentWidgetRegistration {
	host: Arc<dyn EditorHost>,
}

impl ContentWidgetRegistration {
	fn register(host: Arc<dyn EditorHost>) -> Self {
		host.add_content_widget(WIDGET_ID);
		Self { host }
	}
}

impl Drop for ContentWidgetRegistration {
	fn drop(&mut self) {
		self.host.remove_content_widget(WIDGET_ID);
	}
}

pub struct AffordanceWidget {
	host: Arc<dyn EditorHost>,
	keybindings: Arc<dyn KeybindingLookup>,
	state: AffordanceState,
	labels: [Option<String>; 2],
	_registration: ContentWidgetRegistration,
}

impl AffordanceWidget {
	/// Creates the widget and registers its overlay with the host.
	///
	/// Registration calls [`EditorHost::add_content_widget`] directly.
	pub fn new(host: Arc<dyn EditorHost>, keybindings: Arc<dyn KeybindingLookup>) -> Self {
		let labels = AffordanceButton::ALL.map(|button| keybindings.lookup_label(button.command()));
		Self {
			_registration: ContentWidgetRegistration::register(host.clone()),
			host,
			keybindings,
			state: AffordanceState::Hidden,
			labels,
		}
	}

	pub fn state(&self) -> &AffordanceState {
		&self.state
	}

	/// Shows the overlay for `actions` near `at`, or hides it when there is
	/// nothing to offer or no collision-free anchor.
	pub fn update(&mut self, actions: Arc<ActionSet>, trigger: Trigger, at: Position) -> WidgetPlan {
		let options = self.host.options();
		if actions.valid_actions().is_empty() || !options.code_actions.enabled || !self.host.has_model() {
			return self.hide();
		}

		let editor_position = self.host.validate_position(at);
		let Some(widget_position) = compute_anchor(self.host.as_ref(), editor_position, &options) else {
			return self.hide();
		};

		tracing::debug!(
			line = editor_position.line,
			anchor_line = widget_position.line,
			actions = actions.valid_actions().len(),
			"showing code action affordance"
		);
		self.set_state(AffordanceState::Showing(Showing {
			actions,
			trigger,
			editor_position,
			widget_position,
		}))
	}

	/// Hides the overlay. The plan is empty when it was already hidden.
	pub fn hide(&mut self) -> WidgetPlan {
		if !self.state.is_showing() {
			return WidgetPlan::default();
		}
		self.set_state(AffordanceState::Hidden)
	}

	/// Buttons for the current state; empty while hidden.
	pub fn render(&self) -> Vec<WidgetButton> {
		if !self.state.is_showing() {
			return Vec::new();
		}
		AffordanceButton::ALL
			.into_iter()
			.map(|kind| WidgetButton {
				kind,
				label: kind.label(),
				keybinding: self.labels[kind.index()].clone(),
			})
			.collect()
	}

	pub fn handle_event(&mut self, event: EditorEvent) -> WidgetPlan {
		match event {
			EditorEvent::ContentChanged => {
				let Some(showing) = self.state.showing() else {
					return WidgetPlan::default();
				};
				if !self.host.has_model() || self.host.line_count() < showing.widget_position.line {
					return self.hide();
				}
				WidgetPlan::default()
			}
			EditorEvent::ConfigurationChanged => {
				if !self.host.options().code_actions.enabled {
					return self.hide();
				}
				WidgetPlan::default()
			}
			EditorEvent::LayoutChanged => WidgetPlan {
				render: None,
				layout: self.state.showing().map(|showing| {
					Some(WidgetPlacement {
						position: showing.widget_position,
					})
				}),
			},
			EditorEvent::KeybindingsChanged => {
				let labels = AffordanceButton::ALL.map(|button| self.keybindings.lookup_label(button.command()));
				if labels == self.labels {
					return WidgetPlan::default();
				}
				self.labels = labels;
				WidgetPlan {
					render: self.state.is_showing().then(|| self.render()),
					layout: None,
				}
			}
		}
	}

	/// Hides the overlay when the pointer enters it mid-drag.
	pub fn on_pointer_enter(&mut self, primary_held: bool) -> WidgetPlan {
		if !primary_held {
			return WidgetPlan::default();
		}
		self.hide()
	}

	/// Turns a primary-button release into a click carrying the action set.
	pub fn on_pointer_up(&self, event: &PointerEvent) -> Option<AffordanceClick> {
		if event.button != PointerButton::Primary {
			return None;
		}
		let showing = self.state.showing()?;
		let line_height = self.host.options().font.line_height;

		let mut pad = (line_height / 3.0).floor();
		if showing.widget_position.line < showing.editor_position.line {
			pad += line_height;
		}

		Some(AffordanceClick {
			point: Point::new(event.point.x, event.widget_bounds.bottom() + pad),
			actions: showing.actions.clone(),
			trigger: showing.trigger,
			editor_position: showing.editor_position,
			button: event.target,
		})
	}

	fn set_state(&mut self, state: AffordanceState) -> WidgetPlan {
		self.state = state;
		let placement = self.state.showing().map(|showing| WidgetPlacement {
			position: showing.widget_position,
		});
		WidgetPlan {
			render: Some(self.render()),
			layout: Some(placement),
		}
	}
}
