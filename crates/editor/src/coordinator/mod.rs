//! Action-list coordination.
//!
//! [`CodeActionUi`] receives trigger results, feeds the ambient affordance,
//! routes explicit invocations (auto-apply, "disabled" message, or menu) and
//! builds the menu request itself: which actions to list, where to anchor the
//! menu, and which footer actions to offer.
//!
//! The handle is cheap to clone; clones share one coordinator. The affordance
//! widget is created on first use and dropped on [`CodeActionUi::dispose`].

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use glint_actions::{ActionItem, ActionSet, Trigger, get_invalid_action_that_would_have_been_applied, to_menu_entries, try_get_valid_action_to_apply};
use glint_primitives::{Point, Position};
use parking_lot::Mutex;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::affordance::{AffordanceButton, AffordanceState, AffordanceWidget, WidgetPlan};
use crate::error::CodeActionError;
use crate::host::{ActionDelegate, ActionMenu, BarAction, CommandDispatch, EditorEvent, EditorHost, ErrorSink, KeybindingLookup, MenuDelegate, MenuRequest, PointerEvent};

/// Action set still being computed.
pub type PendingActions = Pin<Box<dyn Future<Output = anyhow::Result<ActionSet>> + Send + 'static>>;

/// Outcome of the host's trigger evaluation.
pub enum TriggerState {
	NotTriggered,
	Triggered {
		trigger: Trigger,
		position: Position,
		actions: PendingActions,
	},
}

/// Where to open the action menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListAnchor {
	/// Page coordinates.
	Point(Point),
	/// Text position; revealed and converted to page coordinates.
	Position(Position),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowOptions {
	pub include_disabled_actions: bool,
	/// The menu was opened from the affordance.
	pub from_lightbulb: bool,
}

/// Host services the coordinator talks to.
#[derive(Clone)]
pub struct Services {
	pub host: Arc<dyn EditorHost>,
	pub keybindings: Arc<dyn KeybindingLookup>,
	pub menu: Arc<dyn ActionMenu>,
	pub commands: Arc<dyn CommandDispatch>,
	pub errors: Arc<dyn ErrorSink>,
	pub delegate: Arc<dyn ActionDelegate>,
}

struct Inner {
	services: Services,
	/// `None` until the affordance is first needed, and again after disposal.
	widget: Mutex<Option<AffordanceWidget>>,
	show_disabled: AtomicBool,
	disposed: CancellationToken,
}

#[derive(Clone)]
pub struct CodeActionUi {
	inner: Arc<Inner>,
}

impl CodeActionUi {
	pub fn new(services: Services) -> Self {
		Self {
			inner: Arc::new(Inner {
				services,
				widget: Mutex::new(None),
				show_disabled: AtomicBool::new(false),
				disposed: CancellationToken::new(),
			}),
		}
	}

	pub fn is_disposed(&self) -> bool {
		self.inner.disposed.is_cancelled()
	}

	/// Whether the menu currently lists disabled actions.
	pub fn show_disabled(&self) -> bool {
		self.inner.show_disabled.load(Ordering::Relaxed)
	}

	/// Current affordance state; hidden until the widget exists.
	pub fn affordance_state(&self) -> AffordanceState {
		self.inner.widget.lock().as_ref().map(|widget| widget.state().clone()).unwrap_or_default()
	}

	/// Applies a trigger result.
	///
	/// The pending action set is awaited without holding any lock. A failed
	/// computation is reported to the error sink and leaves the UI alone; a
	/// result arriving after [`dispose`](Self::dispose) is dropped silently.
	pub async fn update(&self, state: TriggerState) {
		let TriggerState::Triggered { trigger, position, actions } = state else {
			self.hide_affordance();
			return;
		};

		let actions = match actions.await {
			Ok(actions) => Arc::new(actions),
			Err(error) => {
				let error = CodeActionError::Resolution(error);
				tracing::warn!(error = %error, "code action resolution failed");
				self.inner.services.errors.on_unexpected_error(&error);
				return;
			}
		};

		if self.is_disposed() {
			tracing::debug!("dropping code actions resolved after disposal");
			return;
		}

		self.with_widget(|widget| widget.update(actions.clone(), trigger, position));

		if trigger.is_invoke() {
			self.route_invoked(actions, trigger, position);
		}
	}

	fn route_invoked(&self, actions: Arc<ActionSet>, trigger: Trigger, position: Position) {
		if let Some(action) = try_get_valid_action_to_apply(&trigger, &actions) {
			tracing::debug!(title = action.title(), "auto-applying code action");
			self.hide_affordance();
			self.inner.services.delegate.apply(action, false, false);
			return;
		}

		if let Some(action) = get_invalid_action_that_would_have_been_applied(&trigger, &actions) {
			if let Some(reason) = action.disabled_reason() {
				self.inner.services.host.show_message(position, reason);
			}
			return;
		}

		let include_disabled_actions = self.inner.services.host.options().code_actions.include_disabled_actions;
		self.show_code_action_list(
			actions,
			ListAnchor::Position(position),
			ShowOptions {
				include_disabled_actions,
				from_lightbulb: false,
			},
		);
	}

	/// Opens the action menu.
	pub fn show_code_action_list(&self, actions: Arc<ActionSet>, anchor: ListAnchor, options: ShowOptions) {
		if self.is_disposed() {
			return;
		}
		let services = &self.inner.services;
		let point = self.resolve_anchor(anchor);

		let include_disabled = options.include_disabled_actions && (self.show_disabled() || actions.valid_actions().is_empty());
		let listed = if include_disabled { actions.all_actions() } else { actions.valid_actions() };
		if listed.is_empty() {
			tracing::debug!("no code actions to list");
			return;
		}

		let show_headers = services.host.options().code_actions.show_headers;
		let entries = to_menu_entries(listed, show_headers);
		let bar_actions = self.action_bar_actions(&actions, anchor, options);
		tracing::debug!(entries = entries.len(), include_disabled, "showing code action menu");

		services.menu.show(MenuRequest {
			entries,
			anchor: point,
			delegate: Arc::new(ListDelegate {
				inner: Arc::downgrade(&self.inner),
			}),
			bar_actions,
		});
	}

	/// Footer actions: documentation links plus the disabled-actions toggle.
	pub fn action_bar_actions(&self, actions: &Arc<ActionSet>, anchor: ListAnchor, options: ShowOptions) -> Vec<BarAction> {
		if options.from_lightbulb {
			return Vec::new();
		}

		let mut bar: Vec<BarAction> = actions
			.documentation()
			.iter()
			.map(|doc| {
				let commands = self.inner.services.commands.clone();
				let errors = self.inner.services.errors.clone();
				let id = doc.id.clone();
				let arguments = doc.arguments.clone();
				BarAction {
					id: doc.id.clone(),
					label: doc.title.clone(),
					tooltip: doc.tooltip.clone(),
					enabled: true,
					run: Arc::new(move || dispatch(commands.as_ref(), errors.as_ref(), &id, arguments.clone())),
				}
			})
			.collect();

		if options.include_disabled_actions && !actions.valid_actions().is_empty() && actions.has_disabled() {
			let weak = Arc::downgrade(&self.inner);
			let actions = actions.clone();
			let showing_disabled = self.show_disabled();
			// Each entry sets the value its label names, however often it runs.
			let run: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
				let Some(inner) = weak.upgrade() else {
					return;
				};
				inner.show_disabled.store(!showing_disabled, Ordering::Relaxed);
				CodeActionUi { inner }.show_code_action_list(actions.clone(), anchor, options);
			});
			bar.push(if showing_disabled {
				BarAction {
					id: "hideMoreActions".to_string(),
					label: "Hide Disabled".to_string(),
					tooltip: Some("Hide disabled items".to_string()),
					enabled: true,
					run,
				}
			} else {
				BarAction {
					id: "showMoreActions".to_string(),
					label: "Show Disabled".to_string(),
					tooltip: Some("Show disabled items".to_string()),
					enabled: true,
					run,
				}
			});
		}

		bar
	}

	fn resolve_anchor(&self, anchor: ListAnchor) -> Point {
		let position = match anchor {
			ListAnchor::Point(point) => return point,
			ListAnchor::Position(position) => position,
		};
		let host = &self.inner.services.host;
		host.reveal_position(position);
		host.force_render();
		let origin = host.viewport_origin();
		match host.scrolled_visible_position(position) {
			Some(visible) => visible.below().offset(origin),
			None => {
				tracing::debug!(line = position.line, "position not rendered, anchoring menu at viewport origin");
				origin
			}
		}
	}

	/// Forwards a host notification to the affordance.
	pub fn handle_event(&self, event: EditorEvent) {
		if self.is_disposed() {
			return;
		}
		self.with_existing_widget(|widget| widget.handle_event(event));
	}

	pub fn handle_pointer_enter(&self, primary_held: bool) {
		self.with_existing_widget(|widget| widget.on_pointer_enter(primary_held));
	}

	/// Handles a pointer release over the affordance: the AI button dispatches
	/// its command, anything else opens the menu below the overlay.
	pub fn handle_pointer_up(&self, event: &PointerEvent) {
		if self.is_disposed() {
			return;
		}
		let click = self.inner.widget.lock().as_ref().and_then(|widget| widget.on_pointer_up(event));
		let Some(click) = click else {
			return;
		};

		match click.button {
			Some(AffordanceButton::EditWithAi) => {
				let services = &self.inner.services;
				let position = click.editor_position;
				let arguments = vec![json!({ "line": position.line, "column": position.column })];
				dispatch(services.commands.as_ref(), services.errors.as_ref(), AffordanceButton::EditWithAi.command(), arguments);
			}
			Some(AffordanceButton::QuickFix) | None => self.show_code_action_list(
				click.actions,
				ListAnchor::Point(click.point),
				ShowOptions {
					include_disabled_actions: false,
					from_lightbulb: true,
				},
			),
		}
	}

	pub fn hide_affordance(&self) {
		self.with_existing_widget(AffordanceWidget::hide);
	}

	/// Tears down the coordinator. Safe to call more than once.
	pub fn dispose(&self) {
		if self.is_disposed() {
			return;
		}
		self.inner.disposed.cancel();
		self.inner.services.menu.hide();
		let widget = self.inner.widget.lock().take();
		drop(widget);
		tracing::debug!("code action ui disposed");
	}

	/// Runs `f` on the widget, creating it first if needed, then applies the
	/// resulting plan with the widget lock released.
	fn with_widget(&self, f: impl FnOnce(&mut AffordanceWidget) -> WidgetPlan) {
		if self.is_disposed() {
			return;
		}
		let services = &self.inner.services;
		let plan = {
			let mut slot = self.inner.widget.lock();
			let widget = slot.get_or_insert_with(|| AffordanceWidget::new(services.host.clone(), services.keybindings.clone()));
			f(widget)
		};
		plan.apply(services.host.as_ref());
	}

	/// Like [`with_widget`](Self::with_widget), but a no-op before the widget exists.
	fn with_existing_widget(&self, f: impl FnOnce(&mut AffordanceWidget) -> WidgetPlan) {
		let plan = self.inner.widget.lock().as_mut().map(f);
		if let Some(plan) = plan {
			plan.apply(self.inner.services.host.as_ref());
		}
	}
}

struct ListDelegate {
	inner: Weak<Inner>,
}

impl MenuDelegate for ListDelegate {
	fn on_select(&self, action: &ActionItem, preview: bool) {
		let Some(inner) = self.inner.upgrade() else {
			return;
		};
		inner.services.delegate.apply(action, true, preview);
	}

	fn on_hide(&self) {
		if let Some(inner) = self.inner.upgrade() {
			inner.services.host.focus();
		}
	}
}

fn dispatch(commands: &dyn CommandDispatch, errors: &dyn ErrorSink, id: &str, arguments: Vec<serde_json::Value>) {
	if let Err(source) = commands.execute(id, arguments) {
		let error = CodeActionError::Command { id: id.to_string(), source };
		tracing::warn!(error = %error, "command dispatch failed");
		errors.on_unexpected_error(&error);
	}
}
