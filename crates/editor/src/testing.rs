//! Recording fakes for the host services.

use std::collections::HashMap;
use std::sync::Arc;

use glint_actions::lsp_types::{CodeAction, CodeActionDisabled};
use glint_actions::{ActionItem, ActionSet};
use glint_primitives::{Point, Position, VisiblePosition};
use parking_lot::Mutex;
use serde_json::Value;

use crate::affordance::WidgetButton;
use crate::config::EditorOptions;
use crate::coordinator::{CodeActionUi, PendingActions, Services};
use crate::error::CodeActionError;
use crate::host::{ActionDelegate, ActionMenu, CommandDispatch, EditorHost, ErrorSink, KeybindingLookup, MenuRequest, WidgetPlacement};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
	AddWidget,
	Layout(Option<WidgetPlacement>),
	Render(Vec<String>),
	RemoveWidget,
	Reveal(Position),
	ForceRender,
	Focus,
	Message(Position, String),
}

struct HostState {
	has_model: bool,
	lines: Vec<String>,
	tops: Vec<f32>,
	options: EditorOptions,
	origin: Point,
	calls: Vec<HostCall>,
}

type Hook = Arc<dyn Fn() + Send + Sync>;

/// In-memory editor whose line tops start out evenly spaced.
pub struct FakeHost {
	state: Mutex<HostState>,
	on_layout: Mutex<Option<Hook>>,
}

impl FakeHost {
	pub fn new(text: &str) -> Arc<Self> {
		let host = Arc::new(Self {
			state: Mutex::new(HostState {
				has_model: true,
				lines: Vec::new(),
				tops: Vec::new(),
				options: EditorOptions::default(),
				origin: Point::new(100.0, 50.0),
				calls: Vec::new(),
			}),
			on_layout: Mutex::new(None),
		});
		host.set_text(text);
		host
	}

	pub fn set_text(&self, text: &str) {
		let mut state = self.state.lock();
		let line_height = state.options.font.line_height;
		state.lines = text.split('\n').map(str::to_string).collect();
		state.tops = (0..state.lines.len()).map(|i| i as f32 * line_height).collect();
	}

	/// Collapses `line` into the line above it.
	pub fn fold(&self, line: usize) {
		let mut state = self.state.lock();
		let above = state.tops[line - 2];
		state.tops[line - 1] = above;
	}

	pub fn set_has_model(&self, has_model: bool) {
		self.state.lock().has_model = has_model;
	}

	pub fn set_options(&self, f: impl FnOnce(&mut EditorOptions)) {
		f(&mut self.state.lock().options);
	}

	/// Runs `hook` from inside every `layout_content_widget` call.
	pub fn on_layout(&self, hook: impl Fn() + Send + Sync + 'static) {
		*self.on_layout.lock() = Some(Arc::new(hook));
	}

	pub fn calls(&self) -> Vec<HostCall> {
		self.state.lock().calls.clone()
	}

	pub fn clear_calls(&self) {
		self.state.lock().calls.clear();
	}

	fn record(&self, call: HostCall) {
		self.state.lock().calls.push(call);
	}
}

impl EditorHost for FakeHost {
	fn has_model(&self) -> bool {
		self.state.lock().has_model
	}

	fn line_count(&self) -> usize {
		self.state.lock().lines.len()
	}

	fn line_content(&self, line: usize) -> Option<String> {
		self.state.lock().lines.get(line.checked_sub(1)?).cloned()
	}

	fn top_for_line(&self, line: usize) -> f32 {
		let state = self.state.lock();
		state.tops.get(line.saturating_sub(1)).copied().unwrap_or(line as f32 * state.options.font.line_height)
	}

	fn scrolled_visible_position(&self, position: Position) -> Option<VisiblePosition> {
		let font = self.state.lock().options.font;
		Some(VisiblePosition {
			left: (position.column - 1) as f32 * font.space_width,
			top: self.top_for_line(position.line),
			height: font.line_height,
		})
	}

	fn viewport_origin(&self) -> Point {
		self.state.lock().origin
	}

	fn reveal_position(&self, position: Position) {
		self.record(HostCall::Reveal(position));
	}

	fn force_render(&self) {
		self.record(HostCall::ForceRender);
	}

	fn options(&self) -> EditorOptions {
		self.state.lock().options.clone()
	}

	fn add_content_widget(&self, _id: &'static str) {
		self.record(HostCall::AddWidget);
	}

	fn layout_content_widget(&self, _id: &'static str, placement: Option<WidgetPlacement>) {
		self.record(HostCall::Layout(placement));
		let hook = self.on_layout.lock().clone();
		if let Some(hook) = hook {
			hook();
		}
	}

	fn render_content_widget(&self, _id: &'static str, buttons: &[WidgetButton]) {
		self.record(HostCall::Render(buttons.iter().map(WidgetButton::text).collect()));
	}

	fn remove_content_widget(&self, _id: &'static str) {
		self.record(HostCall::RemoveWidget);
	}

	fn focus(&self) {
		self.record(HostCall::Focus);
	}

	fn show_message(&self, position: Position, message: &str) {
		self.record(HostCall::Message(position, message.to_string()));
	}
}

#[derive(Default)]
pub struct FakeKeybindings {
	labels: Mutex<HashMap<String, String>>,
}

impl FakeKeybindings {
	pub fn bind(&self, command: &str, label: &str) {
		self.labels.lock().insert(command.to_string(), label.to_string());
	}
}

impl KeybindingLookup for FakeKeybindings {
	fn lookup_label(&self, command: &str) -> Option<String> {
		self.labels.lock().get(command).cloned()
	}
}

#[derive(Default)]
pub struct FakeMenu {
	shown: Mutex<Vec<Arc<MenuRequest>>>,
	hides: Mutex<usize>,
}

impl FakeMenu {
	pub fn shown(&self) -> Vec<Arc<MenuRequest>> {
		self.shown.lock().clone()
	}

	pub fn last(&self) -> Option<Arc<MenuRequest>> {
		self.shown.lock().last().cloned()
	}

	pub fn hide_count(&self) -> usize {
		*self.hides.lock()
	}
}

impl ActionMenu for FakeMenu {
	fn show(&self, request: MenuRequest) {
		self.shown.lock().push(Arc::new(request));
	}

	fn hide(&self) {
		*self.hides.lock() += 1;
	}
}

#[derive(Default)]
pub struct FakeCommands {
	executed: Mutex<Vec<(String, Vec<Value>)>>,
	fail: Mutex<bool>,
}

impl FakeCommands {
	pub fn executed(&self) -> Vec<(String, Vec<Value>)> {
		self.executed.lock().clone()
	}

	pub fn fail_next(&self) {
		*self.fail.lock() = true;
	}
}

impl CommandDispatch for FakeCommands {
	fn execute(&self, command: &str, arguments: Vec<Value>) -> anyhow::Result<()> {
		if std::mem::take(&mut *self.fail.lock()) {
			anyhow::bail!("command {command} is not registered");
		}
		self.executed.lock().push((command.to_string(), arguments));
		Ok(())
	}
}

#[derive(Default)]
pub struct FakeErrors {
	reported: Mutex<Vec<String>>,
}

impl FakeErrors {
	pub fn reported(&self) -> Vec<String> {
		self.reported.lock().clone()
	}
}

impl ErrorSink for FakeErrors {
	fn on_unexpected_error(&self, error: &CodeActionError) {
		self.reported.lock().push(error.to_string());
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
	pub title: String,
	pub retrigger: bool,
	pub preview: bool,
}

#[derive(Default)]
pub struct FakeDelegate {
	applied: Mutex<Vec<Applied>>,
}

impl FakeDelegate {
	pub fn applied(&self) -> Vec<Applied> {
		self.applied.lock().clone()
	}
}

impl ActionDelegate for FakeDelegate {
	fn apply(&self, action: &ActionItem, retrigger: bool, preview: bool) {
		self.applied.lock().push(Applied {
			title: action.title().to_string(),
			retrigger,
			preview,
		});
	}
}

/// A coordinator wired to recording fakes.
pub struct Harness {
	pub host: Arc<FakeHost>,
	pub keybindings: Arc<FakeKeybindings>,
	pub menu: Arc<FakeMenu>,
	pub commands: Arc<FakeCommands>,
	pub errors: Arc<FakeErrors>,
	pub delegate: Arc<FakeDelegate>,
	pub ui: CodeActionUi,
}

impl Harness {
	pub fn new(text: &str) -> Self {
		init_tracing();
		let host = FakeHost::new(text);
		let keybindings = Arc::new(FakeKeybindings::default());
		let menu = Arc::new(FakeMenu::default());
		let commands = Arc::new(FakeCommands::default());
		let errors = Arc::new(FakeErrors::default());
		let delegate = Arc::new(FakeDelegate::default());
		let ui = CodeActionUi::new(Services {
			host: host.clone(),
			keybindings: keybindings.clone(),
			menu: menu.clone(),
			commands: commands.clone(),
			errors: errors.clone(),
			delegate: delegate.clone(),
		});
		Self {
			host,
			keybindings,
			menu,
			commands,
			errors,
			delegate,
			ui,
		}
	}
}

pub fn enabled(title: &str) -> ActionItem {
	ActionItem::from(CodeAction {
		title: title.to_string(),
		..Default::default()
	})
}

pub fn disabled(title: &str) -> ActionItem {
	ActionItem::from(CodeAction {
		title: title.to_string(),
		disabled: Some(CodeActionDisabled {
			reason: format!("{title} is unavailable"),
		}),
		..Default::default()
	})
}

pub fn set_of(valid: usize, invalid: usize) -> ActionSet {
	let items = (0..valid).map(|i| enabled(&format!("valid {i}"))).chain((0..invalid).map(|i| disabled(&format!("invalid {i}"))));
	ActionSet::new(items, Vec::new())
}

pub fn ready(actions: ActionSet) -> PendingActions {
	Box::pin(async move { Ok(actions) })
}
