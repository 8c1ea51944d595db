//! Resolved action sets.

use serde_json::Value;

use crate::item::ActionItem;

/// A help or documentation link shown next to the action list.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentationCommand {
	/// Command identifier to dispatch.
	pub id: String,
	/// Label shown in the menu's action bar.
	pub title: String,
	pub tooltip: Option<String>,
	pub arguments: Vec<Value>,
}

/// Actions offered for a single trigger.
///
/// `all_actions` is sorted so that actions fixing diagnostics come first and,
/// within that split, preferred actions lead. `valid_actions` is the enabled
/// subset in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSet {
	valid: Vec<ActionItem>,
	all: Vec<ActionItem>,
	documentation: Vec<DocumentationCommand>,
}

impl ActionSet {
	pub fn new(actions: impl IntoIterator<Item = ActionItem>, documentation: Vec<DocumentationCommand>) -> Self {
		let mut all: Vec<ActionItem> = actions.into_iter().collect();
		all.sort_by_key(|item| (!item.fixes_diagnostics(), !item.is_preferred()));
		let valid = all.iter().filter(|item| !item.is_disabled()).cloned().collect();
		Self { valid, all, documentation }
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn valid_actions(&self) -> &[ActionItem] {
		&self.valid
	}

	pub fn all_actions(&self) -> &[ActionItem] {
		&self.all
	}

	pub fn documentation(&self) -> &[DocumentationCommand] {
		&self.documentation
	}

	/// Returns true if some actions are disabled.
	pub fn has_disabled(&self) -> bool {
		self.all.len() != self.valid.len()
	}

	/// Returns true if a preferred quick fix is available.
	pub fn has_auto_fix(&self) -> bool {
		self.valid.iter().any(|item| item.is_quick_fix() && item.is_preferred())
	}

	pub fn is_empty(&self) -> bool {
		self.all.is_empty()
	}
}
