//! Flattening action lists into menu rows.
//!
//! With headers enabled, actions are bucketed by kind into a fixed sequence of
//! [`ActionGroup`]s and each non-empty group is emitted as a header row
//! followed by its actions. Without headers the actions keep their set order.

use crate::item::{ActionItem, kind_contains};

/// Menu section an action is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionGroup {
	QuickFix,
	Extract,
	Inline,
	Rewrite,
	Move,
	SurroundWith,
	Source,
	/// Catch-all for kindless actions and kinds no other group claims.
	More,
}

impl ActionGroup {
	/// Groups in menu order. [`ActionGroup::More`] comes last and accepts
	/// anything.
	pub const ALL: [ActionGroup; 8] = [
		ActionGroup::QuickFix,
		ActionGroup::Extract,
		ActionGroup::Inline,
		ActionGroup::Rewrite,
		ActionGroup::Move,
		ActionGroup::SurroundWith,
		ActionGroup::Source,
		ActionGroup::More,
	];

	pub fn title(self) -> &'static str {
		match self {
			ActionGroup::QuickFix => "Quick Fix",
			ActionGroup::Extract => "Extract",
			ActionGroup::Inline => "Inline",
			ActionGroup::Rewrite => "Rewrite",
			ActionGroup::Move => "Move",
			ActionGroup::SurroundWith => "Surround With",
			ActionGroup::Source => "Source Action",
			ActionGroup::More => "More Actions...",
		}
	}

	/// Kind prefix the group claims.
	pub fn kind(self) -> &'static str {
		match self {
			ActionGroup::QuickFix => "quickfix",
			ActionGroup::Extract => "refactor.extract",
			ActionGroup::Inline => "refactor.inline",
			ActionGroup::Rewrite => "refactor.rewrite",
			ActionGroup::Move => "refactor.move",
			ActionGroup::SurroundWith => "surround",
			ActionGroup::Source => "source",
			ActionGroup::More => "",
		}
	}

	pub fn for_item(item: &ActionItem) -> Self {
		let kind = item.kind().map(|kind| kind.as_str()).unwrap_or_default();
		Self::ALL
			.into_iter()
			.find(|group| kind_contains(group.kind(), kind))
			.unwrap_or(ActionGroup::More)
	}
}

/// One row of an action menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
	Header(ActionGroup),
	Action {
		item: ActionItem,
		group: ActionGroup,
		label: String,
		/// Disabled rows are listed but cannot be selected.
		enabled: bool,
		tooltip: Option<String>,
		can_preview: bool,
	},
}

impl MenuEntry {
	fn action(item: &ActionItem, group: ActionGroup) -> Self {
		MenuEntry::Action {
			item: item.clone(),
			group,
			label: item.title().to_string(),
			enabled: !item.is_disabled(),
			tooltip: item.disabled_reason().map(str::to_string),
			can_preview: item.has_edit(),
		}
	}

	/// The action a row applies, if it is not a header.
	pub fn item(&self) -> Option<&ActionItem> {
		match self {
			MenuEntry::Header(_) => None,
			MenuEntry::Action { item, .. } => Some(item),
		}
	}

	pub fn is_selectable(&self) -> bool {
		matches!(self, MenuEntry::Action { enabled: true, .. })
	}
}

/// Builds menu rows for `actions`.
pub fn to_menu_entries(actions: &[ActionItem], show_headers: bool) -> Vec<MenuEntry> {
	if !show_headers {
		return actions.iter().map(|item| MenuEntry::action(item, ActionGroup::More)).collect();
	}

	let mut buckets: Vec<(ActionGroup, Vec<&ActionItem>)> = ActionGroup::ALL.into_iter().map(|group| (group, Vec::new())).collect();
	for item in actions {
		let group = ActionGroup::for_item(item);
		if let Some((_, bucket)) = buckets.iter_mut().find(|(g, _)| *g == group) {
			bucket.push(item);
		}
	}

	let mut entries = Vec::with_capacity(actions.len() + buckets.len());
	for (group, items) in buckets {
		if items.is_empty() {
			continue;
		}
		entries.push(MenuEntry::Header(group));
		entries.extend(items.into_iter().map(|item| MenuEntry::action(item, group)));
	}
	entries
}
