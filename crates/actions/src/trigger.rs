//! Why actions were requested and when they may be applied without a menu.

use crate::item::ActionItem;
use crate::set::ActionSet;

/// How an action request was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
	/// Cursor movement or an edit; results only feed the ambient affordance.
	Auto,
	/// The user asked for actions explicitly.
	Invoke,
}

/// Policy for applying an action directly instead of showing a menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoApply {
	#[default]
	Never,
	/// Apply when exactly one valid action exists.
	IfSingle,
	/// Apply the first valid action.
	First,
}

/// The request an [`ActionSet`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
	pub kind: TriggerKind,
	pub auto_apply: AutoApply,
}

impl Trigger {
	pub const fn auto() -> Self {
		Self {
			kind: TriggerKind::Auto,
			auto_apply: AutoApply::Never,
		}
	}

	pub const fn invoke(auto_apply: AutoApply) -> Self {
		Self {
			kind: TriggerKind::Invoke,
			auto_apply,
		}
	}

	pub fn is_invoke(&self) -> bool {
		self.kind == TriggerKind::Invoke
	}
}

/// Returns the action to apply silently under the trigger's auto-apply policy.
pub fn try_get_valid_action_to_apply<'a>(trigger: &Trigger, actions: &'a ActionSet) -> Option<&'a ActionItem> {
	let valid = actions.valid_actions();
	match trigger.auto_apply {
		AutoApply::First if !valid.is_empty() => valid.first(),
		AutoApply::IfSingle if valid.len() == 1 => valid.first(),
		_ => None,
	}
}

/// Returns the disabled action that would have been applied silently had it
/// been enabled, so callers can explain why nothing happened.
pub fn get_invalid_action_that_would_have_been_applied<'a>(trigger: &Trigger, actions: &'a ActionSet) -> Option<&'a ActionItem> {
	if actions.all_actions().is_empty() {
		return None;
	}
	let would_apply = match trigger.auto_apply {
		AutoApply::First => actions.valid_actions().is_empty(),
		AutoApply::IfSingle => actions.all_actions().len() == 1,
		AutoApply::Never => false,
	};
	if !would_apply {
		return None;
	}
	actions.all_actions().iter().find(|item| item.is_disabled())
}
