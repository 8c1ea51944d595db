//! Single code action candidates.

use lsp_types::{CodeAction, CodeActionKind, CodeActionOrCommand, Command};

/// One candidate action offered for a location.
///
/// Wraps the server's [`CodeActionOrCommand`] without modification; bare
/// commands behave like enabled, kindless actions.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
	action: CodeActionOrCommand,
}

impl ActionItem {
	pub fn new(action: CodeActionOrCommand) -> Self {
		Self { action }
	}

	pub fn title(&self) -> &str {
		match &self.action {
			CodeActionOrCommand::Command(command) => &command.title,
			CodeActionOrCommand::CodeAction(action) => &action.title,
		}
	}

	pub fn kind(&self) -> Option<&CodeActionKind> {
		match &self.action {
			CodeActionOrCommand::Command(_) => None,
			CodeActionOrCommand::CodeAction(action) => action.kind.as_ref(),
		}
	}

	/// Reason the server gave for offering this action in a disabled state.
	pub fn disabled_reason(&self) -> Option<&str> {
		match &self.action {
			CodeActionOrCommand::Command(_) => None,
			CodeActionOrCommand::CodeAction(action) => action.disabled.as_ref().map(|d| d.reason.as_str()),
		}
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled_reason().is_some()
	}

	pub fn is_preferred(&self) -> bool {
		match &self.action {
			CodeActionOrCommand::Command(_) => false,
			CodeActionOrCommand::CodeAction(action) => action.is_preferred.unwrap_or(false),
		}
	}

	/// Command executed when the action is applied, if any.
	pub fn command(&self) -> Option<&Command> {
		match &self.action {
			CodeActionOrCommand::Command(command) => Some(command),
			CodeActionOrCommand::CodeAction(action) => action.command.as_ref(),
		}
	}

	/// Returns true if the action resolves diagnostics at its location.
	pub fn fixes_diagnostics(&self) -> bool {
		match &self.action {
			CodeActionOrCommand::Command(_) => false,
			CodeActionOrCommand::CodeAction(action) => action.diagnostics.as_ref().is_some_and(|d| !d.is_empty()),
		}
	}

	/// Returns true if applying the action edits documents, which makes it
	/// eligible for a preview.
	pub fn has_edit(&self) -> bool {
		match &self.action {
			CodeActionOrCommand::Command(_) => false,
			CodeActionOrCommand::CodeAction(action) => action.edit.is_some(),
		}
	}

	pub fn is_quick_fix(&self) -> bool {
		self.kind().is_some_and(|kind| kind_contains(CodeActionKind::QUICKFIX.as_str(), kind.as_str()))
	}

	pub fn action(&self) -> &CodeActionOrCommand {
		&self.action
	}

	pub fn into_inner(self) -> CodeActionOrCommand {
		self.action
	}
}

impl From<CodeActionOrCommand> for ActionItem {
	fn from(action: CodeActionOrCommand) -> Self {
		Self::new(action)
	}
}

impl From<CodeAction> for ActionItem {
	fn from(action: CodeAction) -> Self {
		Self::new(CodeActionOrCommand::CodeAction(action))
	}
}

impl From<Command> for ActionItem {
	fn from(command: Command) -> Self {
		Self::new(CodeActionOrCommand::Command(command))
	}
}

/// Hierarchical kind containment: `refactor` contains `refactor.extract`, and
/// the empty kind contains everything.
pub fn kind_contains(parent: &str, child: &str) -> bool {
	parent.is_empty() || child == parent || child.strip_prefix(parent).is_some_and(|rest| rest.starts_with('.'))
}
