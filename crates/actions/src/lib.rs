//! Code action model consumed by the affordance and the action menu.
//!
//! Language servers hand back a heterogeneous list of code actions and bare
//! commands. This crate normalizes them into an [`ActionSet`] (ordered, split
//! into valid and disabled actions), pairs each set with the [`Trigger`] that
//! requested it, decides when an action can be applied without any UI
//! ([`try_get_valid_action_to_apply`]), and flattens a set into grouped
//! [`MenuEntry`] rows for a menu widget.

pub mod item;
pub mod menu;
pub mod set;
pub mod trigger;

pub use item::{ActionItem, kind_contains};
pub use lsp_types;
pub use menu::{ActionGroup, MenuEntry, to_menu_entries};
pub use set::{ActionSet, DocumentationCommand};
pub use trigger::{AutoApply, Trigger, TriggerKind, get_invalid_action_that_would_have_been_applied, try_get_valid_action_to_apply};
