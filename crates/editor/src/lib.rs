//! Inline code-action affordance and action-menu coordination.
//!
//! - [`affordance`] - the overlay drawn next to the cursor and its placement rules
//! - [`coordinator`] - routing of trigger results and assembly of the action menu
//! - [`host`] - traits the embedding editor implements
//! - [`config`] - `[code-actions]` settings

pub mod affordance;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod host;
#[cfg(test)]
pub(crate) mod testing;

pub use affordance::{AffordanceButton, AffordanceClick, AffordanceState, AffordanceWidget, Showing, WidgetButton, WidgetPlan};
pub use config::{CodeActionConfig, EditorOptions, FontMetrics};
pub use coordinator::{CodeActionUi, ListAnchor, PendingActions, Services, ShowOptions, TriggerState};
pub use error::{CodeActionError, ConfigError};
pub use host::{
	ActionDelegate, ActionMenu, BarAction, CommandDispatch, EditorEvent, EditorHost, ErrorSink, KeybindingLookup, MenuDelegate, MenuRequest, PointerButton,
	PointerEvent, WidgetPlacement,
};
