//! Code-action configuration.
//!
//! Settings live in the `[code-actions]` table of the editor's TOML config:
//!
//! ```toml
//! [code-actions]
//! enabled = true
//! show-headers = true
//! include-disabled-actions = true
//! tab-size = 4
//! ```
//!
//! Every key is optional; unknown keys inside the table are rejected so typos
//! surface at load time. Other tables in the file are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// User-facing settings for the affordance and the action menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CodeActionConfig {
	/// Feature toggle for the inline affordance.
	pub enabled: bool,
	/// Group menu entries under kind headers.
	pub show_headers: bool,
	/// Allow explicit invocations to list disabled actions.
	pub include_disabled_actions: bool,
	/// Columns per tab stop used to measure indentation.
	pub tab_size: usize,
}

impl Default for CodeActionConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			show_headers: true,
			include_disabled_actions: true,
			tab_size: 4,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
	#[serde(default)]
	code_actions: CodeActionConfig,
}

impl CodeActionConfig {
	/// Parses the `[code-actions]` table out of a TOML document.
	pub fn parse(input: &str) -> Result<Self> {
		let file: ConfigFile = toml::from_str(input)?;
		file.code_actions.validate()
	}

	/// Reads and parses a TOML config file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&input)?;
		tracing::debug!(path = %path.display(), enabled = config.enabled, "loaded code action config");
		Ok(config)
	}

	fn validate(self) -> Result<Self> {
		if self.tab_size == 0 {
			return Err(ConfigError::InvalidValue {
				key: "tab-size",
				message: "must be at least 1".to_string(),
			});
		}
		Ok(self)
	}
}

/// Font measurements reported by the host renderer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
	/// Advance width of a space character.
	pub space_width: f32,
	pub line_height: f32,
}

impl Default for FontMetrics {
	fn default() -> Self {
		Self {
			space_width: 7.0,
			line_height: 19.0,
		}
	}
}

/// Snapshot of the host options the affordance reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorOptions {
	pub code_actions: CodeActionConfig,
	pub font: FontMetrics,
}
