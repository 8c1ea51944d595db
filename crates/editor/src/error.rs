//! Error types for configuration loading and code-action plumbing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected key/type.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is out of range.
	#[error("invalid value for {key}: {message}")]
	InvalidValue { key: &'static str, message: String },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failures reported to the unexpected-error sink.
///
/// None of these are fatal: the affordance or menu is simply not shown.
#[derive(Debug, Error)]
pub enum CodeActionError {
	/// The asynchronous action-set computation failed.
	#[error("failed to resolve code actions: {0:#}")]
	Resolution(#[source] anyhow::Error),

	/// A documentation or affordance command could not be dispatched.
	#[error("command {id} failed: {source:#}")]
	Command {
		id: String,
		#[source]
		source: anyhow::Error,
	},
}
