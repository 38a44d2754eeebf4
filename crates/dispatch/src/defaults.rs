//! Host default messages.
//!
//! Used whenever a spec leaves the corresponding message unset. Hosts can
//! override any subset from a TOML file; keys that are absent keep the
//! built-in text.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while loading host defaults.
#[derive(Debug, thiserror::Error)]
pub enum DefaultsError {
	/// The defaults file could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		/// File that was being read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// The defaults file is not valid TOML or has unknown keys.
	#[error("invalid host defaults: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Messages the host supplies when a spec has none configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostDefaults {
	/// Sent when the permission check fails.
	pub no_permission_message: String,
	/// Sent when a non-player runs a player-only command.
	pub player_only_message: String,
	/// Sent when the argument count is out of bounds.
	pub arg_error_message: String,
	/// Sent when a label resolves to no command.
	pub unknown_command_message: String,
}

impl Default for HostDefaults {
	fn default() -> Self {
		Self {
			no_permission_message: "You do not have permission to perform this command.".to_string(),
			player_only_message: "This command can only be run by a player.".to_string(),
			arg_error_message: "Invalid number of arguments.".to_string(),
			unknown_command_message: "Unknown command. Type \"/help\" for help.".to_string(),
		}
	}
}

impl HostDefaults {
	/// Parses defaults from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, DefaultsError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a defaults file.
	pub fn load(path: &Path) -> Result<Self, DefaultsError> {
		let content = std::fs::read_to_string(path).map_err(|source| DefaultsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let defaults = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), "host defaults loaded");
		Ok(defaults)
	}
}
