use std::sync::Arc;

use thiserror::Error;

use crate::CommandSpec;

/// Errors raised by a [`Registry`] when a spec is handed over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// The name or alias is already taken by another registration.
	#[error("duplicate command: `{key}` is already registered (owner: {owner})")]
	DuplicateCommand {
		/// The colliding lookup key.
		key: String,
		/// Name of the command that already holds the key.
		owner: String,
	},
	/// An alias was added for a command that is not registered.
	#[error("unknown command: {0}")]
	UnknownCommand(String),
}

/// Receives finalized specs from [`crate::CommandBuilder::register`].
///
/// Implementations own name/alias uniqueness. `register` is responsible for
/// the spec's own aliases; `register_alias` adds further lookup keys for a
/// spec that is already registered.
pub trait Registry {
	/// Registers `spec` under `name` and all of its aliases.
	fn register(&self, name: &str, spec: Arc<CommandSpec>) -> Result<(), RegistryError>;

	/// Registers one extra alias for an already registered spec.
	///
	/// `spec` must be the same `Arc` that was passed to `register`; the name
	/// it was registered under does not have to match `spec.name()`.
	fn register_alias(&self, alias: &str, spec: Arc<CommandSpec>) -> Result<(), RegistryError>;
}
