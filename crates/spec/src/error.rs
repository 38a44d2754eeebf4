use thiserror::Error;

/// Errors raised while configuring a command.
///
/// Always reported at the builder call that supplied the bad value, never
/// deferred to registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
	/// The command name is empty or contains whitespace.
	#[error("invalid configuration: command name {0:?} must be non-empty and contain no whitespace")]
	InvalidName(String),
	/// The argument bounds are structurally impossible.
	#[error("invalid configuration: argument bounds min={min} max={max} ({reason})")]
	InvalidConfiguration {
		/// Requested minimum argument count.
		min: i32,
		/// Requested maximum argument count (`-1` for unbounded).
		max: i32,
		/// Which rule the bounds broke.
		reason: &'static str,
	},
}

/// Errors produced by command callbacks.
///
/// The dispatcher never constructs or wraps these; whatever an executor or
/// tab completer returns is handed back to the host unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
	/// General command failure with message.
	#[error("{0}")]
	Failed(String),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// A target named by the command does not exist.
	#[error("not found: {0}")]
	NotFound(String),
	/// Catch-all for other errors.
	#[error("{0}")]
	Other(String),
}
