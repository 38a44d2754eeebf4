//! Capability slots for command callbacks.
//!
//! Closures implement these traits through blanket impls, so most callers
//! never name them. Types that need their own state can implement them
//! directly.

use crate::{CommandError, Sender};

/// Result type returned by executors.
pub type CommandResult = Result<(), CommandError>;

/// Result type returned by tab completers.
pub type CompletionResult = Result<Vec<String>, CommandError>;

/// Runs a command for one sender class.
pub trait Executor: Send + Sync {
	/// Executes the command with the tokenized arguments.
	fn execute(&self, sender: &mut dyn Sender, args: &[String]) -> CommandResult;
}

impl<F> Executor for F
where
	F: Fn(&mut dyn Sender, &[String]) -> CommandResult + Send + Sync,
{
	fn execute(&self, sender: &mut dyn Sender, args: &[String]) -> CommandResult {
		self(sender, args)
	}
}

/// Produces completion suggestions for a partially typed invocation.
pub trait TabCompleter: Send + Sync {
	/// Returns suggestions in display order.
	fn complete(&self, sender: &mut dyn Sender, args: &[String]) -> CompletionResult;
}

impl<F> TabCompleter for F
where
	F: Fn(&mut dyn Sender, &[String]) -> CompletionResult + Send + Sync,
{
	fn complete(&self, sender: &mut dyn Sender, args: &[String]) -> CompletionResult {
		self(sender, args)
	}
}
