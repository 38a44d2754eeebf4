//! Invocation pipeline.
//!
//! [`Dispatcher::dispatch`] validates one invocation against a
//! [`CommandSpec`] and either runs the matching executor or sends exactly one
//! rejection message. Checks run in a fixed order:
//!
//! 1. permission
//! 2. player-only
//! 3. argument count
//! 4. executor for the sender's class
//!
//! The order decides which message a sender sees when several checks fail
//! at once, so it is fixed. Tab completion ([`Dispatcher::complete`]) is a
//! separate entry point and is not gated by any of these checks.

use cmdkit_invocation::Invocation;
use cmdkit_registry::CommandRegistry;
use cmdkit_spec::{CommandError, CommandSpec, Sender};

mod defaults;

pub use defaults::{DefaultsError, HostDefaults};


/// Terminal result of one dispatch.
///
/// Rejections are normal outcomes, not errors: the sender has already been
/// told why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// The matching executor ran.
	Executed,
	/// No executor is registered for the sender's class; nothing ran.
	ExecutedNoop,
	/// The sender lacks the command's permission.
	RejectedPermission,
	/// A non-player invoked a player-only command.
	RejectedNotPlayer,
	/// The argument count is outside the command's bounds.
	RejectedArgs,
	/// The label resolved to no registered command. Only produced by
	/// [`Dispatcher::run`].
	UnknownCommand,
}

impl Outcome {
	/// Returns whether the pipeline stopped before reaching an executor.
	pub fn is_rejected(self) -> bool {
		matches!(
			self,
			Outcome::RejectedPermission | Outcome::RejectedNotPlayer | Outcome::RejectedArgs | Outcome::UnknownCommand
		)
	}
}

/// Routes invocations through the validation pipeline.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
	defaults: HostDefaults,
}

impl Dispatcher {
	/// Creates a dispatcher that falls back to `defaults` for unset messages.
	pub fn new(defaults: HostDefaults) -> Self {
		Self { defaults }
	}

	/// Returns the host defaults in use.
	pub fn defaults(&self) -> &HostDefaults {
		&self.defaults
	}

	/// Runs one invocation of `spec`.
	///
	/// Errors returned by the executor are passed through unchanged.
	pub fn dispatch(&self, spec: &CommandSpec, sender: &mut dyn Sender, args: &[String]) -> Result<Outcome, CommandError> {
		let outcome = self.run_pipeline(spec, sender, args)?;
		tracing::debug!(command = %spec.name(), sender = %sender.kind(), args = args.len(), ?outcome, "dispatched");
		Ok(outcome)
	}

	fn run_pipeline(&self, spec: &CommandSpec, sender: &mut dyn Sender, args: &[String]) -> Result<Outcome, CommandError> {
		if let Some(permission) = spec.permission()
			&& !sender.has_permission(permission)
		{
			let message = spec.no_permission_message().unwrap_or(self.defaults.no_permission_message.as_str());
			sender.send_message(message);
			return Ok(Outcome::RejectedPermission);
		}

		if spec.player_only() && !sender.is_player() {
			sender.send_message(&self.defaults.player_only_message);
			return Ok(Outcome::RejectedNotPlayer);
		}

		if !spec.arg_bounds().contains(args.len()) {
			let message = spec.arg_error_message().unwrap_or(self.defaults.arg_error_message.as_str());
			sender.send_message(message);
			return Ok(Outcome::RejectedArgs);
		}

		let executor = if sender.is_player() {
			spec.player_executor()
		} else {
			spec.console_executor()
		};
		match executor {
			Some(executor) => {
				executor.execute(sender, args)?;
				Ok(Outcome::Executed)
			}
			None => {
				// Sender gets no feedback here; surface it to operators instead.
				tracing::warn!(command = %spec.name(), sender = %sender.kind(), "no executor for sender class; invocation ignored");
				Ok(Outcome::ExecutedNoop)
			}
		}
	}

	/// Returns completion suggestions for `spec`.
	///
	/// Empty when the spec has no tab completer.
	pub fn complete(&self, spec: &CommandSpec, sender: &mut dyn Sender, args: &[String]) -> Result<Vec<String>, CommandError> {
		match spec.tab_completer() {
			Some(completer) => completer.complete(sender, args),
			None => Ok(Vec::new()),
		}
	}

	/// Resolves `invocation` in `registry` and dispatches it.
	///
	/// Unknown labels send the host's unknown-command message and yield
	/// [`Outcome::UnknownCommand`].
	pub fn run(&self, registry: &CommandRegistry, invocation: &Invocation, sender: &mut dyn Sender) -> Result<Outcome, CommandError> {
		let Some(spec) = registry.get(&invocation.label) else {
			tracing::debug!(invocation = %invocation.describe(), "unknown command");
			sender.send_message(&self.defaults.unknown_command_message);
			return Ok(Outcome::UnknownCommand);
		};
		self.dispatch(&spec, sender, &invocation.args)
	}

	/// Resolves `invocation` in `registry` and returns its completions.
	///
	/// Unknown labels complete to nothing.
	pub fn complete_invocation(&self, registry: &CommandRegistry, invocation: &Invocation, sender: &mut dyn Sender) -> Result<Vec<String>, CommandError> {
		match registry.get(&invocation.label) {
			Some(spec) => self.complete(&spec, sender, &invocation.args),
			None => Ok(Vec::new()),
		}
	}
}
