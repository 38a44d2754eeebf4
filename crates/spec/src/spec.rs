use std::sync::Arc;

use crate::{Executor, TabCompleter};

/// Host-facing sentinel for "no upper argument bound".
pub const UNBOUNDED: i32 = -1;

/// Which sender classes a command accepts.
///
/// Kept as an enum rather than a flag so another sender class can be added
/// without changing the builder surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommandType {
	/// Only players may run the command.
	Player,
	/// Any sender may run the command.
	#[default]
	Console,
}

/// Inclusive bounds on the number of arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgBounds {
	/// Minimum argument count.
	pub min: usize,
	/// Maximum argument count; `None` means unbounded.
	pub max: Option<usize>,
}

impl ArgBounds {
	/// Bounds that accept any argument count.
	pub const ANY: ArgBounds = ArgBounds { min: 0, max: None };

	/// Returns whether `count` arguments satisfy these bounds.
	pub fn contains(&self, count: usize) -> bool {
		count >= self.min && self.max.is_none_or(|max| count <= max)
	}
}

impl Default for ArgBounds {
	fn default() -> Self {
		Self::ANY
	}
}

impl std::fmt::Display for ArgBounds {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.max {
			Some(max) => write!(f, "{}..={}", self.min, max),
			None => write!(f, "{}..", self.min),
		}
	}
}

/// Finalized configuration of one named command.
///
/// Produced by [`crate::CommandBuilder::build`]. Every field is read-only, so
/// a spec can be shared across threads and invoked concurrently.
#[derive(Clone)]
pub struct CommandSpec {
	pub(crate) name: String,
	pub(crate) aliases: Vec<String>,
	pub(crate) description: String,
	pub(crate) usage: String,
	pub(crate) player_executor: Option<Arc<dyn Executor>>,
	pub(crate) console_executor: Option<Arc<dyn Executor>>,
	pub(crate) tab_completer: Option<Arc<dyn TabCompleter>>,
	pub(crate) permission: Option<String>,
	pub(crate) no_permission_message: Option<String>,
	pub(crate) command_type: CommandType,
	pub(crate) arg_bounds: ArgBounds,
	pub(crate) arg_error_message: Option<String>,
}

impl CommandSpec {
	/// Returns the primary name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns alternative names in declaration order.
	pub fn aliases(&self) -> &[String] {
		&self.aliases
	}

	/// Returns the description, empty if unset.
	pub fn description(&self) -> &str {
		&self.description
	}

	/// Returns the raw usage string, empty if unset.
	pub fn usage(&self) -> &str {
		&self.usage
	}

	/// Renders the usage string for the label the sender typed.
	///
	/// Occurrences of `<command>` are replaced with `label`.
	pub fn usage_for(&self, label: &str) -> String {
		self.usage.replace("<command>", label)
	}

	/// Returns the executor for player senders.
	pub fn player_executor(&self) -> Option<&dyn Executor> {
		self.player_executor.as_deref()
	}

	/// Returns the executor for non-player senders.
	pub fn console_executor(&self) -> Option<&dyn Executor> {
		self.console_executor.as_deref()
	}

	/// Returns the tab completer.
	pub fn tab_completer(&self) -> Option<&dyn TabCompleter> {
		self.tab_completer.as_deref()
	}

	/// Returns the required permission, if any.
	pub fn permission(&self) -> Option<&str> {
		self.permission.as_deref()
	}

	/// Returns the configured no-permission message, if any.
	pub fn no_permission_message(&self) -> Option<&str> {
		self.no_permission_message.as_deref()
	}

	/// Returns the accepted sender classes.
	pub fn command_type(&self) -> CommandType {
		self.command_type
	}

	/// Returns whether non-player senders are always rejected.
	pub fn player_only(&self) -> bool {
		self.command_type == CommandType::Player
	}

	/// Returns the argument count bounds.
	pub fn arg_bounds(&self) -> ArgBounds {
		self.arg_bounds
	}

	/// Returns the minimum argument count.
	pub fn min_args(&self) -> usize {
		self.arg_bounds.min
	}

	/// Returns the maximum argument count, `None` when unbounded.
	pub fn max_args(&self) -> Option<usize> {
		self.arg_bounds.max
	}

	/// Returns the configured argument error message, if any.
	pub fn arg_error_message(&self) -> Option<&str> {
		self.arg_error_message.as_deref()
	}

	/// Returns whether at least one executor is set.
	pub fn is_actionable(&self) -> bool {
		self.player_executor.is_some() || self.console_executor.is_some()
	}
}

fn same_slot<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) => Arc::ptr_eq(a, b),
		(None, None) => true,
		_ => false,
	}
}

/// Specs compare by value; callback slots compare by identity.
impl PartialEq for CommandSpec {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.aliases == other.aliases
			&& self.description == other.description
			&& self.usage == other.usage
			&& same_slot(&self.player_executor, &other.player_executor)
			&& same_slot(&self.console_executor, &other.console_executor)
			&& same_slot(&self.tab_completer, &other.tab_completer)
			&& self.permission == other.permission
			&& self.no_permission_message == other.no_permission_message
			&& self.command_type == other.command_type
			&& self.arg_bounds == other.arg_bounds
			&& self.arg_error_message == other.arg_error_message
	}
}

impl std::fmt::Debug for CommandSpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CommandSpec")
			.field("name", &self.name)
			.field("aliases", &self.aliases)
			.field("description", &self.description)
			.field("usage", &self.usage)
			.field("player_executor", &self.player_executor.is_some())
			.field("console_executor", &self.console_executor.is_some())
			.field("tab_completer", &self.tab_completer.is_some())
			.field("permission", &self.permission)
			.field("no_permission_message", &self.no_permission_message)
			.field("command_type", &self.command_type)
			.field("arg_bounds", &self.arg_bounds)
			.field("arg_error_message", &self.arg_error_message)
			.finish()
	}
}
