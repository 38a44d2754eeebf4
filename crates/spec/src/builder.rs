use std::sync::Arc;

use crate::{
	ArgBounds, CommandResult, CommandSpec, CommandType, CompletionResult, Executor, Registry,
	RegistryError, Sender, SpecError, TabCompleter, UNBOUNDED,
};

/// Fluent builder for a [`CommandSpec`].
///
/// Setters consume and return the builder so calls chain. Finalizing
/// ([`build`](Self::build) / [`register`](Self::register)) borrows it, so the
/// same builder can be finalized again; each call takes an independent
/// snapshot that later setter calls cannot affect.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
	draft: CommandSpec,
}

impl CommandBuilder {
	/// Starts a builder for the command `name`.
	pub fn new(name: impl Into<String>) -> Result<Self, SpecError> {
		let name = name.into();
		if name.is_empty() || name.chars().any(char::is_whitespace) {
			return Err(SpecError::InvalidName(name));
		}
		Ok(Self {
			draft: CommandSpec {
				name,
				aliases: Vec::new(),
				description: String::new(),
				usage: String::new(),
				player_executor: None,
				console_executor: None,
				tab_completer: None,
				permission: None,
				no_permission_message: None,
				command_type: CommandType::default(),
				arg_bounds: ArgBounds::ANY,
				arg_error_message: None,
			},
		})
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		&self.draft.name
	}

	/// Sets the executor used for player senders.
	pub fn player_executor<F>(self, executor: F) -> Self
	where
		F: Fn(&mut dyn Sender, &[String]) -> CommandResult + Send + Sync + 'static,
	{
		self.player_handler(Arc::new(executor))
	}

	/// Sets a shared player executor implementation.
	pub fn player_handler(mut self, executor: Arc<dyn Executor>) -> Self {
		self.draft.player_executor = Some(executor);
		self
	}

	/// Sets the executor used for non-player senders.
	pub fn console_executor<F>(self, executor: F) -> Self
	where
		F: Fn(&mut dyn Sender, &[String]) -> CommandResult + Send + Sync + 'static,
	{
		self.console_handler(Arc::new(executor))
	}

	/// Sets a shared console executor implementation.
	pub fn console_handler(mut self, executor: Arc<dyn Executor>) -> Self {
		self.draft.console_executor = Some(executor);
		self
	}

	/// Sets the tab completer.
	pub fn tab_completer<F>(self, completer: F) -> Self
	where
		F: Fn(&mut dyn Sender, &[String]) -> CompletionResult + Send + Sync + 'static,
	{
		self.completion_handler(Arc::new(completer))
	}

	/// Sets a shared tab completer implementation.
	pub fn completion_handler(mut self, completer: Arc<dyn TabCompleter>) -> Self {
		self.draft.tab_completer = Some(completer);
		self
	}

	/// Sets the permission required to run the command.
	///
	/// Stored verbatim; an empty string is kept as a present permission.
	pub fn permission(mut self, permission: impl Into<String>) -> Self {
		self.draft.permission = Some(permission.into());
		self
	}

	/// Sets the message sent when the permission check fails.
	pub fn no_permission_message(mut self, message: impl Into<String>) -> Self {
		self.draft.no_permission_message = Some(message.into());
		self
	}

	/// Sets which sender classes may run the command. Last call wins.
	pub fn command_type(mut self, command_type: CommandType) -> Self {
		self.draft.command_type = command_type;
		self
	}

	/// Replaces the alias list.
	pub fn aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.draft.aliases = aliases.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the description.
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.draft.description = description.into();
		self
	}

	/// Sets the usage string.
	pub fn usage(mut self, usage: impl Into<String>) -> Self {
		self.draft.usage = usage.into();
		self
	}

	/// Sets the argument count bounds and the message shown when they fail.
	///
	/// `max` may be [`UNBOUNDED`]. Fails if `min` is negative or `max` is
	/// bounded and below `min`. The builder is consumed either way, so on
	/// failure all configuration accumulated so far is lost.
	pub fn arguments(self, min: i32, max: i32, error_message: impl Into<String>) -> Result<Self, SpecError> {
		self.bounds_with_message(min, max, Some(error_message.into()))
	}

	/// Sets the argument count bounds without a message of its own.
	///
	/// Clears any message set by an earlier [`arguments`](Self::arguments)
	/// call; out-of-bounds invocations get the host default instead. Fails
	/// (and loses the configuration) under the same rules as `arguments`.
	pub fn arg_bounds(self, min: i32, max: i32) -> Result<Self, SpecError> {
		self.bounds_with_message(min, max, None)
	}

	fn bounds_with_message(mut self, min: i32, max: i32, error_message: Option<String>) -> Result<Self, SpecError> {
		self.draft.arg_bounds = arg_bounds(min, max)?;
		self.draft.arg_error_message = error_message;
		Ok(self)
	}

	/// Takes an immutable snapshot of the current configuration.
	pub fn build(&self) -> CommandSpec {
		self.draft.clone()
	}

	/// Snapshots the configuration and hands it to `registry`.
	///
	/// Returns the registered snapshot.
	pub fn register<R>(&self, registry: &R) -> Result<Arc<CommandSpec>, RegistryError>
	where
		R: Registry + ?Sized,
	{
		let spec = Arc::new(self.build());
		if !spec.is_actionable() {
			tracing::debug!(command = %spec.name, "registering command without executors");
		}
		registry.register(&spec.name, Arc::clone(&spec))?;
		tracing::debug!(command = %spec.name, aliases = ?spec.aliases, "command registered");
		Ok(spec)
	}
}

fn arg_bounds(min: i32, max: i32) -> Result<ArgBounds, SpecError> {
	let invalid = |reason| SpecError::InvalidConfiguration { min, max, reason };
	let min_count = usize::try_from(min).map_err(|_| invalid("minimum is negative"))?;
	if max == UNBOUNDED {
		return Ok(ArgBounds { min: min_count, max: None });
	}
	if max < min {
		return Err(invalid("maximum is below minimum"));
	}
	let max_count = usize::try_from(max).map_err(|_| invalid("maximum is below minimum"))?;
	Ok(ArgBounds {
		min: min_count,
		max: Some(max_count),
	})
}
