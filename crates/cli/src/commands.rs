//! Demo commands installed by the reference host.

use std::sync::{Arc, Weak};

use cmdkit_registry::CommandRegistry;
use cmdkit_spec::{CommandBuilder, CommandError, CommandResult, CommandType, Sender, UNBOUNDED};

/// Names the demo host treats as online players.
const PLAYERS: &[&str] = &["alex", "sam", "steve"];

fn complete_player(_: &mut dyn Sender, args: &[String]) -> Result<Vec<String>, CommandError> {
	let prefix = args.last().map(String::as_str).unwrap_or_default().to_lowercase();
	Ok(PLAYERS.iter().filter(|p| p.starts_with(&prefix)).map(|p| p.to_string()).collect())
}

fn find_player(name: &str) -> Result<&'static str, CommandError> {
	PLAYERS
		.iter()
		.copied()
		.find(|p| p.eq_ignore_ascii_case(name))
		.ok_or_else(|| CommandError::NotFound(format!("player {name}")))
}

/// Registers the demo command set.
pub fn register_builtins(registry: &Arc<CommandRegistry>) -> anyhow::Result<()> {
	let help_registry: Weak<CommandRegistry> = Arc::downgrade(registry);
	let help = move |sender: &mut dyn Sender, _: &[String]| -> CommandResult {
		if let Some(registry) = help_registry.upgrade() {
			for line in registry.help_lines() {
				sender.send_message(&line);
			}
		}
		Ok(())
	};
	CommandBuilder::new("help")?
		.aliases(["?"])
		.description("List available commands")
		.player_executor(help.clone())
		.console_executor(help)
		.register(registry.as_ref())?;

	let echo = |sender: &mut dyn Sender, args: &[String]| -> CommandResult {
		sender.send_message(&args.join(" "));
		Ok(())
	};
	CommandBuilder::new("echo")?
		.usage("/<command> <text...>")
		.description("Repeat the arguments back")
		.arguments(1, UNBOUNDED, "Usage: /echo <text...>")?
		.player_executor(echo)
		.console_executor(echo)
		.register(registry.as_ref())?;

	let kick = |sender: &mut dyn Sender, args: &[String]| -> CommandResult {
		let player = find_player(&args[0])?;
		let reason = if args.len() > 1 { args[1..].join(" ") } else { "no reason given".to_string() };
		sender.send_message(&format!("Kicked {player} ({reason})"));
		Ok(())
	};
	CommandBuilder::new("kick")?
		.aliases(["k"])
		.usage("/<command> <player> [reason...]")
		.description("Remove a player from the session")
		.permission("admin.kick")
		.arguments(1, UNBOUNDED, "Usage: /kick <player> [reason...]")?
		.player_executor(kick)
		.console_executor(kick)
		.tab_completer(complete_player)
		.register(registry.as_ref())?;

	CommandBuilder::new("fly")?
		.description("Toggle flight")
		.command_type(CommandType::Player)
		.arguments(0, 1, "Usage: /fly [on|off]")?
		.player_executor(|sender: &mut dyn Sender, args: &[String]| {
			let state = args.first().map(String::as_str).unwrap_or("on");
			match state {
				"on" | "off" => {
					sender.send_message(&format!("Flight {state}"));
					Ok(())
				}
				other => Err(CommandError::InvalidArgument(other.to_string())),
			}
		})
		.tab_completer(|_: &mut dyn Sender, _: &[String]| Ok(vec!["on".to_string(), "off".to_string()]))
		.register(registry.as_ref())?;

	// Console-only on purpose: players hit the missing-executor path.
	CommandBuilder::new("stop")?
		.description("Shut the session down")
		.permission("server.stop")
		.no_permission_message("Only operators may stop the server.")
		.arguments(0, 0, "Usage: /stop")?
		.console_executor(|sender: &mut dyn Sender, _: &[String]| {
			sender.send_message("Stopping...");
			Ok(())
		})
		.register(registry.as_ref())?;

	tracing::debug!(commands = registry.len(), "builtin commands registered");
	Ok(())
}

#[cfg(test)]
mod tests {
	use cmdkit_dispatch::{Dispatcher, Outcome};
	use cmdkit_invocation::Invocation;
	use cmdkit_spec::SenderKind;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::sender::TerminalSender;

	fn setup() -> (Arc<CommandRegistry>, Dispatcher) {
		let registry = Arc::new(CommandRegistry::new("cmdkit"));
		register_builtins(&registry).unwrap();
		(registry, Dispatcher::default())
	}

	#[test]
	fn builtins_register_once() {
		let (registry, _) = setup();
		assert_eq!(registry.len(), 5);
		assert!(register_builtins(&registry).is_err());
	}

	#[test]
	fn help_lists_every_command() {
		let (registry, dispatcher) = setup();
		let mut sender = TerminalSender::new(SenderKind::Console, []);

		let outcome = dispatcher.run(&registry, &Invocation::new("?", Vec::<String>::new()), &mut sender).unwrap();

		assert_eq!(outcome, Outcome::Executed);
		assert_eq!(sender.drain().len(), 5);
	}

	#[test]
	fn kick_requires_permission_and_known_player() {
		let (registry, dispatcher) = setup();
		let mut sender = TerminalSender::new(SenderKind::Console, ["admin.kick".to_string()]);

		let outcome = dispatcher.run(&registry, &Invocation::new("k", ["Steve", "spam"]), &mut sender).unwrap();
		assert_eq!(outcome, Outcome::Executed);
		assert_eq!(sender.drain(), ["Kicked steve (spam)"]);

		let err = dispatcher.run(&registry, &Invocation::new("kick", ["herobrine"]), &mut sender).unwrap_err();
		assert_eq!(err, CommandError::NotFound("player herobrine".into()));

		let mut guest = TerminalSender::new(SenderKind::Player, []);
		let outcome = dispatcher.run(&registry, &Invocation::new("kick", ["steve"]), &mut guest).unwrap();
		assert_eq!(outcome, Outcome::RejectedPermission);
	}

	#[test]
	fn stop_is_a_noop_for_players() {
		let (registry, dispatcher) = setup();
		let mut sender = TerminalSender::new(SenderKind::Player, ["*".to_string()]);

		let outcome = dispatcher.run(&registry, &Invocation::new("stop", Vec::<String>::new()), &mut sender).unwrap();

		assert_eq!(outcome, Outcome::ExecutedNoop);
		assert!(sender.drain().is_empty());
	}

	#[test]
	fn kick_completes_player_names() {
		let (registry, dispatcher) = setup();
		let mut sender = TerminalSender::new(SenderKind::Player, []);

		let completions = dispatcher.complete_invocation(&registry, &Invocation::new("kick", ["s"]), &mut sender).unwrap();

		assert_eq!(completions, ["sam", "steve"]);
	}
}
