//! cmdkit reference host.
//!
//! Reads one command per line from stdin and routes it through a
//! [`CommandRegistry`] and [`Dispatcher`]. A line starting with `!` asks for
//! tab completions instead of running the command, e.g. `!kick s`.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use cmdkit_dispatch::{Dispatcher, HostDefaults};
use cmdkit_invocation::Invocation;
use cmdkit_registry::CommandRegistry;
use cmdkit_spec::SenderKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod sender;

use sender::TerminalSender;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(about = "Run cmdkit commands from stdin")]
struct Args {
	/// TOML file overriding the host default messages
	#[arg(short, long, value_name = "PATH")]
	defaults: Option<PathBuf>,

	/// Act as a player instead of the console
	#[arg(short, long)]
	player: bool,

	/// Permission granted to the sender (repeatable, `*` grants all)
	#[arg(short, long = "grant", value_name = "PERM")]
	grants: Vec<String>,

	/// Namespace used for `namespace:name` labels
	#[arg(long, default_value = "cmdkit")]
	namespace: String,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// Marks a line as a completion request.
const COMPLETE_PREFIX: char = '!';

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Request {
	Run(Invocation),
	Complete(Invocation),
}

/// Tokenizes a line on whitespace.
///
/// For completion requests a trailing space opens a new, empty argument.
fn parse_line(line: &str) -> Option<Request> {
	if let Some(rest) = line.strip_prefix(COMPLETE_PREFIX) {
		let mut tokens: Vec<&str> = rest.split_whitespace().collect();
		if rest.ends_with(char::is_whitespace) && !tokens.is_empty() {
			tokens.push("");
		}
		return Invocation::from_tokens(tokens).map(Request::Complete);
	}
	Invocation::from_tokens(line.split_whitespace()).map(Request::Run)
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let defaults = match &args.defaults {
		Some(path) => HostDefaults::load(path)?,
		None => HostDefaults::default(),
	};
	let dispatcher = Dispatcher::new(defaults);

	let registry = Arc::new(CommandRegistry::new(args.namespace.as_str()));
	commands::register_builtins(&registry)?;

	let kind = if args.player { SenderKind::Player } else { SenderKind::Console };
	let mut sender = TerminalSender::new(kind, args.grants);
	info!(sender = %kind, commands = registry.len(), "cmdkit ready");

	for line in std::io::stdin().lock().lines() {
		let line = line?;
		let Some(request) = parse_line(line.trim_start()) else {
			continue;
		};
		match request {
			Request::Run(invocation) => match dispatcher.run(&registry, &invocation, &mut sender) {
				Ok(outcome) => tracing::debug!(invocation = %invocation.describe(), ?outcome, "done"),
				Err(err) => tracing::error!(invocation = %invocation.describe(), error = %err, "command failed"),
			},
			Request::Complete(invocation) => match dispatcher.complete_invocation(&registry, &invocation, &mut sender) {
				Ok(completions) => println!("{}", completions.join(" ")),
				Err(err) => tracing::error!(invocation = %invocation.describe(), error = %err, "completion failed"),
			},
		}
		for message in sender.drain() {
			println!("{message}");
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parses_run_and_complete_requests() {
		assert_eq!(parse_line("/kick steve"), Some(Request::Run(Invocation::new("kick", ["steve"]))));
		assert_eq!(parse_line("!kick s"), Some(Request::Complete(Invocation::new("kick", ["s"]))));
		assert_eq!(parse_line("!kick "), Some(Request::Complete(Invocation::new("kick", [""]))));
		assert_eq!(parse_line("   "), None);
		assert_eq!(parse_line("!"), None);
	}

	#[test]
	fn help_alias_is_a_run_request() {
		let expected = Some(Request::Run(Invocation::new("?", Vec::<String>::new())));
		assert_eq!(parse_line("?"), expected);
		assert_eq!(parse_line("/?"), expected);
	}

	#[test]
	fn cli_args_parse() {
		let args = Args::try_parse_from(["cmdkit", "--player", "-g", "admin.kick", "-g", "fly.use"]).unwrap();
		assert!(args.player);
		assert_eq!(args.grants, ["admin.kick", "fly.use"]);
		assert_eq!(args.namespace, "cmdkit");
	}
}
