use std::collections::HashSet;

use cmdkit_spec::{Sender, SenderKind};

/// Sender backed by the terminal session.
///
/// Messages are buffered until the host drains them after each invocation.
#[derive(Debug)]
pub struct TerminalSender {
	kind: SenderKind,
	permissions: HashSet<String>,
	outbox: Vec<String>,
}

impl TerminalSender {
	pub fn new(kind: SenderKind, permissions: impl IntoIterator<Item = String>) -> Self {
		Self {
			kind,
			permissions: permissions.into_iter().collect(),
			outbox: Vec::new(),
		}
	}

	/// Takes every message sent since the last call.
	pub fn drain(&mut self) -> Vec<String> {
		std::mem::take(&mut self.outbox)
	}
}

impl Sender for TerminalSender {
	fn kind(&self) -> SenderKind {
		self.kind
	}

	fn has_permission(&self, permission: &str) -> bool {
		self.permissions.contains(permission) || self.permissions.contains("*")
	}

	fn send_message(&mut self, text: &str) {
		self.outbox.push(text.to_string());
	}
}
