/// Which class of sender issued an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SenderKind {
	/// An in-session player.
	Player,
	/// The server console or any other non-player source.
	Console,
}

impl std::fmt::Display for SenderKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SenderKind::Player => write!(f, "player"),
			SenderKind::Console => write!(f, "console"),
		}
	}
}

/// Capabilities the host exposes for whoever sent an invocation.
///
/// How the host decides player vs. console, or grants permissions, is
/// outside this crate; only a boolean grant check is consumed.
pub trait Sender {
	/// Returns the class of this sender.
	fn kind(&self) -> SenderKind;

	/// Returns whether the sender holds the given permission.
	fn has_permission(&self, permission: &str) -> bool;

	/// Delivers a text message to the sender.
	fn send_message(&mut self, text: &str);

	/// Returns whether the sender is a player.
	fn is_player(&self) -> bool {
		self.kind() == SenderKind::Player
	}
}
