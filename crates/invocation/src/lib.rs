//! Canonical invocation value for command dispatch.
//!
//! The host tokenizes raw input before it reaches the dispatcher; every
//! entry point (chat line, console line, scripted call) converts its request
//! into an [`Invocation`] first.

/// One tokenized request to run a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Invocation {
	/// The label the sender typed (name, alias or `namespace:name`).
	pub label: String,
	/// Arguments following the label, already tokenized.
	pub args: Vec<String>,
}

impl Invocation {
	/// Creates an invocation from a label and its arguments.
	pub fn new<I, S>(label: impl Into<String>, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			label: label.into(),
			args: args.into_iter().map(Into::into).collect(),
		}
	}

	/// Creates an invocation whose first token is the label.
	///
	/// Returns `None` when there are no tokens. A leading `/` on the label is
	/// stripped, matching how players type commands in chat.
	pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut tokens = tokens.into_iter().map(Into::into);
		let label: String = tokens.next()?;
		let label = label.strip_prefix('/').map(str::to_string).unwrap_or(label);
		if label.is_empty() {
			return None;
		}
		Some(Self {
			label,
			args: tokens.collect(),
		})
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		if self.args.is_empty() {
			format!("cmd:{}", self.label)
		} else {
			format!("cmd:{} {}", self.label, self.args.join(" "))
		}
	}
}

impl std::fmt::Display for Invocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "/{}", self.label)?;
		for arg in &self.args {
			write!(f, " {arg}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn from_tokens_splits_label_and_args() {
		let inv = Invocation::from_tokens(["/kick", "steve", "spam"]).unwrap();
		assert_eq!(inv, Invocation::new("kick", ["steve", "spam"]));
	}

	#[test]
	fn from_tokens_rejects_empty_input() {
		assert_eq!(Invocation::from_tokens(Vec::<String>::new()), None);
		assert_eq!(Invocation::from_tokens(["/"]), None);
	}

	#[test]
	fn describe_and_display() {
		let bare = Invocation::new("list", Vec::<String>::new());
		assert_eq!(bare.describe(), "cmd:list");
		assert_eq!(bare.to_string(), "/list");

		let with_args = Invocation::new("msg", ["alex", "hi"]);
		assert_eq!(with_args.describe(), "cmd:msg alex hi");
		assert_eq!(with_args.to_string(), "/msg alex hi");
	}
}
