//! Command specification model.
//!
//! This crate provides the leaf types of the command system:
//! - [`CommandBuilder`]: fluent accumulator for one command's configuration
//! - [`CommandSpec`]: immutable snapshot produced by the builder
//! - [`Sender`]: capabilities of whoever invoked a command
//! - [`Executor`] / [`TabCompleter`]: callback capability slots
//! - [`Registry`]: the collaborator that receives finalized specs
//!
//! # Example
//!
//! ```ignore
//! CommandBuilder::new("kick")?
//! 	.aliases(["k"])
//! 	.permission("admin.kick")
//! 	.arguments(1, 1, "Usage: /kick <target>")?
//! 	.player_executor(|sender: &mut dyn Sender, args: &[String]| {
//! 		sender.send_message(&format!("kicked {}", args[0]));
//! 		Ok(())
//! 	})
//! 	.register(&registry)?;
//! ```

mod builder;
mod callback;
mod error;
mod registry;
mod sender;
mod spec;

pub use builder::CommandBuilder;
pub use callback::{CommandResult, CompletionResult, Executor, TabCompleter};
pub use error::{CommandError, SpecError};
pub use registry::{Registry, RegistryError};
pub use sender::{Sender, SenderKind};
pub use spec::{ArgBounds, CommandSpec, CommandType, UNBOUNDED};
