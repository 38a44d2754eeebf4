use std::sync::Arc;

use cmdkit_spec::{CommandBuilder, CommandSpec, Registry, RegistryError};
use pretty_assertions::assert_eq;

use super::*;

fn spec(name: &str, aliases: &[&str]) -> Arc<CommandSpec> {
	Arc::new(CommandBuilder::new(name).unwrap().aliases(aliases.iter().copied()).build())
}

#[test]
fn lookup_by_name_alias_and_namespace() {
	let registry = CommandRegistry::new("Essentials");
	let kick = spec("kick", &["k"]);
	registry.register("kick", Arc::clone(&kick)).unwrap();

	assert_eq!(registry.namespace(), "essentials");
	assert!(Arc::ptr_eq(&registry.get("kick").unwrap(), &kick));
	assert!(Arc::ptr_eq(&registry.get("K").unwrap(), &kick));
	assert!(Arc::ptr_eq(&registry.get("essentials:kick").unwrap(), &kick));
	assert!(Arc::ptr_eq(&registry.get("essentials:k").unwrap(), &kick));
	assert!(registry.get("ban").is_none());

	assert_eq!(registry.key_kind("kick"), Some(KeyKind::Name));
	assert_eq!(registry.key_kind("k"), Some(KeyKind::Alias));
	assert_eq!(registry.key_kind("essentials:k"), Some(KeyKind::NamespacedAlias));
	assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_name_is_rejected() {
	let registry = CommandRegistry::new("test");
	registry.register("kick", spec("kick", &[])).unwrap();

	let err = registry.register("kick", spec("kick", &[])).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateCommand {
			key: "kick".into(),
			owner: "kick".into(),
		}
	);
	assert_eq!(registry.len(), 1);
}

#[test]
fn alias_collision_leaves_registry_unchanged() {
	let registry = CommandRegistry::new("test");
	registry.register("kick", spec("kick", &["k"])).unwrap();

	let err = registry.register("kill", spec("kill", &["slay", "K"])).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateCommand {
			key: "k".into(),
			owner: "kick".into(),
		}
	);
	assert!(!registry.contains("kill"));
	assert!(!registry.contains("slay"));
	assert!(!registry.contains("test:kill"));
}

#[test]
fn alias_repeating_name_is_not_a_conflict() {
	let registry = CommandRegistry::new("test");
	registry.register("home", spec("home", &["home", "h", "h"])).unwrap();
	assert!(registry.contains("h"));
	assert_eq!(registry.key_kind("home"), Some(KeyKind::Name));
}

#[test]
fn register_alias_requires_registered_command() {
	let registry = CommandRegistry::new("test");
	let warp = spec("warp", &[]);

	assert_eq!(
		registry.register_alias("w", Arc::clone(&warp)).unwrap_err(),
		RegistryError::UnknownCommand("warp".into())
	);

	registry.register("warp", Arc::clone(&warp)).unwrap();
	registry.register_alias("w", Arc::clone(&warp)).unwrap();
	assert!(Arc::ptr_eq(&registry.get("test:w").unwrap(), &warp));
	assert!(matches!(
		registry.register_alias("warp", warp),
		Err(RegistryError::DuplicateCommand { .. })
	));
}

#[test]
fn unregister_removes_every_key() {
	let registry = CommandRegistry::new("test");
	let kick = spec("kick", &["k"]);
	registry.register("kick", Arc::clone(&kick)).unwrap();
	registry.register_alias("boot", Arc::clone(&kick)).unwrap();

	let removed = registry.unregister("boot").unwrap();
	assert!(Arc::ptr_eq(&removed, &kick));
	for label in ["kick", "k", "boot", "test:kick", "test:k", "test:boot"] {
		assert!(!registry.contains(label), "{label} still registered");
	}
	assert!(registry.is_empty());
	assert!(registry.unregister("kick").is_none());

	registry.register("kick", kick).unwrap();
}

#[test]
fn listing_and_help() {
	let registry = CommandRegistry::new("test");
	let msg = CommandBuilder::new("msg")
		.unwrap()
		.aliases(["tell"])
		.usage("/<command> <player> <message>")
		.description("Send a private message")
		.build();
	registry.register("msg", Arc::new(msg)).unwrap();
	registry.register("list", spec("list", &[])).unwrap();

	let names: Vec<_> = registry.commands().iter().map(|s| s.name().to_string()).collect();
	assert_eq!(names, ["list", "msg"]);
	assert_eq!(registry.help_lines(), ["/list", "/msg <player> <message> - Send a private message"]);
	assert_eq!(registry.labels_with_prefix("m"), ["msg"]);
	assert_eq!(registry.labels_with_prefix(""), ["list", "msg", "tell"]);
}

#[test]
fn builder_registers_through_trait() {
	let registry = CommandRegistry::new("test");
	let builder = CommandBuilder::new("kick").unwrap().aliases(["k", "kk"]);

	let registered = builder.register(&registry).unwrap();
	assert!(Arc::ptr_eq(&registry.get("kk").unwrap(), &registered));
	assert!(matches!(builder.register(&registry), Err(RegistryError::DuplicateCommand { .. })));
}

#[test]
fn alias_attaches_to_spec_registered_under_another_name() {
	let registry = CommandRegistry::new("test");
	let kick = spec("kick", &[]);
	registry.register("boot", Arc::clone(&kick)).unwrap();

	registry.register_alias("b", Arc::clone(&kick)).unwrap();

	assert!(Arc::ptr_eq(&registry.get("b").unwrap(), &kick));
	assert!(Arc::ptr_eq(&registry.get("test:b").unwrap(), &kick));
	assert!(registry.unregister("boot").is_some());
	assert!(!registry.contains("b"));
}

#[test]
fn alias_for_unregistered_snapshot_is_rejected() {
	let registry = CommandRegistry::new("test");
	registry.register("kick", spec("kick", &[])).unwrap();

	let other_snapshot = spec("kick", &[]);
	assert_eq!(
		registry.register_alias("k", other_snapshot).unwrap_err(),
		RegistryError::UnknownCommand("kick".into())
	);
	assert!(!registry.contains("k"));
}
