//! Command registry.
//!
//! [`CommandRegistry`] is the host-side index that finalized specs are handed
//! to. Every command is reachable by its name, its aliases, and the same
//! labels prefixed with the registry namespace (`namespace:name`). Lookup is
//! case-insensitive.
//!
//! The registry is created at host startup and injected wherever commands
//! are registered or resolved; there is no process-wide instance.

use std::sync::Arc;

use cmdkit_spec::{CommandSpec, Registry, RegistryError};
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

mod key;

pub use key::KeyKind;

#[cfg(test)]
mod tests;

/// One registered command and every lookup key that points at it.
struct Entry {
	spec: Arc<CommandSpec>,
	keys: Vec<String>,
}

#[derive(Default)]
struct Index {
	/// Registered commands by lower-cased name.
	by_name: HashMap<String, Entry>,
	/// Lookup key -> (owner name, kind of key).
	by_key: HashMap<String, (String, KeyKind)>,
}

impl Index {
	/// Checks every key before anything is inserted, so a failed
	/// registration leaves the index untouched.
	fn check_free(&self, keys: &[(String, KeyKind)]) -> Result<(), RegistryError> {
		for (key, _) in keys {
			if let Some((owner, _)) = self.by_key.get(key) {
				return Err(RegistryError::DuplicateCommand {
					key: key.clone(),
					owner: owner.clone(),
				});
			}
		}
		Ok(())
	}

	fn insert_keys(&mut self, owner: &str, keys: Vec<(String, KeyKind)>) {
		let Some(entry) = self.by_name.get_mut(owner) else {
			return;
		};
		for (key, kind) in keys {
			entry.keys.push(key.clone());
			self.by_key.insert(key, (owner.to_string(), kind));
		}
	}
}

/// Runtime command registry.
pub struct CommandRegistry {
	namespace: String,
	index: RwLock<Index>,
}

impl CommandRegistry {
	/// Creates an empty registry whose namespaced labels use `namespace`.
	pub fn new(namespace: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into().to_lowercase(),
			index: RwLock::new(Index::default()),
		}
	}

	/// Returns the lower-cased namespace.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Finds a command by name, alias or namespaced label.
	pub fn get(&self, label: &str) -> Option<Arc<CommandSpec>> {
		let index = self.index.read();
		let (owner, _) = index.by_key.get(&label.to_lowercase())?;
		index.by_name.get(owner).map(|entry| Arc::clone(&entry.spec))
	}

	/// Returns what kind of key `label` is, if registered.
	pub fn key_kind(&self, label: &str) -> Option<KeyKind> {
		self.index.read().by_key.get(&label.to_lowercase()).map(|(_, kind)| *kind)
	}

	/// Returns whether `label` resolves to a command.
	pub fn contains(&self, label: &str) -> bool {
		self.index.read().by_key.contains_key(&label.to_lowercase())
	}

	/// Removes the command `label` resolves to, along with all its keys.
	pub fn unregister(&self, label: &str) -> Option<Arc<CommandSpec>> {
		let mut index = self.index.write();
		let (owner, _) = index.by_key.get(&label.to_lowercase())?.clone();
		let entry = index.by_name.remove(&owner)?;
		for key in &entry.keys {
			index.by_key.remove(key);
		}
		tracing::debug!(command = %owner, keys = entry.keys.len(), "command unregistered");
		Some(entry.spec)
	}

	/// Returns the number of registered commands.
	pub fn len(&self) -> usize {
		self.index.read().by_name.len()
	}

	/// Returns true if no commands are registered.
	pub fn is_empty(&self) -> bool {
		self.index.read().by_name.is_empty()
	}

	/// Returns all registered commands, sorted by name.
	pub fn commands(&self) -> Vec<Arc<CommandSpec>> {
		let mut specs: Vec<_> = self.index.read().by_name.values().map(|e| Arc::clone(&e.spec)).collect();
		specs.sort_by(|a, b| a.name().cmp(b.name()));
		specs
	}

	/// Returns every plain (non-namespaced) label starting with `prefix`, sorted.
	pub fn labels_with_prefix(&self, prefix: &str) -> Vec<String> {
		let prefix = prefix.to_lowercase();
		let mut labels: Vec<String> = self
			.index
			.read()
			.by_key
			.iter()
			.filter(|(key, (_, kind))| !kind.is_namespaced() && key.starts_with(&prefix))
			.map(|(key, _)| key.clone())
			.collect();
		labels.sort();
		labels
	}

	/// Renders one help line per command, sorted by name.
	///
	/// Uses the usage string when set, otherwise `/name`, followed by the
	/// description when set.
	pub fn help_lines(&self) -> Vec<String> {
		self.commands()
			.iter()
			.map(|spec| {
				let head = if spec.usage().is_empty() {
					format!("/{}", spec.name())
				} else {
					spec.usage_for(spec.name())
				};
				if spec.description().is_empty() {
					head
				} else {
					format!("{head} - {}", spec.description())
				}
			})
			.collect()
	}

	/// Builds the plain and namespaced keys for one label.
	fn keys_for(&self, label: &str, kind: KeyKind) -> [(String, KeyKind); 2] {
		let label = label.to_lowercase();
		let namespaced = format!("{}:{label}", self.namespace);
		[(label, kind), (namespaced, kind.namespaced())]
	}
}

impl Registry for CommandRegistry {
	fn register(&self, name: &str, spec: Arc<CommandSpec>) -> Result<(), RegistryError> {
		let owner = name.to_lowercase();
		let mut keys: Vec<(String, KeyKind)> = Vec::new();
		let labels = std::iter::once((name, KeyKind::Name)).chain(spec.aliases().iter().map(|a| (a.as_str(), KeyKind::Alias)));
		for (label, kind) in labels {
			for key in self.keys_for(label, kind) {
				// An alias repeating the name (or another alias) is not a conflict.
				if !keys.iter().any(|(k, _)| *k == key.0) {
					keys.push(key);
				}
			}
		}

		let mut index = self.index.write();
		if let Err(err) = index.check_free(&keys) {
			tracing::debug!(command = %owner, error = %err, "command registration rejected");
			return Err(err);
		}
		index.by_name.insert(owner.clone(), Entry { spec, keys: Vec::new() });
		index.insert_keys(&owner, keys);
		tracing::debug!(command = %owner, namespace = %self.namespace, "command indexed");
		Ok(())
	}

	fn register_alias(&self, alias: &str, spec: Arc<CommandSpec>) -> Result<(), RegistryError> {
		let keys: Vec<_> = self.keys_for(alias, KeyKind::Alias).into_iter().collect();

		let mut index = self.index.write();
		// The entry may be keyed by whatever name `register` was given, so
		// match on the registered spec itself.
		let Some(owner) = index
			.by_name
			.iter()
			.find(|(_, entry)| Arc::ptr_eq(&entry.spec, &spec))
			.map(|(owner, _)| owner.clone())
		else {
			return Err(RegistryError::UnknownCommand(spec.name().to_string()));
		};
		index.check_free(&keys)?;
		index.insert_keys(&owner, keys);
		tracing::debug!(command = %owner, alias, "alias registered");
		Ok(())
	}
}

impl std::fmt::Debug for CommandRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CommandRegistry")
			.field("namespace", &self.namespace)
			.field("commands", &self.len())
			.finish()
	}
}
