/// Distinguishes the type of lookup key a label was registered as.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyKind {
	/// The command's primary name.
	Name,
	/// An alternative lookup name.
	Alias,
	/// `namespace:name`.
	NamespacedName,
	/// `namespace:alias`.
	NamespacedAlias,
}

impl KeyKind {
	/// Returns the namespaced counterpart of a plain key kind.
	pub fn namespaced(self) -> Self {
		match self {
			KeyKind::Name | KeyKind::NamespacedName => KeyKind::NamespacedName,
			KeyKind::Alias | KeyKind::NamespacedAlias => KeyKind::NamespacedAlias,
		}
	}

	/// Returns whether the key carries the namespace prefix.
	pub fn is_namespaced(self) -> bool {
		matches!(self, KeyKind::NamespacedName | KeyKind::NamespacedAlias)
	}
}

impl std::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			KeyKind::Name => write!(f, "name"),
			KeyKind::Alias => write!(f, "alias"),
			KeyKind::NamespacedName => write!(f, "namespaced name"),
			KeyKind::NamespacedAlias => write!(f, "namespaced alias"),
		}
	}
}
