//! Alias-keyed registry of identity provider implementations.

// self
use crate::{_prelude::*, auth::ProviderAlias, broker::IdentityProvider};

/// Thread-safe mapping from provider alias to implementation.
///
/// The registry replaces host-managed factory lifecycles: implementations are
/// constructed up front, registered under their own alias, and handed out as shared
/// handles on lookup.
#[derive(Default)]
pub struct ProviderRegistry {
	providers: RwLock<HashMap<ProviderAlias, Arc<dyn IdentityProvider>>>,
}
impl ProviderRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a provider under its own alias, replacing any previous entry.
	pub fn register(&self, provider: Arc<dyn IdentityProvider>) {
		self.providers.write().insert(provider.alias().clone(), provider);
	}

	/// Looks up the provider registered under `alias`.
	pub fn get(&self, alias: &str) -> Option<Arc<dyn IdentityProvider>> {
		self.providers.read().get(alias).cloned()
	}

	/// Returns `true` when a provider is registered under `alias`.
	pub fn contains(&self, alias: &str) -> bool {
		self.providers.read().contains_key(alias)
	}

	/// Lists the registered aliases.
	pub fn aliases(&self) -> Vec<ProviderAlias> {
		self.providers.read().keys().cloned().collect()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.providers.read().len()
	}

	/// Returns `true` when no provider has been registered.
	pub fn is_empty(&self) -> bool {
		self.providers.read().is_empty()
	}
}
impl Debug for ProviderRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderRegistry").field("aliases", &self.aliases()).finish()
	}
}
