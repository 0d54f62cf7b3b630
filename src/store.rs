//! Storage contracts and built-in stores for federated identity links.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	auth::{IdentityLink, LocalUserId, ProviderAlias},
};

/// Future type returned by [`LinkStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract for federated identity links.
pub trait LinkStore
where
	Self: Send + Sync,
{
	/// Persists or replaces the link for its provider + local user pair.
	fn save(&self, link: IdentityLink) -> StoreFuture<'_, ()>;

	/// Fetches the link for the provider + local user pair, if present.
	fn fetch<'a>(
		&'a self,
		provider: &'a ProviderAlias,
		user: &'a LocalUserId,
	) -> StoreFuture<'a, Option<IdentityLink>>;

	/// Removes the link, returning the previous record when one existed.
	fn remove<'a>(
		&'a self,
		provider: &'a ProviderAlias,
		user: &'a LocalUserId,
	) -> StoreFuture<'a, Option<IdentityLink>>;
}

/// Error type produced by [`LinkStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Key identifying a stored identity link.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey {
	/// Provider alias component.
	pub provider: ProviderAlias,
	/// Local user component.
	pub user: LocalUserId,
}
impl StoreKey {
	/// Builds a key from the provider + user pair.
	pub fn new(provider: &ProviderAlias, user: &LocalUserId) -> Self {
		Self { provider: provider.clone(), user: user.clone() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn store_error_converts_into_gate_error_with_source() {
		let store_error = StoreError::Backend { message: "map poisoned".into() };
		let gate_error: Error = store_error.clone().into();

		assert!(matches!(gate_error, Error::Storage(_)));
		assert!(gate_error.to_string().contains("map poisoned"));

		let source = StdError::source(&gate_error)
			.expect("Gate error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn store_key_is_stable_for_equal_pairs() {
		let provider = ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid.");
		let user = LocalUserId::new("alice").expect("User fixture should be valid.");

		assert_eq!(StoreKey::new(&provider, &user), StoreKey::new(&provider, &user));
	}
}
