//! Thread-safe in-memory [`LinkStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::{IdentityLink, LocalUserId, ProviderAlias},
	store::{LinkStore, StoreError, StoreFuture, StoreKey},
};

type LinkMap = Arc<RwLock<HashMap<StoreKey, IdentityLink>>>;

/// Storage backend that keeps identity links in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(LinkMap);
impl MemoryStore {
	fn save_now(map: LinkMap, link: IdentityLink) -> Result<(), StoreError> {
		let key = StoreKey::new(&link.provider, &link.local_user);

		map.write().insert(key, link);

		Ok(())
	}

	fn fetch_now(map: LinkMap, provider: ProviderAlias, user: LocalUserId) -> Option<IdentityLink> {
		map.read().get(&StoreKey::new(&provider, &user)).cloned()
	}

	fn remove_now(
		map: LinkMap,
		provider: ProviderAlias,
		user: LocalUserId,
	) -> Option<IdentityLink> {
		map.write().remove(&StoreKey::new(&provider, &user))
	}
}
impl LinkStore for MemoryStore {
	fn save(&self, link: IdentityLink) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move { Self::save_now(map, link) })
	}

	fn fetch<'a>(
		&'a self,
		provider: &'a ProviderAlias,
		user: &'a LocalUserId,
	) -> StoreFuture<'a, Option<IdentityLink>> {
		let map = self.0.clone();
		let provider = provider.to_owned();
		let user = user.to_owned();

		Box::pin(async move { Ok(Self::fetch_now(map, provider, user)) })
	}

	fn remove<'a>(
		&'a self,
		provider: &'a ProviderAlias,
		user: &'a LocalUserId,
	) -> StoreFuture<'a, Option<IdentityLink>> {
		let map = self.0.clone();
		let provider = provider.to_owned();
		let user = user.to_owned();

		Box::pin(async move { Ok(Self::remove_now(map, provider, user)) })
	}
}
