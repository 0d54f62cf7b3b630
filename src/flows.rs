//! Gate orchestration over registered providers and the link store.

// self
use crate::{
	_prelude::*,
	auth::{FederatedIdentity, LocalUserId},
	broker::{BrokerResponse, IdentityProvider, LoginRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::ProviderRegistry,
	store::LinkStore,
};

/// Coordinates login, identity materialization, and token retrieval across the
/// providers registered with it.
///
/// The gate owns the provider registry and the identity link store so providers can
/// focus on verification semantics. The gate itself holds no per-login data; all state
/// is request-scoped, and each login attempt performs its verification call inline.
pub struct Gate {
	/// Registry of provider implementations keyed by alias.
	pub registry: ProviderRegistry,
	/// Store holding federated-identity-to-local-user links.
	pub store: Arc<dyn LinkStore>,
}
impl Gate {
	/// Creates a gate over the provided registry + store pair.
	pub fn new(registry: ProviderRegistry, store: Arc<dyn LinkStore>) -> Self {
		Self { registry, store }
	}

	/// Performs one login attempt through the provider named by the request alias.
	///
	/// Verification rejections and transport failures are reported as 500 responses
	/// with their fixed bodies rather than as errors; `Err` is reserved for unknown
	/// aliases and configuration problems.
	pub async fn perform_login(&self, request: &LoginRequest) -> Result<BrokerResponse> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "perform_login");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let provider = self.provider(&request.alias)?;

				provider.initiate_login(request).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	/// Materializes the federated identity for an opaque callback payload.
	///
	/// Idempotent and payload-independent; the payload is passed through to the
	/// provider without inspection.
	pub fn federated_identity(&self, alias: &str, payload: &str) -> Result<FederatedIdentity> {
		const KIND: FlowKind = FlowKind::Callback;

		let _guard = FlowSpan::new(KIND, "federated_identity").entered();

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = self.provider(alias).map(|provider| provider.materialize_identity(payload));

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	/// Returns the token stored on the identity link for the provider + user pair.
	///
	/// The token travels back verbatim as a 200 response body; no transformation, no
	/// expiry check.
	pub async fn retrieve_token(&self, alias: &str, user: &LocalUserId) -> Result<BrokerResponse> {
		const KIND: FlowKind = FlowKind::TokenRetrieval;

		let span = FlowSpan::new(KIND, "retrieve_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let provider = self.provider(alias)?;
				let link = self
					.store
					.fetch(provider.alias(), user)
					.await?
					.ok_or_else(|| Error::LinkNotFound {
						provider: alias.into(),
						user: user.to_string(),
					})?;

				Ok(provider.retrieve_token(&link))
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}

	fn provider(&self, alias: &str) -> Result<Arc<dyn IdentityProvider>> {
		self.registry.get(alias).ok_or_else(|| Error::UnknownProvider { alias: alias.into() })
	}
}
impl Debug for Gate {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gate").field("registry", &self.registry).finish()
	}
}
