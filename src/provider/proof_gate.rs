//! The proof-gate provider: a plain-struct [`IdentityProvider`] implementation.

// self
use crate::{
	_prelude::*,
	auth::{FederatedIdentity, IdentityLink, ProviderAlias},
	broker::{
		BrokerResponse, IdentityProvider, LoginRequest, PROOF_SERVER_UNREACHABLE,
		PROOF_VERIFICATION_FAILED, ProviderFuture,
	},
	http::ProofHttpClient,
	obs,
	provider::ProviderConfig,
	verifier::{ProofVerifier, VerificationOutcome},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Identity provider that gates logins behind an external proof verification service.
///
/// Each login attempt performs exactly one verification call. A verified proof answers
/// with a see-other redirect to the broker callback endpoint carrying the caller's
/// state token; rejections and transport failures answer with 500 responses holding
/// the fixed bodies from [`crate::broker`].
pub struct ProofGateProvider<C>
where
	C: ?Sized + ProofHttpClient,
{
	config: ProviderConfig,
	verifier: ProofVerifier<C>,
}
impl<C> ProofGateProvider<C>
where
	C: ?Sized + ProofHttpClient,
{
	/// Creates a provider from a validated configuration and an explicit transport.
	pub fn with_http_client(config: ProviderConfig, http_client: impl Into<Arc<C>>) -> Self {
		let verifier = ProofVerifier::new(config.verifier_endpoint.clone(), http_client);

		Self { config, verifier }
	}

	/// Returns the provider configuration.
	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}
}
#[cfg(feature = "reqwest")]
impl ProofGateProvider<ReqwestHttpClient> {
	/// Creates a provider that provisions its own reqwest transport, honoring the
	/// configured request timeout.
	pub fn from_config(config: ProviderConfig) -> Result<Self> {
		let http_client = match config.request_timeout {
			Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
			None => ReqwestHttpClient::default(),
		};

		Ok(Self::with_http_client(config, http_client))
	}
}
impl<C> IdentityProvider for ProofGateProvider<C>
where
	C: ?Sized + ProofHttpClient,
{
	fn alias(&self) -> &ProviderAlias {
		&self.config.alias
	}

	fn initiate_login<'a>(
		&'a self,
		request: &'a LoginRequest,
	) -> ProviderFuture<'a, Result<BrokerResponse>> {
		Box::pin(async move {
			match self.verifier.verify().await {
				VerificationOutcome::Verified => {
					let location = request.callback_endpoint()?;

					Ok(BrokerResponse::see_other(location))
				},
				VerificationOutcome::Rejected { status } => {
					obs::log_proof_rejected(&self.config.alias, status);

					Ok(BrokerResponse::server_error(PROOF_VERIFICATION_FAILED))
				},
				VerificationOutcome::Unreachable { source } => {
					obs::log_verifier_unreachable(&self.config.alias, &source);

					Ok(BrokerResponse::server_error(PROOF_SERVER_UNREACHABLE))
				},
			}
		})
	}

	fn materialize_identity(&self, _payload: &str) -> FederatedIdentity {
		FederatedIdentity::fixed(self.config.alias.clone())
	}

	fn retrieve_token(&self, link: &IdentityLink) -> BrokerResponse {
		BrokerResponse::ok(link.token.clone())
	}
}
impl<C> Debug for ProofGateProvider<C>
where
	C: ?Sized + ProofHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProofGateProvider").field("config", &self.config).finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::io;
	// self
	use super::*;
	use crate::{
		auth::{LocalUserId, RealmName, SubjectId},
		http::TransportFuture,
	};

	struct FixedStatus(u16);
	impl ProofHttpClient for FixedStatus {
		type TransportError = io::Error;

		fn post_empty<'a>(&'a self, _: &'a Url) -> TransportFuture<'a, Self::TransportError> {
			let status = self.0;

			Box::pin(async move { Ok(status) })
		}
	}

	struct RefusedTransport;
	impl ProofHttpClient for RefusedTransport {
		type TransportError = io::Error;

		fn post_empty<'a>(&'a self, _: &'a Url) -> TransportFuture<'a, Self::TransportError> {
			Box::pin(async move {
				Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
			})
		}
	}

	fn provider<C>(transport: C) -> ProofGateProvider<C>
	where
		C: ProofHttpClient,
	{
		let config = ProviderConfig::builder(
			ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid."),
		)
		.build()
		.expect("Provider configuration fixture should build.");

		ProofGateProvider::with_http_client(config, transport)
	}

	fn login_request(state: &str) -> LoginRequest {
		LoginRequest {
			base_uri: Url::parse("https://sso.example.com").expect("Base URI should parse."),
			realm: RealmName::new("demo").expect("Realm fixture should be valid."),
			alias: ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid."),
			state: state.into(),
		}
	}

	#[tokio::test]
	async fn verified_proof_redirects_with_the_state_token() {
		let response = provider(FixedStatus(200))
			.initiate_login(&login_request("state-xyz"))
			.await
			.expect("Login attempt should produce a response.");

		assert_eq!(response.status(), 303);

		let location = response.location().expect("Verified login should carry a redirect.");

		assert_eq!(location.path(), "/realms/demo/broker/midnight-zk/endpoint");
		assert_eq!(location.query(), Some("code=state-xyz"));
	}

	#[tokio::test]
	async fn rejected_proof_answers_with_the_fixed_body() {
		let response = provider(FixedStatus(503))
			.initiate_login(&login_request("state"))
			.await
			.expect("Login attempt should produce a response.");

		assert_eq!(response.status(), 500);
		assert_eq!(response.body(), "Proof verification failed.");
	}

	#[tokio::test]
	async fn unreachable_verifier_answers_with_the_fixed_body() {
		let response = provider(RefusedTransport)
			.initiate_login(&login_request("state"))
			.await
			.expect("Login attempt should produce a response.");

		assert_eq!(response.status(), 500);
		assert_eq!(response.body(), "Error connecting to proof server.");
	}

	#[test]
	fn materialized_identity_ignores_the_payload() {
		let provider = provider(FixedStatus(200));

		for payload in ["", "{}", "not-json", "{\"sub\":\"someone-else\"}"] {
			let identity = provider.materialize_identity(payload);

			assert_eq!(identity.subject.as_ref(), "user.from.midnight");
			assert_eq!(identity.username, "midnight_user");
			assert_eq!(identity.provider.as_ref(), "midnight-zk");
		}
	}

	#[test]
	fn retrieve_token_returns_the_link_token_verbatim() {
		let provider = provider(FixedStatus(200));
		let link = IdentityLink {
			provider: ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid."),
			subject: SubjectId::new("user.from.midnight")
				.expect("Subject fixture should be valid."),
			local_user: LocalUserId::new("alice").expect("User fixture should be valid."),
			token: "tok-verbatim".into(),
		};
		let response = provider.retrieve_token(&link);

		assert_eq!(response.status(), 200);
		assert_eq!(response.body(), "tok-verbatim");
	}
}
