//! Request/response surface shared by providers and the gate.
//!
//! [`IdentityProvider`] is the explicit capability set—initiate a login, materialize a
//! federated identity, retrieve a stored link token—implemented by plain structs and
//! registered in a [`ProviderRegistry`](crate::provider::ProviderRegistry) keyed by
//! alias. Session, realm, and configuration data travel as explicit request parameters
//! instead of relying on a host-managed lifecycle.

// self
use crate::{
	_prelude::*,
	auth::{FederatedIdentity, IdentityLink, ProviderAlias, RealmName},
	error::ConfigError,
};

/// Exact body returned when the verifier rejects a proof.
pub const PROOF_VERIFICATION_FAILED: &str = "Proof verification failed.";
/// Exact body returned when the verifier cannot be reached.
pub const PROOF_SERVER_UNREACHABLE: &str = "Error connecting to proof server.";

/// Future returned by asynchronous provider operations.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Ephemeral login request supplied by the caller per attempt.
#[derive(Clone, Debug)]
pub struct LoginRequest {
	/// Base URI of the broker host, used to assemble the callback endpoint.
	pub base_uri: Url,
	/// Realm the login attempt belongs to.
	pub realm: RealmName,
	/// Alias of the provider expected to broker the login.
	pub alias: ProviderAlias,
	/// Caller-supplied opaque state token, already decoded.
	pub state: String,
}
impl LoginRequest {
	/// Assembles the broker callback endpoint for this request:
	/// `{base_uri}/realms/{realm}/broker/{alias}/endpoint?code={state}`.
	pub fn callback_endpoint(&self) -> Result<Url, ConfigError> {
		let mut location = self.base_uri.clone();

		location
			.path_segments_mut()
			.map_err(|()| ConfigError::OpaqueBaseUri)?
			.pop_if_empty()
			.extend(["realms", self.realm.as_ref(), "broker", self.alias.as_ref(), "endpoint"]);
		location.query_pairs_mut().append_pair("code", &self.state);

		Ok(location)
	}
}

/// Minimal response shape a host can translate into its own HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrokerResponse {
	/// See-other redirect to the provided location.
	SeeOther {
		/// Redirect target.
		location: Url,
	},
	/// 200 response carrying a body.
	Ok {
		/// Response body.
		body: String,
	},
	/// 500 response carrying one of the fixed error bodies.
	ServerError {
		/// Static error body.
		body: &'static str,
	},
}
impl BrokerResponse {
	/// Builds a see-other redirect response.
	pub fn see_other(location: Url) -> Self {
		Self::SeeOther { location }
	}

	/// Builds a 200 response with the provided body.
	pub fn ok(body: impl Into<String>) -> Self {
		Self::Ok { body: body.into() }
	}

	/// Builds a 500 response with a static body.
	pub fn server_error(body: &'static str) -> Self {
		Self::ServerError { body }
	}

	/// HTTP status code of the response.
	pub fn status(&self) -> u16 {
		match self {
			Self::SeeOther { .. } => 303,
			Self::Ok { .. } => 200,
			Self::ServerError { .. } => 500,
		}
	}

	/// Response body; empty for redirects.
	pub fn body(&self) -> &str {
		match self {
			Self::SeeOther { .. } => "",
			Self::Ok { body } => body,
			Self::ServerError { body } => body,
		}
	}

	/// Redirect target, when the response is a redirect.
	pub fn location(&self) -> Option<&Url> {
		match self {
			Self::SeeOther { location } => Some(location),
			_ => None,
		}
	}
}

/// Capability set implemented by identity providers hosted behind the gate.
pub trait IdentityProvider
where
	Self: Send + Sync,
{
	/// Alias the provider is registered under.
	fn alias(&self) -> &ProviderAlias;

	/// Initiates a login attempt: verify the proof, then redirect or reject.
	fn initiate_login<'a>(
		&'a self,
		request: &'a LoginRequest,
	) -> ProviderFuture<'a, Result<BrokerResponse>>;

	/// Materializes the federated identity from an opaque callback payload.
	///
	/// The payload is never inspected; every invocation yields the same record.
	fn materialize_identity(&self, payload: &str) -> FederatedIdentity;

	/// Returns the token stored on an identity link, verbatim.
	fn retrieve_token(&self, link: &IdentityLink) -> BrokerResponse;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn request(base_uri: &str, state: &str) -> LoginRequest {
		LoginRequest {
			base_uri: Url::parse(base_uri).expect("Base URI fixture should parse."),
			realm: RealmName::new("demo").expect("Realm fixture should be valid."),
			alias: ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid."),
			state: state.into(),
		}
	}

	#[test]
	fn callback_endpoint_follows_the_broker_layout() {
		let location = request("https://sso.example.com", "state-123")
			.callback_endpoint()
			.expect("Callback endpoint should build for an http(s) base URI.");

		assert_eq!(
			location.as_str(),
			"https://sso.example.com/realms/demo/broker/midnight-zk/endpoint?code=state-123",
		);
	}

	#[test]
	fn callback_endpoint_keeps_existing_base_path() {
		let location = request("https://sso.example.com/auth/", "s")
			.callback_endpoint()
			.expect("Callback endpoint should build beneath a base path.");

		assert_eq!(location.path(), "/auth/realms/demo/broker/midnight-zk/endpoint");
	}

	#[test]
	fn callback_endpoint_encodes_the_state_token() {
		let location = request("https://sso.example.com", "a b&c=d")
			.callback_endpoint()
			.expect("Callback endpoint should build with a state needing encoding.");

		assert_eq!(location.query(), Some("code=a+b%26c%3Dd"));
	}

	#[test]
	fn opaque_base_uris_are_rejected() {
		let err = request("mailto:admin@example.com", "state")
			.callback_endpoint()
			.expect_err("Opaque base URIs cannot carry the callback path.");

		assert!(matches!(err, ConfigError::OpaqueBaseUri));
	}

	#[test]
	fn response_helpers_expose_status_and_body() {
		let redirect = BrokerResponse::see_other(
			Url::parse("https://sso.example.com/realms/demo/broker/midnight-zk/endpoint")
				.expect("Redirect fixture should parse."),
		);

		assert_eq!(redirect.status(), 303);
		assert_eq!(redirect.body(), "");
		assert!(redirect.location().is_some());

		let rejected = BrokerResponse::server_error(PROOF_VERIFICATION_FAILED);

		assert_eq!(rejected.status(), 500);
		assert_eq!(rejected.body(), "Proof verification failed.");
		assert_eq!(rejected.location(), None);

		let token = BrokerResponse::ok("tok-1");

		assert_eq!(token.status(), 200);
		assert_eq!(token.body(), "tok-1");
	}
}
