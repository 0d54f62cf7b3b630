//! Transport primitives for proof verification calls.
//!
//! The module exposes [`ProofHttpClient`], the gate's only dependency on an HTTP stack.
//! Implementations issue a single POST with an empty body and resolve to the response
//! status code; nothing from the response body is ever consumed, so the contract stays
//! deliberately small.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Future returned by [`ProofHttpClient`] implementations.
pub type TransportFuture<'a, E> = Pin<Box<dyn Future<Output = Result<u16, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing proof verification calls.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared across gate
/// instances behind `Arc` without additional wrappers, and the futures they return must
/// be `Send` so flow futures stay `Send` end to end.
pub trait ProofHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Issues a POST with an empty body and resolves to the HTTP status code.
	fn post_empty<'a>(&'a self, endpoint: &'a Url) -> TransportFuture<'a, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Verification requests carry no body and no custom headers. The default client sets
/// no request timeout, so a hung verifier blocks the login attempt until the connection
/// drops; use [`ReqwestHttpClient::with_timeout`] to bound the call instead.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that aborts verification calls after `timeout`.
	///
	/// Non-positive durations are rejected; a zero timeout would fail every call
	/// before it leaves the client.
	pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
		if !timeout.is_positive() {
			return Err(ConfigError::NonPositiveTimeout);
		}

		let timeout =
			std::time::Duration::try_from(timeout).map_err(|_| ConfigError::NonPositiveTimeout)?;
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProofHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn post_empty<'a>(&'a self, endpoint: &'a Url) -> TransportFuture<'a, Self::TransportError> {
		let client = self.0.clone();
		let endpoint = endpoint.clone();

		Box::pin(async move {
			let response = client.post(endpoint).send().await?;

			Ok(response.status().as_u16())
		})
	}
}
