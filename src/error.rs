//! Gate-level error types shared across flows, providers, and stores.

// self
use crate::_prelude::*;

/// Gate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gate error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// No provider is registered under the requested alias.
	#[error("No provider is registered under alias `{alias}`.")]
	UnknownProvider {
		/// Alias the caller asked for.
		alias: String,
	},
	/// No identity link is stored for the provider + user pair.
	#[error("No identity link is stored for `{user}` under provider `{provider}`.")]
	LinkNotFound {
		/// Provider alias used for the lookup.
		provider: String,
		/// Local user identifier used for the lookup.
		user: String,
	},
}

/// Configuration and validation failures raised by the gate.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Verifier endpoint could not be parsed.
	#[error("Verifier endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Verifier endpoint uses a scheme the transport cannot speak.
	#[error("Verifier endpoint scheme `{scheme}` is not supported; use http or https.")]
	UnsupportedEndpointScheme {
		/// Scheme found on the configured endpoint.
		scheme: String,
	},
	/// Base URI cannot carry path segments (cannot-be-a-base URL).
	#[error("Base URI cannot carry the broker callback path.")]
	OpaqueBaseUri,
	/// Provider display name was empty or whitespace.
	#[error("Provider display name cannot be empty.")]
	EmptyDisplayName,
	/// Configured request timeout is not positive.
	#[error("Request timeout must be positive.")]
	NonPositiveTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the proof server.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the proof server.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
