//! Provider configuration data structures and the validating builder.

// self
use crate::{_prelude::*, auth::ProviderAlias, error::ConfigError};

/// Verification endpoint used when none is configured.
pub const DEFAULT_VERIFIER_ENDPOINT: &str =
	"http://host.docker.internal:3001/generate-and-verify-proof";

/// Immutable provider configuration consumed by
/// [`ProofGateProvider`](crate::provider::ProofGateProvider).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Alias the provider registers under.
	pub alias: ProviderAlias,
	/// Human-readable provider name.
	pub display_name: String,
	/// Proof verification endpoint receiving the empty-body POST.
	pub verifier_endpoint: Url,
	/// Optional bound on each verification call. `None` leaves the call unbounded.
	pub request_timeout: Option<Duration>,
}
impl ProviderConfig {
	/// Creates a new builder for the provided alias.
	pub fn builder(alias: ProviderAlias) -> ProviderConfigBuilder {
		ProviderConfigBuilder {
			alias,
			display_name: None,
			verifier_endpoint: None,
			request_timeout: None,
		}
	}
}

/// Builder for [`ProviderConfig`]; endpoint and timeout are validated on build.
#[derive(Clone, Debug)]
pub struct ProviderConfigBuilder {
	alias: ProviderAlias,
	display_name: Option<String>,
	verifier_endpoint: Option<Url>,
	request_timeout: Option<Duration>,
}
impl ProviderConfigBuilder {
	/// Sets the human-readable provider name; defaults to the alias.
	pub fn display_name(mut self, name: impl Into<String>) -> Self {
		self.display_name = Some(name.into());

		self
	}

	/// Sets the verification endpoint; defaults to [`DEFAULT_VERIFIER_ENDPOINT`].
	pub fn verifier_endpoint(mut self, endpoint: Url) -> Self {
		self.verifier_endpoint = Some(endpoint);

		self
	}

	/// Bounds each verification call to the provided duration.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);

		self
	}

	/// Consumes the builder and produces a validated [`ProviderConfig`].
	pub fn build(self) -> Result<ProviderConfig, ConfigError> {
		let verifier_endpoint = match self.verifier_endpoint {
			Some(endpoint) => endpoint,
			None => Url::parse(DEFAULT_VERIFIER_ENDPOINT)
				.map_err(|e| ConfigError::InvalidEndpoint { source: e })?,
		};

		if !matches!(verifier_endpoint.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedEndpointScheme {
				scheme: verifier_endpoint.scheme().into(),
			});
		}

		let display_name = match self.display_name {
			Some(name) if name.trim().is_empty() => return Err(ConfigError::EmptyDisplayName),
			Some(name) => name,
			None => self.alias.to_string(),
		};

		if self.request_timeout.is_some_and(|timeout| !timeout.is_positive()) {
			return Err(ConfigError::NonPositiveTimeout);
		}

		Ok(ProviderConfig {
			alias: self.alias,
			display_name,
			verifier_endpoint,
			request_timeout: self.request_timeout,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn builder() -> ProviderConfigBuilder {
		ProviderConfig::builder(
			ProviderAlias::new("midnight-zk").expect("Alias fixture should be valid."),
		)
	}

	#[test]
	fn defaults_cover_endpoint_and_display_name() {
		let config = builder().build().expect("Default configuration should build.");

		assert_eq!(config.verifier_endpoint.as_str(), DEFAULT_VERIFIER_ENDPOINT);
		assert_eq!(config.display_name, "midnight-zk");
		assert_eq!(config.request_timeout, None);
	}

	#[test]
	fn non_http_schemes_are_rejected() {
		let err = builder()
			.verifier_endpoint(
				Url::parse("ftp://verifier.example.com/proof")
					.expect("Endpoint fixture should parse."),
			)
			.build()
			.expect_err("Builder should reject non-http(s) endpoints.");

		assert!(matches!(err, ConfigError::UnsupportedEndpointScheme { scheme } if scheme == "ftp"));
	}

	#[test]
	fn empty_display_names_are_rejected() {
		let err = builder()
			.display_name("   ")
			.build()
			.expect_err("Builder should reject whitespace display names.");

		assert!(matches!(err, ConfigError::EmptyDisplayName));
	}

	#[test]
	fn non_positive_timeouts_are_rejected() {
		let err = builder()
			.request_timeout(Duration::ZERO)
			.build()
			.expect_err("Builder should reject a zero timeout.");

		assert!(matches!(err, ConfigError::NonPositiveTimeout));

		let config = builder()
			.request_timeout(Duration::seconds(5))
			.build()
			.expect("Positive timeouts should be accepted.");

		assert_eq!(config.request_timeout, Some(Duration::seconds(5)));
	}
}
