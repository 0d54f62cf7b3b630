//! Proof verification outcomes derived from the verifier's HTTP status code.

// self
use crate::{_prelude::*, error::TransportError, http::ProofHttpClient};

/// Explicit result of one proof verification attempt.
///
/// Exactly HTTP 200 counts as a verified proof; any other status is a rejection, and
/// transport failures are carried separately so callers can report them distinctly.
/// Nothing is read from the verifier's response body.
#[derive(Debug)]
pub enum VerificationOutcome {
	/// Verifier returned HTTP 200.
	Verified,
	/// Verifier was reachable but returned a non-200 status.
	Rejected {
		/// Status code the verifier answered with.
		status: u16,
	},
	/// Verifier could not be reached.
	Unreachable {
		/// Transport failure that aborted the call.
		source: TransportError,
	},
}
impl VerificationOutcome {
	/// Returns `true` only for [`VerificationOutcome::Verified`].
	pub fn is_verified(&self) -> bool {
		matches!(self, Self::Verified)
	}
}

/// Issues verification calls against a single configured endpoint.
///
/// One outbound request per invocation; no retry, no backoff, no circuit breaking.
pub struct ProofVerifier<C>
where
	C: ?Sized + ProofHttpClient,
{
	endpoint: Url,
	http_client: Arc<C>,
}
impl<C> ProofVerifier<C>
where
	C: ?Sized + ProofHttpClient,
{
	/// Creates a verifier for the provided endpoint + transport pair.
	pub fn new(endpoint: Url, http_client: impl Into<Arc<C>>) -> Self {
		Self { endpoint, http_client: http_client.into() }
	}

	/// Returns the configured verification endpoint.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Performs one verification call and derives the outcome from the status code.
	pub async fn verify(&self) -> VerificationOutcome {
		match self.http_client.post_empty(&self.endpoint).await {
			Ok(200) => VerificationOutcome::Verified,
			Ok(status) => VerificationOutcome::Rejected { status },
			Err(e) => VerificationOutcome::Unreachable { source: TransportError::network(e) },
		}
	}
}
impl<C> Clone for ProofVerifier<C>
where
	C: ?Sized + ProofHttpClient,
{
	fn clone(&self) -> Self {
		Self { endpoint: self.endpoint.clone(), http_client: self.http_client.clone() }
	}
}
impl<C> Debug for ProofVerifier<C>
where
	C: ?Sized + ProofHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProofVerifier").field("endpoint", &self.endpoint).finish()
	}
}
