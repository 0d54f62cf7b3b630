//! Optional observability helpers for gate flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `proof_gate.flow` with the `flow`
//!   and `stage` fields, plus warnings for rejected proofs and unreachable verifiers.
//! - Enable `metrics` to increment the `proof_gate_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, auth::ProviderAlias, error::TransportError};

/// Gate flow kinds observed per operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Login initiation against the proof verifier.
	Login,
	/// Identity materialization from a callback payload.
	Callback,
	/// Token retrieval from a stored identity link.
	TokenRetrieval,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Login => "login",
			FlowKind::Callback => "callback",
			FlowKind::TokenRetrieval => "token_retrieval",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a gate operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Logs a proof rejection observed during login initiation.
pub fn log_proof_rejected(provider: &ProviderAlias, status: u16) {
	#[cfg(feature = "tracing")]
	::tracing::warn!(provider = %provider, status, "Proof verification failed.");

	#[cfg(not(feature = "tracing"))]
	let _ = (provider, status);
}

/// Logs a transport failure that prevented reaching the verifier.
pub fn log_verifier_unreachable(provider: &ProviderAlias, source: &TransportError) {
	#[cfg(feature = "tracing")]
	::tracing::warn!(provider = %provider, error = %source, "Error connecting to proof server.");

	#[cfg(not(feature = "tracing"))]
	let _ = (provider, source);
}
