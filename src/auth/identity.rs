//! Federated identity records asserted after proof verification.

// self
use crate::{
	_prelude::*,
	auth::{LocalUserId, ProviderAlias, SubjectId},
};

/// Identity asserted for every successfully verified proof.
///
/// The upstream proof carries no subject claims, so every login materializes the same
/// subject + username pair; the record is only distinguished by the alias of the
/// provider that brokered it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedIdentity {
	/// Subject identifier asserted by the external identity source.
	pub subject: SubjectId,
	/// Username presented to the local account mapper.
	pub username: String,
	/// Alias of the provider that brokered this identity.
	pub provider: ProviderAlias,
}
impl FederatedIdentity {
	/// Subject asserted for every verified proof.
	pub const FIXED_SUBJECT: &'static str = "user.from.midnight";
	/// Username asserted for every verified proof.
	pub const FIXED_USERNAME: &'static str = "midnight_user";

	/// Returns the fixed identity record tagged with the issuing provider.
	pub fn fixed(provider: ProviderAlias) -> Self {
		Self {
			subject: SubjectId::from_static(Self::FIXED_SUBJECT),
			username: Self::FIXED_USERNAME.into(),
			provider,
		}
	}
}

/// Stored link between a federated identity and a local user account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityLink {
	/// Provider that asserted the federated identity.
	pub provider: ProviderAlias,
	/// Subject asserted by the provider.
	pub subject: SubjectId,
	/// Local user account the identity is linked to.
	pub local_user: LocalUserId,
	/// Token captured when the link was established; returned verbatim on retrieval.
	pub token: String,
}
impl Debug for IdentityLink {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IdentityLink")
			.field("provider", &self.provider)
			.field("subject", &self.subject)
			.field("local_user", &self.local_user)
			.field("token", &"<redacted>")
			.finish()
	}
}
