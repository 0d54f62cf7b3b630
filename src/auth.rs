//! Auth-domain identifiers and federated identity records.

pub mod id;
pub mod identity;

pub use id::*;
pub use identity::*;
