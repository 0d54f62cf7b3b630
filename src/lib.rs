//! External-proof login gate—delegate logins to a proof verification service and broker the
//! resulting federated identity.
//!
//! The gate issues one empty-body POST to a configured verification endpoint per login
//! attempt, answers with a see-other redirect to the broker callback endpoint when the
//! verifier returns HTTP 200, and reports every other outcome as a 500 response with a
//! fixed body. Successful callbacks materialize a constant federated identity; stored
//! identity links hand their token back verbatim.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod broker;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
pub mod store;
pub mod verifier;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use httpmock as _;
