//! Async client for the Enzona business payment API: cached client-credentials tokens,
//! declarative endpoint descriptors, and a structured error taxonomy.
//!
//! Every operation flows through [`executor::RequestExecutor::invoke`], which obtains a bearer
//! token from the shared [`token::TokenProvider`], dispatches the request over an
//! [`http::HttpTransport`], classifies the response with an [`classify::ErrorClassifier`], and
//! decodes the JSON body into the endpoint's response shape.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod classify;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod http;
pub mod model;
pub mod obs;
pub mod token;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		client::EnzonaClient,
		config::ClientConfig,
		http::ReqwestHttpClient,
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = EnzonaClient<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds a [`ClientConfig`] whose token and resource endpoints point at `base`.
	pub fn test_config(base: &str, client_id: &str, client_secret: &str) -> ClientConfig {
		let base = Url::parse(&format!("{}/", base.trim_end_matches('/')))
			.expect("Mock base URL should parse successfully.");
		let token_url = base.join("token").expect("Mock token URL should parse successfully.");

		ClientConfig::builder(Credentials::new(client_id, client_secret))
			.base_url(base)
			.token_url(token_url)
			.build()
			.expect("Test client configuration should build successfully.")
	}

	/// Constructs an [`EnzonaClient`] against `httpmock`'s base URL using the insecure test
	/// transport.
	pub fn build_reqwest_test_client(
		base: &str,
		client_id: &str,
		client_secret: &str,
	) -> ReqwestTestClient {
		EnzonaClient::with_transport(
			test_config(base, client_id, client_secret),
			test_reqwest_http_client(),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		marker::PhantomData,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
