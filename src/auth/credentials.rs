//! Client identifier + secret pair used for the client-credentials exchange.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::TokenSecret};

/// Immutable API credentials issued by the payment service.
///
/// The secret never appears in `Debug` output and the type deliberately does not
/// implement `Serialize`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	client_id: String,
	client_secret: TokenSecret,
}
impl Credentials {
	/// Creates a credential pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: TokenSecret::new(client_secret) }
	}

	/// Client identifier (consumer key).
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Client secret (consumer secret).
	pub fn client_secret(&self) -> &TokenSecret {
		&self.client_secret
	}

	/// Returns `true` if either half of the pair is empty.
	pub fn is_empty(&self) -> bool {
		self.client_id.is_empty() || self.client_secret.is_empty()
	}

	/// Builds the `Authorization` header value for the token endpoint.
	pub fn basic_authorization(&self) -> String {
		let raw = format!("{}:{}", self.client_id, self.client_secret.expose());

		format!("Basic {}", STANDARD.encode(raw))
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.finish()
	}
}
