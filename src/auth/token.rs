//! Cached bearer token and its lifecycle helpers.

// self
use crate::{_prelude::*, auth::TokenSecret, error::AuthError};

/// Lifecycle status of a cached token at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
	/// Token is valid and outside the safety margin.
	Active,
	/// Token is still valid but inside the safety margin, so it must not be used.
	Expiring,
	/// Token exceeded its expiry instant.
	Expired,
}

/// Access token issued by the client-credentials exchange.
#[derive(Clone)]
pub struct AccessToken {
	/// Bearer value; callers must avoid logging it.
	pub value: TokenSecret,
	/// Instant the exchange completed.
	pub issued_at: OffsetDateTime,
	/// Expiry instant derived from `issued_at` plus the advertised lifetime.
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// Creates a token that expires `lifetime` after `issued_at`.
	///
	/// Fails with [`AuthError::InvalidLifetime`] when the expiry instant is not representable.
	pub fn new(
		value: impl Into<String>,
		issued_at: OffsetDateTime,
		lifetime: Duration,
	) -> Result<Self, AuthError> {
		let expires_at = issued_at
			.checked_add(lifetime)
			.ok_or(AuthError::InvalidLifetime { expires_in: lifetime.whole_seconds() })?;

		Ok(Self { value: TokenSecret::new(value), issued_at, expires_at })
	}

	/// Computes the lifecycle status at `instant`, treating the last `margin` before expiry as
	/// already unusable.
	pub fn status_at(&self, instant: OffsetDateTime, margin: Duration) -> TokenStatus {
		if instant >= self.expires_at {
			return TokenStatus::Expired;
		}
		match self.expires_at.checked_sub(margin) {
			Some(edge) if instant < edge => TokenStatus::Active,
			_ => TokenStatus::Expiring,
		}
	}

	/// Returns `true` when `instant < expires_at - margin`.
	pub fn is_usable_at(&self, instant: OffsetDateTime, margin: Duration) -> bool {
		matches!(self.status_at(instant, margin), TokenStatus::Active)
	}

	/// Returns the `Authorization` header value for resource calls.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.value.expose())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("value", &"<redacted>")
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
