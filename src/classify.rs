//! Response classification hooks that map HTTP outcomes into the client error taxonomy.
//!
//! The executor hands every response to an [`ErrorClassifier`] before attempting to decode
//! it. Classifiers see only crate-owned data (status, raw body, retry hint), so they stay
//! decoupled from any HTTP client.

// self
use crate::{_prelude::*, error::AuthError, http::HttpResponse};

/// Strategy hook that turns a raw response into a classified error.
///
/// Implementors are required to be `Send + Sync`. Returning `None` means the response is a
/// success and should be decoded; a 2xx status must never be reported as an error.
pub trait ErrorClassifier: Send + Sync {
	/// Classifies `response`, returning the error to surface or `None` for a success.
	fn classify(&self, response: &HttpResponse) -> Option<Error>;
}

/// Default classifier applying the payment service's status conventions.
///
/// The upstream error body is free-form (JSON or plain text, varying by endpoint), so the
/// classification relies on the status code alone and keeps the body verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultErrorClassifier;
impl ErrorClassifier for DefaultErrorClassifier {
	fn classify(&self, response: &HttpResponse) -> Option<Error> {
		if response.is_success() {
			return None;
		}

		classify_status(response.status, &response.body, response.retry_after)
	}
}

/// Maps `(status, body)` into an error, or `None` for 2xx.
pub fn classify_status(status: u16, body: &str, retry_after: Option<Duration>) -> Option<Error> {
	let body = body.to_owned();
	let err = match status {
		200..=299 => return None,
		401 | 403 => AuthError::Rejected { status, body }.into(),
		400 | 422 => Error::Validation { status, body },
		404 => Error::NotFound { body },
		429 => Error::RateLimited { body, retry_after },
		500..=599 => Error::Server { status, body },
		_ => Error::UnknownStatus { status, body },
	};

	Some(err)
}
