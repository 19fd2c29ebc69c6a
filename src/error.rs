//! Client-level error taxonomy shared by the token provider, classifier, and executor.
//!
//! Every failure surfaces as one [`Error`] variant carrying the HTTP status, the raw
//! response body, or the underlying cause, whichever applies. Errors are `Clone` so the
//! outcome of a single coalesced token exchange can be handed to every waiting caller.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type SharedError = Arc<dyn StdError + Send + Sync>;
type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

/// Closed set of error kinds used for programmatic handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Credential or token-exchange failure, or a 401/403 from the resource server.
	Auth,
	/// Request rejected by the server (400/422).
	Validation,
	/// Resource does not exist (404).
	NotFound,
	/// Upstream throttled the request (429).
	RateLimited,
	/// Upstream failure (5xx).
	Server,
	/// Any other non-2xx status.
	UnknownStatus,
	/// A 2xx body could not be decoded into the expected shape.
	Decode,
	/// Network failure (DNS, TCP, TLS, I/O).
	Network,
	/// The configured timeout elapsed.
	Timeout,
	/// The caller cancelled the call.
	Cancelled,
	/// Local misconfiguration detected before any I/O.
	Config,
}
impl ErrorKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ErrorKind::Auth => "auth",
			ErrorKind::Validation => "validation",
			ErrorKind::NotFound => "not_found",
			ErrorKind::RateLimited => "rate_limited",
			ErrorKind::Server => "server",
			ErrorKind::UnknownStatus => "unknown_status",
			ErrorKind::Decode => "decode",
			ErrorKind::Network => "network",
			ErrorKind::Timeout => "timeout",
			ErrorKind::Cancelled => "cancelled",
			ErrorKind::Config => "config",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Canonical client error exposed by public APIs.
#[derive(Clone, Debug, ThisError)]
pub enum Error {
	/// Authentication failure (token exchange or resource-server rejection).
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (network or timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Payment service rejected the request.
	#[error("Payment service rejected the request with HTTP {status}.")]
	Validation {
		/// HTTP status code (400 or 422).
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Requested resource does not exist.
	#[error("Payment service returned HTTP 404.")]
	NotFound {
		/// Raw response body.
		body: String,
	},
	/// Payment service throttled the request.
	#[error("Payment service throttled the request.")]
	RateLimited {
		/// Raw response body.
		body: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Payment service failed internally.
	#[error("Payment service failed with HTTP {status}.")]
	Server {
		/// HTTP status code (5xx).
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Payment service returned an unexpected non-2xx status.
	#[error("Payment service returned unexpected HTTP {status}.")]
	UnknownStatus {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// A successful response could not be decoded.
	#[error("Payment service returned a body that does not match the expected shape.")]
	Decode {
		/// HTTP status code of the nominally successful response.
		status: u16,
		/// Raw response body.
		body: String,
		/// Structured parsing failure.
		#[source]
		source: Arc<JsonPathError>,
	},
	/// The caller cancelled the call before it resolved.
	#[error("Request was cancelled before it completed.")]
	Cancelled,
}
impl Error {
	/// Returns the closed kind for this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Auth(_) => ErrorKind::Auth,
			Self::Config(_) => ErrorKind::Config,
			Self::Transport(TransportError::Timeout { .. }) => ErrorKind::Timeout,
			Self::Transport(TransportError::Network { .. }) => ErrorKind::Network,
			Self::Validation { .. } => ErrorKind::Validation,
			Self::NotFound { .. } => ErrorKind::NotFound,
			Self::RateLimited { .. } => ErrorKind::RateLimited,
			Self::Server { .. } => ErrorKind::Server,
			Self::UnknownStatus { .. } => ErrorKind::UnknownStatus,
			Self::Decode { .. } => ErrorKind::Decode,
			Self::Cancelled => ErrorKind::Cancelled,
		}
	}

	/// HTTP status code attached to the error, when one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Auth(AuthError::TokenEndpoint { status, .. })
			| Self::Auth(AuthError::TokenResponse { status, .. })
			| Self::Auth(AuthError::Rejected { status, .. })
			| Self::Validation { status, .. }
			| Self::Server { status, .. }
			| Self::UnknownStatus { status, .. }
			| Self::Decode { status, .. } => Some(*status),
			Self::NotFound { .. } => Some(404),
			Self::RateLimited { .. } => Some(429),
			_ => None,
		}
	}

	/// Raw upstream body attached to the error, when one was received.
	pub fn raw_body(&self) -> Option<&str> {
		match self {
			Self::Auth(AuthError::TokenEndpoint { body, .. })
			| Self::Auth(AuthError::TokenResponse { body, .. })
			| Self::Auth(AuthError::Rejected { body, .. })
			| Self::Validation { body, .. }
			| Self::NotFound { body }
			| Self::RateLimited { body, .. }
			| Self::Server { body, .. }
			| Self::UnknownStatus { body, .. }
			| Self::Decode { body, .. } => Some(body),
			_ => None,
		}
	}

	/// Returns `true` when the configured timeout elapsed, including during the token exchange.
	pub fn is_timeout(&self) -> bool {
		match self {
			Self::Transport(err) | Self::Auth(AuthError::Transport { source: err }) =>
				err.is_timeout(),
			_ => false,
		}
	}

	/// Returns `true` for kinds that are generally transient.
	///
	/// The client never retries on its own; this is a hint for caller-side policies.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::Server { .. } | Self::RateLimited { .. } | Self::Transport(_) => true,
			Self::Auth(AuthError::Transport { .. }) => true,
			_ => false,
		}
	}
}

/// Authentication failures.
#[derive(Clone, Debug, ThisError)]
pub enum AuthError {
	/// Token endpoint answered with a non-200 status.
	#[error("Token endpoint returned HTTP {status}.")]
	TokenEndpoint {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Token endpoint answered 200 with a body that is not a token response.
	#[error("Token endpoint returned a malformed token response.")]
	TokenResponse {
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
		/// Structured parsing failure.
		#[source]
		source: Arc<JsonPathError>,
	},
	/// Token endpoint answered 200 with an empty `access_token`.
	#[error("Token endpoint returned an empty access token.")]
	EmptyAccessToken,
	/// Token endpoint advertised a non-positive or unrepresentable lifetime.
	#[error("Token endpoint returned an unusable expires_in value: {expires_in}.")]
	InvalidLifetime {
		/// Advertised lifetime in seconds.
		expires_in: i64,
	},
	/// Token exchange failed before a response was received.
	#[error("Token exchange failed in transport.")]
	Transport {
		/// Underlying transport failure.
		#[source]
		source: TransportError,
	},
	/// Resource server rejected the bearer token or the caller's permissions.
	#[error("Payment service rejected the credentials with HTTP {status}.")]
	Rejected {
		/// HTTP status code (401 or 403).
		status: u16,
		/// Raw response body.
		body: String,
	},
}

/// Transport-level failures (network, timeout).
#[derive(Clone, Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the payment service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: SharedError,
	},
	/// The call did not finish within the configured timeout.
	#[error("Request did not complete within the configured timeout.")]
	Timeout {
		/// Timeout that elapsed, when the client enforced it.
		after: Option<std::time::Duration>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Arc::new(src) }
	}

	/// Returns `true` for [`TransportError::Timeout`].
	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::Timeout { .. })
	}
}

/// Configuration and validation failures raised before any I/O.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed: {message}.")]
	HttpClientBuild {
		/// Builder failure message.
		message: String,
	},
	/// Configured URL cannot be parsed or joined.
	#[error("URL is invalid: {message}.")]
	InvalidUrl {
		/// Parser failure message.
		message: String,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Base URL cannot carry path segments.
	#[error("The base URL cannot be used as a base: {url}.")]
	CannotBeABase {
		/// Offending URL.
		url: String,
	},
	/// Client credentials are empty.
	#[error("Client credentials must not be empty.")]
	EmptyCredentials,
	/// Token scope is empty.
	#[error("Token scope must not be empty.")]
	EmptyScope,
	/// A duration setting is zero or negative.
	#[error("The {setting} setting must be positive.")]
	NonPositiveDuration {
		/// Offending setting name.
		setting: &'static str,
	},
	/// A template placeholder was not bound.
	#[error("Endpoint `{endpoint}` is missing path parameter `{param}`.")]
	MissingPathParam {
		/// Endpoint name.
		endpoint: &'static str,
		/// Unbound placeholder.
		param: &'static str,
	},
	/// A parameter was bound that the descriptor does not declare.
	#[error("Endpoint `{endpoint}` does not declare parameter `{param}`.")]
	UndeclaredParam {
		/// Endpoint name.
		endpoint: &'static str,
		/// Offending parameter name.
		param: String,
	},
	/// Endpoint declares a body but none was supplied.
	#[error("Endpoint `{endpoint}` requires a request body.")]
	MissingBody {
		/// Endpoint name.
		endpoint: &'static str,
	},
	/// Request body could not be serialized.
	#[error("Request body for `{endpoint}` could not be serialized: {message}.")]
	BodySerialize {
		/// Endpoint name.
		endpoint: &'static str,
		/// Serializer failure message.
		message: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl Display) -> Self {
		Self::HttpClientBuild { message: src.to_string() }
	}
}
impl From<url::ParseError> for ConfigError {
	fn from(e: url::ParseError) -> Self {
		Self::InvalidUrl { message: e.to_string() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn decode_error(raw: &str) -> Arc<JsonPathError> {
		let mut de = serde_json::Deserializer::from_str(raw);

		Arc::new(
			serde_path_to_error::deserialize::<_, BTreeMap<String, String>>(&mut de)
				.expect_err("Fixture body should fail to decode."),
		)
	}

	#[test]
	fn kinds_cover_every_variant() {
		let cases = [
			(Error::from(AuthError::Rejected { status: 401, body: String::new() }), ErrorKind::Auth),
			(Error::Validation { status: 422, body: String::new() }, ErrorKind::Validation),
			(Error::NotFound { body: String::new() }, ErrorKind::NotFound),
			(Error::RateLimited { body: String::new(), retry_after: None }, ErrorKind::RateLimited),
			(Error::Server { status: 503, body: String::new() }, ErrorKind::Server),
			(Error::UnknownStatus { status: 302, body: String::new() }, ErrorKind::UnknownStatus),
			(
				Error::Decode { status: 200, body: "nope".into(), source: decode_error("nope") },
				ErrorKind::Decode,
			),
			(
				TransportError::Timeout { after: Some(std::time::Duration::from_secs(1)) }.into(),
				ErrorKind::Timeout,
			),
			(TransportError::network(std::io::Error::other("reset")).into(), ErrorKind::Network),
			(Error::Cancelled, ErrorKind::Cancelled),
			(ConfigError::EmptyScope.into(), ErrorKind::Config),
		];

		for (err, kind) in cases {
			assert_eq!(err.kind(), kind, "Unexpected kind for {err:?}.");
		}
	}

	#[test]
	fn status_and_body_are_retained() {
		let err = Error::Validation { status: 400, body: "{\"error\":\"Bad Request\"}".into() };

		assert_eq!(err.status(), Some(400));
		assert!(err.raw_body().is_some_and(|body| body.contains("Bad Request")));

		let err = Error::NotFound { body: "missing".into() };

		assert_eq!(err.status(), Some(404));
		assert_eq!(err.raw_body(), Some("missing"));
		assert_eq!(Error::Cancelled.raw_body(), None);
	}

	#[test]
	fn exchange_timeouts_stay_auth_errors() {
		let timeout = TransportError::Timeout { after: Some(std::time::Duration::from_millis(5)) };
		let err = Error::from(AuthError::Transport { source: timeout });

		assert_eq!(err.kind(), ErrorKind::Auth);
		assert!(err.is_timeout());
		assert!(err.is_retryable());
	}

	#[test]
	fn retry_hints_follow_transience() {
		assert!(Error::Server { status: 502, body: String::new() }.is_retryable());
		assert!(Error::RateLimited { body: String::new(), retry_after: None }.is_retryable());
		assert!(!Error::Validation { status: 400, body: String::new() }.is_retryable());
		assert!(!Error::NotFound { body: String::new() }.is_retryable());
		assert!(!Error::from(AuthError::Rejected { status: 403, body: String::new() }).is_retryable());
	}

	#[test]
	fn decode_errors_expose_their_source() {
		let err = Error::Decode { status: 200, body: "{".into(), source: decode_error("{") };

		assert!(StdError::source(&err).is_some());
	}
}
