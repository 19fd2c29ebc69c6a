//! Transport primitives for token exchanges and resource calls.
//!
//! The module exposes [`HttpTransport`] alongside the crate-owned [`HttpRequest`] and
//! [`HttpResponse`] records so downstream crates can integrate custom HTTP clients without
//! depending on reqwest. Implementations return the full response body as text together with
//! the status and any `Retry-After` hint; classification happens above this layer.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{HeaderMap, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing token exchanges and API calls.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so one transport (and its connection pool) can be shared by every
/// call a client makes, and the futures they return must be `Send` so callers can spawn them.
/// Dropping the returned future must abort the in-flight request.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and reads the complete response.
	///
	/// Non-2xx statuses are NOT errors at this layer; only failures to obtain a response are.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// HTTP methods used by the payment API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
}
impl HttpMethod {
	/// Returns the method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transport-agnostic outbound request.
#[derive(Clone)]
pub struct HttpRequest {
	/// Request method.
	pub method: HttpMethod,
	/// Fully resolved URL, including the query string.
	pub url: Url,
	/// Header name/value pairs.
	pub headers: Vec<(&'static str, String)>,
	/// Encoded request body, if any.
	pub body: Option<Vec<u8>>,
}
impl HttpRequest {
	/// Creates a request without headers or body.
	pub fn new(method: HttpMethod, url: Url) -> Self {
		Self { method, url, headers: Vec::new(), body: None }
	}

	/// Appends a header.
	pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.headers.push((name, value.into()));

		self
	}

	/// Sets the request body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Returns the first header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for HttpRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let header_names = self.headers.iter().map(|(name, _)| *name).collect::<Vec<_>>();

		f.debug_struct("HttpRequest")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &header_names)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.finish()
	}
}

/// Complete response read from the transport.
#[derive(Clone, Debug, Default)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
	/// Response body decoded as text.
	pub body: String,
}
impl HttpResponse {
	/// Creates a response with the given status and body.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, retry_after: None, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Runs `request` on `transport`, failing with [`TransportError::Timeout`] once `timeout`
/// elapses. The in-flight transport future is dropped (and thus aborted) on expiry.
pub(crate) async fn execute_with_timeout<C>(
	transport: &C,
	request: HttpRequest,
	timeout: Option<std::time::Duration>,
) -> Result<HttpResponse, TransportError>
where
	C: ?Sized + HttpTransport,
{
	match timeout {
		Some(after) => tokio::time::timeout(after, transport.execute(request))
			.await
			.map_err(|_| TransportError::Timeout { after: Some(after) })?,
		None => transport.execute(request).await,
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The wrapped client owns the connection pool; clones share it. Neither the token endpoint
/// nor the payment API is expected to redirect, so [`ReqwestHttpClient::new`] disables
/// redirect following.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled.
	pub fn new() -> Result<Self, crate::error::ConfigError> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.map_err(crate::error::ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(map_reqwest_error)?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.text().await.map_err(map_reqwest_error)?;

			Ok(HttpResponse { status, retry_after, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> TransportError {
	if err.is_timeout() {
		return TransportError::Timeout { after: None };
	}

	TransportError::network(err)
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
