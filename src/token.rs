//! Cached client-credentials tokens with single-flight exchanges.
//!
//! [`TokenProvider::token`] returns the cached bearer token while it stays outside the safety
//! margin. Otherwise exactly one caller performs the exchange at a time; callers that queued
//! behind it adopt its outcome (token or error) instead of issuing their own request. A failed
//! exchange is not remembered beyond the callers that were waiting on it, so the next call
//! retries against the token endpoint.

mod exchange;
mod metrics;

pub use exchange::GRANT_TYPE;
pub use metrics::ExchangeMetrics;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials, TokenStatus},
	config::ClientConfig,
	error::{AuthError, ErrorKind},
	http::{self, HttpTransport},
	obs::{self, CallSite, CallSpan, Outcome},
};

#[derive(Debug, Default)]
struct CacheState {
	token: Option<AccessToken>,
	// Bumped once per completed exchange, successful or not.
	generation: u64,
	last_failure: Option<AuthError>,
}

/// Obtains and caches bearer tokens for one set of credentials.
pub struct TokenProvider<C>
where
	C: ?Sized + HttpTransport,
{
	transport: Arc<C>,
	config: ClientConfig,
	state: Mutex<CacheState>,
	exchange_guard: AsyncMutex<()>,
	metrics: ExchangeMetrics,
}
impl<C> TokenProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a provider with an empty cache.
	pub fn new(config: ClientConfig, transport: Arc<C>) -> Self {
		Self {
			transport,
			config,
			state: Mutex::new(CacheState::default()),
			exchange_guard: AsyncMutex::new(()),
			metrics: ExchangeMetrics::default(),
		}
	}

	/// Returns a token that stays usable for at least the configured safety margin.
	///
	/// Performs at most one exchange per call. Concurrent callers that find the cache empty or
	/// expiring share a single exchange and all observe its result.
	pub async fn token(&self) -> Result<AccessToken> {
		CallSpan::new(CallSite::TOKEN)
			.instrument(async move {
				let observed = match self.cached() {
					Ok(token) => {
						self.metrics.record_reuse();
						obs::trace_token_cache("hit");

						return Ok(token);
					},
					Err(generation) => generation,
				};
				let _singleflight = self.exchange_guard.lock().await;

				if let Some(outcome) = self.completed_since(observed) {
					self.metrics.record_reuse();
					obs::trace_token_cache("coalesced");

					return outcome.map_err(Error::from);
				}

				obs::trace_token_cache("miss");

				let outcome = self.exchange().await;
				let mut state = self.state.lock();

				state.generation = state.generation.wrapping_add(1);

				match &outcome {
					Ok(token) => {
						state.token = Some(token.clone());
						state.last_failure = None;
					},
					Err(err) => {
						state.token = None;
						state.last_failure = Some(err.clone());
					},
				}

				drop(state);

				outcome.map_err(Error::from)
			})
			.await
	}

	/// Drops the cached token so the next [`TokenProvider::token`] call exchanges again.
	pub fn invalidate(&self) {
		let mut state = self.state.lock();

		state.token = None;
		state.last_failure = None;

		obs::trace_token_cache("invalidated");
	}

	/// Exchange counters accumulated by this provider.
	pub fn metrics(&self) -> &ExchangeMetrics {
		&self.metrics
	}

	/// Credentials the provider exchanges.
	pub fn credentials(&self) -> &Credentials {
		&self.config.credentials
	}

	/// Returns the cached token when usable, else the generation observed at this instant.
	fn cached(&self) -> Result<AccessToken, u64> {
		let state = self.state.lock();

		match &state.token {
			Some(token) if token.is_usable_at(OffsetDateTime::now_utc(), self.config.safety_margin) =>
				Ok(token.clone()),
			_ => Err(state.generation),
		}
	}

	/// Outcome of an exchange that finished after `observed` was read, if any.
	fn completed_since(&self, observed: u64) -> Option<Result<AccessToken, AuthError>> {
		let state = self.state.lock();

		if state.generation == observed {
			return None;
		}
		if let Some(err) = &state.last_failure {
			return Some(Err(err.clone()));
		}

		// A token issued while this caller waited is adopted unless it is already past expiry;
		// a lifetime shorter than the safety margin must not trigger a second exchange here.
		state
			.token
			.as_ref()
			.filter(|token| {
				token.status_at(OffsetDateTime::now_utc(), self.config.safety_margin)
					!= TokenStatus::Expired
			})
			.map(|token| Ok(token.clone()))
	}

	async fn exchange(&self) -> Result<AccessToken, AuthError> {
		let started = std::time::Instant::now();

		self.metrics.record_exchange();
		obs::record_outcome(CallSite::TOKEN, Outcome::Started);

		let request = exchange::build_request(&self.config);
		let result =
			match http::execute_with_timeout(self.transport.as_ref(), request, self.config.timeout)
				.await
			{
				Ok(response) => {
					obs::record_status(response.status);

					exchange::parse_response(
						response,
						OffsetDateTime::now_utc(),
						self.config.default_token_lifetime,
					)
				},
				Err(source) => Err(AuthError::Transport { source }),
			};
		let outcome = match &result {
			Ok(_) => {
				self.metrics.record_success();

				Outcome::Succeeded
			},
			Err(err) => {
				self.metrics.record_failure();
				obs::trace_failure(&Error::Auth(err.clone()));

				Outcome::Failed(ErrorKind::Auth)
			},
		};

		obs::record_outcome(CallSite::TOKEN, outcome);
		obs::record_latency(CallSite::TOKEN, started.elapsed());

		result
	}
}
impl<C> Debug for TokenProvider<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenProvider")
			.field("token_url", &self.config.token_url.as_str())
			.field("scope", &self.config.scope)
			.field("metrics", &self.metrics)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::{
		error::TransportError,
		http::{HttpRequest, HttpResponse, TransportFuture},
	};

	struct ScriptedTransport {
		calls: AtomicUsize,
		delay: std::time::Duration,
		respond: fn(usize) -> Result<HttpResponse, TransportError>,
	}
	impl ScriptedTransport {
		fn new(respond: fn(usize) -> Result<HttpResponse, TransportError>) -> Arc<Self> {
			Arc::new(Self {
				calls: AtomicUsize::new(0),
				delay: std::time::Duration::from_millis(25),
				respond,
			})
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}
	impl HttpTransport for ScriptedTransport {
		fn execute(&self, _request: HttpRequest) -> TransportFuture<'_> {
			let call = self.calls.fetch_add(1, Ordering::SeqCst);

			Box::pin(async move {
				tokio::time::sleep(self.delay).await;

				(self.respond)(call)
			})
		}
	}

	fn issue(call: usize) -> Result<HttpResponse, TransportError> {
		Ok(HttpResponse::new(
			200,
			format!("{{\"access_token\":\"token-{call}\",\"expires_in\":3600}}"),
		))
	}

	fn provider(transport: Arc<ScriptedTransport>) -> TokenProvider<ScriptedTransport> {
		let config = ClientConfig::new(Credentials::new("consumer-key", "consumer-secret"))
			.expect("Default configuration should build.");

		TokenProvider::new(config, transport)
	}

	#[tokio::test]
	async fn cached_token_is_reused() {
		let transport = ScriptedTransport::new(issue);
		let provider = provider(transport.clone());
		let first = provider.token().await.expect("First exchange should succeed.");
		let second = provider.token().await.expect("Cached token should be returned.");

		assert_eq!(first.value.expose(), "token-0");
		assert_eq!(second.value.expose(), "token-0");
		assert_eq!(transport.calls(), 1);
		assert_eq!(provider.metrics().exchanges(), 1);
		assert_eq!(provider.metrics().reuses(), 1);
	}

	#[tokio::test]
	async fn concurrent_callers_share_one_exchange() {
		let transport = ScriptedTransport::new(issue);
		let provider = provider(transport.clone());
		let (a, b, c, d) =
			tokio::join!(provider.token(), provider.token(), provider.token(), provider.token());

		for token in [a, b, c, d] {
			assert_eq!(token.expect("Coalesced callers should succeed.").value.expose(), "token-0");
		}

		assert_eq!(transport.calls(), 1);
	}

	#[tokio::test]
	async fn concurrent_callers_share_one_failure() {
		let transport =
			ScriptedTransport::new(|_| Ok(HttpResponse::new(500, "{\"error\":\"server_error\"}")));
		let provider = provider(transport.clone());
		let (a, b, c) = tokio::join!(provider.token(), provider.token(), provider.token());

		for outcome in [a, b, c] {
			assert!(matches!(
				outcome,
				Err(Error::Auth(AuthError::TokenEndpoint { status: 500, .. }))
			));
		}

		assert_eq!(transport.calls(), 1);

		// Failures are not cached for later callers.
		let _ = provider.token().await;

		assert_eq!(transport.calls(), 2);
		assert_eq!(provider.metrics().failures(), 2);
	}

	#[tokio::test]
	async fn invalidate_forces_new_exchange() {
		let transport = ScriptedTransport::new(issue);
		let provider = provider(transport.clone());

		provider.token().await.expect("First exchange should succeed.");
		provider.invalidate();

		let token = provider.token().await.expect("Second exchange should succeed.");

		assert_eq!(token.value.expose(), "token-1");
		assert_eq!(transport.calls(), 2);
	}

	#[tokio::test]
	async fn lifetimes_inside_margin_are_not_cached() {
		let transport = ScriptedTransport::new(|call| {
			Ok(HttpResponse::new(
				200,
				format!("{{\"access_token\":\"short-{call}\",\"expires_in\":10}}"),
			))
		});
		let provider = provider(transport.clone());

		provider.token().await.expect("First exchange should succeed.");

		let token = provider.token().await.expect("Second exchange should succeed.");

		assert_eq!(token.value.expose(), "short-1");
		assert_eq!(transport.calls(), 2);
	}

	#[tokio::test]
	async fn transport_failures_surface_as_auth_errors() {
		let transport =
			ScriptedTransport::new(|_| Err(TransportError::Timeout { after: None }));
		let err = provider(transport)
			.token()
			.await
			.expect_err("Transport failures should fail the exchange.");

		assert!(matches!(err, Error::Auth(AuthError::Transport { .. })));
		assert!(err.is_timeout());
	}

	#[tokio::test]
	async fn unrepresentable_lifetime_fails_and_releases_the_exchange() {
		let transport = ScriptedTransport::new(|call| {
			let expires_in = if call == 0 { 300_000_000_000_i64 } else { 3600 };

			Ok(HttpResponse::new(
				200,
				format!("{{\"access_token\":\"token-{call}\",\"expires_in\":{expires_in}}}"),
			))
		});
		let provider = provider(transport.clone());
		let err = provider.token().await.expect_err("Out-of-range lifetimes should fail.");

		assert!(matches!(err, Error::Auth(AuthError::InvalidLifetime { .. })));

		let token = provider.token().await.expect("The next exchange should run normally.");

		assert_eq!(token.value.expose(), "token-1");
		assert_eq!(transport.calls(), 2);
	}
}
