//! The single `invoke` path every API operation goes through.

// self
use crate::{
	_prelude::*,
	classify::{DefaultErrorClassifier, ErrorClassifier},
	endpoint::RequestContext,
	error::{ConfigError, ErrorKind},
	http::{self, HttpRequest, HttpTransport},
	obs::{self, CallSite, CallSpan, Outcome},
	token::TokenProvider,
};

/// Executes endpoint calls: token, request, classification, decode.
///
/// The executor holds no per-call state. It shares the transport with the token provider so
/// both reuse one connection pool.
pub struct RequestExecutor<C>
where
	C: ?Sized + HttpTransport,
{
	transport: Arc<C>,
	tokens: Arc<TokenProvider<C>>,
	classifier: Arc<dyn ErrorClassifier>,
	base_url: Url,
	timeout: Option<std::time::Duration>,
}
impl<C> RequestExecutor<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates an executor resolving endpoints against `base_url`.
	pub fn new(
		transport: Arc<C>,
		tokens: Arc<TokenProvider<C>>,
		base_url: Url,
		timeout: Option<std::time::Duration>,
	) -> Self {
		Self {
			transport,
			tokens,
			classifier: Arc::new(DefaultErrorClassifier),
			base_url,
			timeout,
		}
	}

	/// Replaces the response classifier.
	pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
		self.classifier = classifier;

		self
	}

	/// Token provider shared with this executor.
	pub fn token_provider(&self) -> &Arc<TokenProvider<C>> {
		&self.tokens
	}

	/// Base URL endpoints are resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Performs one call described by `ctx` and decodes its JSON response.
	///
	/// Descriptor mismatches fail with [`Error::Config`] before any I/O, and token failures
	/// propagate without touching the resource endpoint. Non-2xx responses are classified and
	/// never decoded. Nothing is retried.
	pub async fn invoke<B, R>(&self, ctx: RequestContext<'_, B, R>) -> Result<R>
	where
		B: Serialize,
		R: DeserializeOwned,
	{
		let site = CallSite::invoke(ctx.descriptor().name);
		let started = std::time::Instant::now();

		obs::record_outcome(site, Outcome::Started);

		let result = CallSpan::new(site)
			.instrument(async move {
				let result = self.call(ctx).await;

				if let Err(err) = &result {
					obs::trace_failure(err);
				}

				result
			})
			.await;

		obs::record_outcome(site, Outcome::of(&result));
		obs::record_latency(site, started.elapsed());

		result
	}

	/// Like [`RequestExecutor::invoke`], but abandons the call with [`Error::Cancelled`] once
	/// `cancel` resolves.
	///
	/// Dropping the in-flight call aborts the underlying transport request; the outcome of a
	/// request that already reached the server is not observed.
	pub async fn invoke_cancellable<B, R, F>(
		&self,
		ctx: RequestContext<'_, B, R>,
		cancel: F,
	) -> Result<R>
	where
		B: Serialize,
		R: DeserializeOwned,
		F: Future<Output = ()>,
	{
		let site = CallSite::invoke(ctx.descriptor().name);

		tokio::select! {
			biased;
			_ = cancel => {
				obs::record_outcome(site, Outcome::Failed(ErrorKind::Cancelled));

				Err(Error::Cancelled)
			},
			result = self.invoke(ctx) => result,
		}
	}

	async fn call<B, R>(&self, ctx: RequestContext<'_, B, R>) -> Result<R>
	where
		B: Serialize,
		R: DeserializeOwned,
	{
		let descriptor = *ctx.descriptor();
		let url = ctx.url(&self.base_url)?;
		let body = ctx
			.payload()?
			.map(|body| {
				serde_json::to_vec(body).map_err(|e| ConfigError::BodySerialize {
					endpoint: descriptor.name,
					message: e.to_string(),
				})
			})
			.transpose()?;
		let token = self.tokens.token().await?;
		let mut request = HttpRequest::new(descriptor.method, url)
			.with_header("Authorization", token.bearer())
			.with_header("Content-Type", "application/json")
			.with_header("Accept", "application/json");

		if let Some(body) = body {
			request = request.with_body(body);
		}

		let response =
			http::execute_with_timeout(self.transport.as_ref(), request, self.timeout).await?;

		obs::record_status(response.status);

		if let Some(err) = self.classifier.classify(&response) {
			return Err(err);
		}

		decode(response.status, response.body)
	}
}
impl<C> Debug for RequestExecutor<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestExecutor")
			.field("base_url", &self.base_url.as_str())
			.field("timeout", &self.timeout)
			.finish()
	}
}

fn decode<R>(status: u16, body: String) -> Result<R>
where
	R: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_str(&body);

	match serde_path_to_error::deserialize(&mut de) {
		Ok(value) => Ok(value),
		Err(source) => Err(Error::Decode { status, body, source: Arc::new(source) }),
	}
}
