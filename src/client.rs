//! Client facade tying configuration, transport, token cache, and executor together.

mod claims;
mod payments;

pub use claims::Claims;
pub use payments::Payments;

// self
use crate::{
	_prelude::*,
	classify::ErrorClassifier,
	config::ClientConfig,
	executor::RequestExecutor,
	http::HttpTransport,
	token::TokenProvider,
};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestEnzonaClient = EnzonaClient<ReqwestHttpClient>;

/// Entry point for the payment API.
///
/// Clones share the transport, the token cache, and the executor, so one client can serve any
/// number of concurrent tasks. The connection pool is released when the last clone drops.
pub struct EnzonaClient<C>
where
	C: ?Sized + HttpTransport,
{
	executor: Arc<RequestExecutor<C>>,
}
impl<C> EnzonaClient<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client over a caller-provided transport.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<C>>) -> Self {
		let transport = transport.into();
		let base_url = config.base_url.clone();
		let timeout = config.timeout;
		let tokens = Arc::new(TokenProvider::new(config, transport.clone()));

		Self { executor: Arc::new(RequestExecutor::new(transport, tokens, base_url, timeout)) }
	}

	/// Creates a client that classifies responses with `classifier`.
	pub fn with_classifier(
		config: ClientConfig,
		transport: impl Into<Arc<C>>,
		classifier: Arc<dyn ErrorClassifier>,
	) -> Self {
		let transport = transport.into();
		let base_url = config.base_url.clone();
		let timeout = config.timeout;
		let tokens = Arc::new(TokenProvider::new(config, transport.clone()));
		let executor =
			RequestExecutor::new(transport, tokens, base_url, timeout).with_classifier(classifier);

		Self { executor: Arc::new(executor) }
	}

	/// Executor behind every typed operation, for calling endpoints directly.
	pub fn executor(&self) -> &RequestExecutor<C> {
		&self.executor
	}

	/// Token provider shared by every call this client makes.
	pub fn token_provider(&self) -> &TokenProvider<C> {
		self.executor.token_provider()
	}

	/// Payment, refund, checkout, shop, and payment-order operations.
	pub fn payments(&self) -> Payments<'_, C> {
		Payments::new(&self.executor)
	}

	/// Claim operations.
	pub fn claims(&self) -> Claims<'_, C> {
		Claims::new(&self.executor)
	}
}
#[cfg(feature = "reqwest")]
impl EnzonaClient<ReqwestHttpClient> {
	/// Creates a client with its own reqwest connection pool.
	pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
		Ok(Self::with_transport(config, ReqwestHttpClient::new()?))
	}
}
impl<C> Clone for EnzonaClient<C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { executor: self.executor.clone() }
	}
}
impl<C> Debug for EnzonaClient<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("EnzonaClient").field("executor", &self.executor).finish()
	}
}
