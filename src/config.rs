//! Validated client configuration and its builder.

// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// Default resource base URL of the payment service.
pub const DEFAULT_BASE_URL: &str = "https://api.enzona.net/";
/// Default token endpoint of the payment service.
pub const DEFAULT_TOKEN_URL: &str = "https://api.enzona.net/token";
/// Business scope requested by every client-credentials exchange.
pub const DEFAULT_SCOPE: &str = "enzona_business_payment";

/// Immutable configuration consumed by [`EnzonaClient`](crate::client::EnzonaClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Client identifier + secret pair.
	pub credentials: Credentials,
	/// Base URL that endpoint path templates are resolved against.
	pub base_url: Url,
	/// Token endpoint used for the client-credentials exchange.
	pub token_url: Url,
	/// Scope sent with every exchange.
	pub scope: String,
	/// Upper bound for each HTTP call (token exchange and resource calls alike).
	pub timeout: Option<std::time::Duration>,
	/// Window before expiry during which a cached token is treated as expired.
	pub safety_margin: Duration,
	/// Lifetime assumed when the token endpoint omits `expires_in`.
	pub default_token_lifetime: Duration,
}
impl ClientConfig {
	/// Default safety margin applied before token expiry.
	pub const DEFAULT_SAFETY_MARGIN: Duration = Duration::seconds(30);
	/// Default token lifetime when `expires_in` is absent.
	pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::seconds(3_600);

	/// Creates a builder seeded with the production endpoints.
	pub fn builder(credentials: Credentials) -> ClientConfigBuilder {
		ClientConfigBuilder::new(credentials)
	}

	/// Builds a production configuration from credentials alone.
	pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
		Self::builder(credentials).build()
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.credentials.is_empty() {
			return Err(ConfigError::EmptyCredentials);
		}
		if self.scope.trim().is_empty() {
			return Err(ConfigError::EmptyScope);
		}
		if self.base_url.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase { url: self.base_url.to_string() });
		}
		if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
			return Err(ConfigError::NonPositiveDuration { setting: "timeout" });
		}
		if self.safety_margin.is_negative() {
			return Err(ConfigError::NonPositiveDuration { setting: "safety_margin" });
		}
		if !self.default_token_lifetime.is_positive() {
			return Err(ConfigError::NonPositiveDuration { setting: "default_token_lifetime" });
		}

		validate_endpoint("base", &self.base_url)?;
		validate_endpoint("token", &self.token_url)?;

		Ok(())
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	credentials: Credentials,
	base_url: Option<Url>,
	token_url: Option<Url>,
	scope: String,
	timeout: Option<std::time::Duration>,
	safety_margin: Duration,
	default_token_lifetime: Duration,
}
impl ClientConfigBuilder {
	/// Creates a new builder for the provided credentials.
	pub fn new(credentials: Credentials) -> Self {
		Self {
			credentials,
			base_url: None,
			token_url: None,
			scope: DEFAULT_SCOPE.into(),
			timeout: None,
			safety_margin: ClientConfig::DEFAULT_SAFETY_MARGIN,
			default_token_lifetime: ClientConfig::DEFAULT_TOKEN_LIFETIME,
		}
	}

	/// Overrides the resource base URL (sandbox or tests).
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Overrides the token endpoint.
	pub fn token_url(mut self, url: Url) -> Self {
		self.token_url = Some(url);

		self
	}

	/// Overrides the exchange scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = scope.into();

		self
	}

	/// Bounds every HTTP call by `timeout`.
	pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Overrides the expiry safety margin (defaults to 30 seconds).
	pub fn safety_margin(mut self, margin: Duration) -> Self {
		self.safety_margin = margin;

		self
	}

	/// Overrides the lifetime assumed when `expires_in` is absent (defaults to one hour).
	pub fn default_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.default_token_lifetime = lifetime;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_BASE_URL)?,
		};
		let token_url = match self.token_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_TOKEN_URL)?,
		};
		let config = ClientConfig {
			credentials: self.credentials,
			base_url,
			token_url,
			scope: self.scope,
			timeout: self.timeout,
			safety_margin: self.safety_margin,
			default_token_lifetime: self.default_token_lifetime,
		};

		config.validate()?;

		Ok(config)
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn credentials() -> Credentials {
		Credentials::new("consumer-key", "consumer-secret")
	}

	#[test]
	fn defaults_point_at_production() {
		let config = ClientConfig::new(credentials()).expect("Default configuration should build.");

		assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
		assert_eq!(config.token_url.as_str(), DEFAULT_TOKEN_URL);
		assert_eq!(config.scope, DEFAULT_SCOPE);
		assert_eq!(config.safety_margin, Duration::seconds(30));
		assert!(config.timeout.is_none());
	}

	#[test]
	fn rejects_insecure_endpoints() {
		let err = ClientConfig::builder(credentials())
			.token_url(Url::parse("http://example.com/token").expect("Fixture URL should parse."))
			.build()
			.expect_err("Plain HTTP token endpoints should be rejected.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "token", .. }));
	}

	#[test]
	fn rejects_empty_credentials_and_scope() {
		let err = ClientConfig::builder(Credentials::new("", "secret"))
			.build()
			.expect_err("Empty client identifiers should be rejected.");

		assert_eq!(err, ConfigError::EmptyCredentials);

		let err = ClientConfig::builder(credentials())
			.scope("  ")
			.build()
			.expect_err("Blank scopes should be rejected.");

		assert_eq!(err, ConfigError::EmptyScope);
	}

	#[test]
	fn rejects_non_positive_durations() {
		let err = ClientConfig::builder(credentials())
			.timeout(std::time::Duration::ZERO)
			.build()
			.expect_err("Zero timeouts should be rejected.");

		assert_eq!(err, ConfigError::NonPositiveDuration { setting: "timeout" });

		let err = ClientConfig::builder(credentials())
			.default_token_lifetime(Duration::ZERO)
			.build()
			.expect_err("Zero default lifetimes should be rejected.");

		assert_eq!(err, ConfigError::NonPositiveDuration { setting: "default_token_lifetime" });
	}
}
