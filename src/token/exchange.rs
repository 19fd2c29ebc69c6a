//! Wire format of the client-credentials exchange.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ClientConfig,
	error::AuthError,
	http::{HttpMethod, HttpRequest, HttpResponse},
};

/// OAuth 2.0 grant identifier sent to the token endpoint.
pub const GRANT_TYPE: &str = "client_credentials";

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
	#[serde(default)]
	expires_in: Option<i64>,
}

/// Builds the `POST <token_url>` request for the configured credentials and scope.
pub(crate) fn build_request(config: &ClientConfig) -> HttpRequest {
	let form = Serializer::new(String::new())
		.append_pair("grant_type", GRANT_TYPE)
		.append_pair("scope", &config.scope)
		.finish();

	HttpRequest::new(HttpMethod::Post, config.token_url.clone())
		.with_header("Authorization", config.credentials.basic_authorization())
		.with_header("Content-Type", "application/x-www-form-urlencoded")
		.with_header("Accept", "application/json")
		.with_body(form)
}

/// Turns the token endpoint response into an [`AccessToken`] issued at `now`.
pub(crate) fn parse_response(
	response: HttpResponse,
	now: OffsetDateTime,
	default_lifetime: Duration,
) -> Result<AccessToken, AuthError> {
	let HttpResponse { status, body, .. } = response;

	if status != 200 {
		return Err(AuthError::TokenEndpoint { status, body });
	}

	let mut de = serde_json::Deserializer::from_str(&body);
	let decoded: TokenResponse = match serde_path_to_error::deserialize(&mut de) {
		Ok(decoded) => decoded,
		Err(source) =>
			return Err(AuthError::TokenResponse { status, body, source: Arc::new(source) }),
	};

	if decoded.access_token.is_empty() {
		return Err(AuthError::EmptyAccessToken);
	}

	let lifetime = match decoded.expires_in {
		Some(expires_in) if expires_in <= 0 => return Err(AuthError::InvalidLifetime { expires_in }),
		Some(expires_in) => Duration::seconds(expires_in),
		None => default_lifetime,
	};

	AccessToken::new(decoded.access_token, now, lifetime)
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;
	use crate::auth::Credentials;

	const NOW: OffsetDateTime = macros::datetime!(2025-06-01 12:00 UTC);

	fn parse(status: u16, body: &str) -> Result<AccessToken, AuthError> {
		parse_response(HttpResponse::new(status, body), NOW, Duration::minutes(10))
	}

	#[test]
	fn request_carries_basic_auth_and_form() {
		let config = ClientConfig::new(Credentials::new("consumer-key", "consumer-secret"))
			.expect("Default configuration should build.");
		let request = build_request(&config);

		assert_eq!(request.method, HttpMethod::Post);
		assert_eq!(request.url.as_str(), "https://api.enzona.net/token");
		assert_eq!(
			request.header("authorization"),
			Some("Basic Y29uc3VtZXIta2V5OmNvbnN1bWVyLXNlY3JldA=="),
		);
		assert_eq!(request.header("content-type"), Some("application/x-www-form-urlencoded"));
		assert_eq!(
			request.body.as_deref(),
			Some(b"grant_type=client_credentials&scope=enzona_business_payment".as_slice()),
		);
	}

	#[test]
	fn advertised_lifetime_sets_expiry() {
		let token = parse(200, "{\"access_token\":\"abc\",\"token_type\":\"Bearer\",\"expires_in\":3600}")
			.expect("Valid token responses should parse.");

		assert_eq!(token.value.expose(), "abc");
		assert_eq!(token.issued_at, NOW);
		assert_eq!(token.expires_at, macros::datetime!(2025-06-01 13:00 UTC));
	}

	#[test]
	fn missing_lifetime_uses_default() {
		let token = parse(200, "{\"access_token\":\"abc\"}").expect("Lifetime should be optional.");

		assert_eq!(token.expires_at, macros::datetime!(2025-06-01 12:10 UTC));
	}

	#[test]
	fn non_200_keeps_status_and_body() {
		let err = parse(401, "{\"error\":\"invalid_client\"}")
			.expect_err("Non-200 statuses should fail the exchange.");

		assert!(matches!(
			err,
			AuthError::TokenEndpoint { status: 401, ref body } if body.contains("invalid_client")
		));

		// Any non-200 fails, including other 2xx codes.
		assert!(matches!(parse(201, "{}"), Err(AuthError::TokenEndpoint { status: 201, .. })));
	}

	#[test]
	fn malformed_bodies_fail_with_decode_context() {
		let err = parse(200, "not json").expect_err("Invalid JSON should fail the exchange.");

		assert!(matches!(err, AuthError::TokenResponse { status: 200, ref body, .. } if body == "not json"));
		assert!(matches!(parse(200, "{\"expires_in\":60}"), Err(AuthError::TokenResponse { .. })));
	}

	#[test]
	fn rejects_empty_tokens_and_non_positive_lifetimes() {
		assert!(matches!(parse(200, "{\"access_token\":\"\"}"), Err(AuthError::EmptyAccessToken)));
		assert!(matches!(
			parse(200, "{\"access_token\":\"abc\",\"expires_in\":0}"),
			Err(AuthError::InvalidLifetime { expires_in: 0 })
		));
	}

	#[test]
	fn out_of_range_lifetimes_fail_without_panicking() {
		assert!(matches!(
			parse(200, "{\"access_token\":\"abc\",\"expires_in\":300000000000}"),
			Err(AuthError::InvalidLifetime { expires_in: 300_000_000_000 })
		));
		assert!(matches!(
			parse(200, &format!("{{\"access_token\":\"abc\",\"expires_in\":{}}}", i64::MAX)),
			Err(AuthError::InvalidLifetime { expires_in: i64::MAX })
		));
	}
}
