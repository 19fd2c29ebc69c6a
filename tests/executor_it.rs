// crates.io
use httpmock::prelude::*;
// self
use enzona_client::{
	_preludet::*,
	client::EnzonaClient,
	endpoint::{CONFIRM_PAYMENT, LIST_PAYMENTS, PAYMENT_DETAILS},
	error::{AuthError, ErrorKind, TransportError},
	model::{ConfirmPaymentRequest, Payment},
};

const CLIENT_ID: &str = "consumer-key";
const CLIENT_SECRET: &str = "consumer-secret";

async fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).body("{\"access_token\":\"resource-token\",\"expires_in\":3600}");
		})
		.await
}

fn confirm_body() -> ConfirmPaymentRequest {
	ConfirmPaymentRequest {
		funding_source_uuid: Some("fs-1".into()),
		payment_password: Some("1234".into()),
		..Default::default()
	}
}

#[tokio::test]
async fn invoke_substitutes_path_and_sends_bearer_json() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server).await;
	let confirm = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/payments/abc-123/confirm")
				.header("authorization", "Bearer resource-token")
				.header("content-type", "application/json")
				.json_body(serde_json::json!({
					"fundingSourceUuid": "fs-1",
					"paymentPassword": "1234"
				}));
			then.status(200).body("{\"statusCode\":\"success\",\"transactionUuid\":\"abc-123\"}");
		})
		.await;
	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let body = confirm_body();
	let payment = client
		.executor()
		.invoke(CONFIRM_PAYMENT.request().path("transactionUuid", "abc-123").body(&body))
		.await
		.expect("Successful responses should decode.");

	assert_eq!(payment.status_code.as_deref(), Some("success"));
	assert_eq!(payment.transaction_uuid.as_deref(), Some("abc-123"));

	token.assert_async().await;
	confirm.assert_async().await;
}

#[tokio::test]
async fn validation_errors_keep_raw_body_and_skip_decoding() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/payments/abc-123/confirm");
			then.status(400).body("{\"error\":\"Bad Request\"}");
		})
		.await;

	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let body = confirm_body();
	let err = client
		.executor()
		.invoke(CONFIRM_PAYMENT.request().path("transactionUuid", "abc-123").body(&body))
		.await
		.expect_err("HTTP 400 should fail.");

	assert_eq!(err.kind(), ErrorKind::Validation);
	assert_eq!(err.status(), Some(400));
	assert!(err.raw_body().is_some_and(|body| body.contains("Bad Request")));
	assert!(!err.is_retryable());
}

#[tokio::test]
async fn invalid_json_on_success_is_a_decode_error() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/payments/abc-123");
			then.status(200).body("definitely not json");
		})
		.await;

	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let err = client
		.executor()
		.invoke(PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("Invalid JSON should fail.");

	assert_eq!(err.kind(), ErrorKind::Decode);
	assert!(matches!(err, Error::Decode { status: 200, ref body, .. } if body == "definitely not json"));
}

#[tokio::test]
async fn absent_query_values_are_not_rendered() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;

	let list = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/payments")
				.query_param("merchant_uuid", "m 1")
				.query_param("limit", "10")
				.query_param_missing("offset")
				.query_param_missing("status_filter");
			then.status(200).body("{\"payments\":[]}");
		})
		.await;
	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);

	client
		.executor()
		.invoke(
			LIST_PAYMENTS
				.request()
				.query("merchant_uuid", Some("m 1"))
				.query("limit", Some(10))
				.query::<u32>("offset", None)
				.query::<&str>("status_filter", None),
		)
		.await
		.expect("Listing should succeed.");

	list.assert_async().await;
}

#[tokio::test]
async fn token_failure_skips_resource_call() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(500).body("upstream down");
		})
		.await;

	let resource = server
		.mock_async(|when, then| {
			when.path("/payments/abc-123");
			then.status(200).body("{}");
		})
		.await;
	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let err = client
		.executor()
		.invoke(PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("Token failures should propagate.");

	assert!(matches!(err, Error::Auth(AuthError::TokenEndpoint { status: 500, .. })));

	resource.assert_calls_async(0).await;
}

#[tokio::test]
async fn resource_rejections_are_auth_errors() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/payments/abc-123");
			then.status(403).body("forbidden");
		})
		.await;

	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let err = client
		.executor()
		.invoke(PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("HTTP 403 should fail.");

	assert!(matches!(err, Error::Auth(AuthError::Rejected { status: 403, .. })));
}

#[tokio::test]
async fn rate_limits_carry_retry_after() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/payments/abc-123");
			then.status(429).header("retry-after", "7").body("slow down");
		})
		.await;

	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let err = client
		.executor()
		.invoke(PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("HTTP 429 should fail.");

	assert!(err.is_retryable());
	assert!(matches!(
		err,
		Error::RateLimited { retry_after: Some(hint), .. } if hint == Duration::seconds(7)
	));
}

#[tokio::test]
async fn slow_responses_time_out() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/payments/abc-123");
			then.status(200).delay(std::time::Duration::from_secs(3)).body("{}");
		})
		.await;

	let mut config = test_config(&server.base_url(), CLIENT_ID, CLIENT_SECRET);

	config.timeout = Some(std::time::Duration::from_millis(250));

	let client: ReqwestTestClient =
		EnzonaClient::with_transport(config, test_reqwest_http_client());
	let err = client
		.executor()
		.invoke(PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("Slow responses should time out.");

	assert!(err.is_timeout());
	assert!(matches!(err, Error::Transport(TransportError::Timeout { .. })));
}

#[tokio::test]
async fn cancellation_abandons_in_flight_call() {
	let server = MockServer::start_async().await;

	mock_token(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/payments/abc-123");
			then.status(200).delay(std::time::Duration::from_secs(3)).body("{}");
		})
		.await;

	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let outcome: Result<Payment> = client
		.executor()
		.invoke_cancellable(
			PAYMENT_DETAILS.request().path("transactionUuid", "abc-123"),
			tokio::time::sleep(std::time::Duration::from_millis(200)),
		)
		.await;

	assert!(matches!(outcome, Err(Error::Cancelled)));
}

#[tokio::test]
async fn descriptor_mismatch_fails_before_io() {
	let server = MockServer::start_async().await;
	let token = mock_token(&server).await;
	let client = build_reqwest_test_client(&server.base_url(), CLIENT_ID, CLIENT_SECRET);
	let err = client
		.executor()
		.invoke(CONFIRM_PAYMENT.request().path("transactionUuid", "abc-123"))
		.await
		.expect_err("Missing bodies should fail.");

	assert_eq!(err.kind(), ErrorKind::Config);

	token.assert_calls_async(0).await;
}
