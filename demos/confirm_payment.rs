//! Creates and confirms a payment against a mocked payment API using the default reqwest
//! transport; the second call reuses the cached token.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use enzona_client::{
	auth::Credentials,
	client::EnzonaClient,
	config::ClientConfig,
	http::ReqwestHttpClient,
	model::{Amount, ConfirmPaymentRequest, CreatePaymentRequest},
	reqwest::Client,
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"demo-access\",\"expires_in\":3600}");
		})
		.await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/payments");
			then.status(200).body(
				"{\"transactionUuid\":\"tx-demo\",\"statusCode\":\"1116\",\"links\":[{\"method\":\"REDIRECT\",\"rel\":\"confirm\",\"href\":\"https://pay.example/tx-demo\"}]}",
			);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/payments/tx-demo/confirm");
			then.status(200).body("{\"transactionUuid\":\"tx-demo\",\"statusCode\":\"1111\"}");
		})
		.await;

	let config = ClientConfig::builder(Credentials::new("demo-key", "demo-secret"))
		.base_url(Url::parse(&server.url("/"))?)
		.token_url(Url::parse(&server.url("/token"))?)
		.timeout(std::time::Duration::from_secs(10))
		.build()?;
	let transport = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = <EnzonaClient<ReqwestHttpClient>>::with_transport(config, transport);
	let payment = client
		.payments()
		.create(&CreatePaymentRequest {
			merchant_uuid: Some("merchant-demo".into()),
			currency: Some("CUP".into()),
			amount: Some(Amount { total: 25.0, details: None }),
			..Default::default()
		})
		.await?;
	let transaction_uuid = payment.transaction_uuid.unwrap_or_default();

	println!("Buyer confirmation URL: {:?}.", payment.links.first().map(|link| &link.href));

	let confirmed = client
		.payments()
		.confirm(
			&transaction_uuid,
			&ConfirmPaymentRequest {
				funding_source_uuid: Some("funding-demo".into()),
				payment_password: Some("0000".into()),
				..Default::default()
			},
		)
		.await?;

	println!("Payment {transaction_uuid} status: {:?}.", confirmed.status_code);

	token_mock.assert_async().await;

	Ok(())
}
