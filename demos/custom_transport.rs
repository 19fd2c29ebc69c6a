//! Plugs a custom [`HttpTransport`] into the client.
//!
//! The transport below answers from a canned routing table instead of the network, which is
//! also how callers can wrap their own HTTP stack (proxies, request signing, recording).

// crates.io
use color_eyre::Result;
// self
use enzona_client::{
	auth::Credentials,
	client::EnzonaClient,
	config::ClientConfig,
	http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture},
};

struct CannedTransport;
impl HttpTransport for CannedTransport {
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let response = match (request.method.as_str(), request.url.path()) {
				("POST", "/token") =>
					HttpResponse::new(200, "{\"access_token\":\"canned\",\"expires_in\":60}"),
				("GET", "/payments/tx-canned") =>
					HttpResponse::new(200, "{\"transactionUuid\":\"tx-canned\",\"statusCode\":\"1111\"}"),
				_ => HttpResponse::new(404, "unknown route"),
			};

			Ok(response)
		})
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ClientConfig::new(Credentials::new("demo-key", "demo-secret"))?;
	let client = <EnzonaClient<CannedTransport>>::with_transport(config, CannedTransport);
	let payment = client.payments().details("tx-canned").await?;

	println!("Payment status: {:?}.", payment.status_code);

	let missing = client.payments().details("tx-missing").await;

	println!("Unknown payment: {:?}.", missing.map_err(|err| err.kind()));

	Ok(())
}
