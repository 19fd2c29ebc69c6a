// self
use crate::{
	_prelude::*,
	endpoint::{self, NoBody},
	executor::RequestExecutor,
	http::HttpTransport,
	model::{
		Checkout, ConfirmPaymentRequest, CreatePaymentOrderRequest, CreatePaymentRequest,
		CreateReceiveCodeRequest, PayProductRequest, Payment, PaymentList, PaymentQuery,
		PaymentRefundQuery, ReceiveCode, Refund, RefundList, RefundPaymentRequest, RefundQuery,
		ShopPayment,
	},
};

const TRANSACTION_UUID: &str = "transactionUuid";

/// Typed payment operations; obtained from
/// [`EnzonaClient::payments`](crate::client::EnzonaClient::payments).
#[derive(Debug)]
pub struct Payments<'c, C>
where
	C: ?Sized + HttpTransport,
{
	executor: &'c RequestExecutor<C>,
}
impl<'c, C> Payments<'c, C>
where
	C: ?Sized + HttpTransport,
{
	pub(super) fn new(executor: &'c RequestExecutor<C>) -> Self {
		Self { executor }
	}

	/// Creates a payment awaiting buyer confirmation.
	pub async fn create(&self, request: &CreatePaymentRequest) -> Result<Payment> {
		self.executor.invoke(endpoint::CREATE_PAYMENT.request().body(request)).await
	}

	/// Confirms a payment with the buyer's funding source.
	pub async fn confirm(
		&self,
		transaction_uuid: &str,
		request: &ConfirmPaymentRequest,
	) -> Result<Payment> {
		let ctx =
			endpoint::CONFIRM_PAYMENT.request().path(TRANSACTION_UUID, transaction_uuid).body(request);

		self.executor.invoke(ctx).await
	}

	/// Completes a confirmed payment.
	pub async fn complete(&self, transaction_uuid: &str) -> Result<Payment> {
		self.bodiless(endpoint::COMPLETE_PAYMENT, transaction_uuid).await
	}

	/// Cancels a pending payment.
	pub async fn cancel(&self, transaction_uuid: &str) -> Result<Payment> {
		self.bodiless(endpoint::CANCEL_PAYMENT, transaction_uuid).await
	}

	/// Fetches one payment.
	pub async fn details(&self, transaction_uuid: &str) -> Result<Payment> {
		self.bodiless(endpoint::PAYMENT_DETAILS, transaction_uuid).await
	}

	/// Lists payments matching `query`.
	pub async fn list(&self, query: &PaymentQuery) -> Result<PaymentList> {
		self.executor.invoke(query.apply(endpoint::LIST_PAYMENTS.request())).await
	}

	/// Refunds a payment, fully or partially.
	pub async fn refund(
		&self,
		transaction_uuid: &str,
		request: &RefundPaymentRequest,
	) -> Result<Refund> {
		let ctx =
			endpoint::REFUND_PAYMENT.request().path(TRANSACTION_UUID, transaction_uuid).body(request);

		self.executor.invoke(ctx).await
	}

	/// Fetches one refund.
	pub async fn refund_details(&self, transaction_uuid: &str) -> Result<Refund> {
		self.bodiless(endpoint::REFUND_DETAILS, transaction_uuid).await
	}

	/// Lists refunds across payments.
	pub async fn list_refunds(&self, query: &RefundQuery) -> Result<RefundList> {
		self.executor.invoke(query.apply(endpoint::LIST_REFUNDS.request())).await
	}

	/// Lists the refunds of one payment.
	pub async fn list_payment_refunds(
		&self,
		transaction_uuid: &str,
		query: &PaymentRefundQuery,
	) -> Result<RefundList> {
		let ctx = endpoint::LIST_PAYMENT_REFUNDS.request().path(TRANSACTION_UUID, transaction_uuid);

		self.executor.invoke(query.apply(ctx)).await
	}

	/// Runs the hosted checkout for `uuid`.
	pub async fn checkout(&self, uuid: &str) -> Result<Checkout> {
		self.executor.invoke(endpoint::CHECKOUT.request().path("uuid", uuid)).await
	}

	/// Creates a vendor receive code.
	pub async fn create_receive_code(
		&self,
		request: &CreateReceiveCodeRequest,
	) -> Result<ReceiveCode> {
		self.executor.invoke(endpoint::CREATE_RECEIVE_CODE.request().body(request)).await
	}

	/// Pays for the products in a shop cart.
	pub async fn pay_product(&self, request: &PayProductRequest) -> Result<ShopPayment> {
		self.executor.invoke(endpoint::PAY_PRODUCT.request().body(request)).await
	}

	/// Creates a payment order.
	pub async fn create_order(&self, request: &CreatePaymentOrderRequest) -> Result<Payment> {
		self.executor.invoke(endpoint::CREATE_PAYMENT_ORDER.request().body(request)).await
	}

	async fn bodiless<R>(
		&self,
		endpoint: endpoint::Endpoint<NoBody, R>,
		transaction_uuid: &str,
	) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.executor.invoke(endpoint.request().path(TRANSACTION_UUID, transaction_uuid)).await
	}
}
