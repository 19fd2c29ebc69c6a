//! Every operation exposed by the payment API.

// self
use crate::{
	endpoint::{Endpoint, EndpointDescriptor, NoBody},
	http::HttpMethod,
	model::{
		Checkout, ClaimReceipt, ConfirmPaymentRequest, CreateClaimRequest,
		CreatePaymentOrderRequest, CreatePaymentRequest, CreateReceiveCodeRequest,
		PayProductRequest, Payment, PaymentList, ReceiveCode, Refund, RefundList,
		RefundPaymentRequest, ShopPayment,
	},
};

const TRANSACTION_UUID: &[&str] = &["transactionUuid"];
const PAGINATION_FILTERS: &[&str] =
	&["limit", "offset", "status_filter", "start_date_filter", "end_date_filter", "order_filter"];

const fn descriptor(
	name: &'static str,
	method: HttpMethod,
	path_template: &'static str,
	path_params: &'static [&'static str],
	query_params: &'static [&'static str],
	has_body: bool,
) -> EndpointDescriptor {
	EndpointDescriptor { name, method, path_template, path_params, query_params, has_body }
}

/// `POST payments/{transactionUuid}/confirm`
pub const CONFIRM_PAYMENT: Endpoint<ConfirmPaymentRequest, Payment> = Endpoint::new(descriptor(
	"confirm_payment",
	HttpMethod::Post,
	"payments/{transactionUuid}/confirm",
	TRANSACTION_UUID,
	&[],
	true,
));
/// `POST payments/{transactionUuid}/complete`
pub const COMPLETE_PAYMENT: Endpoint<NoBody, Payment> = Endpoint::new(descriptor(
	"complete_payment",
	HttpMethod::Post,
	"payments/{transactionUuid}/complete",
	TRANSACTION_UUID,
	&[],
	false,
));
/// `POST payments/{transactionUuid}/cancel`
pub const CANCEL_PAYMENT: Endpoint<NoBody, Payment> = Endpoint::new(descriptor(
	"cancel_payment",
	HttpMethod::Post,
	"payments/{transactionUuid}/cancel",
	TRANSACTION_UUID,
	&[],
	false,
));
/// `POST payments/{transactionUuid}/refund`
pub const REFUND_PAYMENT: Endpoint<RefundPaymentRequest, Refund> = Endpoint::new(descriptor(
	"refund_payment",
	HttpMethod::Post,
	"payments/{transactionUuid}/refund",
	TRANSACTION_UUID,
	&[],
	true,
));
/// `GET payments/{transactionUuid}`
pub const PAYMENT_DETAILS: Endpoint<NoBody, Payment> = Endpoint::new(descriptor(
	"payment_details",
	HttpMethod::Get,
	"payments/{transactionUuid}",
	TRANSACTION_UUID,
	&[],
	false,
));
/// `POST payments`
pub const CREATE_PAYMENT: Endpoint<CreatePaymentRequest, Payment> = Endpoint::new(descriptor(
	"create_payment",
	HttpMethod::Post,
	"payments",
	&[],
	&[],
	true,
));
/// `GET payments`
pub const LIST_PAYMENTS: Endpoint<NoBody, PaymentList> = Endpoint::new(descriptor(
	"list_payments",
	HttpMethod::Get,
	"payments",
	&[],
	&[
		"merchant_uuid",
		"limit",
		"offset",
		"merchant_op_filter",
		"enzona_op_filter",
		"status_filter",
		"start_date_filter",
		"end_date_filter",
		"order_filter",
	],
	false,
));
/// `GET payments/refund/{transactionUuid}`
pub const REFUND_DETAILS: Endpoint<NoBody, Refund> = Endpoint::new(descriptor(
	"refund_details",
	HttpMethod::Get,
	"payments/refund/{transactionUuid}",
	TRANSACTION_UUID,
	&[],
	false,
));
/// `GET payments/refunds`
pub const LIST_REFUNDS: Endpoint<NoBody, RefundList> = Endpoint::new(descriptor(
	"list_refunds",
	HttpMethod::Get,
	"payments/refunds",
	&[],
	&[
		"merchant_uuid",
		"transaction_uuid",
		"commerce_refund_id",
		"limit",
		"offset",
		"status_filter",
		"start_date_filter",
		"end_date_filter",
		"order_filter",
	],
	false,
));
/// `GET payments/{transactionUuid}/refunds`
pub const LIST_PAYMENT_REFUNDS: Endpoint<NoBody, RefundList> = Endpoint::new(descriptor(
	"list_payment_refunds",
	HttpMethod::Get,
	"payments/{transactionUuid}/refunds",
	TRANSACTION_UUID,
	PAGINATION_FILTERS,
	false,
));
/// `GET payments/checkout/{uuid}`
pub const CHECKOUT: Endpoint<NoBody, Checkout> = Endpoint::new(descriptor(
	"checkout",
	HttpMethod::Get,
	"payments/checkout/{uuid}",
	&["uuid"],
	&[],
	false,
));
/// `POST payments/vendor/code`
pub const CREATE_RECEIVE_CODE: Endpoint<CreateReceiveCodeRequest, ReceiveCode> =
	Endpoint::new(descriptor(
		"create_receive_code",
		HttpMethod::Post,
		"payments/vendor/code",
		&[],
		&[],
		true,
	));
/// `POST shop`
pub const PAY_PRODUCT: Endpoint<PayProductRequest, ShopPayment> =
	Endpoint::new(descriptor("pay_product", HttpMethod::Post, "shop", &[], &[], true));
/// `POST payment-orders`
pub const CREATE_PAYMENT_ORDER: Endpoint<CreatePaymentOrderRequest, Payment> =
	Endpoint::new(descriptor(
		"create_payment_order",
		HttpMethod::Post,
		"payment-orders",
		&[],
		&[],
		true,
	));
/// `POST payment/createClaims`
pub const CREATE_CLAIM: Endpoint<CreateClaimRequest, ClaimReceipt> = Endpoint::new(descriptor(
	"create_claim",
	HttpMethod::Post,
	"payment/createClaims",
	&[],
	&[],
	true,
));

/// Untyped descriptors of the whole catalog, in declaration order.
pub const ALL: &[EndpointDescriptor] = &[
	CONFIRM_PAYMENT.descriptor,
	COMPLETE_PAYMENT.descriptor,
	CANCEL_PAYMENT.descriptor,
	REFUND_PAYMENT.descriptor,
	PAYMENT_DETAILS.descriptor,
	CREATE_PAYMENT.descriptor,
	LIST_PAYMENTS.descriptor,
	REFUND_DETAILS.descriptor,
	LIST_REFUNDS.descriptor,
	LIST_PAYMENT_REFUNDS.descriptor,
	CHECKOUT.descriptor,
	CREATE_RECEIVE_CODE.descriptor,
	PAY_PRODUCT.descriptor,
	CREATE_PAYMENT_ORDER.descriptor,
	CREATE_CLAIM.descriptor,
];
