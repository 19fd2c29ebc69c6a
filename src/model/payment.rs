//! Payment lifecycle records: creation, confirmation, listings, checkout, and receive codes.

// self
use crate::{
	_prelude::*,
	endpoint::RequestContext,
	model::common::{Amount, LineItem, Link, lenient_string, null_as_default},
};

/// Body of `POST payments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
	/// Merchant the payment belongs to.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub merchant_uuid: Option<String>,
	/// Merchant-side operation identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub merchant_op_id: Option<i64>,
	/// Amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<Amount>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// URL the buyer returns to after confirming.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub return_url: Option<String>,
	/// URL the buyer returns to after cancelling.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cancel_url: Option<String>,
	/// ISO currency code (`CUP`, ...).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Line items.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub items: Vec<LineItem>,
	/// Invoice number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub invoice_number: Option<i64>,
	/// Buyer identity code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub buyer_identity_code: Option<String>,
	/// Terminal identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub terminal_id: Option<i64>,
}

/// Body of `POST payments/{transactionUuid}/confirm`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
	/// Buyer funding source charged by the payment.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub funding_source_uuid: Option<String>,
	/// Buyer payment password.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payment_password: Option<String>,
	/// Device fingerprint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<String>,
}

/// Payment transaction as returned by create, confirm, complete, cancel, details, and
/// payment-order calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payment {
	/// Transaction identifier used by the other payment operations.
	pub transaction_uuid: Option<String>,
	/// Upstream status code (for example `1116` for a pending payment).
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Human-readable status.
	pub status_denom: Option<String>,
	/// Human-readable transaction type.
	pub transaction_denom: Option<String>,
	/// Amount.
	pub amount: Option<Amount>,
	/// Currency.
	pub currency: Option<String>,
	/// Description.
	pub description: Option<String>,
	/// Merchant UUID.
	pub merchant_uuid: Option<String>,
	/// Merchant operation identifier.
	#[serde(deserialize_with = "lenient_string")]
	pub merchant_op_id: Option<String>,
	/// Invoice number.
	#[serde(deserialize_with = "lenient_string")]
	pub invoice_number: Option<String>,
	/// Terminal identifier.
	#[serde(deserialize_with = "lenient_string")]
	pub terminal_id: Option<String>,
	/// Creation timestamp.
	pub created_at: Option<String>,
	/// Last update timestamp; the API spells it `updateAt`.
	pub update_at: Option<String>,
	/// Follow-up links, including the buyer confirmation URL.
	#[serde(deserialize_with = "null_as_default")]
	pub links: Vec<Link>,
	/// Line items.
	#[serde(deserialize_with = "null_as_default")]
	pub items: Vec<LineItem>,
}
impl Payment {
	/// Returns the `href` of the link with relation `rel`.
	pub fn link(&self, rel: &str) -> Option<&str> {
		self.links.iter().find(|link| link.rel == rel).map(|link| link.href.as_str())
	}
}

/// Page of payments returned by `GET payments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentList {
	/// Payments.
	#[serde(deserialize_with = "null_as_default")]
	pub payments: Vec<Payment>,
	/// Fields not modeled above (pagination counters and the like).
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// Filters for `GET payments`; every field is optional and omitted when unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentQuery {
	/// Merchant UUID.
	pub merchant_uuid: Option<String>,
	/// Page size.
	pub limit: Option<u32>,
	/// Page start.
	pub offset: Option<u32>,
	/// Filter on the merchant operation identifier.
	pub merchant_op_filter: Option<String>,
	/// Filter on the upstream operation identifier.
	pub enzona_op_filter: Option<String>,
	/// Status filter.
	pub status_filter: Option<String>,
	/// Start date filter.
	pub start_date_filter: Option<String>,
	/// End date filter.
	pub end_date_filter: Option<String>,
	/// Sort order.
	pub order_filter: Option<String>,
}
impl PaymentQuery {
	pub(crate) fn apply<'a, B, R>(&self, ctx: RequestContext<'a, B, R>) -> RequestContext<'a, B, R> {
		ctx.query("merchant_uuid", self.merchant_uuid.as_deref())
			.query("limit", self.limit)
			.query("offset", self.offset)
			.query("merchant_op_filter", self.merchant_op_filter.as_deref())
			.query("enzona_op_filter", self.enzona_op_filter.as_deref())
			.query("status_filter", self.status_filter.as_deref())
			.query("start_date_filter", self.start_date_filter.as_deref())
			.query("end_date_filter", self.end_date_filter.as_deref())
			.query("order_filter", self.order_filter.as_deref())
	}
}

/// Response of `GET payments/checkout/{uuid}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkout {
	/// Message.
	pub message: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST payments/vendor/code`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceiveCodeRequest {
	/// Amount as a decimal string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
	/// Funding source UUID.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub funding_source_uuid: Option<String>,
	/// Payment password.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payment_password: Option<String>,
	/// Fingerprint.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fingerprint: Option<String>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Identity code of the vendor receiving the funds.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vendor_identity_code: Option<String>,
	/// Currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Cash advance amount as a decimal string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cash_advance: Option<String>,
	/// Phone.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}

/// Response of `POST payments/vendor/code`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiveCode {
	/// Status code.
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Message.
	pub message: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn payment_tolerates_partial_and_unknown_fields() {
		let payment: Payment = serde_json::from_str(
			"{\"statusCode\":\"success\",\"merchantOpId\":12,\"links\":[{\"method\":\"REDIRECT\",\"rel\":\"confirm\",\"href\":\"https://pay/1\"}],\"brandNew\":true}",
		)
		.expect("Partial payments should decode.");

		assert_eq!(payment.status_code.as_deref(), Some("success"));
		assert_eq!(payment.merchant_op_id.as_deref(), Some("12"));
		assert_eq!(payment.link("confirm"), Some("https://pay/1"));
		assert!(payment.amount.is_none());
		assert!(payment.items.is_empty());
	}

	#[test]
	fn requests_omit_unset_fields() {
		let request = ConfirmPaymentRequest {
			funding_source_uuid: Some("fs-1".into()),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_string(&request).expect("Requests should serialize."),
			"{\"fundingSourceUuid\":\"fs-1\"}"
		);

		let request = CreatePaymentRequest {
			merchant_op_id: Some(7),
			return_url: Some("https://shop/return".into()),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_string(&request).expect("Requests should serialize."),
			"{\"merchantOpId\":7,\"returnUrl\":\"https://shop/return\"}"
		);
	}

	#[test]
	fn listings_keep_unmodeled_fields() {
		let list: PaymentList = serde_json::from_str("{\"payments\":[{}],\"total\":31}")
			.expect("Listings should decode.");

		assert_eq!(list.payments.len(), 1);
		assert_eq!(list.extra.get("total"), Some(&serde_json::json!(31)));
	}

	#[test]
	fn payment_tolerates_null_collections_and_numbers() {
		let payment: Payment = serde_json::from_str(
			"{\"statusCode\":\"1111\",\"links\":null,\"items\":null,\"amount\":{\"total\":null}}",
		)
		.expect("Null collections should decode as empty.");

		assert_eq!(payment.status_code.as_deref(), Some("1111"));
		assert!(payment.links.is_empty());
		assert!(payment.items.is_empty());
		assert_eq!(payment.amount.map(|amount| amount.total), Some(0.0));

		let list: PaymentList =
			serde_json::from_str("{\"payments\":null}").expect("Null listings should decode as empty.");

		assert!(list.payments.is_empty());
		assert!(list.extra.is_empty());
	}
}
