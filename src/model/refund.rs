//! Refund records and listing filters.

// self
use crate::{
	_prelude::*,
	endpoint::RequestContext,
	model::common::{Amount, LineItem, Link, lenient_string, null_as_default},
};

/// Body of `POST payments/{transactionUuid}/refund`.
///
/// Leaving `amount` unset requests a full refund.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPaymentRequest {
	/// Partial refund amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<RefundAmount>,
	/// Merchant-side refund identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub commerce_refund_id: Option<String>,
	/// Username.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Refund amount; the API expects the total as a decimal string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundAmount {
	/// Total amount.
	pub total: String,
}

/// Refund as returned by refund and refund-details calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Refund {
	/// Refund transaction identifier.
	pub uuid: Option<String>,
	/// Payment the refund belongs to.
	pub parent_payment_uuid: Option<String>,
	/// Status code.
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Transaction status code.
	#[serde(deserialize_with = "lenient_string")]
	pub transaction_status_code: Option<String>,
	/// Human-readable transaction type.
	pub transaction_denom: Option<String>,
	/// State.
	pub state: Option<String>,
	/// Description.
	pub description: Option<String>,
	/// Creation timestamp.
	pub created_at: Option<String>,
	/// Last update timestamp.
	pub updated_at: Option<String>,
	/// Links.
	#[serde(deserialize_with = "null_as_default")]
	pub links: Vec<Link>,
}

/// Refunds returned by the refund listings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundList {
	/// Refunds.
	#[serde(deserialize_with = "null_as_default")]
	pub refunds: Vec<RefundSummary>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// One entry of a refund listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RefundSummary {
	/// Transaction UUID.
	pub transaction_uuid: Option<String>,
	/// Transaction code.
	#[serde(deserialize_with = "lenient_string")]
	pub transaction_code: Option<String>,
	/// Human-readable transaction type.
	pub transaction_denom: Option<String>,
	/// Transaction description.
	pub transaction_description: Option<String>,
	/// Transaction signature.
	pub transaction_signature: Option<String>,
	/// Creation timestamp.
	pub transaction_created_at: Option<String>,
	/// Last update timestamp.
	pub transaction_updated_at: Option<String>,
	/// Status code.
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Human-readable status.
	pub status_denom: Option<String>,
	/// Amount.
	pub amount: Option<Amount>,
	/// Currency.
	pub currency: Option<String>,
	/// Invoice number.
	#[serde(deserialize_with = "lenient_string")]
	pub invoice_number: Option<String>,
	/// Terminal identifier.
	#[serde(deserialize_with = "lenient_string")]
	pub terminal_id: Option<String>,
	/// Buyer user name.
	pub username: Option<String>,
	/// Buyer first name.
	pub name: Option<String>,
	/// Buyer last name.
	pub lastname: Option<String>,
	/// Buyer avatar URL.
	pub avatar: Option<String>,
	/// Line items.
	#[serde(deserialize_with = "null_as_default")]
	pub items: Vec<LineItem>,
}

/// Filters for `GET payments/refunds`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefundQuery {
	/// Merchant UUID.
	pub merchant_uuid: Option<String>,
	/// Restricts the listing to refunds of one payment.
	pub transaction_uuid: Option<String>,
	/// Commerce refund identifier.
	pub commerce_refund_id: Option<String>,
	/// Page size.
	pub limit: Option<u32>,
	/// Page start.
	pub offset: Option<u32>,
	/// Status filter.
	pub status_filter: Option<String>,
	/// Start date filter.
	pub start_date_filter: Option<String>,
	/// End date filter.
	pub end_date_filter: Option<String>,
	/// Sort order.
	pub order_filter: Option<String>,
}
impl RefundQuery {
	pub(crate) fn apply<'a, B, R>(&self, ctx: RequestContext<'a, B, R>) -> RequestContext<'a, B, R> {
		let ctx = ctx
			.query("merchant_uuid", self.merchant_uuid.as_deref())
			.query("transaction_uuid", self.transaction_uuid.as_deref())
			.query("commerce_refund_id", self.commerce_refund_id.as_deref());

		PageFilters {
			limit: self.limit,
			offset: self.offset,
			status_filter: self.status_filter.as_deref(),
			start_date_filter: self.start_date_filter.as_deref(),
			end_date_filter: self.end_date_filter.as_deref(),
			order_filter: self.order_filter.as_deref(),
		}
		.apply(ctx)
	}
}

/// Filters for `GET payments/{transactionUuid}/refunds`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentRefundQuery {
	/// Page size.
	pub limit: Option<u32>,
	/// Page start.
	pub offset: Option<u32>,
	/// Status filter.
	pub status_filter: Option<String>,
	/// Start date filter.
	pub start_date_filter: Option<String>,
	/// End date filter.
	pub end_date_filter: Option<String>,
	/// Sort order.
	pub order_filter: Option<String>,
}
impl PaymentRefundQuery {
	pub(crate) fn apply<'a, B, R>(&self, ctx: RequestContext<'a, B, R>) -> RequestContext<'a, B, R> {
		PageFilters {
			limit: self.limit,
			offset: self.offset,
			status_filter: self.status_filter.as_deref(),
			start_date_filter: self.start_date_filter.as_deref(),
			end_date_filter: self.end_date_filter.as_deref(),
			order_filter: self.order_filter.as_deref(),
		}
		.apply(ctx)
	}
}

struct PageFilters<'q> {
	limit: Option<u32>,
	offset: Option<u32>,
	status_filter: Option<&'q str>,
	start_date_filter: Option<&'q str>,
	end_date_filter: Option<&'q str>,
	order_filter: Option<&'q str>,
}
impl PageFilters<'_> {
	fn apply<'a, B, R>(self, ctx: RequestContext<'a, B, R>) -> RequestContext<'a, B, R> {
		ctx.query("limit", self.limit)
			.query("offset", self.offset)
			.query("status_filter", self.status_filter)
			.query("start_date_filter", self.start_date_filter)
			.query("end_date_filter", self.end_date_filter)
			.query("order_filter", self.order_filter)
	}
}
