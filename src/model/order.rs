//! Shop purchases and payment orders.

// self
use crate::{
	_prelude::*,
	model::common::lenient_string,
};

/// Body of `POST shop`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayProductRequest {
	/// Shopping cart being paid.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cart_id: Option<String>,
	/// Amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<CartAmount>,
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
	/// Currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
	/// Merchant UUID.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub merchant_uuid: Option<String>,
	/// Shop identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id_shop: Option<String>,
	/// Line items.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub items: Vec<CartItem>,
}

/// Cart total with shipping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartAmount {
	/// Total amount.
	pub total: f64,
	/// Shipping.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shipping: Option<f64>,
}

/// Product line of a cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
	/// Quantity.
	pub quantity: u32,
	/// Unit price.
	pub price: f64,
	/// Product identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_id: Option<String>,
	/// Product name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub product_name: Option<String>,
}

/// Response of `POST shop`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopPayment {
	/// Transaction UUID.
	pub transaction_uuid: Option<String>,
	/// Status code.
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Message.
	pub message: Option<String>,
	/// Fields not modeled above.
	#[serde(flatten)]
	pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST payment-orders`; the response is a [`Payment`](crate::model::Payment).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentOrderRequest {
	/// Merchant operation identifier.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub merchant_op_id: Option<i64>,
	/// Amount.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amount: Option<f64>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Currency.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn cart_items_use_camel_case() {
		let request = PayProductRequest {
			cart_id: Some("cart-1".into()),
			items: vec![CartItem {
				quantity: 2,
				price: 3.5,
				product_id: Some("p-1".into()),
				product_name: None,
			}],
			..Default::default()
		};

		assert_eq!(
			serde_json::to_string(&request).expect("Shop requests should serialize."),
			"{\"cartId\":\"cart-1\",\"items\":[{\"quantity\":2,\"price\":3.5,\"productId\":\"p-1\"}]}"
		);
	}
}
