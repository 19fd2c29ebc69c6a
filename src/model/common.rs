//! Shapes shared across payment, refund, and order records.

// self
use crate::_prelude::*;

/// Monetary amount with its optional breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Amount {
	/// Total charged.
	#[serde(deserialize_with = "null_as_default")]
	pub total: f64,
	/// Breakdown of the total.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<AmountDetails>,
}

/// Breakdown of an [`Amount`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountDetails {
	/// Shipping cost.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shipping: Option<f64>,
	/// Discount applied.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub discount: Option<f64>,
	/// Tax charged.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tax: Option<f64>,
	/// Tip added by the buyer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tip: Option<f64>,
	/// Amount refunded by the latest refund (refund listings only).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub refunded: Option<f64>,
	/// Amount refunded across all refunds (refund listings only).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_refunded: Option<f64>,
}

/// Line item attached to a payment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
	/// Units purchased.
	#[serde(deserialize_with = "null_as_default")]
	pub quantity: u32,
	/// Unit price.
	#[serde(deserialize_with = "null_as_default")]
	pub price: f64,
	/// Product name.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Product description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Tax per unit.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tax: Option<f64>,
}

/// HATEOAS link returned by the API (for example the buyer confirmation URL).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
	/// HTTP method to use with `href`.
	#[serde(deserialize_with = "null_as_default")]
	pub method: String,
	/// Relation name.
	#[serde(deserialize_with = "null_as_default")]
	pub rel: String,
	/// Target URL.
	#[serde(deserialize_with = "null_as_default")]
	pub href: String,
}

/// Decodes an explicit `null` as the field's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: serde::Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields the API renders inconsistently as either JSON strings or numbers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Integer(i64),
		Float(f64),
		Flag(bool),
	}

	Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
		Raw::Text(text) => text,
		Raw::Integer(value) => value.to_string(),
		Raw::Float(value) => value.to_string(),
		Raw::Flag(value) => value.to_string(),
	}))
}
