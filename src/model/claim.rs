//! Claims filed against a payment operation.
//!
//! The claims endpoint predates the camelCase convention of the rest of the API, so each
//! field carries its literal wire name.

// self
use crate::{_prelude::*, model::common::lenient_string};

/// Body of `POST payment/createClaims`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClaimRequest {
	/// Claim type.
	#[serde(rename = "typeClaim", skip_serializing_if = "Option::is_none")]
	pub claim_type: Option<String>,
	/// Claim category.
	#[serde(rename = "V_tipo_reclamacion", skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	/// Reason given by the customer.
	#[serde(rename = "V_motivo", skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	/// Upstream operation number being claimed.
	#[serde(rename = "no_operacionEZ", skip_serializing_if = "Option::is_none")]
	pub operation_number: Option<String>,
	/// Affected customer's phone.
	#[serde(rename = "telefono_cliente_afec", skip_serializing_if = "Option::is_none")]
	pub customer_phone: Option<String>,
	/// Affected customer's email.
	#[serde(rename = "correo_cliente_afec", skip_serializing_if = "Option::is_none")]
	pub customer_email: Option<String>,
	/// Affected customer's name.
	#[serde(rename = "cliente_afectado", skip_serializing_if = "Option::is_none")]
	pub customer_name: Option<String>,
	/// Merchant operation identifier.
	#[serde(rename = "id_op_comercio", skip_serializing_if = "Option::is_none")]
	pub merchant_op_id: Option<String>,
	/// Merchant name.
	#[serde(rename = "nombre_comercio", skip_serializing_if = "Option::is_none")]
	pub merchant_name: Option<String>,
	/// Customer identifier.
	#[serde(rename = "id_cliente", skip_serializing_if = "Option::is_none")]
	pub customer_id: Option<String>,
	/// Commercial office handling the claim.
	#[serde(rename = "oficina_comercial", skip_serializing_if = "Option::is_none")]
	pub commercial_office: Option<String>,
	/// Invoice number.
	#[serde(rename = "no_factura", skip_serializing_if = "Option::is_none")]
	pub invoice_number: Option<String>,
}

/// Response of `POST payment/createClaims`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimReceipt {
	/// Upstream status code.
	#[serde(deserialize_with = "lenient_string")]
	pub status_code: Option<String>,
	/// Upstream message.
	pub message: Option<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn claims_use_literal_wire_names() {
		let claim = CreateClaimRequest {
			claim_type: Some("1".into()),
			category: Some("2".into()),
			operation_number: Some("op-9".into()),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_string(&claim).expect("Claims should serialize."),
			"{\"typeClaim\":\"1\",\"V_tipo_reclamacion\":\"2\",\"no_operacionEZ\":\"op-9\"}"
		);
	}
}
