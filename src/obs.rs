//! Optional observability for token exchanges and API calls.
//!
//! # Feature Flags
//!
//! - `tracing`: every call runs inside an `enzona_client.call` span carrying `operation` and
//!   `endpoint`; the `http.status` and `error.kind` fields are filled in once known. Token cache
//!   decisions are logged as debug events.
//! - `metrics`: `enzona_client_calls_total` counts starts and results per `operation`,
//!   `endpoint`, and `outcome` (`started`, `succeeded`, or the failing [`ErrorKind`] label).
//!   `enzona_client_call_duration_seconds` records the latency of each finished call.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::ErrorKind};

/// Operation kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Client-credentials exchange against the token endpoint.
	TokenExchange,
	/// Authenticated call against a resource endpoint.
	Invoke,
}
impl OperationKind {
	/// Stable label used in span and metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::TokenExchange => "token_exchange",
			OperationKind::Invoke => "invoke",
		}
	}
}

/// Operation kind plus the endpoint it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
	/// Operation kind.
	pub kind: OperationKind,
	/// Endpoint name (`token` for exchanges).
	pub endpoint: &'static str,
}
impl CallSite {
	/// The token endpoint.
	pub const TOKEN: Self = Self { kind: OperationKind::TokenExchange, endpoint: "token" };

	/// A catalog endpoint called through the executor.
	pub const fn invoke(endpoint: &'static str) -> Self {
		Self { kind: OperationKind::Invoke, endpoint }
	}
}
impl Display for CallSite {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}:{}", self.kind.as_str(), self.endpoint)
	}
}

/// Lifecycle point reported for a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// The call began.
	Started,
	/// The call returned a value.
	Succeeded,
	/// The call failed with the given kind.
	Failed(ErrorKind),
}
impl Outcome {
	/// Outcome matching a finished call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Outcome::Succeeded,
			Err(err) => Outcome::Failed(err.kind()),
		}
	}

	/// Stable label used as the `outcome` metric label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Started => "started",
			Outcome::Succeeded => "succeeded",
			Outcome::Failed(kind) => kind.as_str(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcomes_label_failures_by_kind() {
		assert_eq!(Outcome::of(&Ok::<_, Error>(())).as_str(), "succeeded");
		assert_eq!(Outcome::of::<()>(&Err(Error::Cancelled)).as_str(), "cancelled");
		assert_eq!(
			Outcome::of::<()>(&Err(Error::NotFound { body: String::new() })),
			Outcome::Failed(ErrorKind::NotFound)
		);
	}

	#[test]
	fn call_sites_render_kind_and_endpoint() {
		assert_eq!(CallSite::TOKEN.to_string(), "token_exchange:token");
		assert_eq!(CallSite::invoke("confirm_payment").to_string(), "invoke:confirm_payment");
	}
}
