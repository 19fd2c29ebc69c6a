// self
use crate::obs::{CallSite, Outcome};

/// Counts `outcome` for `site` on the global recorder.
pub fn record_outcome(site: CallSite, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(
		"enzona_client_calls_total",
		"operation" => site.kind.as_str(),
		"endpoint" => site.endpoint,
		"outcome" => outcome.as_str()
	)
	.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (site, outcome);
}

/// Records how long a finished call to `site` took.
pub fn record_latency(site: CallSite, elapsed: std::time::Duration) {
	#[cfg(feature = "metrics")]
	metrics::histogram!(
		"enzona_client_call_duration_seconds",
		"operation" => site.kind.as_str(),
		"endpoint" => site.endpoint
	)
	.record(elapsed.as_secs_f64());

	#[cfg(not(feature = "metrics"))]
	let _ = (site, elapsed);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn recording_without_a_recorder_is_a_noop() {
		let site = CallSite::invoke("list_payments");

		record_outcome(site, Outcome::Started);
		record_outcome(site, Outcome::Failed(ErrorKind::Timeout));
		record_latency(site, std::time::Duration::from_millis(12));
	}
}
