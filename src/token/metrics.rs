// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for token cache decisions and exchanges.
#[derive(Debug, Default)]
pub struct ExchangeMetrics {
	exchanges: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
	reuses: AtomicU64,
}
impl ExchangeMetrics {
	/// Returns the number of exchanges sent to the token endpoint.
	pub fn exchanges(&self) -> u64 {
		self.exchanges.load(Ordering::Relaxed)
	}

	/// Returns the number of successful exchanges.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of failed exchanges.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	/// Returns how many token requests were served without a new exchange (cache hits and
	/// callers coalesced onto another caller's exchange).
	pub fn reuses(&self) -> u64 {
		self.reuses.load(Ordering::Relaxed)
	}

	pub(crate) fn record_exchange(&self) {
		self.exchanges.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.success.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failure.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_reuse(&self) {
		self.reuses.fetch_add(1, Ordering::Relaxed);
	}
}
