// self
use crate::{_prelude::*, obs::CallSite};

/// Future returned by [`CallSpan::instrument`]; a plain passthrough without `tracing`.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`CallSpan::instrument`]; a plain passthrough without `tracing`.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapping one token exchange or endpoint call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens the span for `site` with `http.status` and `error.kind` left empty.
	pub fn new(site: CallSite) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"enzona_client.call",
				operation = site.kind.as_str(),
				endpoint = site.endpoint,
				http.status = tracing::field::Empty,
				error.kind = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = site;

			Self {}
		}
	}

	/// Runs `fut` inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Records the HTTP status of the response on the current call span.
pub fn record_status(status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::Span::current().record("http.status", status);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = status;
	}
}

/// Emits a debug event describing a token cache decision.
pub fn trace_token_cache(event: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(event, "token cache decision");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = event;
	}
}

/// Tags the current call span with the failure kind and emits a debug event for it.
pub fn trace_failure(err: &Error) {
	#[cfg(feature = "tracing")]
	{
		let span = tracing::Span::current();

		span.record("error.kind", err.kind().as_str());

		if let Some(status) = err.status() {
			span.record("http.status", status);
		}

		tracing::debug!(kind = err.kind().as_str(), status = err.status(), "call failed");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = err;
	}
}
