// self
use crate::{
	_prelude::*,
	endpoint,
	executor::RequestExecutor,
	http::HttpTransport,
	model::{ClaimReceipt, CreateClaimRequest},
};

/// Typed claim operations; obtained from
/// [`EnzonaClient::claims`](crate::client::EnzonaClient::claims).
#[derive(Debug)]
pub struct Claims<'c, C>
where
	C: ?Sized + HttpTransport,
{
	executor: &'c RequestExecutor<C>,
}
impl<'c, C> Claims<'c, C>
where
	C: ?Sized + HttpTransport,
{
	pub(super) fn new(executor: &'c RequestExecutor<C>) -> Self {
		Self { executor }
	}

	/// Files a claim against a payment operation.
	pub async fn create(&self, request: &CreateClaimRequest) -> Result<ClaimReceipt> {
		self.executor.invoke(endpoint::CREATE_CLAIM.request().body(request)).await
	}
}
