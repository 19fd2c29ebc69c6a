//! Request and response records of the payment API.
//!
//! Records are plain serde data. Requests serialize camelCase and omit unset fields; responses
//! ignore unknown fields and default the missing ones, so upstream additions never break
//! decoding.

pub mod claim;
pub mod common;
pub mod order;
pub mod payment;
pub mod refund;

pub use claim::*;
pub use common::*;
pub use order::*;
pub use payment::*;
pub use refund::*;
