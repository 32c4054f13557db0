//! HTTP plumbing shared by the entity handlers.
//!
//! - [`ApiError`] maps service failures to status codes and the JSON error
//!   envelope.
//! - [`Payload`] and [`EntityId`] extract request bodies and path ids,
//!   converting rejections into the same error taxonomy.
//! - [`created`] and [`optional`] shape the non-trivial success responses.

mod error;
mod extract;
mod panic;
mod response;

pub use error::{ApiError, ErrorEnvelope};
pub use extract::{EntityId, Payload};
pub use panic::handle_panic;
pub use response::{created, optional};
