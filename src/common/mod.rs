//! Value types, identifiers and payload validation shared by the Task Manager
//! and Project Manager APIs.

mod error;
mod ids;
mod priority;
mod validation;
mod wire;

pub use error::{MODEL_STATE_ERROR, ParseEnumError, ServiceError, ServiceResult};
pub use ids::{ProjectId, TaskId, UserId};
pub use priority::Priority;
pub use validation::{ModelState, Validate};
pub use wire::EnumRepr;
