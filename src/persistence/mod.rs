//! Persistence plumbing shared by every repository adapter.
//!
//! Defines the repository error taxonomy and the `PostgreSQL` connection pool
//! helpers. Diesel is synchronous, so every pooled operation runs on the
//! blocking thread pool through [`run_blocking`].

mod error;
mod pool;

pub use error::{RepositoryError, RepositoryResult};
pub use pool::{PgPool, connect, run_blocking};
