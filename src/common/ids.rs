//! Identity-column wrappers for persisted entities.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw identity value.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw identity value.
            #[must_use]
            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Store-generated identifier of a task row.
    TaskId
);
entity_id!(
    /// Store-generated identifier of a project row.
    ProjectId
);
entity_id!(
    /// Store-generated identifier of a user row.
    UserId
);
