//! Adapter implementations of the Project Manager repository ports.

pub mod memory;
pub mod postgres;
