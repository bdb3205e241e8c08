//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on the record store trait.

pub mod error;
pub mod services;
pub mod timing;

pub use error::{ApplicationError, ApplicationResult};
pub use timing::{measure, Timed};
