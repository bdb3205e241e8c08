//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the `RecordStore` boundary trait but are themselves
//! concrete structs, not traits.

mod benchmark;
mod seed;

pub use benchmark::{BenchmarkService, Comparison};
pub use seed::{SeedOutcome, SeedService};
