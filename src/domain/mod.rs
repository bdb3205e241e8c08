//! Domain layer: records, forests and the tree assembly strategies
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod forest;

pub use arena::{ArenaNode, NodeArena};
pub use builder::{build_by_scan, build_indexed, Strategy};
pub use catalog::{sample_catalog, synthetic_catalog, SeedCategory, SyntheticShape};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use forest::{Forest, ForestIter, Node};
