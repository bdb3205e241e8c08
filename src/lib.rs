//! cattree: build category trees from a flat, self-referencing table and
//! compare two assembly strategies.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
