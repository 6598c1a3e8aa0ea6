//! Shared test utilities for biochat integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing here touches the network.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
