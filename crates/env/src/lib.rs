//! Environment handling for ssmrun
//!
//! This crate covers the resolve-and-launch pipeline: scanning the ambient
//! environment for secret references, resolving them against a parameter
//! store, and launching the wrapped command with the augmented environment.

pub mod invocation;
pub mod launcher;
pub mod scanner;
pub mod store;

pub use invocation::Invocation;
pub use store::{ParameterStore, SsmStore};
