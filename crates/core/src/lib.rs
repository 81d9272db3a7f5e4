//! Core domain types, errors, and constants for `ssmrun`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all failure modes of the resolve-and-launch pipeline.
//! - **`types`**: Secret-handling types (`SecretString`, `ResolvedSecrets`)
//!   that keep plaintext out of logs and zero it on drop.
//! - **`constants`**: Shared constants such as the secret-reference suffix.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::{ResolvedSecrets, SecretString},
};
