//! Shared types for the transaction soundness checker.
//!
//! This crate holds the validated inputs (transaction hashes, RPC endpoints,
//! poll requests), the subset of an on-chain receipt the checker reads, and
//! the input error taxonomy shared by the other crates.

pub mod endpoint;
pub mod errors;
pub mod hash;
pub mod poll;
pub mod receipt;

pub use endpoint::*;
pub use errors::*;
pub use hash::*;
pub use poll::*;
pub use receipt::*;
