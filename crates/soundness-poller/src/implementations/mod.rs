//! Receipt source implementations.
//!
//! Available implementations:
//! - `evm::alloy`: JSON-RPC over HTTP using the Alloy provider stack

pub mod evm;
