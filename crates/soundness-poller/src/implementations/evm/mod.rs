//! EVM-compatible chains.

pub mod alloy;
