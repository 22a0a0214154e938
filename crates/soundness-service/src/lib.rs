//! Command-line driver for the transaction soundness checker.
//!
//! # Components
//!
//! - `cli`: Command-line arguments and configuration resolution
//! - `error`: Error taxonomy and process exit codes
//! - `report`: Text and JSON rendering of a completed check
//! - `service`: The validate, connect, poll, report workflow

pub mod cli;
pub mod error;
pub mod report;
pub mod service;

pub use error::{CheckError, EXIT_INVALID, EXIT_NOT_FOUND, EXIT_OK};
pub use report::InclusionReport;
pub use service::CheckService;
