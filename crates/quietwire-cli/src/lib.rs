//! Command-line setup and status tooling for Quietwire.

pub mod analyse;
pub mod logging;
pub mod setup;
pub mod status;
