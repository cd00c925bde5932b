//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; logs go through `tracing`.

pub mod list;
pub mod sample;
pub mod show;
