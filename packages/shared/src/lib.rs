//! Shared utilities for Agora.
//!
//! Logging setup and clock helpers used by every package in the workspace.

pub mod logger;
pub mod time;
