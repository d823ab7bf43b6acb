//! CLI command modules.

pub mod action;
pub mod http;
pub mod status;
