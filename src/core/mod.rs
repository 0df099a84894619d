//! Core types: protocol-agnostic contracts for tools and their failures.

pub mod error;
pub mod mcp;
pub mod tool;
