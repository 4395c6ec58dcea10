//! Command implementations for the `bfsx` binary.

pub mod commands;
