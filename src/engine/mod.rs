//! High-level operations: per-caller traversal sessions.

pub mod session;

pub use session::{Session, Snapshot, SubmitReport};
