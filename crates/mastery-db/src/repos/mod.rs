//! Repository modules implementing the workspace operations.
//!
//! Each module adds methods to `MasteryService` via `impl MasteryService` blocks.

pub mod dashboard;
pub mod habit;
pub mod journal;
pub mod seed;
pub mod stream;
pub mod workspace;
