//! # mastery-core
//!
//! Core types, validation rules, and derived metrics for the mastery tracker.
//!
//! This crate holds everything that does not touch storage:
//! - Record structs for learning streams, habits, and journal entries
//! - Create drafts and the validation that turns them into insertable records
//! - The field-level error taxonomy and its user-facing messages
//! - Workspace import/export documents
//! - Pure dashboard metrics and text preview helpers

pub mod entities;
pub mod errors;
pub mod input;
pub mod metrics;
pub mod palette;
pub mod text;
pub mod workspace;
