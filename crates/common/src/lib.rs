//! Shared types used across the inventory engine and its front ends.

pub mod types;

pub use types::ProductId;
