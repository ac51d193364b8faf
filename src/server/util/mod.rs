//! Utility functions and helpers for server operations.
//!
//! Tag normalization is used by every layer that compares or looks up player tags.

pub mod tag;
