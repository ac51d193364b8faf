//! Server application models and type definitions.
//!
//! Application state shared with HTTP handlers and type aliases for database models.

pub mod app;
pub mod db;
