//! Repositories for the four administrative record classes.
//!
//! Notes, warnings, tenure actions and departure actions are owned by a clan and a player tag
//! and are either live or archived. Archived rows are only returned when a caller asks for
//! them.

pub mod departure_action;
pub mod note;
pub mod tenure_action;
pub mod warning;

#[cfg(test)]
mod tests;
