//! Field validation shared by every constructor in the crate.
//!
//! Rules are pure functions; [`limits`] collects the platform's published
//! field limits so that each constructor states its bounds by name.

pub mod limits;
pub mod rules;
