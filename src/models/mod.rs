//! Data models for the squad dashboard.
//!
//! These models match the frontend interfaces exactly for seamless
//! interoperability; all wire-facing types serialize as camelCase JSON.

mod clip;
mod matches;
mod member;

pub use clip::*;
pub use matches::*;
pub use member::*;
