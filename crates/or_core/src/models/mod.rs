//! Core data types: operator records, sides, rosters.

pub mod operator;
pub mod roster;

pub use operator::{Operator, Side};
pub use roster::Roster;
