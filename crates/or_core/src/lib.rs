//! # or_core - Operator Roulette Core
//!
//! This library provides the roster sampling and slot display core for the
//! operator roulette: load a roster per side, draw a fixed-size random
//! selection of unique operators, and write it into a bounded set of
//! display slots.
//!
//! ## Features
//! - Unbiased Fisher-Yates sampling without replacement
//! - Defined degrade paths for empty and undersized rosters
//! - Display surface trait so rendering is host-agnostic and testable
//! - JSON roster assets with embedded defaults

pub mod data;
pub mod display;
pub mod draft;
pub mod error;
pub mod models;
pub mod sampler;

// Re-export the main API types
pub use data::{load_roster, read_roster};
pub use display::{render, DisplaySurface, MemorySurface, SlotContent, SlotId, SlotState};
pub use draft::{DraftConfig, DraftState, DEFAULT_SLOT_COUNT};
pub use error::{DisplayError, RosterError};
pub use models::{Operator, Roster, Side};
pub use sampler::sample_unique;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
