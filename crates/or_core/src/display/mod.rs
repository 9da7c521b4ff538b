//! Slot display: identifiers, the surface capability trait, and the
//! renderer that writes a selection into a fixed set of slots.

pub mod memory;

pub use memory::{MemorySurface, SlotState};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DisplayError;
use crate::models::Operator;

/// Opaque identifier of one display slot.
///
/// The slot list is fixed at configuration time; surfaces own the mapping
/// from ids to whatever the host display actually is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a slot shows after a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContent<'a> {
    /// The operator's icon and name.
    Operator(&'a Operator),
    /// The placeholder state: no icon, default label.
    Empty,
}

/// Host display capability.
///
/// `set_slot` must fully determine the slot's visible state from `content`
/// alone, so a render pass never leaves stale state behind. A surface that
/// does not know the given slot returns [`DisplayError::UnknownSlot`].
pub trait DisplaySurface {
    fn set_slot(&mut self, slot: &SlotId, content: SlotContent<'_>) -> Result<(), DisplayError>;
}

/// Write `picked` into `slots` in order and clear the remainder.
///
/// Every slot ends in a determined state regardless of how many operators
/// were supplied, so re-rendering with a shorter selection leaves no
/// residue from the previous pass. A slot the surface does not know is
/// skipped with a warning and the remaining slots still render.
///
/// Returns the number of slots actually written.
pub fn render(surface: &mut dyn DisplaySurface, slots: &[SlotId], picked: &[Operator]) -> usize {
    let mut written = 0;
    for (i, slot) in slots.iter().enumerate() {
        let content = match picked.get(i) {
            Some(op) => SlotContent::Operator(op),
            None => SlotContent::Empty,
        };
        match surface.set_slot(slot, content) {
            Ok(()) => written += 1,
            Err(DisplayError::UnknownSlot { .. }) => {
                log::warn!("display surface has no slot {slot}, skipping");
            }
        }
    }
    written
}
