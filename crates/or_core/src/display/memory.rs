//! In-memory display surface.

use std::collections::HashMap;

use super::{DisplaySurface, SlotContent, SlotId};
use crate::error::DisplayError;

/// The last content written to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Operator { name: String, icon_path: String },
    Empty,
}

impl SlotState {
    pub fn operator(name: impl Into<String>, icon_path: impl Into<String>) -> Self {
        SlotState::Operator {
            name: name.into(),
            icon_path: icon_path.into(),
        }
    }
}

/// Headless surface that records the rendered state per slot.
///
/// Backs the renderer tests and any caller that wants to inspect a render
/// without a real display. Only slots registered up front are known;
/// writes to anything else report [`DisplayError::UnknownSlot`].
#[derive(Debug, Default)]
pub struct MemorySurface {
    slots: HashMap<SlotId, SlotState>,
}

impl MemorySurface {
    /// Surface knowing exactly the given slots, all initially empty.
    pub fn with_slots(slots: &[SlotId]) -> Self {
        Self {
            slots: slots
                .iter()
                .map(|id| (id.clone(), SlotState::Empty))
                .collect(),
        }
    }

    /// Current state of a slot, or `None` if the surface does not know it.
    pub fn slot(&self, id: &SlotId) -> Option<&SlotState> {
        self.slots.get(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_slot(&mut self, slot: &SlotId, content: SlotContent<'_>) -> Result<(), DisplayError> {
        let state = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| DisplayError::UnknownSlot {
                slot: slot.to_string(),
            })?;
        *state = match content {
            SlotContent::Operator(op) => SlotState::operator(op.name.as_str(), op.icon_path.as_str()),
            SlotContent::Empty => SlotState::Empty,
        };
        Ok(())
    }
}
