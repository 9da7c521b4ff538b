//! Draft context: the two rosters plus the slot configuration.
//!
//! The context is passed explicitly into calls instead of living in
//! ambient state, so load-before-use ordering is visible at the call site.

use rand::Rng;

use crate::display::SlotId;
use crate::models::{Operator, Roster, Side};
use crate::sampler;

/// Number of display slots in the reference layout.
pub const DEFAULT_SLOT_COUNT: usize = 5;

/// Slot list and selection size for one draft panel.
///
/// Fixed at configuration time; slots are never created or destroyed at
/// runtime.
#[derive(Debug, Clone)]
pub struct DraftConfig {
    pub slots: Vec<SlotId>,
    pub sample_size: usize,
}

impl Default for DraftConfig {
    /// Five picks into five slots, `slot-1` through `slot-5`.
    fn default() -> Self {
        Self::with_slot_count(DEFAULT_SLOT_COUNT)
    }
}

impl DraftConfig {
    pub fn with_slot_count(count: usize) -> Self {
        let slots = (1..=count)
            .map(|i| SlotId::new(format!("slot-{i}")))
            .collect();
        Self {
            slots,
            sample_size: count,
        }
    }
}

/// Owns the attacker and defender rosters consumed by randomize calls.
///
/// Rosters are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    attackers: Roster,
    defenders: Roster,
}

impl DraftState {
    pub fn new(attackers: Roster, defenders: Roster) -> Self {
        Self {
            attackers,
            defenders,
        }
    }

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Attack => &self.attackers,
            Side::Defend => &self.defenders,
        }
    }

    /// True once the side's roster holds at least one operator.
    pub fn is_ready(&self, side: Side) -> bool {
        !self.roster(side).is_empty()
    }

    /// Draw `count` unique operators from one side's roster.
    ///
    /// Invoking this before the side's roster has loaded (or after a
    /// failed load) goes through the empty-roster path: the selection is
    /// empty, a warning is logged, and the subsequent render clears every
    /// slot. That is the sole defined behavior for premature invocation.
    pub fn randomize<R: Rng + ?Sized>(
        &self,
        side: Side,
        count: usize,
        rng: &mut R,
    ) -> Vec<Operator> {
        if !self.is_ready(side) {
            log::warn!("{side} roster is empty or not loaded; all slots will clear");
        }
        sampler::sample_unique(self.roster(side), count, rng)
    }
}
