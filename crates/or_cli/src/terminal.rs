//! Terminal display surface.

use or_core::{DisplayError, DisplaySurface, Operator, SlotContent, SlotId};

const EMPTY_LABEL: &str = "(empty)";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Operator { name: String, icon_path: String },
    Empty,
}

/// Fixed panel of text rows, one per slot id, in slot order.
///
/// Rows hold the last content written to them; `print_panel` draws the
/// whole panel, so after a render pass the printed picture is always
/// complete and current.
#[derive(Debug)]
pub struct TerminalSurface {
    rows: Vec<(SlotId, Row)>,
}

impl TerminalSurface {
    pub fn new(slots: &[SlotId]) -> Self {
        Self {
            rows: slots.iter().map(|id| (id.clone(), Row::Empty)).collect(),
        }
    }

    pub fn print_panel(&self) {
        for (slot, row) in &self.rows {
            match row {
                Row::Operator { name, icon_path } => {
                    println!("   {:<8} {:<12} {}", slot.as_str(), name, icon_path);
                }
                Row::Empty => {
                    println!("   {:<8} {}", slot.as_str(), EMPTY_LABEL);
                }
            }
        }
    }

    #[cfg(test)]
    fn row(&self, slot: &SlotId) -> Option<&Row> {
        self.rows.iter().find(|(id, _)| id == slot).map(|(_, r)| r)
    }
}

impl DisplaySurface for TerminalSurface {
    fn set_slot(&mut self, slot: &SlotId, content: SlotContent<'_>) -> Result<(), DisplayError> {
        let row = self
            .rows
            .iter_mut()
            .find(|(id, _)| id == slot)
            .ok_or_else(|| DisplayError::UnknownSlot {
                slot: slot.to_string(),
            })?;
        row.1 = match content {
            SlotContent::Operator(op) => row_for(op),
            SlotContent::Empty => Row::Empty,
        };
        Ok(())
    }
}

fn row_for(op: &Operator) -> Row {
    Row::Operator {
        name: op.name.clone(),
        icon_path: op.icon_path.clone(),
    }
}
