use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable operator: display name plus icon asset path.
///
/// Field names follow the JSON asset format (`name`, `iconPath`). Records
/// are immutable after load; sampling treats every record as distinct, so
/// duplicates in the source data stay duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub name: String,
    pub icon_path: String,
}

impl Operator {
    pub fn new(name: impl Into<String>, icon_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_path: icon_path.into(),
        }
    }
}

/// Roster category: which of the two rosters an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Attack,
    Defend,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Attack, Side::Defend];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attack => write!(f, "attacker"),
            Side::Defend => write!(f, "defender"),
        }
    }
}
