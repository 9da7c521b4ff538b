use super::Operator;
use serde::{Deserialize, Serialize};

/// Ordered collection of operators in one category.
///
/// Serializes as a bare JSON array, matching the roster asset files.
/// Created once at load time and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    operators: Vec<Operator>,
}

impl Roster {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self { operators }
    }

    /// The defined fallback for failed loads.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Operator> {
        self.operators.get(index)
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operator> {
        self.operators.iter()
    }
}

impl From<Vec<Operator>> for Roster {
    fn from(operators: Vec<Operator>) -> Self {
        Self::new(operators)
    }
}
