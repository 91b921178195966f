//! Roll result wire format
//!
//! `{ total, rolls: [...kept], dropped_rolls: [...], notation }` per roll; a
//! compound (comma-separated) request reports each sub-result plus a grand
//! total.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RollResult;

/// Display form of a single resolved roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    pub total: i32,
    /// Kept rolls only.
    pub rolls: Vec<u32>,
    pub dropped_rolls: Vec<u32>,
    pub notation: String,
}

impl From<&RollResult> for RollReport {
    fn from(result: &RollResult) -> Self {
        Self {
            total: result.total,
            rolls: result.kept_rolls.clone(),
            dropped_rolls: result.dropped_rolls.clone(),
            notation: result.expression.notation(),
        }
    }
}

/// Display form of a compound roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundRollReport {
    pub rolls: Vec<RollReport>,
    pub grand_total: i32,
}

impl CompoundRollReport {
    pub fn from_results(results: &[RollResult]) -> Self {
        Self {
            rolls: results.iter().map(RollReport::from).collect(),
            grand_total: results.iter().map(|r| r.total).sum(),
        }
    }

    /// A single-expression request is just a one-element compound.
    pub fn is_single(&self) -> bool {
        self.rolls.len() == 1
    }
}
