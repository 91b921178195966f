//! Tool-call outcomes returned by the AI tiers
//!
//! Every tool result the engine consumes is one of these variants, matched
//! exhaustively by callers. There is no free-form field probing: a result
//! either fits a variant or is rejected at the adapter boundary.

use serde::{Deserialize, Serialize};

use super::dice::RollResult;

/// Closed union of results a tier's tool call can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolOutcome {
    /// A dice roll performed on behalf of the narrator.
    DiceRoll { result: RollResult },

    /// A rules-text lookup.
    RuleLookup { topic: String, ruling: String },

    /// A change to tracked campaign state (HP, inventory, flags).
    StateUpdate { field: String, value: serde_json::Value },

    /// A long-term memory written by the DIRECTOR tier.
    MemorySave { key: String, content: String },

    /// An encounter produced by the DIRECTOR tier.
    EncounterGenerated { name: String, description: String },

    /// An NPC produced by the DIRECTOR tier.
    NpcGenerated { name: String, archetype: String },
}

impl ToolOutcome {
    /// The tool name this outcome corresponds to.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DiceRoll { .. } => "roll_dice",
            Self::RuleLookup { .. } => "lookup_rule",
            Self::StateUpdate { .. } => "update_state",
            Self::MemorySave { .. } => "save_memory",
            Self::EncounterGenerated { .. } => "generate_encounter",
            Self::NpcGenerated { .. } => "generate_npc",
        }
    }

    /// Check this outcome against a tier's allowed tool set.
    pub fn is_allowed(&self, allowed_tools: &[&str]) -> bool {
        allowed_tools.iter().any(|tool| *tool == self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NarrationTier;

    #[test]
    fn test_outcome_names() {
        let lookup = ToolOutcome::RuleLookup {
            topic: "grappling".to_string(),
            ruling: "Contested athletics check".to_string(),
        };
        assert_eq!(lookup.name(), "lookup_rule");

        let npc = ToolOutcome::NpcGenerated {
            name: "Maro".to_string(),
            archetype: "Smuggler".to_string(),
        };
        assert_eq!(npc.name(), "generate_npc");
    }

    #[test]
    fn test_tier_allow_lists() {
        let memory = ToolOutcome::MemorySave {
            key: "act1".to_string(),
            content: "The party owes the guild a favor".to_string(),
        };
        assert!(memory.is_allowed(NarrationTier::Director.tool_names()));
        assert!(!memory.is_allowed(NarrationTier::Dm.tool_names()));
    }
}
