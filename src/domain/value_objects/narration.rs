//! Narration tier value objects
//!
//! The engine only decides *which* AI tier handles a narration request; prompt
//! content belongs to the host. DM handles immediate narrative turns, DIRECTOR
//! handles macro planning, and each tier gets a disjoint tool set.

use serde::{Deserialize, Serialize};

/// AI tier responsible for a narration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NarrationTier {
    /// Immediate, in-scene narration.
    Dm,
    /// Strategic campaign-level planning.
    Director,
}

impl NarrationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dm => "DM",
            Self::Director => "DIRECTOR",
        }
    }

    /// Tools this tier may invoke. The two sets are disjoint: the DM drives
    /// moment-to-moment mechanics, the DIRECTOR shapes the campaign.
    pub fn tool_names(&self) -> &'static [&'static str] {
        match self {
            Self::Dm => &["roll_dice", "lookup_rule", "update_state"],
            Self::Director => &["save_memory", "generate_encounter", "generate_npc"],
        }
    }
}

impl std::fmt::Display for NarrationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only context handed to tier selection and narration generation.
///
/// Shared between tiers only as an immutable snapshot; the two selections
/// never share mutable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationContext {
    pub current_round: u32,
    pub current_chapter: u32,
    /// Rolling summary of the campaign so far, if one exists.
    pub running_summary: Option<String>,
}
