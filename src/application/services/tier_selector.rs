//! Tier selector - Routes narration requests to DM or DIRECTOR
//!
//! DM handles immediate narrative turns; DIRECTOR handles macro planning.
//! Selection is stateless: it reads only the input text and the read-only
//! narration context.

use crate::domain::value_objects::{NarrationContext, NarrationTier};

/// Words that signal the player is thinking at campaign scale.
pub const STRATEGIC_KEYWORDS: &[&str] = &[
    "campaign",
    "story",
    "chapter",
    "plot",
    "pacing",
    "direction",
    "arc",
    "overall",
];

/// Every Nth round is a strategic checkpoint handled by the DIRECTOR.
pub const DIRECTOR_CHECKPOINT_INTERVAL: u32 = 20;

/// Choose which AI tier should handle a narration request.
pub fn select_tier(input: &str, context: &NarrationContext) -> NarrationTier {
    select_tier_with(input, context, DIRECTOR_CHECKPOINT_INTERVAL)
}

/// [`select_tier`] with a configurable checkpoint interval.
pub fn select_tier_with(
    input: &str,
    context: &NarrationContext,
    checkpoint_interval: u32,
) -> NarrationTier {
    if checkpoint_interval > 0 && context.current_round % checkpoint_interval == 0 {
        return NarrationTier::Director;
    }

    let lowered = input.to_lowercase();
    // Whole-word match so "arcane" does not read as "arc".
    let mut words = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty());
    if words.any(|word| STRATEGIC_KEYWORDS.contains(&word)) {
        return NarrationTier::Director;
    }

    NarrationTier::Dm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(round: u32) -> NarrationContext {
        NarrationContext {
            current_round: round,
            current_chapter: 1,
            running_summary: None,
        }
    }

    #[test]
    fn test_plain_action_goes_to_dm() {
        assert_eq!(
            select_tier("I attack the goblin with my axe", &context(7)),
            NarrationTier::Dm
        );
    }

    #[test]
    fn test_strategic_keyword_selects_director() {
        assert_eq!(
            select_tier("Where is the overall story heading?", &context(7)),
            NarrationTier::Director
        );
        assert_eq!(
            select_tier("Let's slow the PACING down", &context(7)),
            NarrationTier::Director
        );
    }

    #[test]
    fn test_checkpoint_round_selects_director() {
        assert_eq!(select_tier("I open the door", &context(20)), NarrationTier::Director);
        assert_eq!(select_tier("I open the door", &context(40)), NarrationTier::Director);
        assert_eq!(select_tier("I open the door", &context(21)), NarrationTier::Dm);
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        assert_eq!(
            select_tier("I cast an arcane bolt", &context(7)),
            NarrationTier::Dm
        );
        assert_eq!(
            select_tier("The arc of this chapter feels off", &context(7)),
            NarrationTier::Director
        );
    }
}
