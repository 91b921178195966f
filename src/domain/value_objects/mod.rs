//! Value objects - Immutable objects defined by their attributes

mod dice;
mod ids;
mod narration;
mod tool_results;

pub use dice::{
    DiceExpression, KeepMode, KeepRule, NotationError, RollResult, ALLOWED_SIDES, MAX_COUNT,
};
pub use ids::*;
pub use narration::{NarrationContext, NarrationTier};
pub use tool_results::ToolOutcome;
