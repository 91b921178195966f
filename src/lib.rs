//! Saga Engine - Session progression core for AI-narrated tabletop campaigns
//!
//! The engine is the deterministic heart of a campaign host:
//! - Parses and resolves dice notation with auditable tie-break rules
//! - Advances round/chapter progression with automatic completion
//! - Admits round-advance requests through a keyed rate limiter
//! - Schedules narrative summarization (threshold and chapter-close)
//! - Routes narration requests to the right AI tier (DM vs DIRECTOR)
//!
//! Authentication, persistence, prompt content, payments, and all routing
//! concerns live in the host application. The engine consumes them through
//! outbound ports and exposes a synchronous core plus a handful of async
//! orchestration services.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::dto::{CompoundRollReport, RollReport};
pub use application::ports::outbound::{
    CreditLedgerPort, CreditReceipt, NarrativePort, SummarizerPort,
};
pub use application::services::{
    roll_dice, roll_dice_with, select_tier, select_tier_with, NarrationError, NarrationOutcome,
    NarrationService, RoundAdvanceError, RoundService, SummaryScheduler,
};
pub use domain::entities::{
    calculate_chapter, is_chapter_boundary, should_summarize, CampaignProgress, ProgressionError,
    ProgressionState, RoundAdvance, SummaryCheckpoint, SummaryObligation,
};
pub use domain::services::{parse, parse_compound, resolve, DiceRng, RandomSource};
pub use domain::value_objects::{
    CampaignId, DiceExpression, KeepMode, KeepRule, NarrationContext, NarrationTier,
    NotationError, RollResult, ToolOutcome,
};
pub use infrastructure::config::EngineConfig;
pub use infrastructure::rate_limiter::{RateLimitDecision, RateLimiter};
