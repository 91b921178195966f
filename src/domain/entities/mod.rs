//! Entities - Objects with identity and lifecycle

mod campaign_progress;
mod summary_checkpoint;

pub use campaign_progress::{
    calculate_chapter, is_chapter_boundary, CampaignProgress, ProgressionError, ProgressionState,
    RoundAdvance, DEFAULT_ROUNDS_PER_CHAPTER,
};
pub use summary_checkpoint::{
    should_summarize, SummaryCheckpoint, SummaryObligation, DEFAULT_SUMMARY_THRESHOLD,
};
