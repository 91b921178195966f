//! Application services - Use case implementations

pub mod dice_service;
pub mod narration_service;
pub mod round_service;
pub mod summary_service;
pub mod tier_selector;

pub use dice_service::{roll_dice, roll_dice_with};
pub use narration_service::{NarrationError, NarrationOutcome, NarrationService};
pub use round_service::{RoundAdvanceError, RoundService};
pub use summary_service::SummaryScheduler;
pub use tier_selector::{
    select_tier, select_tier_with, DIRECTOR_CHECKPOINT_INTERVAL, STRATEGIC_KEYWORDS,
};
