//! Summarization checkpoint
//!
//! Tracks how many messages have accumulated since the last narrative summary
//! and emits summarization obligations. Ordinary (threshold) and chapter-close
//! obligations are independent: a chapter closing never suppresses a due
//! ordinary summary, and vice versa.

use serde::{Deserialize, Serialize};

use super::campaign_progress::calculate_chapter;

/// Message count at which an ordinary summary becomes due.
pub const DEFAULT_SUMMARY_THRESHOLD: u32 = 10;

/// True exactly when enough messages have accumulated for an ordinary summary.
pub fn should_summarize(pending_message_count: u32, threshold: u32) -> bool {
    pending_message_count >= threshold
}

/// A summary the host must (re)generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryObligation {
    /// Rolling summary covering everything up to the current round.
    Ordinary { through_round: u32 },
    /// Closing summary for a finished chapter, scoped to exactly its rounds.
    ChapterClose {
        chapter: u32,
        first_round: u32,
        last_round: u32,
    },
}

impl SummaryObligation {
    /// Build the closing obligation for the chapter that contains `last_round`.
    pub fn chapter_close(last_round: u32, rounds_per_chapter: u32) -> Self {
        let chapter = calculate_chapter(last_round, rounds_per_chapter);
        Self::ChapterClose {
            chapter,
            first_round: (chapter - 1) * rounds_per_chapter + 1,
            last_round,
        }
    }
}

/// Per-campaign summarization bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCheckpoint {
    last_summarized_round: u32,
    last_summarized_message_id: Option<String>,
    latest_message_id: Option<String>,
    pending_message_count: u32,
}

impl SummaryCheckpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_message_count(&self) -> u32 {
        self.pending_message_count
    }

    pub fn last_summarized_round(&self) -> u32 {
        self.last_summarized_round
    }

    pub fn last_summarized_message_id(&self) -> Option<&str> {
        self.last_summarized_message_id.as_deref()
    }

    /// Count one message toward the ordinary threshold.
    pub fn record_message(&mut self, message_id: impl Into<String>) {
        self.pending_message_count += 1;
        self.latest_message_id = Some(message_id.into());
    }

    /// Whether an ordinary summary is due at `threshold`.
    pub fn ordinary_due(&self, threshold: u32) -> bool {
        should_summarize(self.pending_message_count, threshold)
    }

    /// Emit the ordinary obligation and reset the baseline so the same
    /// accumulated messages cannot trigger twice.
    pub fn take_ordinary(&mut self, current_round: u32) -> SummaryObligation {
        self.pending_message_count = 0;
        self.last_summarized_round = current_round;
        self.last_summarized_message_id = self.latest_message_id.take();
        SummaryObligation::Ordinary {
            through_round: current_round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_predicate() {
        assert!(should_summarize(10, 10));
        assert!(should_summarize(11, 10));
        assert!(!should_summarize(9, 10));
    }

    #[test]
    fn test_no_double_trigger_on_same_messages() {
        let mut checkpoint = SummaryCheckpoint::new();
        for i in 0..10 {
            checkpoint.record_message(format!("msg-{i}"));
        }
        assert!(checkpoint.ordinary_due(DEFAULT_SUMMARY_THRESHOLD));
        let obligation = checkpoint.take_ordinary(12);
        assert_eq!(obligation, SummaryObligation::Ordinary { through_round: 12 });
        // Baseline restarts at zero.
        assert_eq!(checkpoint.pending_message_count(), 0);
        assert!(!checkpoint.ordinary_due(DEFAULT_SUMMARY_THRESHOLD));
    }

    #[test]
    fn test_chapter_close_scope() {
        let obligation = SummaryObligation::chapter_close(25, 25);
        assert_eq!(
            obligation,
            SummaryObligation::ChapterClose {
                chapter: 1,
                first_round: 1,
                last_round: 25,
            }
        );
        let obligation = SummaryObligation::chapter_close(50, 25);
        assert_eq!(
            obligation,
            SummaryObligation::ChapterClose {
                chapter: 2,
                first_round: 26,
                last_round: 50,
            }
        );
    }

    #[test]
    fn test_chapter_close_leaves_ordinary_baseline_alone() {
        let mut checkpoint = SummaryCheckpoint::new();
        for i in 0..9 {
            checkpoint.record_message(format!("msg-{i}"));
        }
        let _ = SummaryObligation::chapter_close(25, 25);
        // Still one message short of the ordinary threshold.
        assert_eq!(checkpoint.pending_message_count(), 9);
        assert!(!checkpoint.ordinary_due(DEFAULT_SUMMARY_THRESHOLD));
        checkpoint.record_message("msg-9");
        assert!(checkpoint.ordinary_due(DEFAULT_SUMMARY_THRESHOLD));
    }
}
