//! Summary scheduler - Decides when narrative summaries must be (re)generated
//!
//! Two independent triggers:
//! - Ordinary: the pending-message count reaches the threshold.
//! - Chapter close: every chapter boundary, regardless of the ordinary state.
//!
//! Dispatch is best-effort. A summarizer failure is logged and swallowed; it
//! never invalidates the round advance that produced the obligation.

use crate::application::ports::outbound::SummarizerPort;
use crate::domain::entities::{RoundAdvance, SummaryCheckpoint, SummaryObligation};
use crate::domain::value_objects::CampaignId;

/// Scheduler for summarization obligations.
#[derive(Debug, Clone)]
pub struct SummaryScheduler {
    threshold: u32,
    rounds_per_chapter: u32,
}

impl SummaryScheduler {
    pub fn new(threshold: u32, rounds_per_chapter: u32) -> Self {
        Self {
            threshold,
            rounds_per_chapter,
        }
    }

    /// Collect the obligations owed after a successful round advance.
    ///
    /// Chapter-close is evaluated first and does not reset the ordinary
    /// baseline; both obligations can be owed from a single advance.
    pub fn obligations_after_advance(
        &self,
        checkpoint: &mut SummaryCheckpoint,
        advance: &RoundAdvance,
    ) -> Vec<SummaryObligation> {
        let mut obligations = Vec::new();

        if advance.crossed_chapter_boundary {
            // The chapter containing the previous round just finished.
            obligations.push(SummaryObligation::chapter_close(
                advance.round - 1,
                self.rounds_per_chapter,
            ));
        }

        if checkpoint.ordinary_due(self.threshold) {
            obligations.push(checkpoint.take_ordinary(advance.round));
        }

        obligations
    }

    /// Run the summarizer for each obligation, isolating failures.
    pub async fn dispatch<S: SummarizerPort>(
        &self,
        summarizer: &S,
        campaign_id: CampaignId,
        obligations: &[SummaryObligation],
    ) {
        for obligation in obligations {
            match summarizer.summarize(campaign_id, obligation).await {
                Ok(()) => {
                    tracing::info!(%campaign_id, ?obligation, "summary generated");
                }
                Err(e) => {
                    // Best-effort: the round advance already succeeded.
                    tracing::warn!(%campaign_id, ?obligation, error = %e, "summarization failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use anyhow::Result;
    use async_trait::async_trait;

    use super::*;

    fn advance(round: u32, crossed: bool) -> RoundAdvance {
        RoundAdvance {
            round,
            chapter: round.div_ceil(25),
            is_complete: false,
            crossed_chapter_boundary: crossed,
        }
    }

    #[test]
    fn test_no_obligations_mid_chapter_below_threshold() {
        let scheduler = SummaryScheduler::new(10, 25);
        let mut checkpoint = SummaryCheckpoint::new();
        checkpoint.record_message("m1");
        let obligations = scheduler.obligations_after_advance(&mut checkpoint, &advance(5, false));
        assert!(obligations.is_empty());
        assert_eq!(checkpoint.pending_message_count(), 1);
    }

    #[test]
    fn test_ordinary_obligation_resets_baseline() {
        let scheduler = SummaryScheduler::new(10, 25);
        let mut checkpoint = SummaryCheckpoint::new();
        for i in 0..10 {
            checkpoint.record_message(format!("m{i}"));
        }
        let obligations = scheduler.obligations_after_advance(&mut checkpoint, &advance(8, false));
        assert_eq!(
            obligations,
            vec![SummaryObligation::Ordinary { through_round: 8 }]
        );
        assert_eq!(checkpoint.pending_message_count(), 0);

        // Same accumulated set cannot re-trigger.
        let again = scheduler.obligations_after_advance(&mut checkpoint, &advance(9, false));
        assert!(again.is_empty());
    }

    #[test]
    fn test_chapter_boundary_always_emits_close() {
        let scheduler = SummaryScheduler::new(10, 25);
        let mut checkpoint = SummaryCheckpoint::new();
        let obligations = scheduler.obligations_after_advance(&mut checkpoint, &advance(26, true));
        assert_eq!(
            obligations,
            vec![SummaryObligation::ChapterClose {
                chapter: 1,
                first_round: 1,
                last_round: 25,
            }]
        );
    }

    #[test]
    fn test_boundary_and_threshold_both_emit() {
        let scheduler = SummaryScheduler::new(10, 25);
        let mut checkpoint = SummaryCheckpoint::new();
        for i in 0..12 {
            checkpoint.record_message(format!("m{i}"));
        }
        let obligations = scheduler.obligations_after_advance(&mut checkpoint, &advance(26, true));
        assert_eq!(obligations.len(), 2);
        assert!(matches!(
            obligations[0],
            SummaryObligation::ChapterClose { chapter: 1, .. }
        ));
        assert_eq!(
            obligations[1],
            SummaryObligation::Ordinary { through_round: 26 }
        );
    }

    struct FailingSummarizer {
        calls: AtomicU32,
    }

    #[async_trait]
    impl SummarizerPort for FailingSummarizer {
        async fn summarize(
            &self,
            _campaign_id: CampaignId,
            _obligation: &SummaryObligation,
        ) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("summary backend unavailable")
        }
    }

    #[tokio::test]
    async fn test_dispatch_swallows_failures() {
        let scheduler = SummaryScheduler::new(10, 25);
        let summarizer = FailingSummarizer {
            calls: AtomicU32::new(0),
        };
        let obligations = vec![
            SummaryObligation::Ordinary { through_round: 4 },
            SummaryObligation::chapter_close(25, 25),
        ];
        // Must not panic or propagate.
        scheduler
            .dispatch(&summarizer, CampaignId::new(), &obligations)
            .await;
        assert_eq!(summarizer.calls.load(Ordering::SeqCst), 2);
    }
}
