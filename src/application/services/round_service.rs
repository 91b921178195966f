//! Round service - Orchestrates a round-advance request end to end
//!
//! Flow: rate limiter -> credit ledger -> progression transition ->
//! summarization obligations (best-effort). Nothing mutates before its gate
//! passes: a rate-limited or creditless request leaves progression untouched,
//! and a summarizer failure never rolls back a successful advance.
//!
//! Concurrent advances for one campaign must be serialized by the caller (the
//! `&mut CampaignProgress` borrow enforces this in-process; across processes
//! the store must provide an optimistic round check or a transaction).

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::application::ports::outbound::{CreditLedgerPort, SummarizerPort};
use crate::application::services::summary_service::SummaryScheduler;
use crate::domain::entities::{
    CampaignProgress, ProgressionError, RoundAdvance, SummaryCheckpoint,
};
use crate::domain::value_objects::CampaignId;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::rate_limiter::RateLimiter;

/// Errors a round-advance request can surface to the caller.
#[derive(Debug, Error)]
pub enum RoundAdvanceError {
    #[error("rate limited; retry after {reset_time}")]
    RateLimited { reset_time: DateTime<Utc> },

    #[error("no round credits remaining ({remaining} left)")]
    NoCredits { remaining: u32 },

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error("credit ledger failure: {0}")]
    Ledger(String),
}

/// Service advancing campaign rounds behind admission and credit gates.
pub struct RoundService<C: CreditLedgerPort, S: SummarizerPort> {
    credits: Arc<C>,
    summarizer: Arc<S>,
    rate_limiter: Arc<RateLimiter>,
    scheduler: SummaryScheduler,
    rate_limit_max: u32,
    rate_limit_window: chrono::Duration,
}

impl<C: CreditLedgerPort, S: SummarizerPort> RoundService<C, S> {
    pub fn new(
        credits: Arc<C>,
        summarizer: Arc<S>,
        rate_limiter: Arc<RateLimiter>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            credits,
            summarizer,
            rate_limiter,
            scheduler: SummaryScheduler::new(config.summary_threshold, config.rounds_per_chapter),
            rate_limit_max: config.rate_limit_max,
            rate_limit_window: config.rate_limit_window(),
        }
    }

    /// Advance one round for `campaign_id` on behalf of `actor_id`.
    pub async fn advance_round(
        &self,
        campaign_id: CampaignId,
        actor_id: &str,
        progress: &mut CampaignProgress,
        checkpoint: &mut SummaryCheckpoint,
    ) -> Result<RoundAdvance, RoundAdvanceError> {
        let key = format!("{actor_id}:{campaign_id}");
        let decision =
            self.rate_limiter
                .check_and_consume(&key, self.rate_limit_max, self.rate_limit_window);
        if !decision.allowed {
            return Err(RoundAdvanceError::RateLimited {
                reset_time: decision.reset_time,
            });
        }

        // Do not burn a credit on a campaign that can no longer advance.
        if progress.is_complete() {
            return Err(ProgressionError::CampaignComplete.into());
        }

        let receipt = self
            .credits
            .consume_round_credit(campaign_id)
            .await
            .map_err(|e| RoundAdvanceError::Ledger(e.to_string()))?;
        if !receipt.ok {
            return Err(RoundAdvanceError::NoCredits {
                remaining: receipt.remaining,
            });
        }

        let advance = progress.advance_round()?;
        tracing::info!(
            %campaign_id,
            round = advance.round,
            chapter = advance.chapter,
            complete = advance.is_complete,
            "round advanced"
        );

        let obligations = self.scheduler.obligations_after_advance(checkpoint, &advance);
        if !obligations.is_empty() {
            self.scheduler
                .dispatch(self.summarizer.as_ref(), campaign_id, &obligations)
                .await;
        }

        Ok(advance)
    }
}
