//! Narration service - Tier-routed AI narration with a caller-level timeout
//!
//! The engine decides which tier (DM or DIRECTOR) handles a request and calls
//! the narrative port once. The timeout here is the only cancellation point:
//! on timeout the caller still holds its round-advance result, just without
//! narration. Upstream failures are surfaced for the caller to retry with
//! backoff; the engine never retries internally.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::application::ports::outbound::NarrativePort;
use crate::application::services::tier_selector::select_tier_with;
use crate::domain::value_objects::{NarrationContext, NarrationTier};
use crate::infrastructure::config::EngineConfig;

/// Errors from narration generation.
#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("narration generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("narration generation failed: {0}")]
    Upstream(String),
}

/// A generated narration and the tier that produced it.
#[derive(Debug, Clone)]
pub struct NarrationOutcome {
    pub tier: NarrationTier,
    pub text: String,
}

/// Service routing narration requests to the AI collaborator.
pub struct NarrationService<N: NarrativePort> {
    narrative: Arc<N>,
    timeout: Duration,
    checkpoint_interval: u32,
}

impl<N: NarrativePort> NarrationService<N> {
    pub fn new(narrative: Arc<N>, config: &EngineConfig) -> Self {
        Self {
            narrative,
            timeout: config.narration_timeout,
            checkpoint_interval: config.director_checkpoint_interval,
        }
    }

    /// Classify the request and generate narration for it.
    pub async fn narrate(
        &self,
        input: &str,
        context: &NarrationContext,
    ) -> Result<NarrationOutcome, NarrationError> {
        let tier = select_tier_with(input, context, self.checkpoint_interval);
        tracing::debug!(
            tier = tier.as_str(),
            round = context.current_round,
            "selected narration tier"
        );

        let generation = self.narrative.generate_narrative(tier, input, context);
        match tokio::time::timeout(self.timeout, generation).await {
            Ok(Ok(text)) => Ok(NarrationOutcome { tier, text }),
            Ok(Err(e)) => Err(NarrationError::Upstream(e.to_string())),
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "narration generation timed out");
                Err(NarrationError::Timeout(self.timeout))
            }
        }
    }
}
