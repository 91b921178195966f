//! Summarizer port - Best-effort narrative summary generation

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::SummaryObligation;
use crate::domain::value_objects::CampaignId;

/// Port for the external summary generator.
///
/// Summarization is a side operation: implementations may fail, but the
/// caller isolates those failures from the primary round-advance result.
#[async_trait]
pub trait SummarizerPort: Send + Sync {
    async fn summarize(
        &self,
        campaign_id: CampaignId,
        obligation: &SummaryObligation,
    ) -> Result<()>;
}
