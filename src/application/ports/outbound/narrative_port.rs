//! Narrative generation port - The AI collaborator that writes prose

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::value_objects::{NarrationContext, NarrationTier};

/// Port for the external AI generation service.
///
/// Invoked once per tier selection; the engine decides *which* tier handles a
/// request, the adapter owns the actual prompt content and transport.
#[async_trait]
pub trait NarrativePort: Send + Sync {
    async fn generate_narrative(
        &self,
        tier: NarrationTier,
        prompt: &str,
        context: &NarrationContext,
    ) -> Result<String>;
}
