//! Credit ledger port - External consumable resource gating round advances

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CampaignId;

/// Outcome of a credit consumption attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditReceipt {
    /// Whether a credit was actually consumed.
    pub ok: bool,
    /// Which pool the credit came from (e.g. "subscription", "purchased").
    #[serde(rename = "type")]
    pub credit_type: String,
    /// Credits left in that pool after this consumption.
    pub remaining: u32,
}

/// Port for the external credit/resource ledger.
///
/// `consume_round_credit` must succeed (with `ok = true`) before a round
/// advance is applied; the engine never retries consumption itself.
#[async_trait]
pub trait CreditLedgerPort: Send + Sync {
    async fn consume_round_credit(&self, campaign_id: CampaignId) -> Result<CreditReceipt>;
}
