//! Campaign progression state machine
//!
//! A campaign advances one round at a time while `Active`; chapters are
//! derived from the round number, never stored. Once the target round count
//! is reached the machine is `Complete` and immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rounds per chapter in the canonical mapping.
pub const DEFAULT_ROUNDS_PER_CHAPTER: u32 = 25;

/// Lifecycle states of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionState {
    NotStarted,
    Active,
    Paused,
    Complete,
}

impl ProgressionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Complete => "complete",
        }
    }
}

/// Errors raised by progression transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("campaign is complete; no further rounds can be advanced")]
    CampaignComplete,

    #[error("rounds can only advance while the campaign is active (currently {0})")]
    NotActive(&'static str),

    #[error("cannot {operation} from state {from}")]
    InvalidTransition {
        operation: &'static str,
        from: &'static str,
    },

    #[error("target rounds and rounds per chapter must both be at least 1")]
    InvalidConfiguration,
}

/// Result of a successful round advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAdvance {
    pub round: u32,
    pub chapter: u32,
    pub is_complete: bool,
    /// True when this advance moved into a new chapter, meaning the previous
    /// chapter just finished and its closing summary is due.
    pub crossed_chapter_boundary: bool,
}

/// Chapter containing `round`: `ceil(round / rounds_per_chapter)`.
pub fn calculate_chapter(round: u32, rounds_per_chapter: u32) -> u32 {
    round.div_ceil(rounds_per_chapter)
}

/// Whether entering `round` crosses into a new chapter.
pub fn is_chapter_boundary(round: u32, rounds_per_chapter: u32) -> bool {
    if round == 0 {
        return false;
    }
    calculate_chapter(round, rounds_per_chapter) > calculate_chapter(round - 1, rounds_per_chapter)
}

/// Per-campaign progression counters and lifecycle state.
///
/// Concurrent advance requests for the same campaign must be serialized by
/// the caller (exclusive borrow here, optimistic round check or a transaction
/// at the store). Round numbers only ever move forward by exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignProgress {
    current_round: u32,
    target_rounds: u32,
    rounds_per_chapter: u32,
    state: ProgressionState,
}

impl CampaignProgress {
    /// Create a campaign at round 1, not yet started.
    pub fn new(target_rounds: u32, rounds_per_chapter: u32) -> Result<Self, ProgressionError> {
        if target_rounds < 1 || rounds_per_chapter < 1 {
            return Err(ProgressionError::InvalidConfiguration);
        }
        Ok(Self {
            current_round: 1,
            target_rounds,
            rounds_per_chapter,
            state: ProgressionState::NotStarted,
        })
    }

    /// Create a campaign with the canonical chapter length.
    pub fn with_default_chapters(target_rounds: u32) -> Result<Self, ProgressionError> {
        Self::new(target_rounds, DEFAULT_ROUNDS_PER_CHAPTER)
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn target_rounds(&self) -> u32 {
        self.target_rounds
    }

    pub fn rounds_per_chapter(&self) -> u32 {
        self.rounds_per_chapter
    }

    pub fn state(&self) -> ProgressionState {
        self.state
    }

    /// Derived chapter for the current round.
    pub fn current_chapter(&self) -> u32 {
        calculate_chapter(self.current_round, self.rounds_per_chapter)
    }

    pub fn is_complete(&self) -> bool {
        self.state == ProgressionState::Complete
    }

    /// Begin or restart the campaign.
    pub fn start(&mut self) -> Result<(), ProgressionError> {
        match self.state {
            ProgressionState::NotStarted | ProgressionState::Paused => {
                self.state = ProgressionState::Active;
                Ok(())
            }
            ProgressionState::Complete => Err(ProgressionError::CampaignComplete),
            from => Err(ProgressionError::InvalidTransition {
                operation: "start",
                from: from.as_str(),
            }),
        }
    }

    pub fn pause(&mut self) -> Result<(), ProgressionError> {
        match self.state {
            ProgressionState::Active => {
                self.state = ProgressionState::Paused;
                Ok(())
            }
            from => Err(ProgressionError::InvalidTransition {
                operation: "pause",
                from: from.as_str(),
            }),
        }
    }

    pub fn resume(&mut self) -> Result<(), ProgressionError> {
        match self.state {
            ProgressionState::Paused => {
                self.state = ProgressionState::Active;
                Ok(())
            }
            from => Err(ProgressionError::InvalidTransition {
                operation: "resume",
                from: from.as_str(),
            }),
        }
    }

    /// Advance exactly one round.
    ///
    /// Must only be called after the external credit check has succeeded; no
    /// state changes on failure. Completion is automatic once the target
    /// round is reached.
    pub fn advance_round(&mut self) -> Result<RoundAdvance, ProgressionError> {
        match self.state {
            ProgressionState::Complete => return Err(ProgressionError::CampaignComplete),
            ProgressionState::Active => {}
            from => return Err(ProgressionError::NotActive(from.as_str())),
        }
        if self.current_round >= self.target_rounds {
            self.state = ProgressionState::Complete;
            return Err(ProgressionError::CampaignComplete);
        }

        self.current_round += 1;
        let crossed = is_chapter_boundary(self.current_round, self.rounds_per_chapter);
        let is_complete = self.current_round >= self.target_rounds;
        if is_complete {
            self.state = ProgressionState::Complete;
        }

        Ok(RoundAdvance {
            round: self.current_round,
            chapter: self.current_chapter(),
            is_complete,
            crossed_chapter_boundary: crossed,
        })
    }
}
