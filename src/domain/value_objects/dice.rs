//! Dice value objects
//!
//! `DiceExpression` is the validated, structured form of a dice notation
//! string; `RollResult` is the outcome of resolving one against a random
//! source. Both are immutable and created fresh per call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Die sizes the engine accepts. Anything else is rejected at parse time.
pub const ALLOWED_SIDES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];

/// Maximum number of dice in a single expression.
pub const MAX_COUNT: u32 = 100;

/// Modifier bounds, inclusive.
pub const MODIFIER_RANGE: std::ops::RangeInclusive<i32> = -100..=100;

/// Errors produced when a dice notation string cannot become a valid
/// [`DiceExpression`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("unrecognized dice notation: '{0}'")]
    Malformed(String),

    #[error("dice count must be between 1 and {MAX_COUNT}, got {0}")]
    CountOutOfRange(u32),

    #[error("unsupported die size d{0} (allowed: d4, d6, d8, d10, d12, d20, d100)")]
    UnsupportedSides(u32),

    #[error("modifier must be between -100 and 100, got {0}")]
    ModifierOutOfRange(i32),

    #[error("cannot keep {keep} dice out of {count} rolled")]
    KeepExceedsCount { keep: u32, count: u32 },

    #[error("advantage/disadvantage applies only to a single d20")]
    AdvantageRequiresSingleD20,
}

/// Which end of the sorted rolls a keep rule retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeepMode {
    Highest,
    Lowest,
}

/// Keep-highest / keep-lowest rule attached to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepRule {
    pub mode: KeepMode,
    pub count: u32,
}

/// A single validated dice expression such as `2d20kh1+3`.
///
/// Produced only by the notation parser or [`DiceExpression::new`], so every
/// instance satisfies the count/sides/modifier/keep invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    count: u32,
    sides: u32,
    modifier: i32,
    keep: Option<KeepRule>,
}

impl DiceExpression {
    /// Create a validated expression.
    pub fn new(
        count: u32,
        sides: u32,
        modifier: i32,
        keep: Option<KeepRule>,
    ) -> Result<Self, NotationError> {
        if count < 1 || count > MAX_COUNT {
            return Err(NotationError::CountOutOfRange(count));
        }
        if !ALLOWED_SIDES.contains(&sides) {
            return Err(NotationError::UnsupportedSides(sides));
        }
        if !MODIFIER_RANGE.contains(&modifier) {
            return Err(NotationError::ModifierOutOfRange(modifier));
        }
        if let Some(rule) = keep {
            if rule.count > count {
                return Err(NotationError::KeepExceedsCount {
                    keep: rule.count,
                    count,
                });
            }
        }
        Ok(Self {
            count,
            sides,
            modifier,
            keep,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn keep(&self) -> Option<KeepRule> {
        self.keep
    }

    /// Canonical notation for this expression, e.g. `2d20kh1+3`.
    pub fn notation(&self) -> String {
        let mut s = format!("{}d{}", self.count, self.sides);
        if let Some(rule) = self.keep {
            let tag = match rule.mode {
                KeepMode::Highest => "kh",
                KeepMode::Lowest => "kl",
            };
            s.push_str(&format!("{}{}", tag, rule.count));
        }
        if self.modifier > 0 {
            s.push_str(&format!("+{}", self.modifier));
        } else if self.modifier < 0 {
            s.push_str(&format!("{}", self.modifier));
        }
        s
    }
}

impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

/// The outcome of resolving one [`DiceExpression`].
///
/// `kept_rolls` and `dropped_rolls` are an exhaustive, disjoint partition of
/// `all_rolls`; `total` is the sum of the kept rolls plus the modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Every die rolled, in roll order.
    pub all_rolls: Vec<u32>,
    /// Rolls counted toward the total, ordered per the keep rule.
    pub kept_rolls: Vec<u32>,
    /// Rolls discarded by the keep rule, in original roll order.
    pub dropped_rolls: Vec<u32>,
    /// Sum of kept rolls plus the modifier.
    pub total: i32,
    /// The expression that produced this result.
    pub expression: DiceExpression,
}
