//! Dice resolver
//!
//! Executes a validated [`DiceExpression`] against a random source. Resolution
//! is a pure function of the expression and the source's sequence: the same
//! inputs always produce the same [`RollResult`].
//!
//! Equal-valued dice have no rules-defined precedence, so keep/drop selection
//! uses a stable sort: ties are broken by original roll order.

use rand::Rng;

use crate::domain::value_objects::{DiceExpression, KeepMode, RollResult};

/// Abstraction over the random source used to roll dice.
///
/// Production code wraps a `rand::Rng` in [`RandomSource`]; tests inject
/// scripted sequences for exact-outcome assertions.
pub trait DiceRng {
    /// Roll one die, returning a value in `[1, sides]`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// [`DiceRng`] adapter over any `rand::Rng`.
pub struct RandomSource<R: Rng>(pub R);

impl<R: Rng> DiceRng for RandomSource<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides)
    }
}

/// Resolve an expression into a roll result.
pub fn resolve<S: DiceRng + ?Sized>(expr: &DiceExpression, rng: &mut S) -> RollResult {
    let all_rolls: Vec<u32> = (0..expr.count())
        .map(|_| rng.roll_die(expr.sides()))
        .collect();

    let (kept_rolls, dropped_rolls) = match expr.keep() {
        None => (all_rolls.clone(), Vec::new()),
        Some(rule) => {
            // Stable sort over indices: ties keep original roll order.
            let mut order: Vec<usize> = (0..all_rolls.len()).collect();
            match rule.mode {
                KeepMode::Highest => order.sort_by(|&a, &b| all_rolls[b].cmp(&all_rolls[a])),
                KeepMode::Lowest => order.sort_by(|&a, &b| all_rolls[a].cmp(&all_rolls[b])),
            }

            let keep_n = rule.count as usize;
            let kept = order[..keep_n].iter().map(|&i| all_rolls[i]).collect();

            // Dropped dice are reported in original roll order.
            let mut dropped_indices: Vec<usize> = order[keep_n..].to_vec();
            dropped_indices.sort_unstable();
            let dropped = dropped_indices.iter().map(|&i| all_rolls[i]).collect();

            (kept, dropped)
        }
    };

    let total = kept_rolls.iter().map(|&r| r as i32).sum::<i32>() + expr.modifier();

    RollResult {
        all_rolls,
        kept_rolls,
        dropped_rolls,
        total,
        expression: *expr,
    }
}
