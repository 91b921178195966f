//! Dice service - Parse-and-resolve convenience over the dice domain core
//!
//! Dice commands bypass progression entirely: they do not touch credits, the
//! rate limiter, or campaign state.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::application::dto::CompoundRollReport;
use crate::domain::services::{dice_parser, dice_roller, DiceRng, RandomSource};
use crate::domain::value_objects::{NotationError, RollResult};

/// Parse a (possibly compound) notation string and resolve it with a fresh
/// system-seeded RNG.
pub fn roll_dice(notation: &str) -> Result<CompoundRollReport, NotationError> {
    let mut rng = RandomSource(StdRng::from_entropy());
    roll_dice_with(notation, &mut rng)
}

/// [`roll_dice`] against a caller-supplied random source.
pub fn roll_dice_with<S: DiceRng + ?Sized>(
    notation: &str,
    rng: &mut S,
) -> Result<CompoundRollReport, NotationError> {
    let expressions = dice_parser::parse_compound(notation)?;
    let results: Vec<RollResult> = expressions
        .iter()
        .map(|expr| dice_roller::resolve(expr, rng))
        .collect();

    let report = CompoundRollReport::from_results(&results);
    tracing::debug!(notation, grand_total = report.grand_total, "resolved dice roll");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NotationError;

    struct FixedRng(u32);

    impl DiceRng for FixedRng {
        fn roll_die(&mut self, _sides: u32) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_single_roll_report() {
        let mut rng = FixedRng(3);
        let report = roll_dice_with("2d6+1", &mut rng).unwrap();
        assert!(report.is_single());
        assert_eq!(report.grand_total, 7);
        assert_eq!(report.rolls[0].rolls, vec![3, 3]);
        assert_eq!(report.rolls[0].notation, "2d6+1");
    }

    #[test]
    fn test_compound_grand_total() {
        let mut rng = FixedRng(2);
        let report = roll_dice_with("2d6, 1d4+1", &mut rng).unwrap();
        assert_eq!(report.rolls.len(), 2);
        assert_eq!(report.rolls[0].total, 4);
        assert_eq!(report.rolls[1].total, 3);
        assert_eq!(report.grand_total, 7);
    }

    #[test]
    fn test_invalid_notation_is_returned_not_defaulted() {
        let mut rng = FixedRng(2);
        assert_eq!(
            roll_dice_with("1d7", &mut rng),
            Err(NotationError::UnsupportedSides(7))
        );
    }

    #[test]
    fn test_system_rng_stays_in_range() {
        let report = roll_dice("10d6").unwrap();
        assert!(report.grand_total >= 10 && report.grand_total <= 60);
        for roll in &report.rolls[0].rolls {
            assert!((1..=6).contains(roll));
        }
    }
}
