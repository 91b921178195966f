//! Domain services - Pure engine logic operations

pub mod dice_parser;
pub mod dice_roller;

pub use dice_parser::{parse, parse_compound};
pub use dice_roller::{resolve, DiceRng, RandomSource};
