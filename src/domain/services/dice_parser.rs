//! Dice notation parser
//!
//! Grammar: `[N]d<S>[khK|klK][+M|-M][adv|dis]`, where `adv`/`dis` is shorthand
//! for rolling two d20 and keeping the best/worst one. A comma-separated list
//! is a compound request; each sub-expression is validated independently.
//!
//! Parsing has no side effects and never coerces a bad expression into a
//! default roll.

use crate::domain::value_objects::{DiceExpression, KeepMode, KeepRule, NotationError};

/// Parse a single dice notation string into a validated expression.
pub fn parse(input: &str) -> Result<DiceExpression, NotationError> {
    let notation: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if notation.is_empty() {
        return Err(NotationError::Malformed(input.to_string()));
    }

    let mut cursor = Cursor::new(&notation);

    // Leading count defaults to 1.
    let count = cursor.read_number().unwrap_or(1);

    if !cursor.eat('d') {
        return Err(NotationError::Malformed(input.to_string()));
    }

    let sides = cursor
        .read_number()
        .ok_or_else(|| NotationError::Malformed(input.to_string()))?;

    // Explicit keep rule comes right after the sides.
    let keep_mode = if cursor.eat_str("kh") {
        Some(KeepMode::Highest)
    } else if cursor.eat_str("kl") {
        Some(KeepMode::Lowest)
    } else {
        None
    };
    let keep = match keep_mode {
        Some(mode) => {
            let keep_count = cursor
                .read_number()
                .ok_or_else(|| NotationError::Malformed(input.to_string()))?;
            Some(KeepRule {
                mode,
                count: keep_count,
            })
        }
        None => None,
    };

    // Advantage/disadvantage may appear directly after the die or trail the
    // modifier; check both positions.
    let mut advantage = read_advantage(&mut cursor);

    let modifier = match cursor.peek() {
        Some('+') | Some('-') => {
            let negative = cursor.eat('-');
            if !negative {
                cursor.eat('+');
            }
            let magnitude = cursor
                .read_number()
                .ok_or_else(|| NotationError::Malformed(input.to_string()))?;
            let magnitude = i32::try_from(magnitude)
                .map_err(|_| NotationError::Malformed(input.to_string()))?;
            if negative {
                -magnitude
            } else {
                magnitude
            }
        }
        _ => 0,
    };

    if advantage.is_none() {
        advantage = read_advantage(&mut cursor);
    }

    if !cursor.at_end() {
        return Err(NotationError::Malformed(input.to_string()));
    }

    match advantage {
        None => DiceExpression::new(count, sides, modifier, keep),
        Some(mode) => {
            // Shorthand is only defined for a single plain d20; it expands to
            // rolling two and keeping one.
            if count != 1 || sides != 20 || keep.is_some() {
                return Err(NotationError::AdvantageRequiresSingleD20);
            }
            DiceExpression::new(2, 20, modifier, Some(KeepRule { mode, count: 1 }))
        }
    }
}

/// Parse a comma-separated compound request into independent expressions.
///
/// Each sub-expression is validated on its own; the first invalid one fails
/// the whole request.
pub fn parse_compound(input: &str) -> Result<Vec<DiceExpression>, NotationError> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.iter().all(|p| p.trim().is_empty()) {
        return Err(NotationError::Malformed(input.to_string()));
    }
    parts.into_iter().map(parse).collect()
}

fn read_advantage(cursor: &mut Cursor<'_>) -> Option<KeepMode> {
    if cursor.eat_str("adv") {
        Some(KeepMode::Highest)
    } else if cursor.eat_str("dis") {
        Some(KeepMode::Lowest)
    } else {
        None
    }
}

/// Minimal forward-only scanner over an ASCII notation string.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.src[self.pos..].starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn read_number(&mut self) -> Option<u32> {
        let rest = &self.src[self.pos..];
        let digits: usize = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let value = rest[..digits].parse().ok()?;
        self.pos += digits;
        Some(value)
    }

    fn at_end(&self) -> bool {
        self.pos == self.src.len()
    }
}
