//! Additive dice-expression parsing and evaluation.
//!
//! The grammar covers the formulas custom rolls attach to a procedure:
//! `NdS` dice terms (count optional) and integer constants, joined by `+`
//! and `-`. Examples: `"1d6"`, `"2d8+3"`, `"d20-1"`, `"3d6+2d4+1"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::roller::DiceRoller;
use crate::error::{MechError, MechResult};

const MAX_DICE_PER_TERM: u32 = 100;
const MAX_SIDES: u32 = 1000;

/// One parsed term of a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Dice {
        count: u32,
        sides: u32,
        subtract: bool,
    },
    Constant(i32),
}

/// A parsed dice formula, ready to be rolled any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceFormula {
    source: String,
    terms: Vec<Term>,
}

impl DiceFormula {
    /// Parse a formula like `"2d8+3"`.
    pub fn parse(input: &str) -> MechResult<Self> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(invalid(input, "empty formula"));
        }

        // Normalize so every term carries its sign, then split on '+'.
        let normalized = compact.replace('-', "+-");
        let mut terms = Vec::new();
        for (index, piece) in normalized.split('+').enumerate() {
            if piece.is_empty() {
                // A single leading sign is fine ("+2", "-1d4").
                if index == 0 {
                    continue;
                }
                return Err(invalid(input, "dangling operator"));
            }
            terms.push(parse_term(input, piece)?);
        }
        if terms.is_empty() {
            return Err(invalid(input, "empty formula"));
        }

        Ok(Self {
            source: compact,
            terms,
        })
    }

    /// Roll the formula, producing the total and the per-term dice.
    pub fn roll(&self, roller: &mut impl DiceRoller) -> FormulaRoll {
        let mut total: i64 = 0;
        let mut dice = Vec::new();

        for term in &self.terms {
            match term {
                Term::Dice {
                    count,
                    sides,
                    subtract,
                } => {
                    let values: Vec<u32> = (0..*count).map(|_| roller.roll_die(*sides)).collect();
                    let sum: i64 = values.iter().map(|v| i64::from(*v)).sum();
                    total += if *subtract { -sum } else { sum };
                    dice.push(DiceTermRoll {
                        count: *count,
                        sides: *sides,
                        values,
                    });
                }
                Term::Constant(value) => total += i64::from(*value),
            }
        }

        FormulaRoll {
            formula: self.source.clone(),
            total: total as i32,
            dice,
        }
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

fn parse_term(input: &str, piece: &str) -> MechResult<Term> {
    let (subtract, body) = match piece.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, piece),
    };
    if body.is_empty() {
        return Err(invalid(input, "dangling operator"));
    }

    if let Some((count_text, sides_text)) = body.split_once(['d', 'D']) {
        let count = if count_text.is_empty() {
            1
        } else {
            count_text
                .parse::<u32>()
                .map_err(|_| invalid(input, "dice count is not a number"))?
        };
        if count == 0 {
            return Err(invalid(input, "dice count must be at least 1"));
        }
        if count > MAX_DICE_PER_TERM {
            return Err(invalid(input, "too many dice in one term"));
        }

        let sides = sides_text
            .parse::<u32>()
            .map_err(|_| invalid(input, "die sides is not a number"))?;
        if sides < 2 {
            return Err(invalid(input, "a die needs at least 2 sides"));
        }
        if sides > MAX_SIDES {
            return Err(invalid(input, "too many sides on a die"));
        }

        return Ok(Term::Dice {
            count,
            sides,
            subtract,
        });
    }

    let value = body
        .parse::<i32>()
        .map_err(|_| invalid(input, "term is neither dice nor a number"))?;
    Ok(Term::Constant(if subtract { -value } else { value }))
}

fn invalid(formula: &str, reason: &str) -> MechError {
    MechError::InvalidFormula {
        formula: formula.to_string(),
        reason: reason.to_string(),
    }
}

/// The dice rolled for a single formula term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTermRoll {
    /// How many dice the term rolled.
    pub count: u32,
    /// Sides on each die.
    pub sides: u32,
    /// The individual values rolled.
    pub values: Vec<u32>,
}

impl fmt::Display for DiceTermRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(u32::to_string).collect();
        write!(f, "{}d{} [{}]", self.count, self.sides, values.join(", "))
    }
}

/// The result of rolling a formula: the total plus the dice behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRoll {
    /// The formula that was rolled.
    pub formula: String,
    /// Grand total across dice and constants.
    pub total: i32,
    /// Per-term dice values, for audit display.
    pub dice: Vec<DiceTermRoll>,
}

impl fmt::Display for FormulaRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.formula, self.total)
    }
}

/// Extra dice a caller attaches to a roll procedure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraDice {
    /// Formula added to the to-hit total.
    pub to_hit: Option<DiceFormula>,
    /// Formula added to the effect total.
    pub to_effect: Option<DiceFormula>,
}

impl ExtraDice {
    /// Parse a pair of optional formula strings. Empty and whitespace-only
    /// strings count as absent.
    pub fn parse(to_hit: Option<&str>, to_effect: Option<&str>) -> MechResult<Self> {
        Ok(Self {
            to_hit: parse_optional(to_hit)?,
            to_effect: parse_optional(to_effect)?,
        })
    }
}

fn parse_optional(input: Option<&str>) -> MechResult<Option<DiceFormula>> {
    match input {
        Some(text) if !text.trim().is_empty() => Ok(Some(DiceFormula::parse(text)?)),
        _ => Ok(None),
    }
}
