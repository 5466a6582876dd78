//! Dice: the roller seam and the additive dice-formula grammar.
//!
//! The engine's randomness flows through [`DiceRoller`], so procedures can
//! run against the real `StdRng`-backed roller, a seeded roller for
//! repeatable sessions, or a scripted roller that replays fixed values.

pub mod formula;
pub mod roller;

pub use formula::{DiceFormula, DiceTermRoll, ExtraDice, FormulaRoll};
pub use roller::{DiceRoller, ScriptedRoller, StdRoller};
