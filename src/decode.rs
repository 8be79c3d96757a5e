//! Splits a raw instruction word into an opcode id and an ordered list of
//! parameter modes. Whether the id names a real opcode is the registry's
//! question, answered at dispatch; the decoder only takes the word apart.

use crate::error::IntcodeError;
use crate::tape::Word;

/// Per-operand addressing mode, drawn from the decimal digits of the
/// instruction word above its two opcode digits.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Mode {
  /// The operand is an address; the effective value is the cell it names.
  Position,
  /// The operand is the effective value itself.
  Immediate,
}

/// The parameter modes of one instruction, least-significant digit first.
/// A word may carry fewer mode digits than its opcode has read parameters;
/// the missing ones default to `Position`. That default is a compatibility
/// rule of the instruction format, not an accident of representation.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Modes(Vec<Mode>);

impl Modes {
  pub fn get(&self, parameter: usize) -> Mode {
    self.0.get(parameter).copied().unwrap_or(Mode::Position)
  }
}

/// A split instruction word.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DecodedWord {
  pub opcode_id: Word,
  pub modes: Modes
}

/// Decomposes `word` as `opcode_id = word mod 100` and one mode per decimal
/// digit of `word div 100`. Any digit other than 0 or 1 is `InvalidFormat`.
pub fn decode(word: Word) -> Result<DecodedWord, IntcodeError> {
  let opcode_id = word % 100;
  let mut modes = Vec::new();
  let mut digits = word / 100;
  while digits > 0 {
    match digits % 10 {
      0 => modes.push(Mode::Position),
      1 => modes.push(Mode::Immediate),
      digit => {
        return Err(IntcodeError::InvalidFormat(
          format!("parameter mode digit {} in word {} is neither 0 nor 1", digit, word)
        ));
      }
    }
    digits /= 10;
  }
  Ok(DecodedWord { opcode_id, modes: Modes(modes) })
}
