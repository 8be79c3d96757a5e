//! The error taxonomy of the machine. Halting is deliberately absent from it:
//! a halt is the expected end of a run and is modeled as a variant of
//! `crate::opcode::Step`, never as an error.

use thiserror::Error;

#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum IntcodeError {
  /// A tape read, tape write, or head placement outside of `[0, len)`.
  /// Always fatal; nothing is clamped and nothing is retried.
  #[error("address {address} is outside of the tape (length {len})")]
  OutOfBounds {
    address: i64,
    len: usize
  },

  /// A decoded opcode id outside of the closed registry set.
  #[error("opcode value {0} is not recognized")]
  UnrecognizedOpcode(i64),

  /// Malformed program source, a mistagged source file, a parameter mode
  /// digit other than 0 or 1, or an input token that is not an integer.
  #[error("invalid intcode format: {0}")]
  InvalidFormat(String),
}
