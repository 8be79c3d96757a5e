/*!

  The closed opcode set of the machine and the effect of each opcode.

  The opcode set is small and known at build time, so the registry is a single
  enum with `match`-based dispatch for both stride and effect; exhaustiveness
  is checked by the compiler instead of by a runtime registration map. The
  numeric ids are part of the instruction format, so the enum pins its
  discriminants and `num_enum` supplies the id-to-variant conversion.

  Every handler is stateless. A handler reads its operands per the decoded
  parameter modes, mutates the tape and/or produces one output value, and
  reports the new head as `head + stride`. No opcode jumps. The destination
  operand of a writing opcode is always a bare address and is never subject
  to a mode; no opcode here performs an immediate-mode write.

*/

use std::convert::TryFrom;
use std::io::BufRead;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

use crate::decode::{Mode, Modes};
use crate::error::IntcodeError;
use crate::tape::{Tape, Word};

#[derive(
  StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq, PartialEq,    Debug,          Hash
)]
#[repr(u8)]
pub enum Opcode {
  Add      = 1,  // add( x, y, destination )
  Multiply = 2,  // multiply( x, y, destination )
  Input    = 3,  // input( destination )
  Output   = 4,  // output( x )
  Halt     = 99, // halt
}

/// The outcome of one executed instruction. Halting is the success path of a
/// run, so it is a control-flow variant rather than an error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Step {
  /// The head moves to `head`; `output` carries at most one emitted value.
  Continue {
    head: usize,
    output: Option<Word>
  },
  /// The run is over.
  Halted,
}

impl Opcode {

  /// Resolves an opcode id against the closed registry. Anything outside of
  /// the set, including negative ids and near misses like 98, is
  /// `UnrecognizedOpcode`.
  pub fn lookup(id: Word) -> Result<Opcode, IntcodeError> {
    u8::try_from(id)
      .ok()
      .and_then(|byte| Opcode::try_from(byte).ok())
      .ok_or(IntcodeError::UnrecognizedOpcode(id))
  }

  /// Total words the instruction occupies, opcode word included.
  pub fn stride(self) -> usize {
    match self {
      Opcode::Add | Opcode::Multiply => 4,
      Opcode::Input | Opcode::Output => 2,
      Opcode::Halt                   => 0
    }
  }

  /// Applies the opcode's effect at `head`. Operand reads honor the decoded
  /// parameter modes; `Input` pulls one line from the input channel.
  pub fn process<R: BufRead>(
    self,
    tape  : &mut Tape,
    head  : usize,
    modes : &Modes,
    input : &mut R
  ) -> Result<Step, IntcodeError>
  {
    let at = head as Word;
    match self {

      Opcode::Add | Opcode::Multiply => {
        let x = operand_value(tape, at + 1, modes.get(0))?;
        let y = operand_value(tape, at + 2, modes.get(1))?;
        let destination = tape.read(at + 3)?;
        let result = match self {
          Opcode::Add => x + y,
          _multiply   => x * y
        };
        tape.write(destination, result)?;
        Ok(Step::Continue { head: head + self.stride(), output: None })
      }

      Opcode::Input => {
        let destination = tape.read(at + 1)?;
        let value = read_input(input)?;
        tape.write(destination, value)?;
        Ok(Step::Continue { head: head + self.stride(), output: None })
      }

      Opcode::Output => {
        let value = operand_value(tape, at + 1, modes.get(0))?;
        Ok(Step::Continue { head: head + self.stride(), output: Some(value) })
      }

      Opcode::Halt => Ok(Step::Halted)

    }
  }

}

/// Reads the operand at `address` and resolves its effective value per `mode`.
fn operand_value(tape: &Tape, address: Word, mode: Mode) -> Result<Word, IntcodeError> {
  let operand = tape.read(address)?;
  match mode {
    Mode::Position  => tape.read(operand),
    Mode::Immediate => Ok(operand)
  }
}

/// Pulls one line from the input channel and parses it as an optionally
/// signed base-10 integer. A token that does not parse, or a channel error,
/// fails the whole run.
fn read_input<R: BufRead>(input: &mut R) -> Result<Word, IntcodeError> {
  let mut line = String::new();
  input.read_line(&mut line).map_err(
    |error| IntcodeError::InvalidFormat(format!("input channel failed: {}", error))
  )?;
  let token = line.trim();
  token.parse::<Word>().map_err(
    |_error| IntcodeError::InvalidFormat(format!("{} cannot be converted to an integer", token))
  )
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn registry_resolves_the_closed_set() {
    assert_eq!(Opcode::lookup(1),  Ok(Opcode::Add));
    assert_eq!(Opcode::lookup(2),  Ok(Opcode::Multiply));
    assert_eq!(Opcode::lookup(3),  Ok(Opcode::Input));
    assert_eq!(Opcode::lookup(4),  Ok(Opcode::Output));
    assert_eq!(Opcode::lookup(99), Ok(Opcode::Halt));
  }

  #[test]
  fn registry_rejects_everything_else() {
    for id in &[0, 5, 98, 100, -1, -99] {
      assert_eq!(Opcode::lookup(*id), Err(IntcodeError::UnrecognizedOpcode(*id)));
    }
  }

  #[test]
  fn strides_count_the_opcode_word() {
    assert_eq!(Opcode::Add.stride(),      4);
    assert_eq!(Opcode::Multiply.stride(), 4);
    assert_eq!(Opcode::Input.stride(),    2);
    assert_eq!(Opcode::Output.stride(),   2);
    assert_eq!(Opcode::Halt.stride(),     0);
  }

  #[test]
  fn opcodes_display_by_name() {
    assert_eq!(format!("{}", Opcode::Multiply), "Multiply");
    assert_eq!(format!("{}", Opcode::Halt), "Halt");
  }
}
