/*!

  The Computer: the orchestrator that owns a tape and a head and runs the
  fetch-decode-execute cycle over the closed opcode registry.

  A run is single-threaded and fully synchronous. The only suspension point is
  the `Input` opcode blocking on the input channel. The tape is exclusively
  owned by its Computer; callers seed memory through `set_cell` before a run
  and read a result cell through `get_cell` after halting, never concurrently
  with one. Each Computer is disposable: a caller that wants to retry builds
  a fresh one per attempt.

*/

use std::io::{self, BufRead};

use crate::decode::decode;
use crate::error::IntcodeError;
use crate::opcode::{Opcode, Step};
use crate::tape::{Tape, Word};

#[cfg(feature = "trace_computation")]
use prettytable::{format as TableFormat, Table};

pub struct Computer<R: BufRead = io::Empty> {
  tape    : Tape,
  head    : usize,
  input   : R,
  outputs : Vec<Word>
}

impl Computer<io::Empty> {
  /// A computer with no input channel attached. A program that executes an
  /// `Input` instruction against it fails; use `with_input` for those.
  pub fn new(tape: Tape) -> Computer<io::Empty> {
    Computer::with_input(tape, io::empty())
  }
}

impl<R: BufRead> Computer<R> {

  /// A computer reading its `Input` instructions from `input`, one line per
  /// executed instruction. The head starts at 0 unless `set_head` moves it
  /// before the run.
  pub fn with_input(tape: Tape, input: R) -> Computer<R> {
    Computer {
      tape,
      head    : 0,
      input,
      outputs : vec![]
    }
  }

  pub fn head(&self) -> usize {
    self.head
  }

  /// Moves the head, failing for any index outside of the tape. Advancing
  /// past the end without a `Halt` is an error here, never silent
  /// termination.
  pub fn set_head(&mut self, head: usize) -> Result<(), IntcodeError> {
    match head < self.tape.len() {
      true  => {
        self.head = head;
        Ok(())
      }
      false => Err(IntcodeError::OutOfBounds {
        address: head as Word,
        len: self.tape.len()
      })
    }
  }

  /// Direct external read, used by callers to fetch a result cell after a
  /// run halts. The machine attaches no meaning to any cell.
  pub fn get_cell(&self, address: Word) -> Result<Word, IntcodeError> {
    self.tape.read(address)
  }

  /// Direct external write, used by callers to seed memory before a run.
  pub fn set_cell(&mut self, address: Word, value: Word) -> Result<(), IntcodeError> {
    self.tape.write(address, value)
  }

  pub fn tape(&self) -> &Tape {
    &self.tape
  }

  /// Every value emitted by an `Output` instruction so far, in execution
  /// order.
  pub fn outputs(&self) -> &[Word] {
    &self.outputs
  }

  /// One instruction cycle: fetch the word at the head, split it, resolve
  /// the handler in the registry, apply its effect, and advance the head by
  /// the instruction's stride.
  pub fn step(&mut self) -> Result<Step, IntcodeError> {
    let word = self.tape.read(self.head as Word)?;
    let decoded = decode(word)?;
    let opcode = Opcode::lookup(decoded.opcode_id)?;

    #[cfg(feature = "trace_computation")]
    {
      println!("T[{}]: {}", self.head, opcode);
      self.trace_table().printstd();
    }

    let step = opcode.process(&mut self.tape, self.head, &decoded.modes, &mut self.input)?;
    if let Step::Continue { head, output } = &step {
      if let Some(value) = output {
        self.outputs.push(*value);
      }
      self.set_head(*head)?;
    }
    Ok(step)
  }

  /// Runs the cycle until the program halts. Outputs accumulate in
  /// `outputs()` in production order; every error aborts the run unrecovered.
  pub fn run_to_halt(&mut self) -> Result<(), IntcodeError> {
    loop {
      if let Step::Halted = self.step()? {
        return Ok(());
      }
    }
  }

  #[cfg(feature = "trace_computation")]
  fn trace_table(&self) -> Table {
    let mut table = Table::new();
    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Address", ubl->"Contents"]);

    for (i, cell) in self.tape.cells().iter().enumerate() {
      match i == self.head {

        true  => {
          table.add_row(row![r->format!("* --> T[{}] =", i), format!("{}", cell)]);
        }

        false => {
          table.add_row(row![r->format!("T[{}] =", i), format!("{}", cell)]);
        }

      }
    }
    table
  }

}

#[cfg(feature = "trace_computation")]
lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}


#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn computer(cells: &[Word]) -> Computer {
    Computer::new(Tape::new(cells.to_vec()))
  }

  #[test]
  fn add_applies_one_instruction() {
    let mut computer = computer(&[1, 0, 0, 3]);
    // The instruction lands, then advancing to the index one past the end
    // of the tape reports out of bounds rather than terminating silently.
    assert_eq!(
      computer.step(),
      Err(IntcodeError::OutOfBounds { address: 4, len: 4 })
    );
    assert_eq!(computer.tape().cells(), &[1, 0, 0, 2]);
  }

  #[test]
  fn multiply_applies_one_instruction() {
    let mut computer = computer(&[2, 0, 0, 3]);
    assert_eq!(
      computer.step(),
      Err(IntcodeError::OutOfBounds { address: 4, len: 4 })
    );
    assert_eq!(computer.tape().cells(), &[2, 0, 0, 4]);
  }

  #[test]
  fn halt_ends_the_run_without_advancing() {
    let mut computer = computer(&[99, 0, 0]);
    assert_eq!(computer.step(), Ok(Step::Halted));
    assert_eq!(computer.head(), 0);
  }

  #[test]
  fn gravity_assist_sample_program() {
    let mut computer = computer(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
    computer.run_to_halt().unwrap();
    assert_eq!(
      computer.tape().cells(),
      &[3500, 9, 10, 70, 2, 3, 11, 0, 99, 30, 40, 50]
    );
  }

  #[test]
  fn immediate_and_position_modes_combine() {
    // Immediate 3 times position tape[4] = 33, written to address 4.
    let mut computer = computer(&[1002, 4, 3, 4, 33]);
    computer.run_to_halt().unwrap();
    assert_eq!(computer.tape().cells(), &[1002, 4, 3, 4, 99]);
  }

  #[test]
  fn output_emits_in_order_without_mutating() {
    let mut computer = computer(&[4, 0, 99]);
    computer.run_to_halt().unwrap();
    assert_eq!(computer.outputs(), &[4]);
    assert_eq!(computer.tape().cells(), &[4, 0, 99]);
  }

  #[test]
  fn input_writes_the_parsed_value() {
    let tape = Tape::new(vec![3, 0, 99]);
    let mut computer = Computer::with_input(tape, Cursor::new("123\n"));
    computer.run_to_halt().unwrap();
    assert_eq!(computer.tape().cells(), &[123, 0, 99]);
  }

  #[test]
  fn non_numeric_input_fails_the_run() {
    let tape = Tape::new(vec![3, 0, 99]);
    let mut computer = Computer::with_input(tape, Cursor::new("a\n"));
    assert!(matches!(
      computer.run_to_halt(),
      Err(IntcodeError::InvalidFormat(_))
    ));
  }

  #[test]
  fn unrecognized_opcode_fails_before_any_effect() {
    let mut computer = computer(&[98, 0, 0, 0]);
    assert_eq!(
      computer.run_to_halt(),
      Err(IntcodeError::UnrecognizedOpcode(98))
    );
    assert_eq!(computer.tape().cells(), &[98, 0, 0, 0]);
  }

  #[test]
  fn head_outside_the_tape_is_rejected() {
    let mut computer = computer(&[99]);
    assert_eq!(
      computer.set_head(100),
      Err(IntcodeError::OutOfBounds { address: 100, len: 1 })
    );
  }

  #[test]
  fn seeded_cells_flow_through_a_run() {
    // The collaborator contract: seed cells 1 and 2, run, read cell 0.
    let mut computer = computer(&[1, 0, 0, 0, 99, 0, 0, 0, 0, 11, 31]);
    computer.set_cell(1, 9).unwrap();
    computer.set_cell(2, 10).unwrap();
    computer.run_to_halt().unwrap();
    assert_eq!(computer.get_cell(0), Ok(42));
  }

  #[test]
  fn missing_mode_digits_behave_as_position() {
    // Word 2 behaves like 0002 for Multiply's two read parameters.
    let mut computer = computer(&[2, 5, 6, 7, 99, 6, 7, 0]);
    computer.step().unwrap();
    assert_eq!(computer.get_cell(7), Ok(42));
  }

  #[test]
  fn independent_computers_are_deterministic() {
    let cells = vec![3, 9, 1002, 9, 7, 0, 4, 0, 99, 0];
    let run = || {
      let mut computer =
        Computer::with_input(Tape::new(cells.clone()), Cursor::new("6\n"));
      computer.run_to_halt().unwrap();
      (computer.tape().cells().to_vec(), computer.outputs().to_vec())
    };
    assert_eq!(run(), run());
  }
}
