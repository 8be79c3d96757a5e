/*!

  The memory tape: a flat, bounds-checked store of signed words that a program
  both executes from and mutates in place. An address is nothing more than a
  cell value used as an index, so addresses share the cell type and a negative
  address is representable but never valid.

  A tape is created once from program source at the start of a run, owned by
  exactly one `Computer`, and discarded when the run ends. Program source is
  one or more lines of comma-separated base-10 integers; the lines concatenate
  in order into the initial tape.

*/

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use nom::{
  character::complete::{char as one_char, digit1, line_ending, space0},
  combinator::{all_consuming, map_res, opt, recognize},
  error::ErrorKind,
  multi::{many0, many1, separated_list},
  sequence::{delimited, pair, terminated},
  IResult,
};

use crate::error::IntcodeError;

/// The numeric type of a single tape cell.
pub type Word = i64;

/// The file suffix that tags a text file as a program source. Anything else
/// is rejected before its contents are even opened.
pub const INTCODE_SUFFIX: &str = "intcode";

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tape {
  cells: Vec<Word>
}

impl Tape {

  pub fn new(cells: Vec<Word>) -> Tape {
    Tape { cells }
  }

  /// Parses program source text into a tape. Every line is split on commas
  /// and every token must parse as a base-10 integer; any non-numeric token
  /// fails with `InvalidFormat` before any tape is produced.
  pub fn from_source(text: &str) -> Result<Tape, IntcodeError> {
    parse_source(text).map(Tape::new)
  }

  /// Loads a tape from a file carrying the `.intcode` suffix. The suffix is
  /// the caller-side tag marking the file as a program source; a file without
  /// it is `InvalidFormat` regardless of its contents.
  pub fn from_intcode_file<P: AsRef<Path>>(path: P) -> Result<Tape, IntcodeError> {
    let path = path.as_ref();
    if path.extension().and_then(|suffix| suffix.to_str()) != Some(INTCODE_SUFFIX) {
      return Err(IntcodeError::InvalidFormat(
        format!("{} is not an intcode file", path.display())
      ));
    }
    let text =
      fs::read_to_string(path).map_err(
        |error| IntcodeError::InvalidFormat(format!("{}: {}", path.display(), error))
      )?;
    Tape::from_source(&text)
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub fn cells(&self) -> &[Word] {
    &self.cells
  }

  /// Converts a signed address to an index into the cell vector. Everything
  /// outside of `[0, len)` is `OutOfBounds`.
  fn index_of(&self, address: Word) -> Result<usize, IntcodeError> {
    match usize::try_from(address) {
      Ok(idx) if idx < self.cells.len() => Ok(idx),
      _ => Err(IntcodeError::OutOfBounds { address, len: self.cells.len() })
    }
  }

  pub fn read(&self, address: Word) -> Result<Word, IntcodeError> {
    self.index_of(address).map(|idx| self.cells[idx])
  }

  pub fn write(&mut self, address: Word, value: Word) -> Result<(), IntcodeError> {
    let idx = self.index_of(address)?;
    self.cells[idx] = value;
    Ok(())
  }

}

impl Display for Tape {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "[{}]",
      self.cells
          .iter()
          .map(Word::to_string)
          .collect::<Vec<String>>()
          .join(", ")
    )
  }
}


// region Program source parsing

fn integer(input: &str) -> IResult<&str, Word, (&str, ErrorKind)> {
  map_res(
    recognize(pair(opt(one_char('-')), digit1)),
    |text: &str| text.parse::<Word>()
  )(input)
}

fn source_line(input: &str) -> IResult<&str, Vec<Word>, (&str, ErrorKind)> {
  separated_list(
    one_char(','),
    delimited(space0, integer, space0)
  )(input)
}

fn parse_source(text: &str) -> Result<Vec<Word>, IntcodeError> {
  let parser = all_consuming(terminated(
    separated_list(many1(line_ending), source_line),
    many0(line_ending)
  ));
  match parser(text) {
    Ok((_rest, lines)) => Ok(lines.into_iter().flatten().collect()),
    Err(_error) => Err(IntcodeError::InvalidFormat(
      "program source must be lines of comma-separated integers".to_string()
    ))
  }
}

// endregion


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn source_concatenates_lines_in_order() {
    let tape = Tape::from_source("1,9,10,3\n2,3,11,0\n99,30,40,50\n").unwrap();
    assert_eq!(tape.cells(), &[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
  }

  #[test]
  fn source_accepts_signed_values_and_spaces() {
    let tape = Tape::from_source("-1, 2,3\n104, -7").unwrap();
    assert_eq!(tape.cells(), &[-1, 2, 3, 104, -7]);
  }

  #[test]
  fn source_rejects_non_numeric_tokens() {
    assert!(matches!(
      Tape::from_source("1,two,3"),
      Err(IntcodeError::InvalidFormat(_))
    ));
  }

  #[test]
  fn untagged_file_is_rejected_before_opening() {
    assert!(matches!(
      Tape::from_intcode_file("data/day_1_input.txt"),
      Err(IntcodeError::InvalidFormat(_))
    ));
  }

  #[test]
  fn reads_and_writes_are_bounds_checked() {
    let mut tape = Tape::new(vec![10, 20, 30]);
    assert_eq!(tape.read(2), Ok(30));
    tape.write(1, 100).unwrap();
    assert_eq!(tape.read(1), Ok(100));

    assert_eq!(tape.read(-1), Err(IntcodeError::OutOfBounds { address: -1, len: 3 }));
    assert_eq!(tape.read(3),  Err(IntcodeError::OutOfBounds { address: 3,  len: 3 }));
    assert_eq!(
      tape.write(3, 0),
      Err(IntcodeError::OutOfBounds { address: 3, len: 3 })
    );
  }

  #[test]
  fn display_matches_list_notation() {
    let tape = Tape::new(vec![1, 0, 0, 3]);
    assert_eq!(format!("{}", tape), "[1, 0, 0, 3]");
  }
}
