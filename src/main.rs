use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use intcode::error::IntcodeError;
use intcode::fuel;
use intcode::machine::Computer;
use intcode::password;
use intcode::tape::Tape;
use intcode::wires::{self, Wire};

#[derive(Parser)]
#[command(name = "intcode", about = "An intcode virtual machine and the puzzles built on it")]
struct Cli {
  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand)]
enum Command {
  /// Run an intcode program, feeding Input instructions from stdin and
  /// printing every Output value.
  Run {
    /// Path to a `.intcode` program.
    program: PathBuf
  },
  /// Day 1: fuel requirements for module masses, one mass per line.
  Fuel {
    input: PathBuf
  },
  /// Day 2: restore the 1202 program alarm, then search for the noun and
  /// verb producing the target output.
  GravityAssist {
    /// Path to a `.intcode` program.
    program: PathBuf,
    /// Cell 0 value the noun/verb search is after.
    #[arg(long, default_value_t = 19_690_720)]
    target: i64
  },
  /// Day 3: crossed wires, two comma-separated paths on two lines.
  Wires {
    input: PathBuf
  },
  /// Day 4: count eligible passwords in [low, high).
  Password {
    low: u32,
    high: u32
  }
}

fn main() {
  let cli = Cli::parse();
  let result = match cli.command {
    Command::Run { program }                   => run(&program),
    Command::Fuel { input }                    => fuel_requirements(&input),
    Command::GravityAssist { program, target } => gravity_assist(&program, target),
    Command::Wires { input }                   => crossed_wires(&input),
    Command::Password { low, high }            => password_counts(low, high)
  };
  if let Err(error) = result {
    eprintln!("{}", error);
    process::exit(1);
  }
}

fn read_input_file(path: &Path) -> Result<String, IntcodeError> {
  fs::read_to_string(path).map_err(
    |error| IntcodeError::InvalidFormat(format!("{}: {}", path.display(), error))
  )
}

fn run(program: &Path) -> Result<(), IntcodeError> {
  let tape = Tape::from_intcode_file(program)?;
  let stdin = io::stdin();
  let mut computer = Computer::with_input(tape, stdin.lock());
  computer.run_to_halt()?;
  for value in computer.outputs() {
    println!("{}", value);
  }
  Ok(())
}

fn fuel_requirements(input: &Path) -> Result<(), IntcodeError> {
  let text = read_input_file(input)?;
  let mut launch = 0;
  let mut total = 0;
  for line in text.lines().filter(|line| !line.trim().is_empty()) {
    let mass = line.trim().parse::<i64>().map_err(
      |_error| IntcodeError::InvalidFormat(format!("{} is not a module mass", line.trim()))
    )?;
    launch += fuel::fuel(mass);
    total += fuel::total_fuel(mass);
  }
  println!("Part 1 answer: {}", launch);
  println!("Part 2 answer: {}", total);
  Ok(())
}

fn gravity_assist(program: &Path, target: i64) -> Result<(), IntcodeError> {
  let tape = Tape::from_intcode_file(program)?;

  // Restore the 1202 program alarm state.
  let mut computer = Computer::new(tape.clone());
  computer.set_cell(1, 12)?;
  computer.set_cell(2, 2)?;
  computer.run_to_halt()?;
  println!("Part 1 answer: {}", computer.get_cell(0)?);

  // Every attempt gets a fresh computer; nothing survives across runs, and
  // seed pairs that fault are simply not the answer.
  for noun in 0..100 {
    for verb in 0..100 {
      let mut computer = Computer::new(tape.clone());
      computer.set_cell(1, noun)?;
      computer.set_cell(2, verb)?;
      if computer.run_to_halt().is_ok() && computer.get_cell(0)? == target {
        println!("Part 2 answer: {}", 100 * noun + verb);
        return Ok(());
      }
    }
  }
  Err(IntcodeError::InvalidFormat(format!("no noun/verb pair reaches {}", target)))
}

fn crossed_wires(input: &Path) -> Result<(), IntcodeError> {
  let text = read_input_file(input)?;
  let mut lines = text.lines().filter(|line| !line.trim().is_empty());
  let mut next_path = || {
    lines.next().ok_or_else(
      || IntcodeError::InvalidFormat("expected two wire paths".to_string())
    )
  };
  let red = Wire::from_path(next_path()?)?;
  let green = Wire::from_path(next_path()?)?;

  let distance = wires::closest_crossing_distance(&red, &green).ok_or_else(
    || IntcodeError::InvalidFormat("the wires never cross".to_string())
  )?;
  let steps = wires::fewest_combined_steps(&red, &green).ok_or_else(
    || IntcodeError::InvalidFormat("the wires never cross".to_string())
  )?;
  println!("Part 1 answer: {}", distance);
  println!("Part 2 answer: {}", steps);
  Ok(())
}

fn password_counts(low: u32, high: u32) -> Result<(), IntcodeError> {
  println!("Part 1 answer: {}", password::count_eligible(low, high, password::is_eligible));
  println!("Part 2 answer: {}", password::count_eligible(low, high, password::is_eligible_strict));
  Ok(())
}
