//! Fuel-mass arithmetic for module launch. A leaf computation: nothing here
//! touches the virtual machine.

/// Fuel required to launch a module of the given mass: a third of the mass,
/// rounded down, minus two.
pub fn fuel(mass: i64) -> i64 {
  mass / 3 - 2
}

/// Fuel for the mass, plus fuel for that fuel, and so on until the marginal
/// demand goes non-positive. Fuel that would require negative fuel requires
/// none instead.
pub fn total_fuel(mass: i64) -> i64 {
  let marginal = fuel(mass);
  match marginal > 0 {
    true  => marginal + total_fuel(marginal),
    false => 0
  }
}
