//! An intcode virtual machine: a linear program of variable-width
//! instructions executed over a single mutable integer tape, with
//! per-operand addressing modes. The puzzle modules (`fuel`, `wires`,
//! `password`) are leaf computations that never touch the machine; the
//! gravity-assist driver in the binary consumes only its public surface.

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod decode;
pub mod error;
pub mod fuel;
pub mod machine;
pub mod opcode;
pub mod password;
pub mod tape;
pub mod wires;
