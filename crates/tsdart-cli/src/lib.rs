//! Command-line driver for the tsdart type translator.
//!
//! Reads a JSON document of TypeScript type nodes (one node or an array),
//! translates each with the [`FacadeResolver`](tsdart_emitter::FacadeResolver)
//! and prints one Dart type per line.

pub mod args;

pub mod driver;
#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;
