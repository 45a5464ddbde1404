//! Library half of the `enumlogic` binary.
//!
//! Commands build their report as a `String` so they can be tested without
//! capturing stdout; `main.rs` only parses arguments and prints.

pub mod commands;
