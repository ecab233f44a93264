pub mod cli;
pub mod cocomo;
pub mod counter;
pub mod error;
pub mod language;
pub mod output;
pub mod path_utils;
pub mod scanner;
pub mod stats;

pub use error::{Result, SlocCountError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
