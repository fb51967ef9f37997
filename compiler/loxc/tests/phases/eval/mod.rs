//! Whole-program tests through `Session`.

mod programs;
mod prompt;
mod runtime_errors;
