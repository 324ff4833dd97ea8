//! Trivia quiz library exports for testing

pub mod core;
pub mod questions;
pub mod tui;

#[cfg(test)]
pub mod test_support;
