//! Sprout library exports for testing

pub mod core;
pub mod session;
pub mod suggest;
pub mod tui;

#[cfg(test)]
pub mod test_support;
