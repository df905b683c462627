//! Mocked targets for testing purposes.

pub mod target;
