//! Defines the values flowing through tweens.

pub use crate::utils::value::{parse_delta, EndValue, Value};

mod value;
