use std::fmt::{Display, Formatter};

use crate::animations::Target;
use crate::utils::Value;

/// Mock [`Target`] for testing purposes.
///
/// Exposes two numeric properties `x` and `y` and an array property `samples` (read only).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockTarget {
    pub x: f64,
    pub y: f64,
    pub samples: Vec<f64>,
}

impl MockTarget {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            samples: vec![],
        }
    }

    pub fn with_samples(mut self, samples: Vec<f64>) -> Self {
        self.samples = samples;
        self
    }
}

impl Display for MockTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockTarget [x={}, y={}]", self.x, self.y)
    }
}

impl Target for MockTarget {
    fn get(&self, property: &str) -> Option<Value> {
        match property {
            "x" => Some(Value::Number(self.x)),
            "y" => Some(Value::Number(self.y)),
            "samples" => Some(Value::Array(self.samples.clone())),
            _ => None,
        }
    }

    fn set(&mut self, property: &str, value: f64) {
        match property {
            "x" => self.x = value,
            "y" => self.y = value,
            _ => {}
        }
    }
}
