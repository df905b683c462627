use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::utils::Value;

/// Defines an object whose named numeric properties can be tweened.
///
/// Implement it by hand or derive it with `#[derive(Target)]` on a struct of numeric fields.
///
/// # Example
/// ```
/// use hermes_tween::animations::Target;
/// use hermes_tween::utils::Value;
///
/// struct Light {
///     intensity: f64,
/// }
///
/// impl Target for Light {
///     fn get(&self, property: &str) -> Option<Value> {
///         match property {
///             "intensity" => Some(Value::Number(self.intensity)),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, property: &str, value: f64) {
///         if property == "intensity" {
///             self.intensity = value;
///         }
///     }
/// }
/// ```
pub trait Target: Send + Sync {
    /// Reads a property, `None` when the target has no such property.
    fn get(&self, property: &str) -> Option<Value>;
    /// Writes a numeric property. Unknown properties may be ignored.
    fn set(&mut self, property: &str, value: f64);
}

/// A dynamic record of named values: the simplest [`Target`].
///
/// Setting a property creates it when missing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties {
    values: HashMap<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a property.
    pub fn with<K: Into<String>, V: Into<Value>>(mut self, property: K, value: V) -> Self {
        self.insert(property, value);
        self
    }

    /// Inserts (or replaces) a property.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, property: K, value: V) {
        self.values.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Target for Properties {
    fn get(&self, property: &str) -> Option<Value> {
        self.values.get(property).cloned()
    }

    fn set(&mut self, property: &str, value: f64) {
        self.values.insert(property.to_string(), Value::Number(value));
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Properties {
    fn from(properties: [(K, V); N]) -> Self {
        properties.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        }
    }
}

impl Display for Properties {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut properties: Vec<_> = self.values.iter().collect();
        properties.sort_by(|a, b| a.0.cmp(b.0));
        let properties: Vec<String> = properties
            .into_iter()
            .map(|(property, value)| format!("{}={}", property, value))
            .collect();
        write!(f, "Properties [{}]", properties.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties() {
        let properties = Properties::new().with("x", 1).with("y", 2.5);
        assert_eq!(properties.len(), 2);
        assert!(!properties.is_empty());
        assert_eq!(properties.get("x"), Some(&Value::Number(1.0)));
        assert_eq!(properties.get("z"), None);
        assert!(Properties::default().is_empty());
    }

    #[test]
    fn test_properties_as_target() {
        let mut properties = Properties::from([("x", 0)]);
        properties.set("x", 4.0);
        properties.set("z", -1.0);
        assert_eq!(Target::get(&properties, "x"), Some(Value::Number(4.0)));
        assert_eq!(Target::get(&properties, "z"), Some(Value::Number(-1.0)));
        assert_eq!(Target::get(&properties, "w"), None);

        // Arrays are readable but overwritten by a numeric set.
        properties.insert("path", vec![1.0, 2.0]);
        assert_eq!(
            Target::get(&properties, "path"),
            Some(Value::Array(vec![1.0, 2.0]))
        );
        properties.set("path", 3.0);
        assert_eq!(Target::get(&properties, "path"), Some(Value::Number(3.0)));
    }

    #[test]
    fn test_properties_converters() {
        let properties: Properties = vec![("a", 1.0), ("b", 2.0)].into_iter().collect();
        assert_eq!(properties.iter().count(), 2);
        assert_eq!(properties, Properties::from([("b", 2.0), ("a", 1.0)]));
    }

    #[test]
    fn test_properties_display() {
        let properties = Properties::from([("y", Value::from(2)), ("x", Value::from(vec![1, 3]))]);
        assert_eq!(properties.to_string(), "Properties [x=[1, 3], y=2]");
    }
}
