use std::collections::HashMap;

use crate::animations::{Easing, Interpolation, PlaybackMode};
#[cfg(feature = "serde")]
use crate::errors::Error;
use crate::utils::EndValue;

/// A declarative description of a tween, applied with [`Tween::configure`](crate::animations::Tween::configure).
///
/// With the `serde` feature, a configuration can be read from JSON where every field is optional:
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use hermes_tween::animations::{Easing, TweenConfig};
///
/// let config = TweenConfig::from_json(r#"{
///     "duration": 500,
///     "easing": "Elastic.Out",
///     "repeat": null,
///     "to": { "x": 100, "y": "+20", "z": [1, 2, 3] }
/// }"#).unwrap();
///
/// assert_eq!(config.duration, 500.0);
/// assert_eq!(config.easing, Easing::ElasticOut);
/// assert_eq!(config.repeat, None);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct TweenConfig {
    /// The transition duration (in ms).
    pub duration: f64,
    /// The delay (in ms) before each cycle.
    pub delay: f64,
    /// How many times the tween restarts once complete: `None` for ever.
    pub repeat: Option<u32>,
    pub yoyo: bool,
    pub easing: Easing,
    pub interpolation: Interpolation,
    pub mode: PlaybackMode,
    /// The end values per property.
    pub to: HashMap<String, EndValue>,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: 1000.0,
            delay: 0.0,
            repeat: Some(0),
            yoyo: false,
            easing: Easing::default(),
            interpolation: Interpolation::default(),
            mode: PlaybackMode::default(),
            to: HashMap::new(),
        }
    }
}

impl TweenConfig {
    /// Adds (or replaces) the end value of a property.
    pub fn with_end<K: Into<String>, V: Into<EndValue>>(mut self, property: K, value: V) -> Self {
        self.to.insert(property.into(), value.into());
        self
    }

    /// Reads a configuration from a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the configuration as a JSON document.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;

    use crate::animations::{Registry, Repeat, Tween};
    use crate::mocks::target::MockTarget;

    use super::*;

    #[test]
    fn test_config_default() {
        let config = TweenConfig::default();
        assert_eq!(config.duration, 1000.0);
        assert_eq!(config.delay, 0.0);
        assert_eq!(config.repeat, Some(0));
        assert!(!config.yoyo);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.interpolation, Interpolation::Linear);
        assert_eq!(config.mode, PlaybackMode::Cyclic);
        assert!(config.to.is_empty());
    }

    #[test]
    fn test_configure_tween() {
        let registry = Registry::new();
        let target = Arc::new(RwLock::new(MockTarget::new(0.0, 10.0)));
        let config = TweenConfig {
            duration: 200.0,
            delay: 100.0,
            repeat: None,
            yoyo: true,
            easing: Easing::CubicOut,
            interpolation: Interpolation::Bezier,
            ..Default::default()
        }
        .with_end("x", 50)
        .with_end("y", "-10");

        let tween = Tween::new(&registry, target.clone()).configure(&config);
        assert_eq!(tween.get_duration(), 200.0);
        assert_eq!(tween.get_delay(), 100.0);
        assert_eq!(tween.get_repeat(), Repeat::Infinite);
        assert!(tween.is_yoyo());
        assert_eq!(tween.get_easing(), Easing::CubicOut);
        assert_eq!(tween.get_interpolation(), Interpolation::Bezier);
        assert_eq!(tween.get_end_values(), config.to);

        tween.start(0.0);
        assert!(tween.update(300.0));
        assert_eq!(target.read().x, 50.0);
        assert_eq!(target.read().y, 0.0);
        assert!(tween.is_reversed());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = TweenConfig::from_json(
            r#"{
                "duration": 250,
                "delay": 10,
                "repeat": 2,
                "yoyo": true,
                "easing": "Quadratic.InOut",
                "interpolation": "CatmullRom",
                "mode": "Scrub",
                "to": { "x": 100, "y": "+5", "path": [1, 2], "flag": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.duration, 250.0);
        assert_eq!(config.delay, 10.0);
        assert_eq!(config.repeat, Some(2));
        assert!(config.yoyo);
        assert_eq!(config.easing, Easing::QuadInOut);
        assert_eq!(config.interpolation, Interpolation::CatmullRom);
        assert_eq!(config.mode, PlaybackMode::Scrub);
        assert_eq!(config.to.get("x"), Some(&EndValue::Absolute(100.0)));
        assert_eq!(config.to.get("y"), Some(&EndValue::Relative(5.0)));
        assert_eq!(config.to.get("path"), Some(&EndValue::Path(vec![1.0, 2.0])));
        assert_eq!(config.to.get("flag"), Some(&EndValue::Opaque));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_defaults() {
        let config = TweenConfig::from_json("{}").unwrap();
        assert_eq!(config, TweenConfig::default());

        let config = TweenConfig::from_json(r#"{ "repeat": null }"#).unwrap();
        assert_eq!(config.repeat, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_errors() {
        let error = TweenConfig::from_json(r#"{ "easing": "Wobbly.In" }"#).unwrap_err();
        assert!(error.to_string().contains("Unknown easing: Wobbly.In."));

        let error = TweenConfig::from_json("[").unwrap_err();
        assert!(matches!(error, Error::InvalidConfig { .. }));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let config = TweenConfig::default().with_end("x", 10);
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""easing":"Linear.None""#));
        assert!(json.contains(r#""to":{"x":10.0}"#));
        assert_eq!(TweenConfig::from_json(&json).unwrap(), config);
    }
}
