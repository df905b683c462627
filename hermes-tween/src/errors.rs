use snafu::Snafu;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Unknown easing: {name}.
    UnknownEasing { name: String },
    /// Unknown interpolation: {name}.
    UnknownInterpolation { name: String },
    /// Invalid configuration: {info}.
    InvalidConfig { info: String },
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidConfig {
            info: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let easing_error = UnknownEasing {
            name: String::from("Wobbly.In"),
        };
        assert_eq!(format!("{}", easing_error), "Unknown easing: Wobbly.In.");

        let interpolation_error = UnknownInterpolation {
            name: String::from("Cosine"),
        };
        assert_eq!(
            format!("{}", interpolation_error),
            "Unknown interpolation: Cosine."
        );

        let config_error = InvalidConfig {
            info: String::from("missing field"),
        };
        assert_eq!(
            format!("{}", config_error),
            "Invalid configuration: missing field."
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").err().unwrap();
        let error: Error = json_error.into();
        assert!(format!("{}", error).starts_with("Invalid configuration: EOF"));
    }
}
