use std::fmt::{Display, Formatter};

/// A property value as read from (or written to) a [`Target`](crate::animations::Target).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Array(Vec<f64>),
}

/// The value a property animates toward.
///
/// - `Absolute`: a plain number.
/// - `Relative`: a delta applied to the start value (built from strings such as `"+10"` or `"-3"`).
/// - `Path`: a list of control points interpolated with the tween
///   [`Interpolation`](crate::animations::Interpolation).
/// - `Opaque`: anything else. Opaque values are never applied to the target.
#[derive(Clone, Debug, PartialEq)]
pub enum EndValue {
    Absolute(f64),
    Relative(f64),
    Path(Vec<f64>),
    Opaque,
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Array(values) => write_list(f, values),
        }
    }
}

impl Display for EndValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EndValue::Absolute(number) => write!(f, "{}", number),
            EndValue::Relative(delta) => write!(f, "{:+}", delta),
            EndValue::Path(values) => write_list(f, values),
            EndValue::Opaque => write!(f, "?"),
        }
    }
}

fn write_list(f: &mut Formatter<'_>, values: &[f64]) -> std::fmt::Result {
    let elements = values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    write!(f, "[{}]", elements)
}

// **********************************************
// Extractors
// **********************************************

impl Value {
    /// Returns the number held, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Array(_) => None,
        }
    }

    /// Returns the values held, if this is an array.
    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            Value::Number(_) => None,
            Value::Array(values) => Some(values),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

impl EndValue {
    /// Resolves the numeric end of the transition starting at `start`.
    ///
    /// Paths and opaque values have no numeric end.
    pub fn resolve(&self, start: f64) -> Option<f64> {
        match self {
            EndValue::Absolute(end) => Some(*end),
            EndValue::Relative(delta) => Some(start + delta),
            EndValue::Path(_) | EndValue::Opaque => None,
        }
    }

    pub fn is_path(&self) -> bool {
        matches!(self, EndValue::Path(_))
    }
}

/// Parses the leading decimal number of a string, the rest being ignored.
///
/// Returns `NaN` when the string does not start with a number.
/// ```
/// use hermes_tween::utils::parse_delta;
/// assert_eq!(parse_delta("+10"), 10.0);
/// assert_eq!(parse_delta(" -2.5px"), -2.5);
/// assert!(parse_delta("abc").is_nan());
/// ```
pub fn parse_delta(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut index: usize| {
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        index
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let integer_end = digits_from(end);
    let mut mantissa_end = integer_end;
    let mut has_digits = integer_end > end;
    if bytes.get(integer_end) == Some(&b'.') {
        let fraction_end = digits_from(integer_end + 1);
        has_digits |= fraction_end > integer_end + 1;
        mantissa_end = fraction_end;
    }
    if !has_digits {
        return f64::NAN;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+') | Some(b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

// **********************************************
// Converters
// **********************************************

macro_rules! impl_from_number {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Value {
                #[inline]
                fn from(value: $T) -> Value {
                    Value::Number(value as f64)
                }
            }

            impl From<$T> for EndValue {
                #[inline]
                fn from(value: $T) -> EndValue {
                    EndValue::Absolute(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: Into<f64>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<f64>> From<Vec<T>> for EndValue {
    fn from(values: Vec<T>) -> Self {
        EndValue::Path(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Copy + Into<f64>, const N: usize> From<[T; N]> for EndValue {
    fn from(values: [T; N]) -> Self {
        EndValue::Path(values.iter().map(|value| (*value).into()).collect())
    }
}

impl From<&str> for EndValue {
    /// Any string is read as a delta relative to the start value.
    fn from(text: &str) -> Self {
        EndValue::Relative(parse_delta(text))
    }
}

impl From<String> for EndValue {
    fn from(text: String) -> Self {
        EndValue::from(text.as_str())
    }
}

impl From<Value> for EndValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => EndValue::Absolute(number),
            Value::Array(values) => EndValue::Path(values),
        }
    }
}

// **********************************************
// Serde
// **********************************************

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Number(number) => serializer.serialize_f64(*number),
            Value::Array(values) => serializer.collect_seq(values),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Array(Vec<f64>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(number) => Value::Number(number),
            Raw::Array(values) => Value::Array(values),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EndValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            EndValue::Absolute(number) => serializer.serialize_f64(*number),
            EndValue::Relative(_) => serializer.serialize_str(&self.to_string()),
            EndValue::Path(values) => serializer.collect_seq(values),
            EndValue::Opaque => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EndValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(EndValue::from(serde_json::Value::deserialize(deserializer)?))
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for EndValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(number) => match number.as_f64() {
                Some(number) => EndValue::Absolute(number),
                None => EndValue::Opaque,
            },
            serde_json::Value::String(text) => EndValue::from(text),
            serde_json::Value::Array(list) => EndValue::Path(
                list.iter()
                    .map(|item| item.as_f64().unwrap_or(f64::NAN))
                    .collect(),
            ),
            _ => EndValue::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_extractors() {
        assert_eq!(Value::Number(4.5).as_number(), Some(4.5));
        assert_eq!(Value::Array(vec![1.0]).as_number(), None);
        assert_eq!(Value::Array(vec![1.0, 2.0]).as_array(), Some(&[1.0, 2.0][..]));
        assert_eq!(Value::Number(1.0).as_array(), None);
        assert!(Value::Array(vec![]).is_array());
        assert!(!Value::default().is_array());
        assert_eq!(Value::default(), Value::Number(0.0));
    }

    #[test]
    fn test_value_converters() {
        assert_eq!(Value::from(3u8), Value::Number(3.0));
        assert_eq!(Value::from(-3i32), Value::Number(-3.0));
        assert_eq!(Value::from(0.5f32), Value::Number(0.5));
        assert_eq!(Value::from(vec![1u8, 2u8]), Value::Array(vec![1.0, 2.0]));
    }

    #[test]
    fn test_end_value_converters() {
        assert_eq!(EndValue::from(10), EndValue::Absolute(10.0));
        assert_eq!(EndValue::from("+10"), EndValue::Relative(10.0));
        assert_eq!(EndValue::from("-3"), EndValue::Relative(-3.0));
        assert_eq!(EndValue::from(String::from("7")), EndValue::Relative(7.0));
        assert_eq!(EndValue::from(vec![1.0, 2.0]), EndValue::Path(vec![1.0, 2.0]));
        assert_eq!(EndValue::from([1, 2, 3]), EndValue::Path(vec![1.0, 2.0, 3.0]));
        assert_eq!(EndValue::from(Value::Number(2.0)), EndValue::Absolute(2.0));
        assert_eq!(
            EndValue::from(Value::Array(vec![2.0])),
            EndValue::Path(vec![2.0])
        );
        match EndValue::from("left") {
            EndValue::Relative(delta) => assert!(delta.is_nan()),
            other => panic!("unexpected end value {:?}", other),
        }
    }

    #[test]
    fn test_end_value_resolve() {
        assert_eq!(EndValue::Absolute(10.0).resolve(5.0), Some(10.0));
        assert_eq!(EndValue::Relative(10.0).resolve(5.0), Some(15.0));
        assert_eq!(EndValue::Relative(-10.0).resolve(5.0), Some(-5.0));
        assert_eq!(EndValue::Path(vec![1.0]).resolve(5.0), None);
        assert_eq!(EndValue::Opaque.resolve(5.0), None);
        assert!(EndValue::Path(vec![]).is_path());
        assert!(!EndValue::Opaque.is_path());
    }

    #[test]
    fn test_parse_delta() {
        assert_eq!(parse_delta("10"), 10.0);
        assert_eq!(parse_delta("+10"), 10.0);
        assert_eq!(parse_delta("-0.5"), -0.5);
        assert_eq!(parse_delta(".5"), 0.5);
        assert_eq!(parse_delta("5."), 5.0);
        assert_eq!(parse_delta("  12px"), 12.0);
        assert_eq!(parse_delta("1e3"), 1000.0);
        assert_eq!(parse_delta("2e"), 2.0);
        assert_eq!(parse_delta("-1.5E-1rest"), -0.15);
        assert!(parse_delta("").is_nan());
        assert!(parse_delta("+").is_nan());
        assert!(parse_delta(".").is_nan());
        assert!(parse_delta("abc").is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Array(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(EndValue::Absolute(3.0).to_string(), "3");
        assert_eq!(EndValue::Relative(3.0).to_string(), "+3");
        assert_eq!(EndValue::Relative(-3.0).to_string(), "-3");
        assert_eq!(EndValue::Path(vec![0.0, 1.0]).to_string(), "[0, 1]");
        assert_eq!(EndValue::Opaque.to_string(), "?");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_value_serde() {
            assert_eq!(serde_json::to_string(&Value::Number(1.5)).unwrap(), "1.5");
            assert_eq!(
                serde_json::to_string(&Value::Array(vec![1.0, 2.0])).unwrap(),
                "[1.0,2.0]"
            );
            let value: Value = serde_json::from_str("[1, 2]").unwrap();
            assert_eq!(value, Value::Array(vec![1.0, 2.0]));
            let value: Value = serde_json::from_str("4").unwrap();
            assert_eq!(value, Value::Number(4.0));
        }

        #[test]
        fn test_end_value_serde() {
            let end: EndValue = serde_json::from_str("10").unwrap();
            assert_eq!(end, EndValue::Absolute(10.0));
            let end: EndValue = serde_json::from_str(r#""+10""#).unwrap();
            assert_eq!(end, EndValue::Relative(10.0));
            let end: EndValue = serde_json::from_str("[1, 2]").unwrap();
            assert_eq!(end, EndValue::Path(vec![1.0, 2.0]));
            let end: EndValue = serde_json::from_str("true").unwrap();
            assert_eq!(end, EndValue::Opaque);
            let end: EndValue = serde_json::from_str("null").unwrap();
            assert_eq!(end, EndValue::Opaque);

            assert_eq!(
                serde_json::to_string(&EndValue::Relative(-2.0)).unwrap(),
                r#""-2""#
            );
            assert_eq!(serde_json::to_string(&EndValue::Opaque).unwrap(), "null");
        }
    }
}
