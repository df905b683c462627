use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::Error;

/// Represents a set of interpolation functions.
///
/// An interpolation function blends an ordered list of control points at a given progress `k`
/// (0 being the first point, 1 the last one). Tweens use it for properties animated along a path.
///
/// All functions are total: a single point is returned as is for any progress, and an empty
/// list yields `NaN`.
#[derive(Default, Clone, Copy, Debug)]
pub enum Interpolation {
    /// Piecewise linear blending between consecutive points (default).
    #[default]
    Linear,
    /// A single Bézier curve using all points as control points.
    Bezier,
    /// A Catmull-Rom spline passing through every point.
    CatmullRom,
    /// A caller provided function, called as is.
    Custom(fn(&[f64], f64) -> f64),
}

impl Interpolation {
    /// Call the interpolation function.
    pub fn call(&self, values: &[f64], k: f64) -> f64 {
        match self {
            Interpolation::Linear => linear(values, k),
            Interpolation::Bezier => bezier(values, k),
            Interpolation::CatmullRom => catmull_rom(values, k),
            Interpolation::Custom(function) => function(values, k),
        }
    }

    /// Looks an interpolation up by name: `"Linear"`, `"Bezier"` or `"CatmullRom"`.
    pub fn lookup(name: &str) -> Result<Interpolation, Error> {
        match name {
            "Linear" => Ok(Interpolation::Linear),
            "Bezier" => Ok(Interpolation::Bezier),
            "CatmullRom" => Ok(Interpolation::CatmullRom),
            _ => Err(Error::UnknownInterpolation {
                name: name.to_string(),
            }),
        }
    }
}

/// Blends `start` toward `end` by `t`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    (end - start) * t + start
}

/// Piecewise linear interpolation, clamped to the first and last points.
pub fn linear(values: &[f64], k: f64) -> f64 {
    let (first, last) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return f64::NAN,
    };
    if k <= 0.0 {
        return first;
    }
    if k >= 1.0 {
        return last;
    }

    let m = values.len() - 1;
    let f = m as f64 * k;
    let i = (f.floor() as usize).min(m);
    lerp(values[i], values[(i + 1).min(m)], f - i as f64)
}

/// Bézier curve of degree `n - 1` evaluated with Bernstein polynomials.
///
/// Binomial coefficients are built incrementally along Pascal's triangle row so that long
/// control lists do not overflow.
pub fn bezier(values: &[f64], k: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let n = values.len() - 1;
    let mut coefficient = 1.0;
    let mut sum = 0.0;
    for (i, value) in values.iter().enumerate() {
        sum += coefficient * (1.0 - k).powi((n - i) as i32) * k.powi(i as i32) * value;
        coefficient = coefficient * (n - i) as f64 / (i + 1) as f64;
    }
    sum
}

/// Catmull-Rom spline through all points.
///
/// Boundary segments reuse the first/last point as their outer tangent point. A list whose first
/// and last points are equal is considered a closed loop. Out of range progress extrapolates the
/// boundary segments.
pub fn catmull_rom(values: &[f64], k: f64) -> f64 {
    let Some(&first) = values.first() else {
        return f64::NAN;
    };
    let m = values.len() - 1;
    if m == 0 {
        return first;
    }
    let last = values[m];
    let f = m as f64 * k;

    if first == last {
        if !k.is_finite() {
            return f64::NAN;
        }
        let f = match k < 0.0 {
            true => m as f64 * (1.0 + k),
            false => f,
        };
        let i = f.floor();
        let at = |offset: isize| values[(i as isize + offset).rem_euclid(m as isize) as usize];
        return catmull_rom_segment(at(-1), at(0), at(1), at(2), f - i);
    }

    if k < 0.0 {
        return first - (catmull_rom_segment(first, first, values[1], values[1], -f) - first);
    }
    if k > 1.0 {
        return last
            - (catmull_rom_segment(last, last, values[m - 1], values[m - 1], f - m as f64) - last);
    }

    let i = (f.floor() as usize).min(m);
    catmull_rom_segment(
        values[i.saturating_sub(1)],
        values[i],
        values[(i + 1).min(m)],
        values[(i + 2).min(m)],
        f - i as f64,
    )
}

fn catmull_rom_segment(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let v0 = (p2 - p0) * 0.5;
    let v1 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t * t2;
    (2.0 * p1 - 2.0 * p2 + v0 + v1) * t3 + (-3.0 * p1 + 3.0 * p2 - 2.0 * v0 - v1) * t2 + v0 * t + p1
}

impl PartialEq for Interpolation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Interpolation::Custom(left), Interpolation::Custom(right)) => {
                *left as usize == *right as usize
            }
            (left, right) => std::mem::discriminant(left) == std::mem::discriminant(right),
        }
    }
}

impl Display for Interpolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Interpolation::Linear => "Linear",
            Interpolation::Bezier => "Bezier",
            Interpolation::CatmullRom => "CatmullRom",
            Interpolation::Custom(_) => "Custom",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Interpolation::lookup(name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interpolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interpolation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Interpolation::lookup(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_equal(result: f64, expected: f64) {
        assert!(
            (result - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            result
        );
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
        assert_eq!(lerp(1.0, 2.0, 0.0), 1.0);
    }

    #[test]
    fn test_single_point() {
        for interpolation in [
            Interpolation::Linear,
            Interpolation::Bezier,
            Interpolation::CatmullRom,
        ] {
            for k in [-0.5, 0.0, 0.3, 1.0, 1.5] {
                assert_eq!(interpolation.call(&[4.0], k), 4.0, "{} at {}", interpolation, k);
            }
            assert!(interpolation.call(&[], 0.5).is_nan());
        }
    }

    #[test]
    fn test_linear() {
        assert_eq!(linear(&[2.0, 4.0], 0.0), 2.0);
        assert_eq!(linear(&[2.0, 4.0], 1.0), 4.0);
        assert_eq!(linear(&[2.0, 4.0], 0.5), 3.0);
        assert_eq!(linear(&[2.0, 4.0], -1.0), 2.0);
        assert_eq!(linear(&[2.0, 4.0], 2.0), 4.0);
        assert_approx_equal(linear(&[0.0, 10.0, 0.0], 0.25), 5.0);
        assert_approx_equal(linear(&[0.0, 10.0, 0.0], 0.75), 5.0);
        assert_eq!(linear(&[0.0, 10.0, 20.0], 0.5), 10.0);
    }

    #[test]
    fn test_bezier() {
        assert_approx_equal(bezier(&[0.0, 0.0, 1.0, 1.0], 0.5), 0.5);
        assert_approx_equal(bezier(&[0.0, 0.0, 1.0, 1.0], 0.0), 0.0);
        assert_approx_equal(bezier(&[0.0, 0.0, 1.0, 1.0], 1.0), 1.0);
        // Quadratic: 2 * 0.5 * 0.5 * 10
        assert_approx_equal(bezier(&[0.0, 10.0, 0.0], 0.5), 5.0);
        assert_approx_equal(bezier(&[3.0, 7.0], 0.25), 4.0);
    }

    #[test]
    fn test_bezier_many_points() {
        // A constant control list stays constant: Bernstein polynomials sum to 1.
        let values = vec![2.0; 60];
        for k in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_approx_equal(bezier(&values, k), 2.0);
        }
        // A symmetric control list is worth its mean at half time.
        let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
        assert_approx_equal(bezier(&values, 0.5), 19.5);
    }

    #[test]
    fn test_catmull_rom_goes_through_points() {
        let values = [0.0, 10.0, 5.0, 20.0];
        assert_approx_equal(catmull_rom(&values, 0.0), 0.0);
        assert_approx_equal(catmull_rom(&values, 1.0 / 3.0), 10.0);
        assert_approx_equal(catmull_rom(&values, 2.0 / 3.0), 5.0);
        assert_approx_equal(catmull_rom(&values, 1.0), 20.0);
        assert_approx_equal(catmull_rom(&[0.0, 10.0], 0.5), 5.0);
    }

    #[test]
    fn test_catmull_rom_extrapolates() {
        // A straight line stays straight outside the range.
        assert_approx_equal(catmull_rom(&[0.0, 10.0], -0.5), -5.0);
        assert_approx_equal(catmull_rom(&[0.0, 10.0], 1.5), 15.0);
    }

    #[test]
    fn test_catmull_rom_closed_loop() {
        let values = [0.0, 10.0, 0.0, -10.0, 0.0];
        assert_approx_equal(catmull_rom(&values, 0.0), 0.0);
        assert_approx_equal(catmull_rom(&values, 0.25), 10.0);
        assert_approx_equal(catmull_rom(&values, 0.75), -10.0);
        assert_approx_equal(catmull_rom(&values, 1.0), 0.0);
        // Progress wraps around the loop.
        assert_approx_equal(catmull_rom(&values, -0.25), -10.0);
        // Infinite progress has no position on the loop.
        assert!(catmull_rom(&values, f64::INFINITY).is_nan());
        assert!(catmull_rom(&values, f64::NEG_INFINITY).is_nan());
        assert!(catmull_rom(&values, f64::NAN).is_nan());
    }

    #[test]
    fn test_custom() {
        fn first(values: &[f64], _: f64) -> f64 {
            values[0]
        }
        let interpolation = Interpolation::Custom(first);
        assert_eq!(interpolation.call(&[7.0, 8.0], 0.9), 7.0);
        assert_eq!(interpolation, Interpolation::Custom(first));
        assert_ne!(interpolation, Interpolation::Linear);
        assert_eq!(interpolation.to_string(), "Custom");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Interpolation::lookup("Bezier").unwrap(), Interpolation::Bezier);
        assert_eq!(
            "CatmullRom".parse::<Interpolation>().unwrap(),
            Interpolation::CatmullRom
        );
        assert_eq!(Interpolation::default(), Interpolation::Linear);
        let error = Interpolation::lookup("Cosine").unwrap_err();
        assert_eq!(error.to_string(), "Unknown interpolation: Cosine.");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Interpolation::CatmullRom).unwrap();
        assert_eq!(json, r#""CatmullRom""#);
        let interpolation: Interpolation = serde_json::from_str(r#""Bezier""#).unwrap();
        assert_eq!(interpolation, Interpolation::Bezier);
    }
}
