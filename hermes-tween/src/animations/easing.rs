use std::fmt::{Display, Formatter};
use std::str::FromStr;

use simple_easing::*;

use crate::errors::Error;

/// Families of easing curves.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sinusoidal,
    Exponential,
    Circular,
    Elastic,
    Back,
    Bounce,
}

/// Variants of an easing curve: accelerating, decelerating, or both (split at half time).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ease {
    In,
    Out,
    InOut,
}

/// Represents a set of easing function.
///
/// An easing function is a temporal function that takes a time between 0 and 1 (beginning / end)
/// and associate to it a number value according to an ease curve. Some curves (`Elastic`, `Back`)
/// overshoot the `[0, 1]` range in between, but every built-in curve maps 0 to 0 and 1 to 1.
///
/// Built-in curves other than `Linear` are evaluated in `f32` precision (the endpoints excepted):
/// over large ranges, eased values can be off by a few hundredths. Use [`Easing::Custom`] when
/// full `f64` precision matters.
///
/// See <https://easings.net> for a representation of easing methods.
///
/// Easings can be looked up by family and variant names:
/// ```
/// use hermes_tween::animations::Easing;
/// assert_eq!(Easing::lookup("Quadratic", "InOut").unwrap(), Easing::QuadInOut);
/// assert_eq!("Elastic.Out".parse::<Easing>().unwrap(), Easing::ElasticOut);
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub enum Easing {
    // Applies no transformation (default).
    #[default]
    Linear,
    /// <https://easings.net/#easeInQuad>
    QuadIn,
    /// <https://easings.net/#easeOutQuad>
    QuadOut,
    /// <https://easings.net/#easeInOutQuad>
    QuadInOut,
    /// <https://easings.net/#easeInCubic>
    CubicIn,
    /// <https://easings.net/#easeOutCubic>
    CubicOut,
    /// <https://easings.net/#easeInOutCubic>
    CubicInOut,
    /// <https://easings.net/#easeInQuart>
    QuartIn,
    /// <https://easings.net/#easeOutQuart>
    QuartOut,
    /// <https://easings.net/#easeInOutQuart>
    QuartInOut,
    /// <https://easings.net/#easeInQuint>
    QuintIn,
    /// <https://easings.net/#easeOutQuint>
    QuintOut,
    /// <https://easings.net/#easeInOutQuint>
    QuintInOut,
    /// <https://easings.net/#easeInSine>
    SineIn,
    /// <https://easings.net/#easeOutSine>
    SineOut,
    /// <https://easings.net/#easeInOutSine>
    SineInOut,
    /// <https://easings.net/#easeInExpo>
    ExpoIn,
    /// <https://easings.net/#easeOutExpo>
    ExpoOut,
    /// <https://easings.net/#easeInOutExpo>
    ExpoInOut,
    /// <https://easings.net/#easeInCirc>
    CircIn,
    /// <https://easings.net/#easeOutCirc>
    CircOut,
    /// <https://easings.net/#easeInOutCirc>
    CircInOut,
    /// <https://easings.net/#easeInElastic>
    ElasticIn,
    /// <https://easings.net/#easeOutElastic>
    ElasticOut,
    /// <https://easings.net/#easeInOutElastic>
    ElasticInOut,
    /// <https://easings.net/#easeInBack>
    BackIn,
    /// <https://easings.net/#easeOutBack>
    BackOut,
    /// <https://easings.net/#easeInOutBack>
    BackInOut,
    /// <https://easings.net/#easeInBounce>
    BounceIn,
    /// <https://easings.net/#easeOutBounce>
    BounceOut,
    /// <https://easings.net/#easeInOutBounce>
    BounceInOut,
    /// A caller provided curve, called as is.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Call the easing function.
    pub fn call(&self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::Custom(function) => function(t),
            // Built-in curves are computed in f32: endpoints are pinned.
            _ if t == 0.0 => 0.0,
            _ if t == 1.0 => 1.0,
            easing => f64::from(easing.call_f32(t as f32)),
        }
    }

    fn call_f32(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => quad_in(t),
            Easing::QuadOut => quad_out(t),
            Easing::QuadInOut => quad_in_out(t),
            Easing::CubicIn => cubic_in(t),
            Easing::CubicOut => cubic_out(t),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::QuartIn => quart_in(t),
            Easing::QuartOut => quart_out(t),
            Easing::QuartInOut => quart_in_out(t),
            Easing::QuintIn => quint_in(t),
            Easing::QuintOut => quint_out(t),
            Easing::QuintInOut => quint_in_out(t),
            Easing::SineIn => sine_in(t),
            Easing::SineOut => sine_out(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::ExpoIn => expo_in(t),
            Easing::ExpoOut => expo_out(t),
            Easing::ExpoInOut => expo_in_out(t),
            Easing::CircIn => circ_in(t),
            Easing::CircOut => circ_out(t),
            Easing::CircInOut => circ_in_out(t),
            Easing::ElasticIn => elastic_in(t),
            Easing::ElasticOut => elastic_out(t),
            Easing::ElasticInOut => elastic_in_out(t),
            Easing::BackIn => back_in(t),
            Easing::BackOut => back_out(t),
            Easing::BackInOut => back_in_out(t),
            Easing::BounceIn => bounce_in(t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => bounce_in_out(t),
            Easing::Custom(function) => function(f64::from(t)) as f32,
        }
    }

    /// Builds the easing of a given curve family and variant.
    ///
    /// All variants of [`Curve::Linear`] are the same (no transformation).
    pub fn from_parts(curve: Curve, ease: Ease) -> Easing {
        match (curve, ease) {
            (Curve::Linear, _) => Easing::Linear,
            (Curve::Quadratic, Ease::In) => Easing::QuadIn,
            (Curve::Quadratic, Ease::Out) => Easing::QuadOut,
            (Curve::Quadratic, Ease::InOut) => Easing::QuadInOut,
            (Curve::Cubic, Ease::In) => Easing::CubicIn,
            (Curve::Cubic, Ease::Out) => Easing::CubicOut,
            (Curve::Cubic, Ease::InOut) => Easing::CubicInOut,
            (Curve::Quartic, Ease::In) => Easing::QuartIn,
            (Curve::Quartic, Ease::Out) => Easing::QuartOut,
            (Curve::Quartic, Ease::InOut) => Easing::QuartInOut,
            (Curve::Quintic, Ease::In) => Easing::QuintIn,
            (Curve::Quintic, Ease::Out) => Easing::QuintOut,
            (Curve::Quintic, Ease::InOut) => Easing::QuintInOut,
            (Curve::Sinusoidal, Ease::In) => Easing::SineIn,
            (Curve::Sinusoidal, Ease::Out) => Easing::SineOut,
            (Curve::Sinusoidal, Ease::InOut) => Easing::SineInOut,
            (Curve::Exponential, Ease::In) => Easing::ExpoIn,
            (Curve::Exponential, Ease::Out) => Easing::ExpoOut,
            (Curve::Exponential, Ease::InOut) => Easing::ExpoInOut,
            (Curve::Circular, Ease::In) => Easing::CircIn,
            (Curve::Circular, Ease::Out) => Easing::CircOut,
            (Curve::Circular, Ease::InOut) => Easing::CircInOut,
            (Curve::Elastic, Ease::In) => Easing::ElasticIn,
            (Curve::Elastic, Ease::Out) => Easing::ElasticOut,
            (Curve::Elastic, Ease::InOut) => Easing::ElasticInOut,
            (Curve::Back, Ease::In) => Easing::BackIn,
            (Curve::Back, Ease::Out) => Easing::BackOut,
            (Curve::Back, Ease::InOut) => Easing::BackInOut,
            (Curve::Bounce, Ease::In) => Easing::BounceIn,
            (Curve::Bounce, Ease::Out) => Easing::BounceOut,
            (Curve::Bounce, Ease::InOut) => Easing::BounceInOut,
        }
    }

    /// Returns the curve family and variant of a built-in easing (`None` for custom ones).
    ///
    /// [`Easing::Linear`] has no variant.
    pub fn parts(&self) -> Option<(Curve, Option<Ease>)> {
        let (curve, ease) = match self {
            Easing::Linear => return Some((Curve::Linear, None)),
            Easing::Custom(_) => return None,
            Easing::QuadIn => (Curve::Quadratic, Ease::In),
            Easing::QuadOut => (Curve::Quadratic, Ease::Out),
            Easing::QuadInOut => (Curve::Quadratic, Ease::InOut),
            Easing::CubicIn => (Curve::Cubic, Ease::In),
            Easing::CubicOut => (Curve::Cubic, Ease::Out),
            Easing::CubicInOut => (Curve::Cubic, Ease::InOut),
            Easing::QuartIn => (Curve::Quartic, Ease::In),
            Easing::QuartOut => (Curve::Quartic, Ease::Out),
            Easing::QuartInOut => (Curve::Quartic, Ease::InOut),
            Easing::QuintIn => (Curve::Quintic, Ease::In),
            Easing::QuintOut => (Curve::Quintic, Ease::Out),
            Easing::QuintInOut => (Curve::Quintic, Ease::InOut),
            Easing::SineIn => (Curve::Sinusoidal, Ease::In),
            Easing::SineOut => (Curve::Sinusoidal, Ease::Out),
            Easing::SineInOut => (Curve::Sinusoidal, Ease::InOut),
            Easing::ExpoIn => (Curve::Exponential, Ease::In),
            Easing::ExpoOut => (Curve::Exponential, Ease::Out),
            Easing::ExpoInOut => (Curve::Exponential, Ease::InOut),
            Easing::CircIn => (Curve::Circular, Ease::In),
            Easing::CircOut => (Curve::Circular, Ease::Out),
            Easing::CircInOut => (Curve::Circular, Ease::InOut),
            Easing::ElasticIn => (Curve::Elastic, Ease::In),
            Easing::ElasticOut => (Curve::Elastic, Ease::Out),
            Easing::ElasticInOut => (Curve::Elastic, Ease::InOut),
            Easing::BackIn => (Curve::Back, Ease::In),
            Easing::BackOut => (Curve::Back, Ease::Out),
            Easing::BackInOut => (Curve::Back, Ease::InOut),
            Easing::BounceIn => (Curve::Bounce, Ease::In),
            Easing::BounceOut => (Curve::Bounce, Ease::Out),
            Easing::BounceInOut => (Curve::Bounce, Ease::InOut),
        };
        Some((curve, Some(ease)))
    }

    /// Looks an easing up by family name (`"Quadratic"`, `"Bounce"`, ...) and variant name
    /// (`"In"`, `"Out"`, `"InOut"`, or `"None"` for the linear family).
    pub fn lookup(family: &str, variant: &str) -> Result<Easing, Error> {
        let unknown = || Error::UnknownEasing {
            name: format!("{}.{}", family, variant),
        };
        let curve = family.parse::<Curve>().map_err(|_| unknown())?;
        match (curve, variant) {
            (Curve::Linear, "None") => Ok(Easing::Linear),
            (curve, variant) => {
                let ease = variant.parse::<Ease>().map_err(|_| unknown())?;
                Ok(Easing::from_parts(curve, ease))
            }
        }
    }

    /// Lists every built-in easing.
    pub fn all() -> Vec<Easing> {
        let mut easings = vec![Easing::Linear];
        for curve in Curve::all().into_iter().skip(1) {
            for ease in [Ease::In, Ease::Out, Ease::InOut] {
                easings.push(Easing::from_parts(curve, ease));
            }
        }
        easings
    }
}

impl Curve {
    /// Lists every curve family.
    pub fn all() -> [Curve; 11] {
        [
            Curve::Linear,
            Curve::Quadratic,
            Curve::Cubic,
            Curve::Quartic,
            Curve::Quintic,
            Curve::Sinusoidal,
            Curve::Exponential,
            Curve::Circular,
            Curve::Elastic,
            Curve::Back,
            Curve::Bounce,
        ]
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Custom(left), Easing::Custom(right)) => *left as usize == *right as usize,
            (left, right) => std::mem::discriminant(left) == std::mem::discriminant(right),
        }
    }
}

// ########################################
// Names

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Curve::Linear => "Linear",
            Curve::Quadratic => "Quadratic",
            Curve::Cubic => "Cubic",
            Curve::Quartic => "Quartic",
            Curve::Quintic => "Quintic",
            Curve::Sinusoidal => "Sinusoidal",
            Curve::Exponential => "Exponential",
            Curve::Circular => "Circular",
            Curve::Elastic => "Elastic",
            Curve::Back => "Back",
            Curve::Bounce => "Bounce",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Curve::all()
            .into_iter()
            .find(|curve| curve.to_string() == name)
            .ok_or_else(|| Error::UnknownEasing {
                name: name.to_string(),
            })
    }
}

impl Display for Ease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ease::In => "In",
            Ease::Out => "Out",
            Ease::InOut => "InOut",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Ease {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "In" => Ok(Ease::In),
            "Out" => Ok(Ease::Out),
            "InOut" => Ok(Ease::InOut),
            _ => Err(Error::UnknownEasing {
                name: name.to_string(),
            }),
        }
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.parts() {
            None => write!(f, "Custom"),
            Some((curve, None)) => write!(f, "{}.None", curve),
            Some((curve, Some(ease))) => write!(f, "{}.{}", curve, ease),
        }
    }
}

impl FromStr for Easing {
    type Err = Error;

    /// Parses `"Family.Variant"` names; a lone `"Linear"` is accepted too.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.split_once('.') {
            Some((family, variant)) => Easing::lookup(family, variant),
            None if name == "Linear" => Ok(Easing::Linear),
            None => Err(Error::UnknownEasing {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
