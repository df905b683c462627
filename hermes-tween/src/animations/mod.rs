//! Defines tweens: transitions of target numeric properties over time, driven by a registry.

mod config;
mod easing;
mod interpolation;
mod registry;
mod target;
mod tween;

pub use config::TweenConfig;
pub use easing::{Curve, Ease, Easing};
pub use interpolation::{bezier, catmull_rom, lerp, linear, Interpolation};
pub use registry::{Registry, WeakRegistry};
pub use target::{Properties, Target};
pub use tween::{Callback, Direction, PlaybackMode, Repeat, SharedTarget, Tween, UpdateCallback};
