#![doc(html_root_url = "https://docs.rs/hermes-tween/0.1.0")]

//! <h1 align="center">HERMES-TWEEN - Tweening engine for Rust</h1>
//! <div style="text-align:center;font-style:italic;">Hermes-Tween smoothly transitions numeric properties of your objects over time.</div>
//! <br/>
//!
//! # Documentation
//!
//! This is the API documentation.<br/>
//! To see the code in action, visit the [examples](https://github.com/hermes-tween/hermes-tween/tree/develop/hermes-tween/examples) directory.
//!
//! # Features
//!
//! **Hermes-Tween** is a Rust library to animate the numeric properties of any object from their current
//! values toward end values, over a duration, on your own clock.
//!
//! - Define animated objects as [`Target`](animations::Target)s: by hand, with `#[derive(Target)]`
//!   or with the dynamic [`Properties`](animations::Properties) record.
//! - Create [`Tween`](animations::Tween)s with absolute, relative (`"+10"`) or path (`[1, 5, 2]`) end values.
//! - Shape transitions with 31 [`Easing`](animations::Easing) curves and 3 [`Interpolation`](animations::Interpolation)s for paths.
//! - Delay, repeat, yoyo and chain tweens, listen to their start, update, complete and stop callbacks.
//! - Drive all running tweens at once with a [`Registry`](animations::Registry), forward in time or
//!   back and forth in [`Scrub`](animations::PlaybackMode::Scrub) mode.
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! hermes-tween = "0.1.0"
//! ```
//!
//! The following code demonstrates the simplest program we could imagine: move a point on the x axis.
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use hermes_tween::animations::{Easing, Registry, Tween};
//! use hermes_tween::Target;
//!
//! #[derive(Target)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! fn main() {
//!     // Create the registry updating all running tweens.
//!     let registry = Registry::new();
//!     let point = Arc::new(RwLock::new(Point { x: 0.0, y: 0.0 }));
//!
//!     // Move x to 100 in 1 second.
//!     Tween::new(&registry, point.clone())
//!         .to_with_duration([("x", 100)], 1000.0)
//!         .easing(Easing::SineInOut)
//!         .start(0.0);
//!
//!     // Tick the clock.
//!     let mut time = 0.0;
//!     while registry.update(time) {
//!         time += 100.0;
//!     }
//!     assert_eq!(point.read().x, 100.0);
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for values, easings and [`TweenConfig`](animations::TweenConfig) (JSON).
//! - **mocks** -- Provides mocked targets (useful for tests mostly).

#[cfg(test)]
extern crate self as hermes_tween;

pub mod animations;
pub mod errors;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod utils;

pub use animations::Target;
pub use hermes_tween_macros::Target;

/// The revision of the tweening engine behavior.
pub const REVISION: &str = "14";
