//! Defines Hermes-Tween `#[derive(Target)]` macro.

#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

extern crate proc_macro;

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod target_macro;

/// Derives `hermes_tween::animations::Target` for a struct with named fields.
///
/// - Numeric primitive fields (`u8`..`u128`, `i8`..`i128`, `usize`, `isize`, `f32`, `f64`) are
///   readable and writable properties. Written values are cast with `as`.
/// - `Vec` of numeric primitive fields are readable (as arrays) but never written.
/// - `#[target(skip)]` hides a field. Any other field type must be skipped.
/// - `#[target(rename = "name")]` exposes a field under another property name.
///
/// # Example
/// ```
/// use hermes_tween::Target;
///
/// #[derive(Target)]
/// struct Sprite {
///     x: f32,
///     y: f32,
///     #[target(rename = "alpha")]
///     opacity: u8,
///     #[target(skip)]
///     name: String,
/// }
/// ```
#[proc_macro_derive(Target, attributes(target))]
pub fn derive_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    target_macro::expand_target(input, &quote!(hermes_tween))
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
