//! A small linear algebra library for fixed-size geometry.
//!
//! # Motivation
//!
//! Geometry code mostly juggles a handful of small objects of statically known size: points,
//! directions, transform matrices, rotations. This crate provides exactly those — [`Vector`],
//! [`Matrix`], [`Quaternion`], and [`Complex`] — and encodes every dimension in the type, so
//! mismatched operands are caught by the compiler instead of a runtime bounds check.
//!
//! Large general-purpose linear algebra libraries cover the same ground, but they pay for their
//! flexibility with intricate APIs and trait bounds that leak into every signature built on top
//! of them. For code that never needs a dynamically-sized matrix, a small fixed-size library is
//! easier to use and easier to keep stable.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics for all
//!   dimensions keeps the API small and moves size mismatches to compile time.
//! - Support only a single, row-major, unpadded data layout, so every type can be viewed as a
//!   plain array of its elements.
//! - Be generic over the element type — including elements that are themselves vectors or
//!   complex numbers — but don't try to support non-[`Copy`] numeric types (eg. "big decimals").
//! - Follow one angle convention per layer: the transform helpers [`rotate`] and [`rotate2d`]
//!   take degrees, the [`Quaternion`] and [`Trig`] layer takes radians, and
//!   [`radians`]/[`degrees`] convert between the two.
//! - Keep the public dependency surface minimal. Only [`bytemuck`]'s [`Pod`][bytemuck::Pod] and
//!   [`Zeroable`][bytemuck::Zeroable] are implemented, so buffers of these types can be cast to
//!   byte slices without any `unsafe` on the caller's side.

pub mod approx;
pub mod info;
mod complex;
mod matrix;
mod quat;
mod traits;
mod transform;
mod vector;

pub use complex::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use transform::*;
pub use vector::*;
