// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Geometry, easing and opacity values are `f32`, so tests compare them with
//! `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;
