//! Elementwise arithmetic over dense, fixed-dimension vectors.
//!
//! Every routine works through the [`Vector`] trait, which only asks for a
//! contiguous slice of [`Float`] scalars. It is implemented for plain arrays
//! (`[f32; 3]`, `[f64; 4]`, ...) and for `Vec<T>`, so callers can keep their
//! own point representation.
//!
//! The only metric used anywhere in this crate is squared Euclidean distance:
//!
//! ```text
//! d²(a, b) = Σᵢ (aᵢ - bᵢ)²
//! ```
//!
//! Operations that combine two vectors check that their lengths agree and
//! return [`Error::DimensionMismatch`] otherwise.

use crate::error::{Error, Result};
use num_traits::{Float, NumCast, Zero};

/// A dense vector of floating-point scalars with a fixed dimension.
pub trait Vector: Clone + PartialEq {
    /// Scalar element type.
    type Scalar: Float;

    /// The coordinates as a slice.
    fn as_slice(&self) -> &[Self::Scalar];

    /// The coordinates as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Scalar];

    /// Number of coordinates.
    fn dim(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T: Float, const N: usize> Vector for [T; N] {
    type Scalar = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Float> Vector for Vec<T> {
    type Scalar = T;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[inline]
pub(crate) fn ensure_dim(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, found })
    }
}

/// A vector with the same dimension as `like` and every coordinate zero.
pub fn zero_like<V: Vector>(like: &V) -> V {
    let mut out = like.clone();
    out.as_mut_slice().fill(<V::Scalar as Zero>::zero());
    out
}

/// Elementwise `a + b`.
pub fn add<V: Vector>(a: &V, b: &V) -> Result<V> {
    let mut out = a.clone();
    add_assign(&mut out, b)?;
    Ok(out)
}

/// Elementwise `a - b`.
pub fn sub<V: Vector>(a: &V, b: &V) -> Result<V> {
    ensure_dim(a.dim(), b.dim())?;
    let mut out = a.clone();
    for (x, &y) in out.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *x = *x - y;
    }
    Ok(out)
}

/// Divide every coordinate by `divisor`.
pub fn div_scalar<V: Vector>(v: &V, divisor: V::Scalar) -> V {
    let mut out = v.clone();
    for x in out.as_mut_slice() {
        *x = *x / divisor;
    }
    out
}

/// Squared Euclidean distance between `a` and `b`.
pub fn squared_distance<V: Vector>(a: &V, b: &V) -> Result<V::Scalar> {
    ensure_dim(a.dim(), b.dim())?;
    Ok(squared_euclidean(a.as_slice(), b.as_slice()))
}

/// Arithmetic mean of `points`.
///
/// Returns [`Error::EmptyInput`] for an empty slice: the mean of nothing is
/// undefined, and refinement never asks for it.
pub fn mean<V: Vector>(points: &[V]) -> Result<V> {
    let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;
    let mut sum = first.clone();
    for p in rest {
        add_assign(&mut sum, p)?;
    }
    let count = <V::Scalar as NumCast>::from(points.len()).ok_or(Error::InvalidParameter {
        name: "points",
        message: "point count is not representable in the scalar type",
    })?;
    Ok(div_scalar(&sum, count))
}

fn add_assign<V: Vector>(acc: &mut V, v: &V) -> Result<()> {
    ensure_dim(acc.dim(), v.dim())?;
    for (x, &y) in acc.as_mut_slice().iter_mut().zip(v.as_slice()) {
        *x = *x + y;
    }
    Ok(())
}

#[inline]
pub(crate) fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(<T as Zero>::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}
