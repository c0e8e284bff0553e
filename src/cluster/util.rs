use crate::error::{Error, Result};
use crate::vector::{ensure_dim, Vector};
use num_traits::{Float, NumCast, ToPrimitive};

/// Dimension shared by every vector in `points`, or `None` when empty.
pub(crate) fn common_dim<V: Vector>(points: &[V]) -> Result<Option<usize>> {
    let Some(first) = points.first() else {
        return Ok(None);
    };
    let dim = first.dim();
    for p in &points[1..] {
        ensure_dim(dim, p.dim())?;
    }
    Ok(Some(dim))
}

/// Index of the nearest center. Ties go to the lowest index.
///
/// `centers` must be non-empty and share the dimension of `point`.
#[inline]
pub(crate) fn nearest_center<V: Vector>(point: &V, centers: &[V]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centers.iter().enumerate() {
        let d = squared_euclidean_f64(point.as_slice(), c.as_slice());
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Squared Euclidean distance accumulated in `f64`.
///
/// Finite `f32` coordinates can be far enough apart that their squared
/// distance overflows `f32`; widening first keeps it finite.
#[inline]
pub(crate) fn squared_euclidean_f64<T: Float>(a: &[T], b: &[T]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(0.0, |acc, (&x, &y)| {
        let d = as_f64(x) - as_f64(y);
        acc + d * d
    })
}

/// Widen a scalar to `f64` for sampling weights and log fields.
#[inline]
pub(crate) fn as_f64<T: Float>(d: T) -> f64 {
    ToPrimitive::to_f64(&d).unwrap_or(f64::NAN)
}

/// Convert an `f64` parameter into the scalar type of the data.
pub(crate) fn to_scalar<T: Float>(x: f64, name: &'static str) -> Result<T> {
    <T as NumCast>::from(x).ok_or(Error::InvalidParameter {
        name,
        message: "not representable in the scalar type",
    })
}
