//! Weighted random selection.
//!
//! Three entry points share one selection rule:
//!
//! - [`select_weighted_index`]: one index, drawn with probability `wᵢ / Σw`.
//! - [`choose_weighted`]: one element of a slice, weighted by an accessor.
//! - [`sample_weighted`]: up to `count` elements without replacement.
//!
//! ## Selection rule
//!
//! With `S = Σw` and `u` uniform in `[0, 1)`, draw `r = u · S`, walk the
//! weights in order accumulating a running total, and return the first index
//! whose running total exceeds `r`. Weights need not sum to one:
//! `[1, 1, 2]` picks index 2 half of the time.
//!
//! Floating-point rounding can leave `r` at or above the final running total.
//! In that case the last index with a strictly positive weight is returned, so
//! a zero-weight entry is never picked while any positive weight exists.
//!
//! All-zero weights are handled by [`ZeroWeightPolicy`]; the default draws
//! uniformly.

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// What to do when every weight in the pool is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroWeightPolicy {
    /// Treat the pool as equally weighted.
    #[default]
    Uniform,
    /// Fail with [`Error::ZeroTotalWeight`].
    Reject,
}

/// Draw one index of `weights` with probability proportional to its weight.
///
/// All-zero weights fall back to a uniform draw. Use
/// [`select_weighted_index_with`] to reject them instead.
///
/// # Errors
///
/// - [`Error::EmptyPool`] if `weights` is empty.
/// - [`Error::InvalidWeight`] if a weight is negative, NaN, or infinite.
/// - [`Error::InvalidParameter`] if the weights overflow when summed.
///
/// ```rust
/// use kmeanspp::select_weighted_index;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let i = select_weighted_index(&[0.0, 3.0, 0.0], &mut rng).unwrap();
/// assert_eq!(i, 1);
/// ```
pub fn select_weighted_index<R>(weights: &[f64], rng: &mut R) -> Result<usize>
where
    R: RandomSource + ?Sized,
{
    select_weighted_index_with(weights, ZeroWeightPolicy::Uniform, rng)
}

/// [`select_weighted_index`] with an explicit all-zero policy.
pub fn select_weighted_index_with<R>(
    weights: &[f64],
    policy: ZeroWeightPolicy,
    rng: &mut R,
) -> Result<usize>
where
    R: RandomSource + ?Sized,
{
    if weights.is_empty() {
        return Err(Error::EmptyPool);
    }
    validate(weights.iter().copied())?;
    select_validated(weights, policy, rng)
}

/// Pick one element of `items`, weighted by `weight_of`.
///
/// # Errors
///
/// Same as [`select_weighted_index`].
pub fn choose_weighted<'a, T, F, R>(items: &'a [T], weight_of: F, rng: &mut R) -> Result<&'a T>
where
    F: Fn(&T) -> f64,
    R: RandomSource + ?Sized,
{
    let weights: Vec<f64> = items.iter().map(&weight_of).collect();
    let idx = select_weighted_index(&weights, rng)?;
    Ok(&items[idx])
}

/// Draw up to `count` elements of `items` without replacement.
///
/// Each draw picks among the elements not yet taken, with probability
/// proportional to their weights. The result is in selection order. If
/// `count >= items.len()` the whole slice is returned in its original order
/// and no randomness is consumed.
///
/// # Errors
///
/// [`Error::InvalidWeight`] or [`Error::InvalidParameter`] as for
/// [`select_weighted_index`]. Weights are checked before anything is drawn.
///
/// ```rust
/// use kmeanspp::sample_weighted;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let words = ["a", "bb", "ccc", "dddd"];
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = sample_weighted(&words, |w| w.len() as f64, 2, &mut rng).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn sample_weighted<T, F, R>(items: &[T], weight_of: F, count: usize, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
    R: RandomSource + ?Sized,
{
    let mut weights: Vec<f64> = items.iter().map(&weight_of).collect();
    validate(weights.iter().copied())?;

    if count >= items.len() {
        return Ok(items.to_vec());
    }

    // Parallel to `weights`: which source element each pool slot refers to.
    let mut source: Vec<usize> = (0..items.len()).collect();
    let mut out = Vec::with_capacity(count);

    while out.len() < count && !weights.is_empty() {
        let slot = select_validated(&weights, ZeroWeightPolicy::Uniform, rng)?;
        // Order-preserving removal keeps later draws independent of earlier slot positions.
        weights.remove(slot);
        out.push(items[source.remove(slot)].clone());
    }

    Ok(out)
}

pub(crate) fn validate(weights: impl IntoIterator<Item = f64>) -> Result<()> {
    let mut total = 0.0f64;
    for (index, weight) in weights.into_iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { index, weight });
        }
        total += weight;
    }
    if !total.is_finite() {
        return Err(Error::InvalidParameter {
            name: "weights",
            message: "total weight overflows",
        });
    }
    Ok(())
}

/// Selection over a non-empty, already validated pool.
pub(crate) fn select_validated<R>(
    weights: &[f64],
    policy: ZeroWeightPolicy,
    rng: &mut R,
) -> Result<usize>
where
    R: RandomSource + ?Sized,
{
    debug_assert!(!weights.is_empty());

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return match policy {
            ZeroWeightPolicy::Uniform => Ok(rng.next_index(weights.len())),
            ZeroWeightPolicy::Reject => Err(Error::ZeroTotalWeight),
        };
    }

    let r = rng.next_unit() * total;
    let mut acc = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        acc += w;
        if r < acc {
            return Ok(i);
        }
    }

    // Rounding fall-through.
    Ok(weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1))
}
