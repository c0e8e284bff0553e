//! k-means++ seeding (Arthur & Vassilvitskii, 2007).
//!
//! 1. Choose the first center uniformly at random.
//! 2. Weight every point not yet chosen by D(x)², its squared distance to the
//!    nearest center chosen so far, and draw the next center with probability
//!    proportional to that weight.
//! 3. Repeat until `k` centers exist or every point is a center.
//!
//! Points far from the current centers are favoured, which spreads the seeds
//! out and gives an O(log k) approximation to the optimal WCSS in expectation.
//!
//! When every remaining point coincides with a center (all weights zero) the
//! draw falls back to uniform, so heavily duplicated data still yields `k`
//! seeds whenever `k <= n`.

use super::util::{common_dim, squared_euclidean_f64};
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::vector::Vector;
use crate::weighted::{self, ZeroWeightPolicy};
use tracing::debug;

/// Choose up to `k` initial centers from `points` with k-means++.
///
/// Centers are copies of input points. Fewer than `k` are returned only when
/// `points.len() < k`; an empty input yields no centers.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `k == 0`.
/// - [`Error::DimensionMismatch`] if the points do not share a dimension.
pub fn kmeans_plus_plus<V, R>(points: &[V], k: usize, rng: &mut R) -> Result<Vec<V>>
where
    V: Vector,
    R: RandomSource + ?Sized,
{
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if common_dim(points)?.is_none() {
        return Ok(Vec::new());
    }

    let first = rng.next_index(points.len());
    let mut centers = Vec::with_capacity(k.min(points.len()));
    centers.push(points[first].clone());

    // Candidate pool in index order, with each candidate's D(x)² to the nearest chosen center.
    let mut remaining: Vec<usize> = (0..points.len()).filter(|&i| i != first).collect();
    let mut nearest: Vec<f64> = vec![f64::INFINITY; remaining.len()];

    while centers.len() < k && !remaining.is_empty() {
        let newest = centers[centers.len() - 1].as_slice();
        for (d, &i) in nearest.iter_mut().zip(&remaining) {
            let to_newest = squared_euclidean_f64(points[i].as_slice(), newest);
            if to_newest < *d {
                *d = to_newest;
            }
        }

        weighted::validate(nearest.iter().copied())?;
        let slot = weighted::select_validated(&nearest, ZeroWeightPolicy::Uniform, rng)?;

        centers.push(points[remaining.remove(slot)].clone());
        nearest.remove(slot);
    }

    debug!(
        requested = k,
        chosen = centers.len(),
        n_points = points.len(),
        "k-means++ seeding complete"
    );

    Ok(centers)
}
