//! Lloyd refinement.
//!
//! Starting from a set of centers, alternate two steps:
//!
//! 1. **Assign**: every point joins the cluster of its nearest center
//!    (squared Euclidean distance, ties to the lowest center index).
//! 2. **Update**: every center moves to the mean of its members. A center that
//!    received no points stays where it was.
//!
//! The loop stops once the total squared movement of the centers,
//! `Σᵢ ||old_i - new_i||²`, is at most `converge_distance²`, or after
//! `max_iter` iterations. WCSS never increases between iterations, so on
//! well-behaved data the threshold is reached long before the cap.
//!
//! Clusters still empty when the loop stops are dropped; the returned labels
//! index the clusters that remain.

use super::kmeans::{Cluster, KmeansFit};
use super::util::{as_f64, common_dim, nearest_center, squared_euclidean_f64};
use crate::error::{Error, Result};
use crate::vector::{self, ensure_dim, Vector};
use num_traits::{Float, Zero};
use tracing::{debug, warn};

/// Run Lloyd iterations on `points` from the given starting `centers`.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `converge_distance` is negative or NaN,
///   if `max_iter == 0`, or if `centers` is empty while `points` is not.
/// - [`Error::DimensionMismatch`] if points and centers disagree on dimension.
pub fn refine<V: Vector>(
    points: &[V],
    mut centers: Vec<V>,
    converge_distance: V::Scalar,
    max_iter: usize,
) -> Result<KmeansFit<V>> {
    check_params(converge_distance, max_iter)?;

    let Some(dim) = common_dim(points)? else {
        return Ok(KmeansFit::empty());
    };
    if centers.is_empty() {
        return Err(Error::InvalidParameter {
            name: "centers",
            message: "at least one center is required",
        });
    }
    for c in &centers {
        ensure_dim(dim, c.dim())?;
    }

    let threshold = as_f64(converge_distance) * as_f64(converge_distance);
    let mut labels = vec![0usize; points.len()];
    let mut iterations = 0;

    loop {
        iterations += 1;

        let mut members: Vec<Vec<V>> = vec![Vec::new(); centers.len()];
        for (label, point) in labels.iter_mut().zip(points) {
            let best = nearest_center(point, &centers);
            *label = best;
            members[best].push(point.clone());
        }

        let mut moved = 0.0f64;
        for (center, group) in centers.iter_mut().zip(&members) {
            if group.is_empty() {
                continue;
            }
            let updated = vector::mean(group)?;
            moved += squared_euclidean_f64(center.as_slice(), updated.as_slice());
            *center = updated;
        }

        debug!(
            iter = iterations,
            moved,
            threshold,
            "Lloyd iteration complete"
        );

        if moved <= threshold {
            debug!(iterations, "k-means converged");
            return Ok(finish(centers, members, labels, iterations, true));
        }
        if iterations >= max_iter {
            warn!(
                max_iter,
                moved,
                "k-means did not converge within iteration limit, using current centers"
            );
            return Ok(finish(centers, members, labels, iterations, false));
        }
    }
}

pub(crate) fn check_params<T: Float>(converge_distance: T, max_iter: usize) -> Result<()> {
    if converge_distance.is_nan() || converge_distance < <T as Zero>::zero() {
        return Err(Error::InvalidParameter {
            name: "converge_distance",
            message: "must be non-negative",
        });
    }
    if max_iter == 0 {
        return Err(Error::InvalidParameter {
            name: "max_iter",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// Pair centers with members, dropping empty clusters and compacting labels.
fn finish<V: Vector>(
    centers: Vec<V>,
    members: Vec<Vec<V>>,
    mut labels: Vec<usize>,
    iterations: usize,
    converged: bool,
) -> KmeansFit<V> {
    let mut remap = vec![usize::MAX; centers.len()];
    let mut clusters = Vec::with_capacity(centers.len());
    for (i, (center, group)) in centers.into_iter().zip(members).enumerate() {
        if group.is_empty() {
            continue;
        }
        remap[i] = clusters.len();
        clusters.push(Cluster::new(center, group));
    }
    for label in &mut labels {
        *label = remap[*label];
    }
    KmeansFit {
        clusters,
        labels,
        iterations,
        converged,
    }
}
