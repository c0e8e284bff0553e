//! K-means clustering: k-means++ seeding followed by Lloyd refinement.
//!
//! Partitions points into at most `k` groups by (locally) minimizing the
//! within-cluster sum of squares:
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! Two entry points:
//!
//! - [`clusterize`]: one call with an explicit generator, returning [`Cluster`]s.
//! - [`Kmeans`]: a builder carrying `k`, the convergence distance, the
//!   iteration cap and an optional seed. [`Kmeans::fit`] returns a
//!   [`KmeansFit`] with clusters, per-point labels and convergence info.
//!
//! Without a seed, [`Kmeans::fit`] draws from the thread-local OS-seeded
//! generator, so results differ between runs.

use super::init::kmeans_plus_plus;
use super::lloyd::{check_params, refine};
use super::traits::Clustering;
use super::util::to_scalar;
use crate::error::Result;
use crate::random::RandomSource;
use crate::vector::Vector;
use rand::prelude::*;

/// Iteration cap used by [`clusterize`] and by [`Kmeans`] unless overridden.
pub const DEFAULT_MAX_ITER: usize = 300;

/// Convergence distance used by [`Kmeans`] unless overridden.
pub const DEFAULT_CONVERGE_DISTANCE: f64 = 1e-4;

/// One cluster: its center and the input points assigned to it.
///
/// The center is the mean of the members.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<V> {
    center: V,
    members: Vec<V>,
}

impl<V> Cluster<V> {
    pub(crate) fn new(center: V, members: Vec<V>) -> Self {
        Self { center, members }
    }

    /// Mean of the members.
    pub fn center(&self) -> &V {
        &self.center
    }

    /// Points assigned to this cluster, in input order.
    pub fn members(&self) -> &[V] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members. Never true for a returned cluster.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consume the cluster, returning `(center, members)`.
    pub fn into_parts(self) -> (V, Vec<V>) {
        (self.center, self.members)
    }
}

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit<V> {
    /// Non-empty clusters.
    pub clusters: Vec<Cluster<V>>,
    /// `labels[i]` is the index into `clusters` of the cluster holding point `i`.
    pub labels: Vec<usize>,
    /// Lloyd iterations performed.
    pub iterations: usize,
    /// Whether center movement fell under the threshold before the iteration cap.
    pub converged: bool,
}

impl<V> KmeansFit<V> {
    pub(crate) fn empty() -> Self {
        Self {
            clusters: Vec::new(),
            labels: Vec::new(),
            iterations: 0,
            converged: true,
        }
    }

    /// Drop labels and diagnostics, keeping only the clusters.
    pub fn into_clusters(self) -> Vec<Cluster<V>> {
        self.clusters
    }
}

/// Partition `points` into at most `max_clusters` clusters.
///
/// Seeds with k-means++ using `rng`, then runs Lloyd iterations until the
/// total squared center movement is at most `converge_distance²` (or
/// [`DEFAULT_MAX_ITER`] iterations pass). Returns `min(max_clusters, n)`
/// clusters for distinct points; an empty input yields no clusters.
///
/// # Errors
///
/// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
///   `max_clusters == 0` or `converge_distance` is negative or NaN.
/// - [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if the
///   points do not share a dimension.
///
/// ```rust
/// use kmeanspp::clusterize;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let points = [[0.0f32, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
/// let mut rng = StdRng::seed_from_u64(42);
/// let clusters = clusterize(&points, 2, 1e-4, &mut rng).unwrap();
///
/// assert_eq!(clusters.len(), 2);
/// assert!(clusters.iter().all(|c| c.len() == 2));
/// ```
pub fn clusterize<V, R>(
    points: &[V],
    max_clusters: usize,
    converge_distance: V::Scalar,
    rng: &mut R,
) -> Result<Vec<Cluster<V>>>
where
    V: Vector,
    R: RandomSource + ?Sized,
{
    check_params(converge_distance, DEFAULT_MAX_ITER)?;
    let centers = kmeans_plus_plus(points, max_clusters, rng)?;
    Ok(refine(points, centers, converge_distance, DEFAULT_MAX_ITER)?.into_clusters())
}

/// K-means clusterer configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Maximum number of clusters.
    k: usize,
    /// Stop once total squared center movement is at most this squared.
    converge_distance: f64,
    /// Maximum Lloyd iterations.
    max_iter: usize,
    /// Random seed.
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a new K-means clusterer producing at most `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            converge_distance: DEFAULT_CONVERGE_DISTANCE,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
        }
    }

    /// Set the convergence distance.
    pub fn with_converge_distance(mut self, converge_distance: f64) -> Self {
        self.converge_distance = converge_distance;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fit using the configured seed, or the thread RNG when none is set.
    pub fn fit<V: Vector>(&self, points: &[V]) -> Result<KmeansFit<V>> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.fit_with(points, &mut *rng)
    }

    /// Fit drawing from `rng`; the configured seed is ignored.
    pub fn fit_with<V, R>(&self, points: &[V], rng: &mut R) -> Result<KmeansFit<V>>
    where
        V: Vector,
        R: RandomSource + ?Sized,
    {
        let converge_distance = to_scalar::<V::Scalar>(self.converge_distance, "converge_distance")?;
        check_params(converge_distance, self.max_iter)?;
        let centers = kmeans_plus_plus(points, self.k, rng)?;
        refine(points, centers, converge_distance, self.max_iter)
    }
}

impl<V: Vector> Clustering<V> for Kmeans {
    fn fit_predict(&self, data: &[V]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::vector;

    fn sorted<V: Vector>(mut v: Vec<V>) -> Vec<V> {
        v.sort_by(|a, b| {
            a.as_slice()
                .partial_cmp(b.as_slice())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        v
    }

    fn grid() -> Vec<[f32; 2]> {
        (0..60)
            .map(|i| {
                let g = (i % 3) as f32 * 20.0;
                [g + (i % 7) as f32 * 0.1, g - (i % 5) as f32 * 0.1]
            })
            .collect()
    }

    #[test]
    fn test_clusterize_two_groups() {
        let points = vec![[0.0f64, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clusters = clusterize(&points, 2, 1e-6, &mut rng).unwrap();

            assert_eq!(clusters.len(), 2);
            let centers = sorted(clusters.iter().map(|c| *c.center()).collect());
            assert_eq!(centers, vec![[0.0, 0.5], [10.0, 10.5]]);
            assert!(clusters.iter().all(|c| c.len() == 2));
        }
    }

    #[test]
    fn test_clusterize_every_point_assigned_once() {
        let points = grid();
        let mut rng = StdRng::seed_from_u64(123);
        let clusters = clusterize(&points, 5, 1e-4, &mut rng).unwrap();

        assert!(clusters.len() <= 5);
        let members: Vec<[f32; 2]> = clusters.iter().flat_map(|c| c.members().to_vec()).collect();
        assert_eq!(sorted(members), sorted(points));
    }

    #[test]
    fn test_clusterize_centers_are_member_means() {
        let points = grid();
        let mut rng = StdRng::seed_from_u64(7);
        for c in clusterize(&points, 4, 1e-4, &mut rng).unwrap() {
            assert!(!c.is_empty());
            let m = vector::mean(c.members()).unwrap();
            assert!(vector::squared_distance(&m, c.center()).unwrap() < 1e-8);
        }
    }

    #[test]
    fn test_clusterize_k_larger_than_n() {
        let points = vec![[0.0f32, 0.0], [1.0, 0.0], [0.0, 1.0]];
        let mut rng = StdRng::seed_from_u64(42);
        let clusters = clusterize(&points, 10, 1e-4, &mut rng).unwrap();

        assert_eq!(clusters.len(), 3);
        for c in &clusters {
            assert_eq!(c.members(), std::slice::from_ref(c.center()));
        }
    }

    #[test]
    fn test_clusterize_far_apart_f32_points() {
        let points = vec![[1e20f32, 0.0], [-1e20, 0.0], [0.0, 0.0], [1.0, 0.0]];
        let mut rng = StdRng::seed_from_u64(0);
        let clusters = clusterize(&points, 2, 1e-3, &mut rng).unwrap();

        assert!(!clusters.is_empty() && clusters.len() <= 2);
        let total: usize = clusters.iter().map(Cluster::len).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn test_clusterize_empty_input() {
        let points: Vec<Vec<f64>> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(clusterize(&points, 3, 0.1, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_clusterize_invalid_params() {
        let points = vec![[0.0f32, 0.0]];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            clusterize(&points, 0, 0.1, &mut rng),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert!(matches!(
            clusterize(&points, 2, -0.1, &mut rng),
            Err(Error::InvalidParameter {
                name: "converge_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_clusterize_deterministic_with_seed() {
        let points: Vec<[f32; 4]> = {
            let mut data_rng = StdRng::seed_from_u64(0);
            (0..100).map(|_| data_rng.random()).collect()
        };
        for seed in 0..20 {
            let a = clusterize(&points, 5, 0.01, &mut StdRng::seed_from_u64(seed)).unwrap();
            let b = clusterize(&points, 5, 0.01, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(a, b, "seed {seed} gave different clusterings");
        }
    }

    #[test]
    fn test_kmeans_fit_labels_match_clusters() {
        let points = grid();
        let fit = Kmeans::new(3).with_seed(42).fit(&points).unwrap();

        assert_eq!(fit.labels.len(), points.len());
        assert!(fit.converged);
        for (p, &l) in points.iter().zip(&fit.labels) {
            assert!(fit.clusters[l].members().contains(p));
        }
    }

    #[test]
    fn test_kmeans_fit_predict_separates_groups() {
        let data = vec![
            vec![0.0f32, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let kmeans = Kmeans::new(2).with_seed(42);
        let labels = kmeans.fit_predict(&data).unwrap();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
        assert_eq!(Clustering::<Vec<f32>>::n_clusters(&kmeans), 2);
    }

    #[test]
    fn test_kmeans_max_iter_reported() {
        let points = grid();
        let fit = Kmeans::new(3)
            .with_converge_distance(0.0)
            .with_max_iter(1)
            .with_seed(1)
            .fit(&points)
            .unwrap();
        assert_eq!(fit.iterations, 1);
    }

    #[test]
    fn test_kmeans_rejects_bad_config() {
        let points = grid();
        assert!(Kmeans::new(3).with_max_iter(0).fit(&points).is_err());
        assert!(Kmeans::new(3).with_converge_distance(-1.0).fit(&points).is_err());
        assert!(Kmeans::new(0).fit(&points).is_err());
    }

    #[test]
    fn test_kmeans_unseeded_still_partitions() {
        let points = grid();
        let fit = Kmeans::new(3).fit(&points).unwrap();
        let total: usize = fit.clusters.iter().map(Cluster::len).sum();
        assert_eq!(total, points.len());
    }
}
