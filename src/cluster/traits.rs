use crate::error::Result;
use crate::vector::Vector;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<V: Vector> {
    /// Fit the model and return one cluster label per input point.
    ///
    /// Labels index the clusters the fit produced, so they are dense in `0..n_found`.
    fn fit_predict(&self, data: &[V]) -> Result<Vec<usize>>;

    /// The configured (maximum) number of clusters.
    fn n_clusters(&self) -> usize;
}
