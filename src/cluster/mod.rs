//! Clustering of dense vectors with k-means.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest center, then
//! update centers to the mean of their points. Repeat.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! The pieces are usable on their own:
//!
//! - [`kmeans_plus_plus`]: seeding only.
//! - [`refine`]: Lloyd iterations from caller-supplied centers.
//! - [`clusterize`] / [`Kmeans`]: both, end to end.
//!
//! ## Usage
//!
//! ```rust
//! use kmeanspp::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     [0.0f32, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//! ];
//!
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```

mod init;
mod kmeans;
mod lloyd;
mod traits;
mod util;

pub use init::kmeans_plus_plus;
pub use kmeans::{
    clusterize, Cluster, Kmeans, KmeansFit, DEFAULT_CONVERGE_DISTANCE, DEFAULT_MAX_ITER,
};
pub use lloyd::refine;
pub use traits::Clustering;
