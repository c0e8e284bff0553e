//! k-means++ clustering and weighted random sampling.
//!
//! `kmeanspp` partitions fixed-dimension vectors into clusters and exposes the
//! weighted-selection primitives the seeding step is built on:
//!
//! - [`cluster`]: k-means++ seeding, Lloyd refinement, [`clusterize`] and the
//!   [`Kmeans`] builder
//! - [`weighted`]: weighted index selection and sampling without replacement
//! - [`vector`]: the [`Vector`] trait and squared-Euclidean arithmetic
//! - [`random`]: the [`RandomSource`] trait, implemented for every `rand::Rng`
//!
//! All randomized routines take the generator explicitly, so a seeded
//! generator makes every result reproducible.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod random;
pub mod vector;
pub mod weighted;

pub use cluster::{clusterize, Cluster, Clustering, Kmeans, KmeansFit};
pub use error::{Error, Result};
pub use random::RandomSource;
pub use vector::Vector;
pub use weighted::{
    choose_weighted, sample_weighted, select_weighted_index, select_weighted_index_with,
    ZeroWeightPolicy,
};
