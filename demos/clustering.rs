//! k-means++ on a simple 2D dataset, plus weighted sampling.

use kmeanspp::{clusterize, sample_weighted, Kmeans};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<[f32; 2]> = vec![
        // Cluster A (near origin)
        [0.0, 0.0],
        [0.1, 0.2],
        [0.2, 0.1],
        [-0.1, 0.1],
        // Cluster B (near (5, 5))
        [5.0, 5.0],
        [5.1, 4.9],
        [4.9, 5.1],
        [5.2, 5.2],
        // Cluster C (near (10, 0))
        [10.0, 0.0],
        [10.1, 0.1],
        [9.9, -0.1],
        [10.2, 0.2],
    ];

    // --- clusterize (k=3) ---
    let mut rng = StdRng::seed_from_u64(42);
    let clusters = clusterize(&data, 3, 1e-4, &mut rng).unwrap();
    println!("=== clusterize (k=3) ===");
    for (i, c) in clusters.iter().enumerate() {
        let [x, y] = *c.center();
        println!("  cluster {} center ({:5.2}, {:5.2}), {} points", i, x, y, c.len());
    }

    // --- Kmeans builder with labels ---
    let fit = Kmeans::new(3).with_seed(7).fit(&data).unwrap();
    println!(
        "\n=== Kmeans (k=3), {} iterations, converged = {} ===",
        fit.iterations, fit.converged
    );
    for (i, label) in fit.labels.iter().enumerate() {
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i][0], data[i][1], label);
    }

    // --- Weighted sampling: bigger clusters are more likely to be picked ---
    let picked = sample_weighted(&clusters, |c| c.len() as f64, 2, &mut rng).unwrap();
    println!("\n=== 2 clusters sampled by size ===");
    for c in picked {
        let [x, y] = *c.center();
        println!("  ({:5.2}, {:5.2})", x, y);
    }
}
