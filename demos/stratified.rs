//! Stratified clustering on a simple 1D dataset with a nearest-center model.

use stratify::{FitPartitional, PartitionalModel, Result, StratifiedClusterer};

/// A minimal partitional capability: centers are the first `k` fitted
/// points, prediction picks the nearest center.
struct NearestCenter;

struct NearestCenterFit {
    centers: Vec<Vec<f32>>,
}

impl FitPartitional for NearestCenter {
    type Model = NearestCenterFit;
    fn fit(&self, data: &[Vec<f32>], k: usize) -> Result<NearestCenterFit> {
        let take = k.min(data.len());
        Ok(NearestCenterFit {
            centers: data[..take].to_vec(),
        })
    }
}

impl PartitionalModel for NearestCenterFit {
    fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(data
            .iter()
            .map(|p| {
                let mut best = 0;
                let mut best_dist = f32::INFINITY;
                for (i, c) in self.centers.iter().enumerate() {
                    let d: f32 = p.iter().zip(c).map(|(x, y)| (x - y) * (x - y)).sum();
                    if d < best_dist {
                        best_dist = d;
                        best = i;
                    }
                }
                best
            })
            .collect())
    }

    fn n_clusters(&self) -> usize {
        self.centers.len()
    }
}

fn main() {
    // Two feature groups (near 0 and near 10), spread over two time regimes.
    let data: Vec<Vec<f32>> = vec![
        vec![0.0],
        vec![0.2],
        vec![10.0],
        vec![10.2],
        vec![0.1],
        vec![0.3],
        vec![10.1],
        vec![10.3],
    ];
    // Stratification coordinate, e.g. simulation time: first half before
    // t = 5, second half after.
    let time: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0];

    let mut clusterer = StratifiedClusterer::new(NearestCenter);
    clusterer.fit(&data, 2, &time, &[5.0]).unwrap();

    let strata = clusterer.assign_strata(&time).unwrap();
    let ids = clusterer.predict(&data, &time).unwrap();

    println!("=== Stratified clustering (k=2, boundary at t=5) ===");
    for (i, (stratum, id)) in strata.iter().zip(&ids).enumerate() {
        println!(
            "  frame {:1} (x={:4.1}, t={:3.1}) => stratum {} cluster {}",
            i, data[i][0], time[i], stratum, id
        );
    }
}
