//! Deterministic partitional capability used by the integration tests.
//!
//! `NearestCenter` stands in for a seeded k-means: fitting takes the first
//! `k` points in reverse encounter order as centers, and prediction returns
//! the nearest center (squared Euclidean, ties to the lower index). That is
//! enough to exercise the stratified orchestration with fully reproducible
//! labels.

use stratify::{FitPartitional, PartitionalModel, Result};

/// Trainer: centers are the first `k` points, reversed.
pub struct NearestCenter;

/// Fitted nearest-center model.
pub struct NearestCenterFit {
    centers: Vec<Vec<f32>>,
}

impl FitPartitional for NearestCenter {
    type Model = NearestCenterFit;

    fn fit(&self, data: &[Vec<f32>], k: usize) -> Result<NearestCenterFit> {
        let take = k.min(data.len());
        let centers = data[..take].iter().rev().cloned().collect();
        Ok(NearestCenterFit { centers })
    }
}

impl PartitionalModel for NearestCenterFit {
    fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(data.iter().map(|p| self.nearest(p)).collect())
    }

    fn n_clusters(&self) -> usize {
        self.centers.len()
    }
}

impl NearestCenterFit {
    fn nearest(&self, point: &[f32]) -> usize {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, center) in self.centers.iter().enumerate() {
            let dist: f32 = point
                .iter()
                .zip(center)
                .map(|(x, y)| (x - y) * (x - y))
                .sum();
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}
