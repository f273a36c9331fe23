use crate::error::Result;

/// Trainer half of a partitional clustering capability.
///
/// One trainer value is reused for every stratum, so any configuration it
/// carries (random seed, iteration caps, distance metric, ...) is forwarded
/// verbatim to each per-stratum fit. The crate interprets none of it.
pub trait FitPartitional {
    /// The trained model type.
    type Model: PartitionalModel;

    /// Fit a fresh model with `k` clusters on `data`.
    fn fit(&self, data: &[Vec<f32>], k: usize) -> Result<Self::Model>;
}

/// A trained partitional model for a single stratum (one label per point).
pub trait PartitionalModel {
    /// One local cluster index per input point, each in `[0, n_clusters)`.
    fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// Number of cluster centers this model holds.
    fn n_clusters(&self) -> usize;
}
