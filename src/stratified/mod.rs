//! Stratified clustering orchestration.
//!
//! Stratification splits a dataset along one auxiliary coordinate (time,
//! temperature, a reaction coordinate, ...) before clustering, so that
//! frames from different regimes can never share a cluster even when their
//! feature vectors are identical.
//!
//! ## How it works
//!
//! `n` strictly ascending boundary cutpoints define `n + 2` half-open bins:
//! `(-inf, b0]`, `(b0, b1]`, ..., `(b_{n-1}, +inf)`. Each frame is bucketed
//! by its coordinate, one clustering model is fit per non-empty stratum, and
//! at prediction time each stratum's local labels are shifted by the total
//! number of cluster centers held by all lower-index strata. The resulting
//! global identifiers are disjoint across strata.
//!
//! Strata that receive no frames are skipped: they hold no model and
//! contribute no identifiers (and no offset).
//!
//! ## Usage
//!
//! ```rust
//! use stratify::{FitPartitional, PartitionalModel, Result, StratifiedClusterer};
//!
//! // A minimal single-center capability: one cluster per stratum.
//! struct OneCenter;
//! struct OneCenterFit;
//!
//! impl FitPartitional for OneCenter {
//!     type Model = OneCenterFit;
//!     fn fit(&self, _data: &[Vec<f32>], _k: usize) -> Result<OneCenterFit> {
//!         Ok(OneCenterFit)
//!     }
//! }
//!
//! impl PartitionalModel for OneCenterFit {
//!     fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
//!         Ok(vec![0; data.len()])
//!     }
//!     fn n_clusters(&self) -> usize {
//!         1
//!     }
//! }
//!
//! let data = vec![vec![1.0], vec![1.0], vec![1.0], vec![1.0]];
//! let coord = vec![-1.0, -1.0, 1.0, 1.0];
//!
//! let mut clusterer = StratifiedClusterer::new(OneCenter);
//! clusterer.fit(&data, 1, &coord, &[0.0]).unwrap();
//!
//! // Identical frames, different strata: distinct global ids.
//! let ids = clusterer.predict(&data, &coord).unwrap();
//! assert_eq!(ids, vec![0, 0, 1, 1]);
//! ```

mod boundaries;
mod clusterer;
mod traits;

pub use boundaries::Boundaries;
pub use clusterer::StratifiedClusterer;
pub use traits::{FitPartitional, PartitionalModel};
