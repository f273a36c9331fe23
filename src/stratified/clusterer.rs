use tracing::debug;

use super::boundaries::Boundaries;
use super::traits::{FitPartitional, PartitionalModel};
use crate::error::{Error, Result};

/// Clusters frames independently within strata of an auxiliary coordinate.
///
/// Construction takes the partitional trainer; [`fit`](Self::fit)
/// establishes boundaries and per-stratum models in one pass;
/// [`predict`](Self::predict) maps frames to globally unique cluster ids.
/// A successful refit replaces all prior state at once; a failed refit
/// leaves the previous state untouched.
pub struct StratifiedClusterer<F: FitPartitional> {
    trainer: F,
    fitted: Option<Fitted<F::Model>>,
}

/// State established by a successful fit.
///
/// One model slot per stratum; `None` marks a stratum that received no
/// training frames.
struct Fitted<M> {
    boundaries: Boundaries,
    models: Vec<Option<M>>,
}

impl<F: FitPartitional> StratifiedClusterer<F> {
    /// Create an unfitted clusterer around a partitional trainer.
    pub fn new(trainer: F) -> Self {
        Self {
            trainer,
            fitted: None,
        }
    }

    /// Whether [`fit`](Self::fit) has completed successfully.
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of strata established by the last fit.
    ///
    /// # Errors
    ///
    /// [`Error::NotFitted`] before the first successful fit.
    pub fn n_strata(&self) -> Result<usize> {
        Ok(self.state("n_strata")?.boundaries.n_strata())
    }

    /// Boundaries established by the last fit.
    ///
    /// # Errors
    ///
    /// [`Error::NotFitted`] before the first successful fit.
    pub fn boundaries(&self) -> Result<&Boundaries> {
        Ok(&self.state("boundaries")?.boundaries)
    }

    /// Check that data and stratification coordinate agree on frame count.
    ///
    /// Only the counts must match; the two sequences may have unrelated
    /// element dimensionality.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] when the counts differ.
    pub fn validate(data: &[Vec<f32>], stratify: &[f32]) -> Result<()> {
        Self::check_lengths(data.len(), stratify.len())
    }

    /// Stratum index for each coordinate, using the fitted boundaries.
    ///
    /// # Errors
    ///
    /// [`Error::NotFitted`] before the first successful fit.
    pub fn assign_strata(&self, stratify: &[f32]) -> Result<Vec<usize>> {
        Ok(self.state("assign_strata")?.boundaries.assign(stratify))
    }

    /// Fit one model per non-empty stratum.
    ///
    /// `data` holds one vector per frame and `stratify` the matching
    /// coordinate per frame. `boundaries` are the strictly ascending
    /// cutpoints defining `boundaries.len() + 2` strata; every per-stratum
    /// model is configured with the same `k`.
    ///
    /// Strata that receive no frames are skipped with a debug-level note;
    /// their slot holds no model and contributes no cluster ids.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] when `data` and `stratify` frame counts
    ///   differ.
    /// - [`Error::InvalidParameter`] when `k` is zero.
    /// - [`Error::UnsortedBoundaries`] when cutpoints are not strictly
    ///   ascending.
    /// - Any error from the trainer.
    ///
    /// All errors are raised before the previous fitted state (if any) is
    /// touched.
    pub fn fit(
        &mut self,
        data: &[Vec<f32>],
        k: usize,
        stratify: &[f32],
        boundaries: &[f32],
    ) -> Result<()> {
        Self::validate(data, stratify)?;
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        let boundaries = Boundaries::new(boundaries.to_vec())?;

        let assignments = boundaries.assign(stratify);
        let n_strata = boundaries.n_strata();

        let mut models: Vec<Option<F::Model>> = Vec::with_capacity(n_strata);
        for stratum in 0..n_strata {
            let subset: Vec<Vec<f32>> = assignments
                .iter()
                .zip(data)
                .filter(|&(&s, _)| s == stratum)
                .map(|(_, frame)| frame.clone())
                .collect();

            if subset.is_empty() {
                debug!(stratum, "no frames in stratum, skipping fit");
                models.push(None);
                continue;
            }

            models.push(Some(self.trainer.fit(&subset, k)?));
        }

        // Swap in the new state only once every stratum fitted cleanly.
        self.fitted = Some(Fitted { boundaries, models });
        Ok(())
    }

    /// Global cluster id for each frame.
    ///
    /// Frames are re-bucketed with the boundaries stored at fit time. Strata
    /// are visited in strictly increasing index order with a running offset:
    /// each non-empty stratum's local labels are shifted by the total number
    /// of cluster centers held by all lower-index strata, then scattered
    /// back to the original frame positions. Empty strata contribute neither
    /// ids nor offset.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] when `data` and `stratify` frame counts
    ///   differ.
    /// - [`Error::NotFitted`] before the first successful fit.
    /// - [`Error::UnfittedStratum`] when frames land in a stratum that had
    ///   no training data.
    /// - [`Error::AssignmentMismatch`] when the produced assignment count
    ///   does not equal the input frame count.
    /// - Any error from a per-stratum model.
    pub fn predict(&self, data: &[Vec<f32>], stratify: &[f32]) -> Result<Vec<usize>> {
        Self::validate(data, stratify)?;
        let state = self.state("predict")?;

        let assignments = state.boundaries.assign(stratify);

        let mut out = vec![0usize; data.len()];
        let mut written = 0usize;
        let mut offset = 0usize;

        for (stratum, model) in state.models.iter().enumerate() {
            let positions: Vec<usize> = assignments
                .iter()
                .enumerate()
                .filter(|&(_, &s)| s == stratum)
                .map(|(i, _)| i)
                .collect();

            if positions.is_empty() {
                debug!(stratum, "no frames in stratum, skipping predict");
                continue;
            }

            let Some(model) = model else {
                return Err(Error::UnfittedStratum {
                    stratum,
                    n_points: positions.len(),
                });
            };

            let subset: Vec<Vec<f32>> = positions.iter().map(|&i| data[i].clone()).collect();
            let local = model.predict(&subset)?;
            if local.len() != positions.len() {
                return Err(Error::Model(format!(
                    "stratum {stratum} model returned {} labels for {} points",
                    local.len(),
                    positions.len()
                )));
            }

            for (&pos, &label) in positions.iter().zip(&local) {
                out[pos] = label + offset;
            }
            written += positions.len();
            offset += model.n_clusters();
        }

        if written != data.len() {
            return Err(Error::AssignmentMismatch {
                expected: data.len(),
                found: written,
            });
        }

        Ok(out)
    }

    /// [`predict`](Self::predict) over a batch of equal-length trajectories.
    ///
    /// Output mirrors the input shape: one id sequence per trajectory. A
    /// flat frame sequence is the single-trajectory case of this.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedBatch`] when trajectories have unequal lengths, plus
    /// everything [`predict`](Self::predict) can return.
    pub fn predict_batch(
        &self,
        data: &[Vec<Vec<f32>>],
        stratify: &[Vec<f32>],
    ) -> Result<Vec<Vec<usize>>> {
        Self::check_lengths(data.len(), stratify.len())?;

        let traj_len = data.first().map_or(0, Vec::len);
        for (traj, coords) in data.iter().zip(stratify) {
            if traj.len() != traj_len {
                return Err(Error::RaggedBatch {
                    expected: traj_len,
                    found: traj.len(),
                });
            }
            Self::check_lengths(traj.len(), coords.len())?;
        }

        let flat_data: Vec<Vec<f32>> = data.iter().flatten().cloned().collect();
        let flat_coords: Vec<f32> = stratify.iter().flatten().copied().collect();

        let flat = self.predict(&flat_data, &flat_coords)?;

        if traj_len == 0 {
            return Ok(vec![Vec::new(); data.len()]);
        }
        Ok(flat.chunks(traj_len).map(<[usize]>::to_vec).collect())
    }

    fn state(&self, operation: &'static str) -> Result<&Fitted<F::Model>> {
        self.fitted.as_ref().ok_or(Error::NotFitted { operation })
    }

    fn check_lengths(data: usize, stratify: usize) -> Result<()> {
        if data != stratify {
            return Err(Error::LengthMismatch { data, stratify });
        }
        Ok(())
    }
}
