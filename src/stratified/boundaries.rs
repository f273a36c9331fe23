use crate::error::{Error, Result};

/// Strictly ascending stratum boundary cutpoints.
///
/// `n` cutpoints define `n + 2` strata: `(-inf, b0]`, `(b0, b1]`, ...,
/// `(b_{n-1}, +inf)`. Bins are lower-closed: a coordinate equal to a
/// cutpoint falls in the bin ending at that cutpoint, not above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    cuts: Vec<f32>,
}

impl Boundaries {
    /// Validate and store cutpoints.
    ///
    /// # Errors
    ///
    /// [`Error::UnsortedBoundaries`] if the cutpoints are not strictly
    /// ascending; `index` names the first cutpoint that is not below its
    /// successor.
    pub fn new(cuts: Vec<f32>) -> Result<Self> {
        if let Some(index) = cuts.windows(2).position(|w| !(w[0] < w[1])) {
            return Err(Error::UnsortedBoundaries { index });
        }
        Ok(Self { cuts })
    }

    /// Number of strata: the gaps between cutpoints plus the two unbounded
    /// tails, counted as `len + 2`.
    pub fn n_strata(&self) -> usize {
        self.cuts.len() + 2
    }

    /// The cutpoints, ascending.
    pub fn cuts(&self) -> &[f32] {
        &self.cuts
    }

    /// Stratum index for one coordinate value: the number of cutpoints
    /// strictly below it.
    pub fn stratum_of(&self, value: f32) -> usize {
        self.cuts.partition_point(|&b| b < value)
    }

    /// Stratum index for each coordinate, in input order.
    pub fn assign(&self, values: &[f32]) -> Vec<usize> {
        values.iter().map(|&v| self.stratum_of(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digitize_reference_vector() {
        let b = Boundaries::new(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let coord = [-5.0, -3.0, 1.5, 1.25, 2.5, 2.3, 10.0, 11.0, 12.0];
        assert_eq!(b.assign(&coord), vec![0, 0, 2, 2, 3, 3, 6, 6, 6]);
    }

    #[test]
    fn boundary_equal_values_land_in_lower_bin() {
        let b = Boundaries::new(vec![0.0, 1.0, 2.0]).unwrap();
        // x == cutpoint i belongs to the bin ending at that cutpoint.
        assert_eq!(b.stratum_of(0.0), 0);
        assert_eq!(b.stratum_of(1.0), 1);
        assert_eq!(b.stratum_of(2.0), 2);
        // Just above a cutpoint moves up one bin.
        assert_eq!(b.stratum_of(1.0001), 2);
    }

    #[test]
    fn tails_are_unbounded() {
        let b = Boundaries::new(vec![-1.0, 1.0]).unwrap();
        assert_eq!(b.stratum_of(f32::NEG_INFINITY), 0);
        assert_eq!(b.stratum_of(-1e30), 0);
        assert_eq!(b.stratum_of(1e30), 2);
        assert_eq!(b.stratum_of(f32::INFINITY), 2);
        assert_eq!(b.n_strata(), 4);
    }

    #[test]
    fn unsorted_cuts_rejected() {
        let err = Boundaries::new(vec![0.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::UnsortedBoundaries { index: 1 }));

        // Duplicates are not strictly ascending either.
        let err = Boundaries::new(vec![0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::UnsortedBoundaries { index: 0 }));
    }

    #[test]
    fn empty_cuts_give_two_strata() {
        let b = Boundaries::new(Vec::new()).unwrap();
        assert_eq!(b.n_strata(), 2);
        assert_eq!(b.stratum_of(-3.0), 0);
        assert_eq!(b.stratum_of(3.0), 0);
    }
}
