use crate::alphabet::{BASES, NUM_BASES};
use crate::error::{MotifError, Result};
use ndarray::{Array2, Axis};
use serde::Serialize;

/// Represents a Position Frequency Matrix (PFM)
/// Stored as a 4 x L matrix of counts, rows A, C, G, T
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pfm {
    counts: Array2<u32>,
}

impl Pfm {
    /// Wraps a count matrix.
    ///
    /// # Errors
    /// * Returns `MotifError::InvalidShape` if the matrix does not have exactly 4 rows
    pub fn from_counts(counts: Array2<u32>) -> Result<Self> {
        if counts.nrows() != NUM_BASES {
            return Err(MotifError::invalid_shape(format!(
                "PFM must have {} rows, found {}",
                NUM_BASES,
                counts.nrows()
            )));
        }
        Ok(Self { counts })
    }

    /// The raw counts, indexed by `[base, position]`.
    #[inline]
    pub fn counts(&self) -> &Array2<u32> {
        &self.counts
    }

    /// The number of alignment positions (L).
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bases counted at each position.
    ///
    /// Totals are widened to `u64` since a column of `u32` cells can sum past `u32::MAX`.
    pub fn column_totals(&self) -> Vec<u64> {
        self.counts.mapv(u64::from).sum_axis(Axis(0)).to_vec()
    }

    /// Most frequent base at each position; ties go to the earliest of A, C, G, T.
    pub fn consensus(&self) -> String {
        self.counts
            .columns()
            .into_iter()
            .map(|column| {
                let mut best = 0;
                for (b, &count) in column.iter().enumerate() {
                    if count > column[best] {
                        best = b;
                    }
                }
                BASES[best]
            })
            .collect()
    }

    pub(crate) fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(MotifError::invalid_shape("PFM has no columns"));
        }
        Ok(())
    }
}

/// Represents a Position Weight Matrix (PWM)
/// Stored as a 4 x L matrix of log2-odds scores, rows A, C, G, T
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Pwm {
    weights: Array2<f64>,
}

impl Pwm {
    /// Wraps a log-odds matrix.
    ///
    /// # Errors
    /// * Returns `MotifError::InvalidShape` if the matrix does not have 4 rows or has no columns
    /// * Returns `MotifError::InvalidInput` if any weight is NaN or infinite
    pub fn from_weights(weights: Array2<f64>) -> Result<Self> {
        if weights.nrows() != NUM_BASES {
            return Err(MotifError::invalid_shape(format!(
                "PWM must have {} rows, found {}",
                NUM_BASES,
                weights.nrows()
            )));
        }
        if weights.ncols() == 0 {
            return Err(MotifError::invalid_shape("PWM has no columns"));
        }
        if let Some(((b, j), w)) = weights.indexed_iter().find(|(_, w)| !w.is_finite()) {
            return Err(MotifError::InvalidInput(format!(
                "non-finite weight {} for base {} at position {}",
                w, BASES[b], j
            )));
        }
        Ok(Self { weights })
    }

    /// The log-likelihoods, indexed by `[base, position]`.
    #[inline]
    pub fn weights(&self) -> &Array2<f64> {
        &self.weights
    }

    /// The length of the motif encoded in this weight matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest score any k-mer can reach.
    pub fn max_score(&self) -> f64 {
        self.weights
            .columns()
            .into_iter()
            .map(|column| column.fold(f64::NEG_INFINITY, |a, &w| a.max(w)))
            .sum()
    }

    /// Lowest score any k-mer can reach.
    pub fn min_score(&self) -> f64 {
        self.weights
            .columns()
            .into_iter()
            .map(|column| column.fold(f64::INFINITY, |a, &w| a.min(w)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pfm_rejects_wrong_row_count() {
        let counts = Array2::<u32>::zeros((3, 5));
        assert!(matches!(
            Pfm::from_counts(counts),
            Err(MotifError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_consensus_ties_prefer_earlier_base() {
        let pfm = Pfm::from_counts(array![[2, 0, 1], [2, 0, 1], [0, 3, 1], [0, 0, 4]]).unwrap();
        assert_eq!(pfm.consensus(), "AGT");
        assert_eq!(pfm.column_totals(), vec![4, 3, 7]);
    }

    #[test]
    fn test_column_totals_do_not_overflow() {
        let pfm = Pfm::from_counts(array![[u32::MAX, 2], [1, 2], [0, 0], [0, 0]]).unwrap();
        assert_eq!(pfm.column_totals(), vec![u32::MAX as u64 + 1, 4]);
    }

    #[test]
    fn test_pwm_validation() {
        assert!(Pwm::from_weights(Array2::zeros((4, 0))).is_err());
        assert!(Pwm::from_weights(Array2::zeros((5, 2))).is_err());

        let mut weights = Array2::zeros((4, 2));
        weights[[2, 1]] = f64::NAN;
        assert!(matches!(
            Pwm::from_weights(weights),
            Err(MotifError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_score_bounds() {
        let pwm = Pwm::from_weights(array![
            [1.0, -2.0],
            [0.5, 3.0],
            [-1.0, 0.0],
            [0.0, -0.5]
        ])
        .unwrap();
        assert_eq!(pwm.max_score(), 4.0);
        assert_eq!(pwm.min_score(), -3.0);
    }
}
