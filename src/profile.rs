use crate::alphabet::{base_index, NUM_BASES};
use crate::error::{MotifError, Result};
use crate::types::{Pfm, Pwm};
use log::debug;
use ndarray::{Array2, ArrayView1, Axis};

/// Pseudocount added to every cell before computing frequencies.
pub const PSEUDOCOUNT: f64 = 0.25;
/// Uniform background probability of each base.
pub const BACKGROUND: f64 = 0.25;

/// Builds a Position Frequency Matrix (PFM) from aligned sequences.
///
/// Only the first `length` characters of each sequence are read; anything
/// past that is ignored and never validated.
///
/// # Arguments
/// * `sequences` - Aligned sequences, each at least `length` characters long
/// * `length` - Number of positions (columns) in the PFM
///
/// # Returns
/// * `Result<Pfm>` - A 4 x `length` count matrix. An empty sequence list yields all zeros.
///
/// # Errors
/// * `MotifError::InvalidParameter` - If `length` is zero
/// * `MotifError::SequenceTooShort` - If a sequence has fewer than `length` characters
/// * `MotifError::InvalidSequenceBase` - If a counted character is not one of A, C, G, T
pub fn build_pfm<S: AsRef<str>>(sequences: &[S], length: usize) -> Result<Pfm> {
    if length == 0 {
        return Err(MotifError::invalid_parameter(
            "length",
            length,
            "PFM length must be positive",
        ));
    }

    let mut counts = Array2::<u32>::zeros((NUM_BASES, length));
    for (index, seq) in sequences.iter().enumerate() {
        let seq = seq.as_ref();
        let mut seen = 0;
        for (i, base) in seq.chars().take(length).enumerate() {
            let b = base_index(base, i).map_err(|_| MotifError::InvalidSequenceBase {
                index,
                base,
                position: i,
            })?;
            counts[[b, i]] += 1;
            seen += 1;
        }
        if seen < length {
            return Err(MotifError::SequenceTooShort {
                index,
                length: seen,
                required: length,
            });
        }
    }

    debug!(
        "built PFM with {} positions from {} sequences",
        length,
        sequences.len()
    );
    Pfm::from_counts(counts)
}

/// Pseudocount-smoothed frequencies of one PFM column.
fn column_frequencies(column: ArrayView1<u32>) -> [f64; NUM_BASES] {
    let total = column.iter().map(|&c| c as f64).sum::<f64>() + NUM_BASES as f64 * PSEUDOCOUNT;
    let mut freqs = [0.0; NUM_BASES];
    for (f, &c) in freqs.iter_mut().zip(column.iter()) {
        *f = (c as f64 + PSEUDOCOUNT) / total;
    }
    freqs
}

/// Builds a Position Weight Matrix (PWM) from a PFM.
///
/// Each entry is `log2((count + PSEUDOCOUNT) / column_total) - log2(BACKGROUND)`,
/// where `column_total` is the column's count sum plus `4 * PSEUDOCOUNT`.
///
/// # Errors
/// * `MotifError::InvalidShape` - If the PFM has no columns
pub fn build_pwm(pfm: &Pfm) -> Result<Pwm> {
    pfm.ensure_not_empty()?;

    let log_bg = BACKGROUND.log2();
    let mut weights = Array2::<f64>::zeros(pfm.counts().raw_dim());
    for (j, column) in pfm.counts().axis_iter(Axis(1)).enumerate() {
        for (b, f) in column_frequencies(column).iter().enumerate() {
            weights[[b, j]] = f.log2() - log_bg;
        }
    }

    debug!("built PWM with {} positions", pfm.len());
    Pwm::from_weights(weights)
}

/// Information content of each PFM column, in bits.
///
/// Each value is `2 + sum(f * log2(f))` over the smoothed base frequencies
/// of the column; zero frequencies contribute nothing.
///
/// # Errors
/// * `MotifError::InvalidShape` - If the PFM has no columns
pub fn column_ic(pfm: &Pfm) -> Result<Vec<f64>> {
    pfm.ensure_not_empty()?;

    let max_bits = (NUM_BASES as f64).log2();
    Ok(pfm
        .counts()
        .axis_iter(Axis(1))
        .map(|column| {
            let neg_entropy: f64 = column_frequencies(column)
                .iter()
                .filter(|&&f| f > 0.0)
                .map(|&f| f * f.log2())
                .sum();
            max_bits + neg_entropy
        })
        .collect())
}

/// Total information content of a PFM, in bits.
///
/// # Errors
/// * `MotifError::InvalidShape` - If the PFM has no columns
pub fn pfm_ic(pfm: &Pfm) -> Result<f64> {
    Ok(column_ic(pfm)?.iter().sum())
}
