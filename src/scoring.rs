use crate::alphabet::{base_index, reverse_complement};
use crate::error::{MotifError, Result};
use crate::types::Pwm;
use log::{debug, trace};
use rayon::prelude::*;

/// Scores a k-mer using a Position Weight Matrix (PWM).
///
/// The score is the sum of the PWM entries selected by the k-mer's base at
/// each position.
///
/// # Arguments
/// * `kmer` - K-mer to score; must be exactly as long as the PWM
/// * `pwm` - PWM for scoring
///
/// # Errors
/// * `MotifError::LengthMismatch` - If the k-mer and PWM are different lengths,
///   checked before any lookup
/// * `MotifError::InvalidBase` - If the k-mer contains characters other than A, C, G, T
pub fn score_kmer(kmer: &str, pwm: &Pwm) -> Result<f64> {
    let k = kmer.chars().count();
    if k != pwm.len() {
        return Err(MotifError::LengthMismatch {
            kmer: k,
            pwm: pwm.len(),
        });
    }

    let weights = pwm.weights();
    let mut score = 0.0;
    for (i, base) in kmer.chars().enumerate() {
        score += weights[[base_index(base, i)?, i]];
    }
    trace!("scored {} = {}", kmer, score);
    Ok(score)
}

/// Scores a k-mer and its reverse complement against the same PWM.
///
/// # Returns
/// * `Result<(f64, f64)>` - Forward strand score, reverse strand score
pub fn score_both_strands(kmer: &str, pwm: &Pwm) -> Result<(f64, f64)> {
    let forward = score_kmer(kmer, pwm)?;
    let reverse = score_kmer(&reverse_complement(kmer)?, pwm)?;
    Ok((forward, reverse))
}

/// Scores many k-mers against one PWM in parallel.
///
/// Scores are returned in input order. Any failing k-mer fails the whole
/// batch.
pub fn score_kmers<K>(kmers: &[K], pwm: &Pwm) -> Result<Vec<f64>>
where
    K: AsRef<str> + Sync,
{
    debug!("{} k-mers to score", kmers.len());
    kmers
        .par_iter()
        .map(|kmer| score_kmer(kmer.as_ref(), pwm))
        .collect()
}
