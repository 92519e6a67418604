use crate::error::{MotifError, Result};
use phf::phf_map;

/// Number of canonical nucleotides, i.e. the row count of every matrix.
pub const NUM_BASES: usize = 4;

/// Canonical bases in row order.
pub const BASES: [char; NUM_BASES] = ['A', 'C', 'G', 'T'];

static BASE_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

static COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T',
    'C' => 'G',
    'G' => 'C',
    'T' => 'A',
};

/// Maps a nucleotide to its matrix row.
///
/// # Arguments
/// * `base` - Nucleotide to look up
/// * `position` - Position of `base` in its sequence, reported on error
///
/// # Errors
/// * Returns `MotifError::InvalidBase` for anything other than uppercase A, C, G or T
pub fn base_index(base: char, position: usize) -> Result<usize> {
    BASE_INDEX
        .get(&base)
        .copied()
        .ok_or(MotifError::InvalidBase { base, position })
}

/// Returns the Watson-Crick complement of a nucleotide.
pub fn complement(base: char, position: usize) -> Result<char> {
    COMPLEMENT
        .get(&base)
        .copied()
        .ok_or(MotifError::InvalidBase { base, position })
}

/// Generates the reverse complement of a DNA sequence.
///
/// # Arguments
/// * `sequence` - Input DNA sequence string
///
/// # Returns
/// * `Result<String>` - The reverse complement sequence where:
///   - A ↔ T
///   - C ↔ G
///
/// # Errors
/// * Returns `MotifError::InvalidBase` if the sequence contains characters other than
///   A, T, C, or G.
///   The reported position refers to the input sequence.
pub fn reverse_complement(sequence: &str) -> Result<String> {
    sequence
        .chars()
        .enumerate()
        .map(|(i, c)| complement(c, i))
        .collect::<Result<Vec<char>>>()
        .map(|bases| bases.into_iter().rev().collect())
}
