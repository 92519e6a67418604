//! Conversion between motif matrices and Polars DataFrames.
//!
//! Frames hold one row per motif position and one column per base
//! ("A", "C", "G", "T"), the usual layout of motif tables.

use crate::alphabet::{BASES, NUM_BASES};
use crate::error::{MotifError, Result};
use crate::profile::build_pfm;
use crate::types::{Pfm, Pwm};
use ndarray::{Array2, ArrayView2};
use polars::prelude::*;

fn matrix_to_frame<T, F>(matrix: ArrayView2<T>, make_column: F) -> Result<DataFrame>
where
    T: Copy,
    F: Fn(PlSmallStr, Vec<T>) -> Column,
{
    let columns = BASES
        .iter()
        .zip(matrix.rows())
        .map(|(base, row)| make_column(base.to_string().into(), row.to_vec()))
        .collect::<Vec<_>>();

    DataFrame::new(columns).map_err(|e| MotifError::DataError(e.to_string()))
}

/// Reads the A, C, G, T columns of `df` into a 4 x height matrix.
fn frame_to_matrix(df: &DataFrame) -> Result<Array2<f64>> {
    let mut matrix = Array2::<f64>::zeros((NUM_BASES, df.height()));
    for (b, base) in BASES.iter().enumerate() {
        let column = df
            .column(&base.to_string())
            .map_err(|e| MotifError::DataError(e.to_string()))?
            .cast(&DataType::Float64)
            .map_err(|e| MotifError::DataError(e.to_string()))?;
        let values = column
            .f64()
            .map_err(|e| MotifError::DataError(e.to_string()))?;

        for (j, value) in values.into_iter().enumerate() {
            matrix[[b, j]] = value.ok_or_else(|| {
                MotifError::DataError(format!(
                    "missing value for base {} at position {}",
                    base, j
                ))
            })?;
        }
    }
    Ok(matrix)
}

/// Converts a PFM to a DataFrame with `UInt32` columns A, C, G, T.
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
pub fn pfm_to_frame(pfm: &Pfm) -> Result<DataFrame> {
    matrix_to_frame(pfm.counts().view(), |name, counts: Vec<u32>| {
        Column::new(name, counts)
    })
}

/// Converts a PWM to a DataFrame with columns A, C, G, T.
///
/// # Errors
/// * Returns `MotifError::DataError` if DataFrame creation fails
pub fn pwm_to_frame(pwm: &Pwm) -> Result<DataFrame> {
    matrix_to_frame(pwm.weights().view(), |name, weights: Vec<f64>| {
        Column::new(name, weights)
    })
}

/// Reads a PFM from a DataFrame with one row per position and columns A, C, G, T.
///
/// # Errors
/// * Returns `MotifError::DataError` if a base column is missing, non-numeric or has nulls
/// * Returns `MotifError::InvalidInput` if a count is negative, fractional, non-finite or above `u32::MAX`
pub fn pfm_from_frame(df: &DataFrame) -> Result<Pfm> {
    let matrix = frame_to_matrix(df)?;
    if let Some(((b, j), v)) = matrix
        .indexed_iter()
        .find(|&(_, &v)| v < 0.0 || v.fract() != 0.0 || v > u32::MAX as f64)
    {
        return Err(MotifError::InvalidInput(format!(
            "count {} for base {} at position {} is not a non-negative integer",
            v, BASES[b], j
        )));
    }
    Pfm::from_counts(matrix.mapv(|v| v as u32))
}

/// Reads a PWM from a DataFrame with one row per position and columns A, C, G, T.
///
/// # Errors
/// * Returns `MotifError::DataError` if a base column is missing, non-numeric or has nulls
/// * Returns `MotifError::InvalidShape` if the frame has no rows
/// * Returns `MotifError::InvalidInput` if a weight is not finite
pub fn pwm_from_frame(df: &DataFrame) -> Result<Pwm> {
    Pwm::from_weights(frame_to_matrix(df)?)
}

/// Builds a PFM from the "sequence" column of a DataFrame.
///
/// # Errors
/// * Returns `MotifError::DataError` if the "sequence" column is missing, not a string column or has nulls
/// * Any error of [`build_pfm`]
pub fn build_pfm_from_frame(df: &DataFrame, length: usize) -> Result<Pfm> {
    let sequences = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .map_err(|e| MotifError::DataError(e.to_string()))?;

    let sequences = sequences
        .into_iter()
        .enumerate()
        .map(|(idx, seq)| {
            seq.ok_or_else(|| MotifError::DataError(format!("missing sequence at row {}", idx)))
        })
        .collect::<Result<Vec<&str>>>()?;

    build_pfm(&sequences, length)
}
