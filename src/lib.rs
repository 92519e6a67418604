//! Position frequency and weight matrices, k-mer scoring and information content for aligned DNA motifs

pub mod alphabet;
pub mod error;
pub mod frame;
pub mod profile;
pub mod scoring;
pub mod types;

pub use error::{MotifError, Result};
pub use profile::{build_pfm, build_pwm, column_ic, pfm_ic};
pub use scoring::{score_both_strands, score_kmer, score_kmers};
pub use types::{Pfm, Pwm};
