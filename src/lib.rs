//! Optimal string alignment edit distance.
//!
//! The minimum number of single-unit insertions, deletions, substitutions, and
//! adjacent transpositions that turn one sequence into another, each costing 1.
//! This is the restricted form of Damerau-Levenshtein: no substring is edited
//! twice, which is what most "Damerau-Levenshtein" implementations compute.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │    matrix.rs     │────▶│    osa.rs    │────▶│ calculate_distance │
//! │ (DistanceMatrix) │     │ (osa_matrix) │     │ osa_within, ...    │
//! └──────────────────┘     └──────────────┘     └────────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │                     verify/                     │
//! │ (VerifiedMatrix, InvariantError, contracts)     │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use damlev::{calculate_distance, osa_distance_chars, osa_within};
//!
//! assert_eq!(calculate_distance("CA", "AC"), 1);
//! assert_eq!(osa_distance_chars("naïve", "naive"), 1);
//! assert!(osa_within("recieve", "receive", 1));
//! ```
//!
//! Every call allocates its own table and shares nothing, so the functions can
//! be called from any number of threads without coordination.

mod matrix;
mod osa;
pub mod verify;

pub use matrix::DistanceMatrix;
pub use osa::{
    calculate_distance, osa_distance, osa_distance_chars, osa_matrix, osa_similarity, osa_within,
};
pub use verify::{InvariantError, VerifiedMatrix};
