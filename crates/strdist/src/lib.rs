#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod costs;
mod error;
pub mod number;
pub mod strings;

pub use costs::{CostModel, ALPHABET_SIZE};
pub use error::StrDistError;
pub use number::Cost;
pub use strings::{default_levenshtein, distance, levenshtein, levenshtein_safe, Distances, Sequence};

/// The version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
