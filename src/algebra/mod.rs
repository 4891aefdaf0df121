//! Sparse and dense matrix types, together with the CSC conversion and
//! comparison routines used to verify solver data.

mod csc;
pub use csc::*;
mod dense;
pub use dense::*;
mod error_types;
pub use error_types::*;
mod floats;
pub use floats::*;
mod matrix_traits;
pub use matrix_traits::*;

#[cfg(test)]
mod tests;
