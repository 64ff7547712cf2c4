//! vrp-assign core
//!
//! Greedy construction of per-vehicle visit sequences from a pairwise
//! travel cost matrix. The host application supplies the costs (from its
//! own routing or distance source) and turns the resulting stop sequences
//! back into real-world routes.

pub mod matrix;
pub mod solver;
pub mod traits;
