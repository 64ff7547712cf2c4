//! Core traits for the route assigner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps can
//! implement them over their own cost storage instead of copying into a
//! [`CostMatrix`](crate::matrix::CostMatrix).

/// Read-only source of pairwise travel costs between stops.
///
/// Indices `0..stops()` correspond positionally to an externally supplied
/// list of stops, with index 0 reserved for the depot every vehicle starts
/// from. Costs need not be symmetric.
///
/// Implementations must return finite, non-negative costs for all index
/// pairs below [`stops`](CostSource::stops); the crate's own
/// [`CostMatrix`](crate::matrix::CostMatrix) enforces this when it is
/// built, hand-rolled sources are trusted.
pub trait CostSource {
    /// Number of stops covered by this source.
    fn stops(&self) -> usize;

    /// Travel cost from one stop to another.
    fn cost(&self, from: usize, to: usize) -> f64;
}
