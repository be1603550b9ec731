//! Crate-wide error type for BSP tree construction, clipping, and emission.

use thiserror::Error;

/// Everything that can go wrong while building, clipping, or emitting a
/// [`crate::BspTree`].
#[derive(Debug, Error)]
pub enum CsgError {
    /// A working buffer could not be reserved. Ordinary Rust allocation
    /// failure aborts the process rather than returning `Err`; this variant
    /// exists for API parity with the reviewed C implementation and is
    /// returned only by the few call sites that check a capacity up front.
    #[error("allocation failed while building a BSP node")]
    AllocationFailed,

    /// The primitive splitter could not produce a front/back fragment pair
    /// for a polygon classified [`crate::Classification::Spanning`].
    #[error("failed to split a spanning polygon against its divider plane")]
    SplitFailed,

    /// [`crate::BspTree::emit`] encountered a polygon with fewer than three
    /// vertices while triangulating.
    #[error("encountered a polygon with fewer than three vertices while triangulating")]
    DegeneratePolygon,

    /// A recursive build, clip, or emit step failed; the original cause is
    /// preserved.
    #[error("recursive BSP operation failed")]
    RecursiveFailure(#[source] Box<CsgError>),
}
